/* SPDX-License-Identifier: GPL-2.0-only */
#![cfg_attr(not(test), no_std)]

use thiserror::Error;

/// The bring-up state machine tracks a board's one-shot peripheral
/// registration sequence. Steps execute strictly one after another:
///
/// ```text
///        start
///          |
///      NotStarted
///          |
///      Running(0)
///          |
///      Running(1) ------+
///          |            |
///         ...           |  a step fails
///          |            |
///      Running(n-1) ----+
///          |            |
///          V            V
///      Completed     Aborted
/// ```
///
/// Brief description of states:
/// - `NotStarted`: the sequence has not been entered yet
/// - `Running(i)`: step `i` (0-based) is executing
/// - `Completed`: every step ran successfully
/// - `Aborted`: a step failed, later steps never ran
///
/// `Completed` and `Aborted` are terminal; there is no way back into
/// `Running`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BringUpState<E> {
    NotStarted,
    Running(usize),
    Completed,
    Aborted(E),
}

/// A transition the state machine does not allow
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum TransitionError {
    #[error("bring-up already finished")]
    Finished,
    #[error("step {next} cannot follow {current:?}")]
    OutOfOrder {
        current: Option<usize>,
        next: usize,
    },
    #[error("bring-up was never started")]
    NotRunning,
}

impl<E> Default for BringUpState<E> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<E> BringUpState<E> {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Aborted(_))
    }

    /// Index of the step currently executing
    pub fn current_step(&self) -> Option<usize> {
        match self {
            Self::Running(step) => Some(*step),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Aborted(err) => Some(err),
            _ => None,
        }
    }

    /// Enter step `next`, which must directly follow the current one
    pub fn advance(&mut self, next: usize) -> Result<(), TransitionError> {
        let current = match self {
            Self::NotStarted => None,
            Self::Running(step) => Some(*step),
            Self::Completed | Self::Aborted(_) => return Err(TransitionError::Finished),
        };
        let expected = current.map_or(0, |step| step + 1);
        if next != expected {
            return Err(TransitionError::OutOfOrder { current, next });
        }
        *self = Self::Running(next);
        Ok(())
    }

    /// Finish successfully. A sequence without any step may complete
    /// straight from `NotStarted`.
    pub fn complete(&mut self) -> Result<(), TransitionError> {
        if self.is_terminal() {
            return Err(TransitionError::Finished);
        }
        *self = Self::Completed;
        Ok(())
    }

    pub fn abort(&mut self, err: E) -> Result<(), TransitionError> {
        match self {
            Self::Running(_) => {
                *self = Self::Aborted(err);
                Ok(())
            }
            Self::NotStarted => Err(TransitionError::NotRunning),
            Self::Completed | Self::Aborted(_) => Err(TransitionError::Finished),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_steps_in_order_to_completion() {
        let mut state = BringUpState::<()>::default();
        assert_eq!(state.current_step(), None);
        state.advance(0).unwrap();
        state.advance(1).unwrap();
        assert_eq!(state.current_step(), Some(1));
        state.complete().unwrap();
        assert!(state.is_terminal());
        assert_eq!(state.advance(2), Err(TransitionError::Finished));
    }

    #[test]
    fn steps_cannot_be_skipped_or_repeated() {
        let mut state = BringUpState::<()>::default();
        assert_eq!(
            state.advance(1),
            Err(TransitionError::OutOfOrder {
                current: None,
                next: 1
            })
        );
        state.advance(0).unwrap();
        assert_eq!(
            state.advance(0),
            Err(TransitionError::OutOfOrder {
                current: Some(0),
                next: 0
            })
        );
    }

    #[test]
    fn abort_is_terminal() {
        let mut state = BringUpState::default();
        assert_eq!(state.abort("early"), Err(TransitionError::NotRunning));
        state.advance(0).unwrap();
        state.abort("eth1 failed").unwrap();
        assert_eq!(state.error(), Some(&"eth1 failed"));
        assert_eq!(state.complete(), Err(TransitionError::Finished));
        assert_eq!(state.abort("again"), Err(TransitionError::Finished));
    }
}
