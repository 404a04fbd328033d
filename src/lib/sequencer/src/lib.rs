//! Board bring-up sequencer
//!
//! A [`BoardProfile`] lists, in order, every overlay and registration a board
//! needs. The [`Sequencer`] executes that list once against a
//! [`drivers::Platform`], stopping at the first failure.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod engine;
mod error;
mod profile;
mod step;

pub use self::{
    engine::Sequencer,
    error::{BringUpError, ProfileError, RegistrationError},
    profile::{BoardProfile, BoardProfileBuilder},
    step::RegistrationStep,
};
