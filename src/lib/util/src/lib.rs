#![cfg_attr(not(test), no_std)]

pub mod bits;

pub use bits::{bit, bits_disjoint, mask_contains, set_bits};
