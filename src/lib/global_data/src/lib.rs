//! Process-wide platform data shared between registration steps
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod board_info;
mod config;
mod platform_data;

pub use self::{
    board_info::BoardInfo,
    config::{mac_domain, mac_index, ConfigLookupError, SharedPlatformConfig, SWITCH_DOMAIN},
    platform_data::{DomainKind, DomainRecord, Field, MacData, SwitchData},
};
