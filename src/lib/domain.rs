//! Domain modules

pub mod contact;
