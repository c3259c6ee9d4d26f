//! Contact domain models

pub mod outbound_email;
pub mod submission;
