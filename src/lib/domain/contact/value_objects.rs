//! Validated contact submission fields

pub mod email_address;
pub mod submitter_name;
