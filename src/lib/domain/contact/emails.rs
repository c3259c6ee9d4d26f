//! Email templates

pub mod submission;
