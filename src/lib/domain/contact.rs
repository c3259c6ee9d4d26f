//! Contact submission domain

pub mod emails;
pub mod errors;
pub mod mailer;
pub mod models;
pub mod service;
pub mod value_objects;
