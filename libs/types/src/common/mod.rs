//! Shared error types for the data model

pub mod errors;
