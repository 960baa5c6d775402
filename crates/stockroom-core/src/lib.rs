//! Core Stockroom library (data model, validation, backend, config).

pub mod backend;
pub mod config;
pub mod logging;
pub mod models;
pub mod validation;
