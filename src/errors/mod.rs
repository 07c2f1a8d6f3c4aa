//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics the parser collects. It includes:
//!
//! - Error structures with source position information
//! - One error variant per kind of syntax problem
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
