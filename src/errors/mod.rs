//! Error types and error handling for the scanner.
//!
//! This module defines the fatal lexical faults. It includes:
//!
//! - Error structures with source position information
//! - One variant per fault kind
//! - Error names and suggestions used by the diagnostic renderer

pub mod errors;
