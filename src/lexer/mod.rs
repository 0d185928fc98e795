//! Lexical analysis module.
//!
//! This module contains the scanner that converts source bytes into a
//! stream of tokens for a parser. It handles:
//!
//! - Byte classification and cursor movement
//! - One- and two-character operators
//! - Number, string and identifier literals, and reserved words
//! - Line comments and whitespace

pub mod lexer;
pub mod tokens;
