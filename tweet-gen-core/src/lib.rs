//! Markov chain tweet generator.
//!
//! This crate learns a word-level Markov chain from a corpus of short
//! documents and samples new sentences from it:
//! - Word units made of one or more consecutive tokens
//! - Start, end and transition frequency tables
//! - Weighted random walks with a pluggable random number generator
//! - Corpus helpers to read CSV columns and tokenize text

/// Markov chain model, training and generation.
pub mod model;

/// Error type shared by the whole crate.
pub mod error;

/// Corpus loading (CSV columns, plain text lines).
pub mod io;

/// Text to lowercase token conversion.
pub mod tokenize;

#[cfg(test)]
pub(crate) mod testing;

pub use error::ChainError;
