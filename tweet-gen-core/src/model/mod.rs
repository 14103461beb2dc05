//! Word-level Markov chain.
//!
//! - Frequency storage (`TransitionEntry`, `TransitionTable`)
//! - Token grouping into word units (`group_words`)
//! - Training and weighted sampling (`ChainSampler`, `SamplerConfig`)

/// Weighted random walk over a `TransitionTable`.
///
/// Owns the training procedure and the sentence generation loop.
pub mod chain_sampler;

/// Splits token sequences into fixed-size word units.
pub mod grouping;

/// Training and sampling parameters.
pub mod sampler_config;

/// Per-word start, end and successor counts.
pub mod transition_entry;

/// Insertion-ordered collection of `TransitionEntry`.
pub mod transition_table;

pub use chain_sampler::ChainSampler;
pub use grouping::group_words;
pub use sampler_config::{SamplerConfig, SuccessorWeighting, DEFAULT_WORDS_PER_UNIT};
pub use transition_entry::TransitionEntry;
pub use transition_table::TransitionTable;
