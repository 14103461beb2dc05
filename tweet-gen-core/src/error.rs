use thiserror::Error;

/// Errors raised while building or sampling a chain.
///
/// `InvalidConfig`, `EmptyModel` and `NotFound` come from the model itself.
/// The remaining variants are only produced by the corpus loading helpers.
#[derive(Error, Debug)]
pub enum ChainError {
	/// The number of tokens grouped into one word unit must be at least 1.
	#[error("Invalid configuration: {0}")]
	InvalidConfig(String),

	/// Sampling was requested but no sentence start was ever recorded.
	#[error("The model is empty, no start word has been recorded")]
	EmptyModel,

	/// A word was looked up that the table never registered.
	///
	/// Training registers every word it emits, so this indicates a bug in the
	/// caller rather than a recoverable condition.
	#[error("Word not found in the transition table: {0:?}")]
	NotFound(String),

	/// Two entries with different keys were merged.
	#[error("Key mismatch: expected {expected:?}, got {found:?}")]
	KeyMismatch { expected: String, found: String },

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("CSV error: {0}")]
	Csv(#[from] csv::Error),

	#[error("Column {0:?} not found in CSV header")]
	MissingColumn(String),
}
