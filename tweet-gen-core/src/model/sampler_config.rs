use crate::error::ChainError;

/// Default number of tokens grouped into one word unit.
pub const DEFAULT_WORDS_PER_UNIT: usize = 2;

/// How the weight of a successor is computed when walking the chain.
///
/// # Variants
/// - `Frequency`: a successor weighs `count / total_successor_mass`, which is
///   the usual Markov chain behavior.
/// - `Index`: the i-th successor (0-based, in first-insertion order) weighs
///   `i / total_successor_mass`, regardless of how often it was observed.
///   The first successor therefore never contributes weight on its own.
///   Kept to reproduce the output of the tweet generator this crate replaces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SuccessorWeighting {
	#[default]
	Frequency,
	Index,
}

/// Parameters shared by training and generation.
///
/// # Invariants
/// - `words_per_unit` is always >= 1
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SamplerConfig {
	/// Number of consecutive tokens grouped into one word unit.
	words_per_unit: usize,

	/// Weighting used by `ChainSampler::choose_next`.
	pub weighting: SuccessorWeighting,
}

impl Default for SamplerConfig {
	fn default() -> Self {
		Self {
			words_per_unit: DEFAULT_WORDS_PER_UNIT,
			weighting: SuccessorWeighting::default(),
		}
	}
}

impl SamplerConfig {
	/// Creates a configuration grouping `words_per_unit` tokens per unit.
	///
	/// # Errors
	/// Returns `ChainError::InvalidConfig` if `words_per_unit` is 0.
	pub fn new(words_per_unit: usize) -> Result<Self, ChainError> {
		let mut config = Self::default();
		config.set_words_per_unit(words_per_unit)?;
		Ok(config)
	}

	pub fn words_per_unit(&self) -> usize {
		self.words_per_unit
	}

	/// Sets the number of tokens per word unit.
	///
	/// # Errors
	/// Returns `ChainError::InvalidConfig` if `words_per_unit` is 0.
	pub fn set_words_per_unit(&mut self, words_per_unit: usize) -> Result<(), ChainError> {
		if words_per_unit == 0 {
			return Err(ChainError::InvalidConfig("words per unit must be >= 1".to_owned()));
		}
		self.words_per_unit = words_per_unit;
		Ok(())
	}

	/// Builder-style variant of setting `weighting`.
	pub fn with_weighting(mut self, weighting: SuccessorWeighting) -> Self {
		self.weighting = weighting;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_groups_two_tokens() {
		let config = SamplerConfig::default();
		assert_eq!(config.words_per_unit(), 2);
		assert_eq!(config.weighting, SuccessorWeighting::Frequency);
	}

	#[test]
	fn zero_words_per_unit_is_invalid() {
		assert!(matches!(SamplerConfig::new(0), Err(ChainError::InvalidConfig(_))));

		let mut config = SamplerConfig::new(3).unwrap();
		assert!(config.set_words_per_unit(0).is_err());
		assert_eq!(config.words_per_unit(), 3);
	}
}
