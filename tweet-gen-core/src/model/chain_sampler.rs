use log::{debug, trace, warn};
use rand::Rng;

use super::grouping::group_words;
use super::sampler_config::{SamplerConfig, SuccessorWeighting};
use super::transition_table::TransitionTable;
use crate::error::ChainError;

/// Word-level Markov chain: training and sentence generation.
///
/// # Responsibilities
/// - Fill a `TransitionTable` from tokenized documents
/// - Pick a weighted random start word
/// - Walk the chain until the end-of-sentence outcome is drawn
///
/// Generation only reads the table, so a trained sampler can produce any
/// number of sentences without changing.
#[derive(Clone, Debug, Default)]
pub struct ChainSampler {
	config: SamplerConfig,
	table: TransitionTable,
}

impl ChainSampler {
	/// Creates an untrained sampler.
	pub fn new(config: SamplerConfig) -> Self {
		Self { config, table: TransitionTable::new() }
	}

	pub fn config(&self) -> &SamplerConfig {
		&self.config
	}

	/// Read-only view of the learned table.
	pub fn table(&self) -> &TransitionTable {
		&self.table
	}

	/// Adds documents to the model.
	///
	/// Each document is an ordered list of lowercase tokens. Its tokens are
	/// grouped into word units, the first unit is recorded as a start, each
	/// consecutive pair as a transition and the last unit as an end.
	///
	/// # Notes
	/// - Documents without tokens are skipped.
	/// - A document producing a single unit records it as both start and
	///   end, without any transition.
	/// - Training can be called several times; counts accumulate.
	///
	/// # Errors
	/// Returns `ChainError::InvalidConfig` if the configured unit size is 0.
	pub fn train<I, D, S>(&mut self, documents: I) -> Result<(), ChainError>
	where
		I: IntoIterator<Item = D>,
		D: AsRef<[S]>,
		S: AsRef<str>,
	{
		let words_per_unit = self.config.words_per_unit();
		let mut trained = 0usize;
		let mut skipped = 0usize;

		for document in documents {
			let mut groups = group_words(document.as_ref(), words_per_unit)?;
			let Some(first) = groups.next() else {
				trace!("Skipping empty document");
				skipped += 1;
				continue;
			};

			self.table.record_start(&first);
			let mut previous = first;
			for group in groups {
				self.table.record_transition(&previous, &group);
				previous = group;
			}
			self.table.record_end(&previous);
			trained += 1;
		}

		debug!(
			"Trained on {} documents ({} skipped), {} distinct words, {} starts",
			trained,
			skipped,
			self.table.len(),
			self.table.total_starts()
		);
		Ok(())
	}

	/// Picks the first word of a sentence.
	///
	/// A word is chosen with probability `start_count / total_starts`.
	///
	/// # Errors
	/// Returns `ChainError::EmptyModel` if no start was ever recorded.
	pub fn choose_start<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, ChainError> {
		if self.table.total_starts() == 0 {
			return Err(ChainError::EmptyModel);
		}
		self.start_for_draw(rng.random::<f64>())
	}

	/// Scans the cumulative start probabilities for the first one reaching `r`.
	fn start_for_draw(&self, r: f64) -> Result<&str, ChainError> {
		let total_starts = self.table.total_starts();
		if total_starts == 0 {
			return Err(ChainError::EmptyModel);
		}

		let cumulative = cumulative_weights(
			self.table
				.all_entries()
				.map(|entry| entry.start_count() as f64 / total_starts as f64),
		);
		if let Some(position) = first_reaching(&cumulative, r) {
			// Only `all_entries` feeds `cumulative`, positions line up
			if let Some(entry) = self.table.all_entries().nth(position) {
				return Ok(entry.word());
			}
		}

		// Rounding kept the running total below `r`
		warn!("Start probabilities sum below {r}, falling back to last start word");
		self.table
			.all_entries()
			.filter(|entry| entry.start_count() > 0)
			.last()
			.map(|entry| entry.word())
			.ok_or(ChainError::EmptyModel)
	}

	/// Picks the word following `word`, or `None` to end the sentence.
	///
	/// The weight of each successor depends on `SamplerConfig::weighting`.
	/// Whatever mass the successors leave below 1.0 (at least the share of
	/// `end_count`) is the probability of ending the sentence.
	///
	/// # Errors
	/// Returns `ChainError::NotFound` if `word` is not in the table.
	pub fn choose_next<R: Rng + ?Sized>(
		&self,
		word: &str,
		rng: &mut R,
	) -> Result<Option<&str>, ChainError> {
		let r = rng.random::<f64>();
		self.next_for_draw(word, r)
	}

	fn next_for_draw(&self, word: &str, r: f64) -> Result<Option<&str>, ChainError> {
		let entry = self.table.get_entry(word)?;
		let mass = entry.total_successor_mass() as f64;

		let cumulative = match self.config.weighting {
			SuccessorWeighting::Frequency => {
				cumulative_weights(entry.successors().map(|(_, count)| count as f64 / mass))
			}
			SuccessorWeighting::Index => cumulative_weights(
				entry.successors().enumerate().map(|(position, _)| position as f64 / mass),
			),
		};

		Ok(first_reaching(&cumulative, r)
			.and_then(|position| entry.successors().nth(position))
			.map(|(next_word, _)| next_word))
	}

	/// Generates one sentence.
	///
	/// Starts from `choose_start`, then appends `choose_next` results
	/// separated by a single space until the end outcome is drawn.
	///
	/// # Errors
	/// Returns `ChainError::EmptyModel` if the model was never trained on a
	/// non-empty document.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, ChainError> {
		let start = self.choose_start(rng)?;
		let mut sentence = start.to_owned();

		let mut current = start;
		while let Some(next_word) = self.choose_next(current, rng)? {
			sentence.push(' ');
			sentence.push_str(next_word);
			current = next_word;
		}

		Ok(sentence)
	}

	/// Same as `generate`, using the thread-local generator.
	pub fn generate_with_thread_rng(&self) -> Result<String, ChainError> {
		self.generate(&mut rand::rng())
	}
}

/// Running totals of `weights`, in order.
fn cumulative_weights(weights: impl Iterator<Item = f64>) -> Vec<f64> {
	weights
		.scan(0.0, |running_total, weight| {
			*running_total += weight;
			Some(*running_total)
		})
		.collect()
}

/// Position of the first running total `>= r`.
fn first_reaching(cumulative: &[f64], r: f64) -> Option<usize> {
	cumulative.iter().position(|&running_total| running_total >= r)
}
