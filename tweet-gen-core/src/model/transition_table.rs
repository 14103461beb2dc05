use std::collections::HashMap;

use super::transition_entry::TransitionEntry;
use crate::error::ChainError;

/// Frequency table of a word-level Markov chain.
///
/// The `TransitionTable` stores one `TransitionEntry` per distinct word unit
/// and the number of recorded sentence starts. It only accumulates counts;
/// all the randomness lives in `ChainSampler`.
///
/// # Responsibilities
/// - Create entries lazily the first time a word is referenced
/// - Accumulate start, end and transition counts
/// - Enumerate entries in first-insertion order
/// - Merge with another table by summing counts
///
/// # Invariants
/// - Each word maps to exactly one entry, entries are never removed
/// - `total_starts` equals the sum of every entry's `start_count`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionTable {
	/// Entries in the order their word was first seen.
	entries: Vec<TransitionEntry>,
	/// Mapping from a word to its position in `entries`.
	index: HashMap<String, usize>,
	/// Sum of every `start_count`.
	total_starts: usize,
}

impl TransitionTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn total_starts(&self) -> usize {
		self.total_starts
	}

	pub fn contains(&self, word: &str) -> bool {
		self.index.contains_key(word)
	}

	/// Get or create the entry for `word`.
	fn entry_mut(&mut self, word: &str) -> &mut TransitionEntry {
		let position = match self.index.get(word) {
			Some(&position) => position,
			None => {
				let position = self.entries.len();
				self.entries.push(TransitionEntry::new(word));
				self.index.insert(word.to_owned(), position);
				position
			}
		};
		&mut self.entries[position]
	}

	/// Records that a document began with `word`.
	pub fn record_start(&mut self, word: &str) {
		self.entry_mut(word).incr_start();
		self.total_starts += 1;
	}

	/// Records that a document ended with `word`.
	pub fn record_end(&mut self, word: &str) {
		self.entry_mut(word).incr_end();
	}

	/// Records one occurrence of `to_word` directly following `from_word`.
	///
	/// Both words get an entry, so anything the sampler can emit is also
	/// something it can look up afterwards.
	pub fn record_transition(&mut self, from_word: &str, to_word: &str) {
		self.entry_mut(from_word).add_successor(to_word);
		self.entry_mut(to_word);
	}

	/// Returns the entry for `word`.
	///
	/// # Errors
	/// Returns `ChainError::NotFound` if the word was never recorded.
	pub fn get_entry(&self, word: &str) -> Result<&TransitionEntry, ChainError> {
		self.index
			.get(word)
			.map(|&position| &self.entries[position])
			.ok_or_else(|| ChainError::NotFound(word.to_owned()))
	}

	/// Iterates over all entries in first-insertion order.
	pub fn all_entries(&self) -> impl Iterator<Item = &TransitionEntry> {
		self.entries.iter()
	}

	/// Merges another table into this one.
	///
	/// # Notes
	/// - Entries present in both tables are summed.
	/// - Entries only present in `other` are appended in `other`'s order.
	pub fn merge(&mut self, other: &Self) -> Result<(), ChainError> {
		for entry in &other.entries {
			self.entry_mut(entry.word()).merge(entry)?;
		}
		self.total_starts += other.total_starts;

		Ok(())
	}
}
