use std::collections::HashMap;

use crate::error::ChainError;

/// Everything the table knows about what happens after one word unit.
///
/// An entry is a node of the Markov chain. Its outgoing edges are the
/// successors, weighted by how many times they were observed, plus one
/// implicit "end of sentence" edge weighted by `end_count`.
///
/// ## Invariants
/// - `word` never changes once the entry exists
/// - every successor count is strictly positive
/// - `total_successor_mass == sum(successor counts) + end_count`
/// - successors keep the order in which they were first observed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionEntry {
	/// Identifier of the entry (a single token or a space-joined group).
	word: String,
	/// Number of documents that began with this word.
	start_count: usize,
	/// Number of documents that ended with this word.
	end_count: usize,
	/// Successors in first-insertion order, with their occurrence count.
	/// Example: [("the wall", 4), ("is great", 1)]
	successors: Vec<(String, usize)>,
	/// Position of each successor inside `successors`.
	successor_index: HashMap<String, usize>,
	/// Sum of every successor count plus `end_count`.
	total_successor_mass: usize,
}

impl TransitionEntry {
	/// Creates a new empty entry for the given word.
	pub fn new(word: &str) -> Self {
		Self {
			word: word.to_owned(),
			start_count: 0,
			end_count: 0,
			successors: Vec::new(),
			successor_index: HashMap::new(),
			total_successor_mass: 0,
		}
	}

	pub fn word(&self) -> &str {
		&self.word
	}

	pub fn start_count(&self) -> usize {
		self.start_count
	}

	pub fn end_count(&self) -> usize {
		self.end_count
	}

	pub fn total_successor_mass(&self) -> usize {
		self.total_successor_mass
	}

	/// Iterates over `(successor, count)` pairs in first-insertion order.
	pub fn successors(&self) -> impl Iterator<Item = (&str, usize)> {
		self.successors.iter().map(|(word, count)| (word.as_str(), *count))
	}

	/// Returns how many times `word` followed this entry (0 if never).
	pub fn successor_count(&self, word: &str) -> usize {
		self.successor_index
			.get(word)
			.map(|&position| self.successors[position].1)
			.unwrap_or(0)
	}

	pub(crate) fn incr_start(&mut self) {
		self.start_count += 1;
	}

	/// The end of a sentence is one of the possible outcomes, so it also
	/// counts towards the successor mass.
	pub(crate) fn incr_end(&mut self) {
		self.end_count += 1;
		self.total_successor_mass += 1;
	}

	/// Records one occurrence of `next_word` following this entry.
	///
	/// - If the successor already exists, its count is increased.
	/// - Otherwise it is appended with a count of 1.
	pub(crate) fn add_successor(&mut self, next_word: &str) {
		self.add_successor_count(next_word, 1);
	}

	fn add_successor_count(&mut self, next_word: &str, occurrence: usize) {
		match self.successor_index.get(next_word) {
			Some(&position) => self.successors[position].1 += occurrence,
			None => {
				self.successor_index.insert(next_word.to_owned(), self.successors.len());
				self.successors.push((next_word.to_owned(), occurrence));
			}
		}
		self.total_successor_mass += occurrence;
	}

	/// Merges another entry into this one.
	///
	/// Both entries must describe the same word. Counts are summed and
	/// successors unknown to `self` are appended in `other`'s order.
	///
	/// # Errors
	/// Returns `ChainError::KeyMismatch` if the words differ.
	pub(crate) fn merge(&mut self, other: &Self) -> Result<(), ChainError> {
		if self.word != other.word {
			return Err(ChainError::KeyMismatch {
				expected: self.word.clone(),
				found: other.word.clone(),
			});
		}

		self.start_count += other.start_count;
		self.end_count += other.end_count;
		self.total_successor_mass += other.end_count;
		for (next_word, occurrence) in &other.successors {
			self.add_successor_count(next_word, *occurrence);
		}

		Ok(())
	}
}
