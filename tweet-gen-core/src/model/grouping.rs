use crate::error::ChainError;

/// Splits a token sequence into word units of `words_per_unit` tokens.
///
/// Groups are consecutive and do not overlap; the tokens of a group are
/// joined with a single space. A trailing group with fewer tokens is still
/// emitted, so no token is ever dropped.
///
/// Example with `words_per_unit = 2`:
/// `["we", "will", "win"]` → `"we will"`, `"win"`
///
/// # Errors
/// Returns `ChainError::InvalidConfig` if `words_per_unit` is 0.
pub fn group_words<S: AsRef<str>>(
	tokens: &[S],
	words_per_unit: usize,
) -> Result<impl Iterator<Item = String>, ChainError> {
	if words_per_unit == 0 {
		return Err(ChainError::InvalidConfig("words per unit must be >= 1".to_owned()));
	}

	Ok(tokens.chunks(words_per_unit).map(|chunk| {
		chunk
			.iter()
			.map(AsRef::as_ref)
			.collect::<Vec<&str>>()
			.join(" ")
	}))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn grouped(tokens: &[&str], words_per_unit: usize) -> Vec<String> {
		group_words(tokens, words_per_unit).unwrap().collect()
	}

	#[test]
	fn exact_groups() {
		assert_eq!(grouped(&["a", "b", "c", "d"], 2), vec!["a b", "c d"]);
	}

	#[test]
	fn trailing_partial_group_is_kept() {
		assert_eq!(grouped(&["a", "b", "c", "d", "e"], 2), vec!["a b", "c d", "e"]);
		assert_eq!(grouped(&["x"], 2), vec!["x"]);
		assert_eq!(grouped(&["a", "b", "c", "d"], 3), vec!["a b c", "d"]);
	}

	#[test]
	fn single_token_units() {
		assert_eq!(grouped(&["a", "b"], 1), vec!["a", "b"]);
	}

	#[test]
	fn empty_input_yields_nothing() {
		assert!(grouped(&[], 2).is_empty());
	}

	#[test]
	fn zero_is_rejected() {
		assert!(matches!(group_words(&["a"], 0), Err(ChainError::InvalidConfig(_))));
	}
}
