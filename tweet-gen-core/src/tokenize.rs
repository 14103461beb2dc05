/// Splits a document into lowercase tokens.
///
/// - Whitespace separates tokens and is dropped
/// - Runs of letters and digits form a word; an apostrophe inside a word
///   (`don't`) and a `.` or `,` between digits (`3.5`, `1,000`) are kept
/// - Any other character is a token of its own (`!`, `#`, `@`, ...)
pub fn tokenize(text: &str) -> Vec<String> {
	let mut tokens = Vec::new();
	let mut word = String::new();
	let mut chars = text.chars().peekable();

	while let Some(c) = chars.next() {
		if c.is_alphanumeric() {
			word.extend(c.to_lowercase());
			continue;
		}

		let next_is_alphanumeric = chars.peek().is_some_and(|next| next.is_alphanumeric());
		let next_is_digit = chars.peek().is_some_and(|next| next.is_numeric());
		let last_is_digit = word.chars().last().is_some_and(char::is_numeric);

		if !word.is_empty() && is_apostrophe(c) && next_is_alphanumeric {
			word.push('\'');
		} else if (c == '.' || c == ',') && last_is_digit && next_is_digit {
			word.push(c);
		} else {
			flush(&mut word, &mut tokens);
			if !c.is_whitespace() {
				tokens.push(c.to_lowercase().collect());
			}
		}
	}
	flush(&mut word, &mut tokens);

	tokens
}

fn is_apostrophe(c: char) -> bool {
	c == '\'' || c == '\u{2019}'
}

fn flush(word: &mut String, tokens: &mut Vec<String>) {
	if !word.is_empty() {
		tokens.push(std::mem::take(word));
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn words_and_punctuation() {
		assert_eq!(tokenize("Hello, World!"), vec!["hello", ",", "world", "!"]);
	}

	#[test]
	fn inner_apostrophe_and_numbers() {
		assert_eq!(tokenize("Don’t pay $3.5 now"), vec!["don't", "pay", "$", "3.5", "now"]);
		assert_eq!(tokenize("1,000 jobs."), vec!["1,000", "jobs", "."]);
	}

	#[test]
	fn mentions_and_hashtags_are_split() {
		assert_eq!(tokenize("@user #MAGA"), vec!["@", "user", "#", "maga"]);
	}

	#[test]
	fn blank_text_has_no_tokens() {
		assert!(tokenize("  \n\t ").is_empty());
	}
}
