// ---------------------------------------------------------------------------
// Text utilities -- tokenization and fuzzy title matching
// ---------------------------------------------------------------------------
//
// Pure-function helpers shared by the vectorizer (word tokens) and the
// title-suggestion path (edit-distance similarity). No stemming: terms are
// matched exactly after lowercasing.
// ---------------------------------------------------------------------------

// ---------------------------------------------------------------------------
// Tokenisation
// ---------------------------------------------------------------------------

/// Split text into lowercased word tokens, stripping punctuation.
///
/// Tokens shorter than two characters are dropped, so stray initials and
/// punctuation debris never reach the vocabulary.
pub fn tokenize(text: &str) -> Vec<String> {
	text.to_lowercase()
		.chars()
		.map(|c| if c.is_alphanumeric() { c } else { ' ' })
		.collect::<String>()
		.split_whitespace()
		.filter(|t| t.chars().count() >= 2)
		.map(|t| t.to_string())
		.collect()
}

// ---------------------------------------------------------------------------
// Levenshtein distance / similarity
// ---------------------------------------------------------------------------

/// Compute the Levenshtein edit-distance between two strings.
///
/// Wagner-Fischer with O(min(a, b)) space.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
	// Ensure `a` is the shorter string so we only need one row of storage.
	let (a, b) = if a.len() > b.len() { (b, a) } else { (a, b) };

	let a_chars: Vec<char> = a.chars().collect();
	let b_chars: Vec<char> = b.chars().collect();
	let a_len = a_chars.len();
	let b_len = b_chars.len();

	if a_len == 0 {
		return b_len;
	}

	let mut prev: Vec<usize> = (0..=a_len).collect();
	let mut curr: Vec<usize> = vec![0; a_len + 1];

	for j in 1..=b_len {
		curr[0] = j;

		for i in 1..=a_len {
			let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
			curr[i] = (curr[i - 1] + 1)
				.min(prev[i] + 1)
				.min(prev[i - 1] + cost);
		}

		std::mem::swap(&mut prev, &mut curr);
	}

	prev[a_len]
}

/// Normalised similarity (0-1) derived from the Levenshtein distance.
/// 1 means identical, 0 means completely different.
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
	let max_len = a.chars().count().max(b.chars().count());
	if max_len == 0 {
		return 1.0; // two empty strings are identical
	}
	1.0 - levenshtein_distance(a, b) as f64 / max_len as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;

	// -- tokenize tests -------------------------------------------------------

	#[test]
	fn tokenize_lowercases_and_strips_punctuation() {
		let tokens = tokenize("Space, War: ROBOTS!");
		assert_eq!(tokens, vec!["space", "war", "robots"]);
	}

	#[test]
	fn tokenize_drops_single_char_tokens() {
		let tokens = tokenize("a I robot x9");
		assert_eq!(tokens, vec!["robot", "x9"]);
	}

	#[test]
	fn tokenize_splits_on_hyphens_and_apostrophes() {
		let tokens = tokenize("sci-fi world's end");
		assert_eq!(tokens, vec!["sci", "fi", "world", "end"]);
	}

	#[test]
	fn tokenize_empty_and_whitespace() {
		assert!(tokenize("").is_empty());
		assert!(tokenize("   ").is_empty());
		assert!(tokenize("?!.").is_empty());
	}

	// -- levenshtein tests ----------------------------------------------------

	#[test]
	fn levenshtein_kitten_sitting() {
		assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
	}

	#[test]
	fn levenshtein_empty() {
		assert_eq!(levenshtein_distance("", "alien"), 5);
		assert_eq!(levenshtein_distance("alien", ""), 5);
		assert_eq!(levenshtein_distance("", ""), 0);
	}

	#[test]
	fn levenshtein_similarity_identical() {
		assert!((levenshtein_similarity("alien", "alien") - 1.0).abs() < f64::EPSILON);
		assert!((levenshtein_similarity("", "") - 1.0).abs() < f64::EPSILON);
	}

	#[test]
	fn levenshtein_similarity_known_value() {
		let sim = levenshtein_similarity("kitten", "sitting");
		// distance=3, max_len=7 => 1 - 3/7
		assert!((sim - (1.0 - 3.0 / 7.0)).abs() < 1e-10);
	}
}
