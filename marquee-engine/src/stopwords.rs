// ---------------------------------------------------------------------------
// Stopword filtering
// ---------------------------------------------------------------------------
//
// Fixed English stopword list applied between tokenization and term
// weighting. Common function words carry no discriminative signal for
// content similarity, so they never enter the vocabulary.
// ---------------------------------------------------------------------------

use std::collections::HashSet;

/// Common English words, merged from the usual NLP toolkit lists.
const ENGLISH_STOPWORDS: &[&str] = &[
	"about", "above", "after", "again", "against", "all", "also", "am", "an",
	"and", "any", "are", "aren", "as", "at", "be", "because", "been", "before",
	"being", "below", "between", "both", "but", "by", "can", "cannot", "could",
	"couldn", "did", "didn", "do", "does", "doesn", "doing", "don", "down",
	"during", "each", "few", "for", "from", "further", "had", "hadn", "has",
	"hasn", "have", "haven", "having", "he", "her", "here", "hers", "herself",
	"him", "himself", "his", "how", "if", "in", "into", "is", "isn", "it",
	"its", "itself", "just", "let", "ll", "me", "more", "most", "mustn", "my",
	"myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
	"or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own",
	"re", "same", "shan", "she", "should", "shouldn", "so", "some", "such",
	"than", "that", "the", "their", "theirs", "them", "themselves", "then",
	"there", "these", "they", "this", "those", "through", "to", "too", "under",
	"until", "up", "ve", "very", "was", "wasn", "we", "were", "weren", "what",
	"when", "where", "which", "while", "who", "whom", "why", "will", "with",
	"won", "would", "wouldn", "you", "your", "yours", "yourself", "yourselves",
];

/// O(1) membership check over a fixed stopword set.
pub struct StopWords {
	words: HashSet<&'static str>,
}

impl StopWords {
	/// The fixed English list used for catalog vectorization.
	pub fn english() -> Self {
		Self {
			words: ENGLISH_STOPWORDS.iter().copied().collect(),
		}
	}

	/// Check a lowercased token against the set.
	pub fn contains(&self, token: &str) -> bool {
		self.words.contains(token)
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}
}

impl Default for StopWords {
	fn default() -> Self {
		Self::english()
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn common_function_words_are_stopwords() {
		let sw = StopWords::english();
		for word in ["the", "and", "is", "of", "in", "with", "was"] {
			assert!(sw.contains(word), "expected stopword: {word}");
		}
	}

	#[test]
	fn content_words_are_retained() {
		let sw = StopWords::english();
		for word in ["space", "war", "robots", "romance", "drama"] {
			assert!(!sw.contains(word), "unexpected stopword: {word}");
		}
	}

	#[test]
	fn list_has_no_duplicates() {
		let sw = StopWords::english();
		assert_eq!(sw.len(), ENGLISH_STOPWORDS.len());
	}

	#[test]
	fn matching_is_exact_lowercase() {
		// Tokenization lowercases before the stopword check, so the set
		// itself only carries lowercase forms.
		let sw = StopWords::english();
		assert!(!sw.contains("The"));
		assert!(sw.contains("the"));
	}
}
