// ---------------------------------------------------------------------------
// TF-IDF vectorization
// ---------------------------------------------------------------------------
//
// Turns composite documents into sparse L2-normalized term-weight vectors.
// Weighting is tf * idf with the smoothed idf variant
// ln((1 + n_docs) / (1 + df)) + 1, so a term present in every document
// still gets a positive (but minimal) weight and no division by zero can
// occur. Documents with no surviving terms map to the empty vector.
// ---------------------------------------------------------------------------

use std::collections::HashMap;

use crate::stopwords::StopWords;
use crate::text::tokenize;

/// Sparse term-weight vector: `(term_id, weight)` pairs sorted by term id.
/// Always L2-normalized; the zero vector is represented as an empty `Vec`.
pub type SparseVector = Vec<(u32, f64)>;

/// Result of fitting the vectorizer over a whole catalog.
pub struct TfidfModel {
	/// term -> id, ids assigned by first appearance across the corpus.
	pub vocabulary: HashMap<String, u32>,
	/// One vector per input document, same order.
	pub vectors: Vec<SparseVector>,
}

/// Tokenize a single document and drop stopwords.
fn terms_of(document: &str, stopwords: &StopWords) -> Vec<String> {
	tokenize(document)
		.into_iter()
		.filter(|t| !stopwords.contains(t))
		.collect()
}

/// Fit TF-IDF over `documents` and transform each into a sparse vector.
///
/// Deterministic for a fixed input: vocabulary ids follow first-appearance
/// order and each vector is sorted by term id before normalization, so a
/// rebuild over the same documents is bit-for-bit identical.
pub fn fit_transform(documents: &[&str], stopwords: &StopWords) -> TfidfModel {
	let n_docs = documents.len();

	// Pass 1: vocabulary (first-appearance order) + per-document counts +
	// document frequencies.
	let mut vocabulary: HashMap<String, u32> = HashMap::new();
	let mut counts: Vec<HashMap<u32, u32>> = Vec::with_capacity(n_docs);
	let mut doc_freq: Vec<u32> = Vec::new();

	for document in documents {
		let mut doc_counts: HashMap<u32, u32> = HashMap::new();
		for term in terms_of(document, stopwords) {
			let next_id = vocabulary.len() as u32;
			let id = *vocabulary.entry(term).or_insert(next_id);
			if id as usize == doc_freq.len() {
				doc_freq.push(0);
			}
			let count = doc_counts.entry(id).or_insert(0);
			if *count == 0 {
				doc_freq[id as usize] += 1;
			}
			*count += 1;
		}
		counts.push(doc_counts);
	}

	// Pass 2: weight, sort, normalize.
	let idf: Vec<f64> = doc_freq
		.iter()
		.map(|&df| ((1.0 + n_docs as f64) / (1.0 + df as f64)).ln() + 1.0)
		.collect();

	let vectors = counts
		.into_iter()
		.map(|doc_counts| {
			let mut vector: SparseVector = doc_counts
				.into_iter()
				.map(|(id, count)| (id, count as f64 * idf[id as usize]))
				.collect();
			vector.sort_by_key(|&(id, _)| id);

			let norm = vector
				.iter()
				.map(|&(_, w)| w * w)
				.sum::<f64>()
				.sqrt();
			if norm > 0.0 {
				for (_, w) in &mut vector {
					*w /= norm;
				}
			}
			vector
		})
		.collect();

	TfidfModel { vocabulary, vectors }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
