// ---------------------------------------------------------------------------
// Similarity index -- build once, query forever
// ---------------------------------------------------------------------------
//
// Owns the catalog and the full pairwise similarity matrix. Built in a
// single blocking pass at startup; immutable afterwards, so any number of
// threads may query a shared `&SimilarityIndex` without locking.
// ---------------------------------------------------------------------------

use crate::catalog::Catalog;
use crate::cosine::similarity_matrix;
use crate::error::EngineError;
use crate::stopwords::StopWords;
use crate::text::levenshtein_similarity;
use crate::types::Recommendation;
use crate::vectorize::fit_transform;

#[derive(Debug)]
pub struct SimilarityIndex {
	catalog: Catalog,
	/// N x N cosine similarity, symmetric, diagonal = self-similarity.
	matrix: Vec<Vec<f64>>,
}

impl SimilarityIndex {
	/// Vectorize every composite document and compute the full pairwise
	/// similarity matrix. The expensive O(N^2) step lives here so queries
	/// are a row read plus a sort.
	pub fn build(catalog: Catalog) -> Self {
		let stopwords = StopWords::english();
		let documents: Vec<&str> = catalog
			.entries()
			.iter()
			.map(|e| e.composite_document.as_str())
			.collect();

		let model = fit_transform(&documents, &stopwords);
		let matrix = similarity_matrix(&model.vectors);

		tracing::info!(
			entries = catalog.len(),
			vocabulary = model.vocabulary.len(),
			"similarity index built"
		);

		Self { catalog, matrix }
	}

	/// Reassemble an index from persisted parts. The title map is rebuilt
	/// from entry order, so it always reflects the first-wins policy.
	pub(crate) fn from_parts(catalog: Catalog, matrix: Vec<Vec<f64>>) -> Self {
		Self { catalog, matrix }
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	pub fn matrix(&self) -> &[Vec<f64>] {
		&self.matrix
	}

	/// Top-`n` most similar entries to `title`, best first.
	///
	/// Ranking is descending score with ties broken by ascending catalog
	/// index. The query entry itself is removed by index equality -- never
	/// by rank position -- so an exact-duplicate entry tied at the
	/// self-similarity score is still returned. Returns fewer than `n`
	/// results when the catalog is small; `n == 0` is an empty result, not
	/// an error.
	pub fn query(&self, title: &str, n: usize) -> Result<Vec<Recommendation>, EngineError> {
		let query_idx = self
			.catalog
			.index_of(title)
			.ok_or_else(|| EngineError::UnknownTitle(title.to_string()))?;

		let mut ranked: Vec<(usize, f64)> = self.matrix[query_idx]
			.iter()
			.copied()
			.enumerate()
			.collect();
		ranked.sort_by(|a, b| {
			b.1.partial_cmp(&a.1)
				.unwrap_or(std::cmp::Ordering::Equal)
				.then(a.0.cmp(&b.0))
		});

		Ok(ranked
			.into_iter()
			.filter(|&(idx, _)| idx != query_idx)
			.take(n)
			.map(|(idx, score)| Recommendation {
				entry: self.catalog.entries()[idx].clone(),
				score,
			})
			.collect())
	}

	/// Fuzzy title suggestions for near-miss input, best first. Intended
	/// for the display layer's handling of `UnknownTitle`. Matching is
	/// case-insensitive edit distance over the reachable titles.
	pub fn suggest(&self, input: &str, limit: usize) -> Vec<String> {
		let needle = input.to_lowercase();
		let mut scored: Vec<(f64, &str)> = self
			.catalog
			.titles()
			.into_iter()
			.map(|title| (levenshtein_similarity(&needle, &title.to_lowercase()), title))
			.collect();

		// Stable sort: equal scores keep ascending catalog index order.
		scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

		scored
			.into_iter()
			.filter(|&(score, _)| score > 0.0)
			.take(limit)
			.map(|(_, title)| title.to_string())
			.collect()
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
