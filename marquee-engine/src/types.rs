use serde::{Deserialize, Serialize};

/// One catalog item. The textual attributes are always present as strings;
/// absent cells are normalized to `""` at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
	pub title: String,
	pub genres: String,
	pub keywords: String,
	pub tagline: String,
	pub overview: String,
	/// Space-joined concatenation of genres, keywords, tagline, overview,
	/// in that fixed order. Recomputed on load.
	#[serde(rename = "compositeDocument")]
	pub composite_document: String,
}

impl Entry {
	pub fn new(title: &str, genres: &str, keywords: &str, tagline: &str, overview: &str) -> Self {
		let composite_document = compose_document(genres, keywords, tagline, overview);
		Self {
			title: title.to_string(),
			genres: genres.to_string(),
			keywords: keywords.to_string(),
			tagline: tagline.to_string(),
			overview: overview.to_string(),
			composite_document,
		}
	}
}

/// Join the textual attributes in their fixed declared order. The order is
/// cosmetic for term weighting but must not change between builds.
pub fn compose_document(genres: &str, keywords: &str, tagline: &str, overview: &str) -> String {
	format!("{} {} {} {}", genres, keywords, tagline, overview)
}

/// A ranked neighbor returned by a similarity query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
	pub entry: Entry,
	pub score: f64,
}
