// ---------------------------------------------------------------------------
// Poster lookup -- best-effort artwork resolution
// ---------------------------------------------------------------------------
//
// Resolves a poster image URL for a title against a TMDB-style search API.
// Entirely outside the similarity core: each lookup is independent and
// failure-isolated, and every outcome is explicit so the caller can tell
// "this title has no poster" from "the service was unreachable" and retry
// only the latter.
// ---------------------------------------------------------------------------

use std::time::Duration;

const DEFAULT_SEARCH_URL: &str = "https://api.themoviedb.org/3/search/movie";
const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of a single poster lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum PosterOutcome {
	/// A poster exists; the value is the full image URL.
	Found(String),
	/// The service answered but has no poster for this title.
	NotFound,
	/// Transport failure, non-2xx status, or unparseable body. Retryable.
	Unavailable(String),
}

pub struct PosterClient {
	http: reqwest::blocking::Client,
	api_key: String,
	search_url: String,
	image_base: String,
}

impl PosterClient {
	pub fn new(api_key: &str) -> Result<Self, reqwest::Error> {
		Self::with_endpoints(api_key, DEFAULT_SEARCH_URL, DEFAULT_IMAGE_BASE)
	}

	/// Construct against explicit endpoints. Used by tests and by
	/// deployments fronting the image service with a proxy.
	pub fn with_endpoints(
		api_key: &str,
		search_url: &str,
		image_base: &str,
	) -> Result<Self, reqwest::Error> {
		let http = reqwest::blocking::Client::builder()
			.timeout(REQUEST_TIMEOUT)
			.build()?;
		Ok(Self {
			http,
			api_key: api_key.to_string(),
			search_url: search_url.to_string(),
			image_base: image_base.to_string(),
		})
	}

	/// Look up the poster for a title. Never fails the caller: every
	/// failure mode is folded into the returned outcome.
	pub fn lookup(&self, title: &str) -> PosterOutcome {
		let response = match self
			.http
			.get(&self.search_url)
			.query(&[("api_key", self.api_key.as_str()), ("query", title)])
			.send()
		{
			Ok(r) => r,
			Err(e) => return PosterOutcome::Unavailable(e.to_string()),
		};

		let status = response.status();
		if !status.is_success() {
			return PosterOutcome::Unavailable(format!("HTTP {}", status.as_u16()));
		}

		match response.json::<serde_json::Value>() {
			Ok(body) => parse_search_response(&body, &self.image_base),
			Err(e) => PosterOutcome::Unavailable(format!("Invalid response body: {}", e)),
		}
	}
}

/// Interpret a search response body. The first result wins, matching the
/// upstream API's relevance ordering.
fn parse_search_response(body: &serde_json::Value, image_base: &str) -> PosterOutcome {
	let first = match body["results"].as_array().and_then(|r| r.first()) {
		Some(first) => first,
		None => return PosterOutcome::NotFound,
	};

	match first["poster_path"].as_str() {
		Some(path) if !path.is_empty() => {
			PosterOutcome::Found(format!("{}{}", image_base, path))
		}
		_ => PosterOutcome::NotFound,
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
