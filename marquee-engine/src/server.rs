// ---------------------------------------------------------------------------
// NDJSON query loop -- the display-layer boundary
// ---------------------------------------------------------------------------
//
// Each stdin line is a catalog title; each stdout line is one JSON object:
// either the ranked recommendations or an error payload the display layer
// can present (unknown titles come back with fuzzy suggestions instead of
// crashing the process). Logs go to stderr; stdout carries responses only.
// ---------------------------------------------------------------------------

use std::io::{self, BufRead, Write};

use serde_json::json;

use crate::error::EngineError;
use crate::index::SimilarityIndex;
use crate::poster::{PosterClient, PosterOutcome};

const SUGGESTION_LIMIT: usize = 3;

pub struct RecommendServer {
	index: SimilarityIndex,
	top_n: usize,
	poster: Option<PosterClient>,
}

impl RecommendServer {
	pub fn new(index: SimilarityIndex, top_n: usize, poster: Option<PosterClient>) -> Self {
		Self { index, top_n, poster }
	}

	/// Serve queries until stdin closes.
	pub fn run(&self) -> Result<(), io::Error> {
		let stdin = io::stdin();
		let stdout = io::stdout();
		let mut out = stdout.lock();

		for line in stdin.lock().lines() {
			let line = line?;
			let title = line.trim();
			if title.is_empty() {
				continue;
			}

			let response = self.respond(title);
			serde_json::to_writer(&mut out, &response)?;
			out.write_all(b"\n")?;
			out.flush()?;
		}

		Ok(())
	}

	/// Answer a single title query as a JSON object.
	pub fn respond(&self, title: &str) -> serde_json::Value {
		match self.index.query(title, self.top_n) {
			Ok(recommendations) => {
				let items: Vec<serde_json::Value> = recommendations
					.iter()
					.map(|rec| {
						json!({
							"title": rec.entry.title,
							"overview": rec.entry.overview,
							"score": rec.score,
							"poster": self.poster_url(&rec.entry.title),
						})
					})
					.collect();
				json!({ "title": title, "recommendations": items })
			}
			Err(err @ EngineError::UnknownTitle(_)) => {
				let mut payload = err.to_json();
				payload["suggestions"] = json!(self.index.suggest(title, SUGGESTION_LIMIT));
				json!({ "error": payload })
			}
			Err(err) => json!({ "error": err.to_json() }),
		}
	}

	/// Best-effort poster resolution; a failed lookup degrades to null and
	/// never affects the recommendation set.
	fn poster_url(&self, title: &str) -> Option<String> {
		let client = self.poster.as_ref()?;
		match client.lookup(title) {
			PosterOutcome::Found(url) => Some(url),
			PosterOutcome::NotFound => None,
			PosterOutcome::Unavailable(reason) => {
				tracing::warn!(title = %title, reason = %reason, "poster lookup unavailable");
				None
			}
		}
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
