use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
	#[error("Catalog source unavailable: {0}")]
	SourceUnavailable(String),
	#[error("Catalog schema mismatch: missing required column '{0}'")]
	SchemaMismatch(String),
	#[error("Unknown title: {0}")]
	UnknownTitle(String),
}

impl EngineError {
	pub fn code(&self) -> &str {
		match self {
			Self::SourceUnavailable(_) => "CATALOG_SOURCE_UNAVAILABLE",
			Self::SchemaMismatch(_) => "CATALOG_SCHEMA_MISMATCH",
			Self::UnknownTitle(_) => "UNKNOWN_TITLE",
		}
	}

	pub fn to_json(&self) -> serde_json::Value {
		serde_json::json!({
			"code": self.code(),
			"message": self.to_string(),
		})
	}
}
