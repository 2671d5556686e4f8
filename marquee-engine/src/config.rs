use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
	name = "marquee-engine",
	about = "Content-based catalog recommender over NDJSON stdio"
)]
pub struct CliArgs {
	/// Catalog CSV file (columns: title, genres, keywords, tagline, overview)
	#[arg(long, env = "MARQUEE_CATALOG")]
	pub catalog: PathBuf,

	/// Recommendations returned per query
	#[arg(long, default_value = "9", env = "MARQUEE_TOP_N")]
	pub top: usize,

	/// Snapshot directory: load the index from here when present, save
	/// after a fresh build
	#[arg(long, env = "MARQUEE_SNAPSHOT_DIR")]
	pub snapshot_dir: Option<PathBuf>,

	/// Poster search API key. Poster lookups are disabled when absent.
	#[arg(long, env = "MARQUEE_POSTER_API_KEY")]
	pub poster_api_key: Option<String>,

	/// Log level (trace, debug, info, warn, error)
	#[arg(long, default_value = "info", env = "MARQUEE_LOG_LEVEL")]
	pub log_level: String,
}
