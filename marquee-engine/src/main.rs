use clap::Parser;

use marquee_engine::catalog::Catalog;
use marquee_engine::config::CliArgs;
use marquee_engine::index::SimilarityIndex;
use marquee_engine::poster::PosterClient;
use marquee_engine::server::RecommendServer;
use marquee_engine::snapshot;

fn main() {
	let args = CliArgs::parse();

	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
		)
		.init();

	let index = match load_or_build(&args) {
		Ok(index) => index,
		Err(message) => {
			tracing::error!("{}", message);
			std::process::exit(1);
		}
	};

	let poster = args.poster_api_key.as_deref().and_then(|key| {
		match PosterClient::new(key) {
			Ok(client) => Some(client),
			Err(e) => {
				tracing::warn!("poster client unavailable: {}", e);
				None
			}
		}
	});

	let server = RecommendServer::new(index, args.top, poster);

	tracing::info!("marquee-engine ready");

	if let Err(e) = server.run() {
		tracing::error!("Server error: {}", e);
		std::process::exit(1);
	}
}

/// Resolve the index: reuse a snapshot when one exists, otherwise build
/// from the catalog source (and persist when a snapshot dir is configured).
fn load_or_build(args: &CliArgs) -> Result<SimilarityIndex, String> {
	if let Some(dir) = &args.snapshot_dir {
		match snapshot::load_from_directory(dir) {
			Ok(Some(index)) => return Ok(index),
			Ok(None) => {}
			Err(e) => return Err(format!("Snapshot load failed: {}", e)),
		}
	}

	let catalog = Catalog::load(&args.catalog).map_err(|e| e.to_string())?;
	let index = SimilarityIndex::build(catalog);

	if let Some(dir) = &args.snapshot_dir {
		if let Err(e) = snapshot::save_to_directory(dir, &index) {
			tracing::warn!("Snapshot save failed: {}", e);
		}
	}

	Ok(index)
}
