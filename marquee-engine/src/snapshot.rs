// ---------------------------------------------------------------------------
// Snapshot persistence -- gzipped index file
// ---------------------------------------------------------------------------
//
// Saves a built index (entries + similarity matrix) to a directory so a
// restarted process can skip the O(N^2) build. Format: `index.gz`, gzipped
// JSON `{ "version": 1, "entries": [...], "matrix": [[...]] }`. The title
// map is NOT persisted; it is rebuilt from entry order on load, which keeps
// the first-wins duplicate policy in exactly one place.
// ---------------------------------------------------------------------------

use std::io::Read;
use std::path::Path;

use flate2::read::{GzDecoder, GzEncoder};
use flate2::Compression;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::index::SimilarityIndex;
use crate::types::Entry;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum SnapshotError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	#[error("Corruption: {0}")]
	Corruption(String),
	#[error("Serialization: {0}")]
	Serialization(String),
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const SNAPSHOT_FILE: &str = "index.gz";
const SNAPSHOT_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// On-disk structure
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
	version: u32,
	entries: Vec<Entry>,
	matrix: Vec<Vec<f64>>,
}

// ---------------------------------------------------------------------------
// Gzip helpers
// ---------------------------------------------------------------------------

fn compress(data: &[u8]) -> Result<Vec<u8>, SnapshotError> {
	let mut encoder = GzEncoder::new(data, Compression::new(6));
	let mut compressed = Vec::new();
	encoder.read_to_end(&mut compressed).map_err(SnapshotError::Io)?;
	Ok(compressed)
}

fn decompress(data: &[u8]) -> Result<Vec<u8>, SnapshotError> {
	let mut decoder = GzDecoder::new(data);
	let mut decompressed = Vec::new();
	decoder.read_to_end(&mut decompressed).map_err(SnapshotError::Io)?;
	Ok(decompressed)
}

/// Check for the gzip magic bytes (0x1f, 0x8b).
pub fn is_gzipped(data: &[u8]) -> bool {
	data.len() >= 2 && data[0] == 0x1f && data[1] == 0x8b
}

// ---------------------------------------------------------------------------
// Save / load
// ---------------------------------------------------------------------------

/// Write the index snapshot into `dir`, creating the directory if needed.
pub fn save_to_directory(dir: &Path, index: &SimilarityIndex) -> Result<(), SnapshotError> {
	std::fs::create_dir_all(dir).map_err(SnapshotError::Io)?;

	let snapshot = SnapshotFile {
		version: SNAPSHOT_VERSION,
		entries: index.catalog().entries().to_vec(),
		matrix: index.matrix().to_vec(),
	};

	let json = serde_json::to_string(&snapshot)
		.map_err(|e| SnapshotError::Serialization(format!("Failed to serialize snapshot: {}", e)))?;
	let compressed = compress(json.as_bytes())?;

	std::fs::write(dir.join(SNAPSHOT_FILE), &compressed).map_err(SnapshotError::Io)?;
	tracing::info!(entries = index.catalog().len(), dir = %dir.display(), "snapshot saved");
	Ok(())
}

/// Load an index snapshot from `dir`.
///
/// Returns `Ok(None)` when no snapshot file exists. Accepts both gzipped
/// and plain JSON content (detected by magic bytes). Version mismatches,
/// malformed JSON, and entry/matrix shape disagreements are `Corruption`.
pub fn load_from_directory(dir: &Path) -> Result<Option<SimilarityIndex>, SnapshotError> {
	let path = dir.join(SNAPSHOT_FILE);
	if !path.exists() {
		return Ok(None);
	}

	let raw = std::fs::read(&path).map_err(SnapshotError::Io)?;
	let json_bytes = if is_gzipped(&raw) { decompress(&raw)? } else { raw };

	let json = std::str::from_utf8(&json_bytes)
		.map_err(|e| SnapshotError::Corruption(format!("Invalid UTF-8 in snapshot: {}", e)))?;
	let snapshot: SnapshotFile = serde_json::from_str(json)
		.map_err(|e| SnapshotError::Corruption(format!("Invalid snapshot JSON: {}", e)))?;

	if snapshot.version != SNAPSHOT_VERSION {
		return Err(SnapshotError::Corruption(format!(
			"Unsupported snapshot version: {}",
			snapshot.version
		)));
	}

	let n = snapshot.entries.len();
	if snapshot.matrix.len() != n || snapshot.matrix.iter().any(|row| row.len() != n) {
		return Err(SnapshotError::Corruption(format!(
			"Matrix shape does not match {} entries",
			n
		)));
	}

	tracing::info!(entries = n, dir = %dir.display(), "snapshot loaded");
	Ok(Some(SimilarityIndex::from_parts(
		Catalog::from_entries(snapshot.entries),
		snapshot.matrix,
	)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
