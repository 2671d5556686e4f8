// ---------------------------------------------------------------------------
// Integration tests for the marquee-engine NDJSON stdio loop
// ---------------------------------------------------------------------------
//
// Each test writes a catalog CSV to a temp dir, spawns a fresh
// marquee-engine binary against it, and exchanges newline-delimited
// queries/responses over stdin/stdout.
// ---------------------------------------------------------------------------

use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, Command, Stdio};

use serde_json::Value;

// ---------------------------------------------------------------------------
// Helper
// ---------------------------------------------------------------------------

struct EngineProcess {
	child: Child,
	reader: BufReader<std::process::ChildStdout>,
}

impl EngineProcess {
	fn spawn(catalog: &Path, extra_args: &[&str]) -> Self {
		let bin = env!("CARGO_BIN_EXE_marquee-engine");
		let mut child = Command::new(bin)
			.arg("--catalog")
			.arg(catalog)
			.args(extra_args)
			.stdin(Stdio::piped())
			.stdout(Stdio::piped())
			.stderr(Stdio::null())
			.spawn()
			.expect("failed to spawn marquee-engine");

		let stdout = child.stdout.take().expect("no stdout");
		let reader = BufReader::new(stdout);

		Self { child, reader }
	}

	fn query(&mut self, title: &str) -> Value {
		let stdin = self.child.stdin.as_mut().expect("no stdin");
		stdin.write_all(title.as_bytes()).unwrap();
		stdin.write_all(b"\n").unwrap();
		stdin.flush().unwrap();

		let mut line = String::new();
		let bytes_read = self
			.reader
			.read_line(&mut line)
			.expect("failed to read from stdout");
		assert!(bytes_read > 0, "unexpected EOF for query '{title}'");
		serde_json::from_str(line.trim())
			.unwrap_or_else(|e| panic!("invalid JSON from engine: {e}\nline: {line}"))
	}

	fn recommendations(&mut self, title: &str) -> Vec<Value> {
		let response = self.query(title);
		response["recommendations"]
			.as_array()
			.unwrap_or_else(|| panic!("expected recommendations, got: {response}"))
			.clone()
	}
}

impl Drop for EngineProcess {
	fn drop(&mut self) {
		drop(self.child.stdin.take());
		let _ = self.child.wait();
	}
}

fn write_catalog(dir: &Path, content: &str) -> std::path::PathBuf {
	let path = dir.join("catalog.csv");
	std::fs::write(&path, content).unwrap();
	path
}

/// The ranking-contract catalog: A and B are textual duplicates, C differs.
const DUPLICATE_DOCS: &str = "title,genres,keywords,tagline,overview\n\
	A,space,war robots,,\n\
	B,space,war robots,,\n\
	C,romance,drama,,\n";

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn recommends_duplicate_document_first() {
	let dir = tempfile::tempdir().unwrap();
	let catalog = write_catalog(dir.path(), DUPLICATE_DOCS);
	let mut engine = EngineProcess::spawn(&catalog, &[]);

	let recs = engine.recommendations("A");
	assert_eq!(recs.len(), 2);
	assert_eq!(recs[0]["title"], "B");
	assert!((recs[0]["score"].as_f64().unwrap() - 1.0).abs() < 1e-9);

	// And the duplicate is mutually retrievable.
	let recs = engine.recommendations("B");
	assert_eq!(recs[0]["title"], "A");
}

#[test]
fn equidistant_neighbors_come_back_in_index_order() {
	let dir = tempfile::tempdir().unwrap();
	let catalog = write_catalog(dir.path(), DUPLICATE_DOCS);
	let mut engine = EngineProcess::spawn(&catalog, &[]);

	let recs = engine.recommendations("C");
	assert_eq!(recs.len(), 2);
	assert_eq!(recs[0]["title"], "A");
	assert_eq!(recs[1]["title"], "B");
	assert_eq!(
		recs[0]["score"].as_f64().unwrap(),
		recs[1]["score"].as_f64().unwrap()
	);
}

#[test]
fn unknown_title_reports_error_with_suggestions() {
	let dir = tempfile::tempdir().unwrap();
	let catalog = write_catalog(
		dir.path(),
		"title,genres,keywords,tagline,overview\n\
		 Solaris,scifi,space station,,psychologist visits a station\n\
		 Stalker,scifi,zone,,guide leads writers into the zone\n",
	);
	let mut engine = EngineProcess::spawn(&catalog, &[]);

	let response = engine.query("Solariss");
	assert_eq!(response["error"]["code"], "UNKNOWN_TITLE");
	let suggestions = response["error"]["suggestions"].as_array().unwrap();
	assert_eq!(suggestions[0], "Solaris");

	// The process survives the error and keeps answering.
	let recs = engine.recommendations("Solaris");
	assert_eq!(recs[0]["title"], "Stalker");
}

#[test]
fn top_flag_caps_result_count() {
	let dir = tempfile::tempdir().unwrap();
	let catalog = write_catalog(dir.path(), DUPLICATE_DOCS);
	let mut engine = EngineProcess::spawn(&catalog, &["--top", "1"]);

	let recs = engine.recommendations("C");
	assert_eq!(recs.len(), 1);
	assert_eq!(recs[0]["title"], "A");
}

#[test]
fn duplicate_titles_resolve_to_first_row() {
	let dir = tempfile::tempdir().unwrap();
	let catalog = write_catalog(
		dir.path(),
		"title,genres,keywords,tagline,overview\n\
		 Twin,space,war,,\n\
		 Twin,romance,drama,,\n\
		 Battle,space,war battle,,\n",
	);
	let mut engine = EngineProcess::spawn(&catalog, &[]);

	// "Twin" reaches row 0 (space war), so Battle outranks the shadowed row.
	let recs = engine.recommendations("Twin");
	assert_eq!(recs[0]["title"], "Battle");
}

#[test]
fn snapshot_roundtrip_serves_identical_results() {
	let dir = tempfile::tempdir().unwrap();
	let catalog = write_catalog(dir.path(), DUPLICATE_DOCS);
	let snapshot_dir = dir.path().join("snapshot");
	let snapshot_arg = snapshot_dir.to_str().unwrap();

	// First run builds and persists.
	let fresh = {
		let mut engine =
			EngineProcess::spawn(&catalog, &["--snapshot-dir", snapshot_arg]);
		engine.query("A")
	};
	assert!(snapshot_dir.join("index.gz").exists());

	// Second run must answer from the snapshot, identically.
	let mut engine = EngineProcess::spawn(&catalog, &["--snapshot-dir", snapshot_arg]);
	assert_eq!(engine.query("A"), fresh);
}

#[test]
fn missing_catalog_exits_nonzero() {
	let bin = env!("CARGO_BIN_EXE_marquee-engine");
	let status = Command::new(bin)
		.arg("--catalog")
		.arg("/nonexistent/catalog.csv")
		.stdin(Stdio::null())
		.stdout(Stdio::null())
		.stderr(Stdio::null())
		.status()
		.unwrap();
	assert!(!status.success());
}
