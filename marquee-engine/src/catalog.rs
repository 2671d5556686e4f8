// ---------------------------------------------------------------------------
// Catalog loading and normalization
// ---------------------------------------------------------------------------
//
// Reads the tabular catalog source (CSV with a header row), normalizes
// missing cells to empty strings, builds each entry's composite document,
// and assigns stable 0..N-1 indexes in row order. Loading is all-or-nothing:
// any unreadable source or malformed record fails the whole load.
//
// Duplicate titles collapse to the FIRST occurrence in load order; later
// rows stay in the catalog (and in the similarity matrix) but are not
// reachable through the title map. This is a documented policy, not an
// accident of map insertion order.
// ---------------------------------------------------------------------------

use std::collections::HashMap;
use std::path::Path;

use crate::error::EngineError;
use crate::types::Entry;

/// Required key column.
pub const TITLE_COLUMN: &str = "title";

/// Textual attribute columns, in composite-document order.
pub const TEXT_COLUMNS: [&str; 4] = ["genres", "keywords", "tagline", "overview"];

/// Ordered catalog of entries plus the first-wins title lookup map.
#[derive(Debug)]
pub struct Catalog {
	entries: Vec<Entry>,
	title_index: HashMap<String, usize>,
}

impl Catalog {
	/// Load a catalog from a CSV file.
	///
	/// Header columns are matched case-insensitively. Fails with
	/// `SourceUnavailable` when the file cannot be read or a record is
	/// malformed, and with `SchemaMismatch` when a required column is
	/// absent.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
		let path = path.as_ref();
		let mut reader = csv::ReaderBuilder::new()
			.flexible(true)
			.from_path(path)
			.map_err(|e| EngineError::SourceUnavailable(format!("{}: {}", path.display(), e)))?;

		let headers = reader
			.headers()
			.map_err(|e| EngineError::SourceUnavailable(format!("{}: {}", path.display(), e)))?
			.clone();

		let column_at = |name: &str| -> Result<usize, EngineError> {
			headers
				.iter()
				.position(|h| h.trim().eq_ignore_ascii_case(name))
				.ok_or_else(|| EngineError::SchemaMismatch(name.to_string()))
		};

		let title_at = column_at(TITLE_COLUMN)?;
		let mut text_at = [0usize; TEXT_COLUMNS.len()];
		for (slot, name) in text_at.iter_mut().zip(TEXT_COLUMNS) {
			*slot = column_at(name)?;
		}

		let mut entries = Vec::new();
		for record in reader.records() {
			let record = record.map_err(|e| {
				EngineError::SourceUnavailable(format!("{}: {}", path.display(), e))
			})?;

			// Short rows simply have no value for the trailing columns;
			// absent cells normalize to "".
			let cell = |idx: usize| record.get(idx).unwrap_or("");
			entries.push(Entry::new(
				cell(title_at),
				cell(text_at[0]),
				cell(text_at[1]),
				cell(text_at[2]),
				cell(text_at[3]),
			));
		}

		tracing::info!(entries = entries.len(), path = %path.display(), "catalog loaded");
		Ok(Self::from_entries(entries))
	}

	/// Build a catalog from already-normalized entries, assigning indexes
	/// in the given order and applying the first-wins title policy.
	pub fn from_entries(entries: Vec<Entry>) -> Self {
		let mut title_index = HashMap::with_capacity(entries.len());
		for (idx, entry) in entries.iter().enumerate() {
			if let Some(&first) = title_index.get(&entry.title) {
				tracing::warn!(
					title = %entry.title,
					first = first,
					shadowed = idx,
					"duplicate title shadowed by earlier row"
				);
				continue;
			}
			title_index.insert(entry.title.clone(), idx);
		}
		Self { entries, title_index }
	}

	pub fn entries(&self) -> &[Entry] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Row index for a title, per the first-wins duplicate policy.
	/// Titles match exactly (the catalog key is the display title).
	pub fn index_of(&self, title: &str) -> Option<usize> {
		self.title_index.get(title).copied()
	}

	pub fn get(&self, index: usize) -> Option<&Entry> {
		self.entries.get(index)
	}

	/// Distinct reachable titles, in catalog index order.
	pub fn titles(&self) -> Vec<&str> {
		let mut pairs: Vec<(usize, &str)> = self
			.title_index
			.iter()
			.map(|(title, &idx)| (idx, title.as_str()))
			.collect();
		pairs.sort_unstable_by_key(|&(idx, _)| idx);
		pairs.into_iter().map(|(_, title)| title).collect()
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
