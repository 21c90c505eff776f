use crate::error::AppError;
use crate::model::{REQUIRED_COLUMNS, RawPlayRow};
use ahash::AHashMap;
use log::{debug, error};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read-only access to historical plays, keyed by game.
pub trait PlaySource: Send + Sync {
    /// Rows for one game in source file order. Unknown games give an empty vec.
    fn plays_for_game(&self, game_id: i64) -> Vec<RawPlayRow>;
}

/// The whole play-by-play file held in memory, grouped by `GameId`.
#[derive(Debug, Default, Clone)]
pub struct PlayDataset {
    rows_by_game: AHashMap<i64, Vec<RawPlayRow>>,
    row_count: usize,
}

impl PlayDataset {
    /// # Errors
    ///
    /// Will return `Err` if the file can't be opened or isn't a valid play-by-play csv
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| AppError::Io(format!("unable to open '{}': {e}", path.display())))?;
        Self::from_reader(file)
    }

    /// # Errors
    ///
    /// Will return `Err` if a required column is missing or a row can't be deserialized
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AppError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|col| !header.iter().any(|h| h == col))
            .collect();
        if !missing.is_empty() {
            error!("Invalid header row:\n{header:?}\nMissing: {missing:?}");
            return Err(AppError::Dataset(format!(
                "missing required columns: {}",
                missing.join(", ")
            )));
        }

        let mut dataset = Self::default();
        for (i, row) in reader.deserialize::<RawPlayRow>().enumerate() {
            // header is line 1
            let row = row.map_err(|e| AppError::Dataset(format!("row {}: {e}", i + 2)))?;
            dataset.push(row);
        }
        debug!(
            "Loaded {} plays across {} games",
            dataset.row_count,
            dataset.rows_by_game.len()
        );
        Ok(dataset)
    }

    #[must_use]
    pub fn from_rows(rows: Vec<RawPlayRow>) -> Self {
        let mut dataset = Self::default();
        for row in rows {
            dataset.push(row);
        }
        dataset
    }

    fn push(&mut self, row: RawPlayRow) {
        self.rows_by_game.entry(row.game_id).or_default().push(row);
        self.row_count += 1;
    }

    #[must_use]
    pub fn game_count(&self) -> usize {
        self.rows_by_game.len()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }
}

impl PlaySource for PlayDataset {
    fn plays_for_game(&self, game_id: i64) -> Vec<RawPlayRow> {
        self.rows_by_game.get(&game_id).cloned().unwrap_or_default()
    }
}
