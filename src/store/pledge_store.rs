use std::fs::File;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, Result};
use crate::models::pledge::{Pledge, Review, Update};

/// Flat-file store for the pledge collection.
///
/// One CSV row per pledge. The `reviews` and `updates` columns hold the JSON
/// encoding of their sequences, since CSV cells only carry scalar text. JSON
/// is the safe-literal format here: decoding reconstructs data structures
/// without ever evaluating code.
pub struct PledgeStore {
    path: PathBuf,
}

// On-disk row shape. Nested collections are flattened to single text cells.
#[derive(Debug, Serialize, Deserialize)]
struct PledgeRow {
    name: String,
    skill: String,
    amount: String,
    reward: String,
    reviews: String,
    #[serde(default)]
    updates: String,
}

impl PledgeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PledgeStore { path: path.into() }
    }

    /// Loads the full pledge collection from disk.
    ///
    /// A missing backing file is the normal empty state and yields an empty
    /// collection. A nested cell that fails to decode is a corruption error
    /// and fails the whole load; it is never silently replaced with an empty
    /// list, which would mask real prior data. Never mutates the file.
    pub fn load(&self) -> Result<Vec<Pledge>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::Reader::from_reader(file);
        let mut pledges = Vec::new();

        for row in reader.deserialize() {
            let row: PledgeRow = row?;
            let reviews: Vec<Review> = decode_cell(&row.name, "reviews", &row.reviews)?;
            let updates: Vec<Update> = decode_cell(&row.name, "updates", &row.updates)?;

            pledges.push(Pledge {
                name: row.name,
                skill: row.skill,
                amount: row.amount,
                reward: row.reward,
                reviews,
                updates,
            });
        }

        Ok(pledges)
    }

    /// Writes the full pledge collection, replacing the backing file in one
    /// pass. Partial saves are not supported; callers always pass the entire
    /// current collection so no prior reviews or updates are lost. I/O errors
    /// propagate to the caller, no retry.
    pub fn save(&self, pledges: &[Pledge]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;

        for pledge in pledges {
            writer.serialize(PledgeRow {
                name: pledge.name.clone(),
                skill: pledge.skill.clone(),
                amount: pledge.amount.clone(),
                reward: pledge.reward.clone(),
                reviews: serde_json::to_string(&pledge.reviews)?,
                updates: serde_json::to_string(&pledge.updates)?,
            })?;
        }

        writer.flush()?;
        Ok(())
    }
}

// Single explicit decode path for a nested cell: CSV flattens everything to
// text, so the cell is always decoded from text. An empty cell means the row
// predates the column carrying data and decodes to the empty sequence.
fn decode_cell<T>(pledge: &str, field: &'static str, cell: &str) -> Result<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
{
    if cell.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(cell).map_err(|source| AppError::CorruptCell {
        pledge: pledge.to_string(),
        field,
        source,
    })
}
