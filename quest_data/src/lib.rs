pub mod catalog;
pub mod quest;
pub mod reward;
pub mod stages;

use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
}

/// JSON file IO for every serializable record in this crate.
///
/// The pretty-printed output is the format the engine's asset pipeline
/// consumes, so the writer side must go through this trait rather than a
/// compact encoder.
pub trait SerDeFile: Serialize + DeserializeOwned {
    fn load_from_json_file<T: AsRef<Path>>(path: T) -> Result<Self, Error> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
    fn save_to_json_file<T: AsRef<Path>>(&self, path: T) -> Result<(), Error> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

impl<T: Serialize + DeserializeOwned> SerDeFile for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::QuestData;
    use tempfile::TempDir;

    #[test]
    fn records_round_trip_through_json_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quest.json");

        let mut quest = QuestData::default();
        quest.set_quest_level(4);
        quest.save_to_json_file(&path).unwrap();

        // the asset pipeline consumes pretty-printed JSON
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n  \"_DataList\""));

        let back = QuestData::load_from_json_file(&path).unwrap();
        assert_eq!(back, quest);
    }

    #[test]
    fn loading_a_missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            QuestData::load_from_json_file(&missing),
            Err(Error::IOError(_))
        ));
    }
}
