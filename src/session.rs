//! One editing session over a quest record: owns the working copy, applies
//! the editing operations and moves it to and from disk.

use crate::Error;
use quest_data::quest::QuestData;
use quest_data::stages::Stage;
use quest_data::SerDeFile;
use std::path::Path;

pub struct Session {
    quest: QuestData,
    dirty: bool,
}

impl Session {
    /// Start from the canonical default template.
    pub fn new() -> Self {
        Self {
            quest: QuestData::default(),
            dirty: false,
        }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let quest = QuestData::load_from_json_file(path)?;
        Ok(Self {
            quest,
            dirty: false,
        })
    }

    pub fn quest(&self) -> &QuestData {
        &self.quest
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_quest_level(&mut self, level: u32) {
        self.quest.set_quest_level(level);
        self.dirty = true;
    }

    /// Switch stages by engine code (`"st401"` etc).
    pub fn set_stage(&mut self, code: &str) -> Result<(), Error> {
        let stage = Stage::from_code(code).ok_or_else(|| Error::UnknownStage(code.to_string()))?;
        self.quest.set_stage(stage);
        self.dirty = true;
        Ok(())
    }

    pub fn add_monsters(&mut self, count: u32) {
        for _ in 0..count {
            self.quest.add_monster();
        }
        if count > 0 {
            self.dirty = true;
        }
    }

    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.quest.save_to_json_file(path)?;
        self.dirty = false;
        Ok(())
    }

    /// One-line description for logs and the `--show` command.
    pub fn summary(&self) -> String {
        let stage = self
            .quest
            .stage()
            .map(|s| s.label())
            .unwrap_or("unknown stage");
        format!(
            "{} | ★{} | {} | {} monster(s) | {}s limit",
            self.quest
                .data_list
                .mission_id
                .name
                .as_deref()
                .unwrap_or("(unnamed)"),
            self.quest.quest_level(),
            stage,
            self.quest.boss_zako_data_list.main_target_data_list.len(),
            self.quest.data_list.time_limit,
        )
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_and_reopen_round_trips_the_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quest.json");

        let mut session = Session::new();
        session.set_quest_level(5);
        session.set_stage("st001").unwrap();
        session.add_monsters(2);
        assert!(session.is_dirty());
        session.save(&path).unwrap();
        assert!(!session.is_dirty());

        let reopened = Session::open(&path).unwrap();
        assert_eq!(reopened.quest(), session.quest());
        assert_eq!(reopened.quest().quest_level(), 5);
        assert_eq!(
            reopened
                .quest()
                .boss_zako_data_list
                .main_target_data_list
                .len(),
            2
        );
    }

    #[test]
    fn unknown_stage_code_is_an_error() {
        let mut session = Session::new();
        assert!(matches!(
            session.set_stage("st999"),
            Err(Error::UnknownStage(_))
        ));
    }

    #[test]
    fn summary_names_the_template_quest() {
        let session = Session::new();
        let summary = session.summary();
        assert!(summary.contains("New Quest"));
        assert!(summary.contains("★1"));
        assert!(summary.contains("Arena"));
    }
}
