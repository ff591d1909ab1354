//! The quest catalog: authored quests loaded from YAML.

use std::collections::HashSet;

use layoutquest_core::error::DomainError;

use super::quest::Quest;

/// Quest board shipped with the crate.
const DEFAULT_BOARD_YAML: &str = include_str!("../../quests.yaml");

/// Immutable set of quests available on the board.
#[derive(Debug, Clone)]
pub struct QuestCatalog {
    quests: Vec<Quest>,
}

impl QuestCatalog {
    /// Builds a catalog, checking that ids are unique and non-empty and that
    /// rewards and countdowns are positive.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` describing the first bad quest.
    pub fn new(quests: Vec<Quest>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for quest in &quests {
            if quest.id.trim().is_empty() {
                return Err(DomainError::Validation("quest id must not be empty".to_owned()));
            }
            if !seen.insert(quest.id.as_str()) {
                return Err(DomainError::Validation(format!(
                    "duplicate quest id: {}",
                    quest.id
                )));
            }
            if quest.xp_reward == 0 {
                return Err(DomainError::Validation(format!(
                    "quest {} must reward XP",
                    quest.id
                )));
            }
            if quest.countdown_hours == 0 {
                return Err(DomainError::Validation(format!(
                    "quest {} must have a countdown of at least one hour",
                    quest.id
                )));
            }
        }
        Ok(Self { quests })
    }

    /// Parses a YAML list of quests.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the YAML is malformed or a quest
    /// fails validation.
    pub fn from_yaml(source: &str) -> Result<Self, DomainError> {
        let quests: Vec<Quest> = serde_yaml::from_str(source)
            .map_err(|e| DomainError::Validation(format!("quest catalog is malformed: {e}")))?;
        Self::new(quests)
    }

    /// The built-in quest board.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the embedded board is invalid.
    pub fn default_board() -> Result<Self, DomainError> {
        Self::from_yaml(DEFAULT_BOARD_YAML)
    }

    /// Looks up a quest by id.
    #[must_use]
    pub fn get(&self, quest_id: &str) -> Option<&Quest> {
        self.quests.iter().find(|quest| quest.id == quest_id)
    }

    /// Looks up a quest by id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::QuestNotFound` if the id is unknown.
    pub fn require(&self, quest_id: &str) -> Result<&Quest, DomainError> {
        self.get(quest_id)
            .ok_or_else(|| DomainError::QuestNotFound(quest_id.to_owned()))
    }

    /// Quests in authored order.
    pub fn iter(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.quests.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }
}
