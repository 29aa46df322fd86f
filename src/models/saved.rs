use serde::{Deserialize, Serialize};

use crate::models::ParseConfig;

/// A meal plan as stored in the local library.
///
/// Only the raw generated text and its shape are kept; the parsed days are
/// rebuilt on every view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedMealPlan {
    pub name: String,
    pub raw_text: String,
    #[serde(flatten)]
    pub config: ParseConfig,
}

impl SavedMealPlan {
    pub fn new(name: impl Into<String>, raw_text: impl Into<String>, config: ParseConfig) -> Self {
        Self {
            name: name.into(),
            raw_text: raw_text.into(),
            config,
        }
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
