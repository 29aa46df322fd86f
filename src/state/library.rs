use std::collections::HashMap;
use std::fs;
use std::path::Path;

use strsim::jaro_winkler;
use tracing::debug;

use crate::error::{MealPlanError, Result};
use crate::models::SavedMealPlan;

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Saved meal plans, keyed by lowercase name.
pub struct PlanLibrary {
    plans: HashMap<String, SavedMealPlan>,
}

impl PlanLibrary {
    /// Create a library from a list of plans (later duplicates win).
    pub fn new(plans: Vec<SavedMealPlan>) -> Self {
        let mut map = HashMap::new();
        for plan in plans {
            map.insert(plan.key(), plan);
        }
        Self { plans: map }
    }

    /// Read the library file. A missing file is an empty library.
    ///
    /// Records sharing a name collapse to the last one. A record whose shape
    /// could never be parsed is rejected with its name.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no plan library yet");
            return Ok(Self::new(Vec::new()));
        }

        let plans: Vec<SavedMealPlan> = serde_json::from_str(&fs::read_to_string(path)?)?;
        for plan in &plans {
            plan.config.validate().map_err(|e| {
                MealPlanError::InvalidConfig(format!("saved plan '{}': {}", plan.name, e))
            })?;
        }
        Ok(Self::new(plans))
    }

    /// Write the library as pretty JSON, plans sorted by name.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(&self.to_plans())?;
        fs::write(path, json)?;
        debug!(path = %path.display(), plans = self.len(), "saved plan library");
        Ok(())
    }

    /// Get a plan by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&SavedMealPlan> {
        self.plans.get(&name.to_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.plans.contains_key(&name.to_lowercase())
    }

    /// Store a plan, returning the one it replaced.
    pub fn insert(&mut self, plan: SavedMealPlan) -> Option<SavedMealPlan> {
        self.plans.insert(plan.key(), plan)
    }

    /// Remove a plan by name (case-insensitive).
    pub fn remove(&mut self, name: &str) -> Result<SavedMealPlan> {
        self.plans
            .remove(&name.to_lowercase())
            .ok_or_else(|| MealPlanError::PlanNotFound(name.to_string()))
    }

    /// Plan names in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.plans.values().map(|p| p.name.as_str()).collect();
        names.sort_by_key(|n| n.to_lowercase());
        names
    }

    /// The saved plan whose name is most similar to `query`, if any is
    /// similar enough.
    pub fn closest_match(&self, query: &str) -> Option<&SavedMealPlan> {
        let query = query.to_lowercase();
        self.plans
            .iter()
            .map(|(key, plan)| (plan, jaro_winkler(key, &query)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(plan, _)| plan)
    }

    /// All plans for JSON serialization, sorted by name.
    pub fn to_plans(&self) -> Vec<SavedMealPlan> {
        let mut plans: Vec<SavedMealPlan> = self.plans.values().cloned().collect();
        plans.sort_by_key(|p| p.key());
        plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParseConfig;
    use tempfile::tempdir;

    fn sample_plans() -> Vec<SavedMealPlan> {
        vec![
            SavedMealPlan::new("Cutting Week", "Breakfast\nOats", ParseConfig::default()),
            SavedMealPlan::new(
                "Bulk Plan",
                "Lunch\nRice",
                ParseConfig::new(3, 4, 3200).unwrap(),
            ),
        ]
    }

    #[test]
    fn test_get_case_insensitive() {
        let library = PlanLibrary::new(sample_plans());
        assert!(library.get("cutting week").is_some());
        assert!(library.get("BULK PLAN").is_some());
        assert!(library.get("maintenance").is_none());
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let mut library = PlanLibrary::new(sample_plans());
        let old = library.insert(SavedMealPlan::new(
            "cutting WEEK",
            "Dinner\nFish",
            ParseConfig::default(),
        ));
        assert_eq!(old.unwrap().raw_text, "Breakfast\nOats");
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut library = PlanLibrary::new(sample_plans());
        assert!(library.remove("bulk plan").is_ok());
        assert!(matches!(
            library.remove("bulk plan"),
            Err(MealPlanError::PlanNotFound(_))
        ));
    }

    #[test]
    fn test_names_sorted() {
        let library = PlanLibrary::new(sample_plans());
        assert_eq!(library.names(), vec!["Bulk Plan", "Cutting Week"]);
    }

    #[test]
    fn test_closest_match() {
        let library = PlanLibrary::new(sample_plans());
        assert_eq!(library.closest_match("cuting wek").unwrap().name, "Cutting Week");
        assert!(library.closest_match("zzzz").is_none());
    }

    #[test]
    fn test_saved_shape_survives_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plans").join("library.json");

        let mut library = PlanLibrary::load(&path).unwrap();
        assert!(library.is_empty());
        library.insert(SavedMealPlan::new(
            "Bulk Plan",
            "===== Day 1 =====\nLunch\nRice Bowl",
            ParseConfig::new(3, 4, 3200).unwrap(),
        ));
        library.save(&path).unwrap();

        // The shape is stored flat next to the name and text.
        let json = std::fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"meals_per_day\": 4"));
        assert!(!json.contains("\"config\""));

        let reloaded = PlanLibrary::load(&path).unwrap();
        let plan = reloaded.get("bulk plan").unwrap();
        assert_eq!(plan.raw_text, "===== Day 1 =====\nLunch\nRice Bowl");
        assert_eq!(plan.config, ParseConfig::new(3, 4, 3200).unwrap());
    }

    #[test]
    fn test_load_keeps_last_record_per_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.json");
        std::fs::write(
            &path,
            r#"[
                {"name": "Week 1", "raw_text": "old", "days": 1, "meals_per_day": 2, "calories_per_day": 1800},
                {"name": "week 1", "raw_text": "new", "days": 2, "meals_per_day": 3, "calories_per_day": 2000}
            ]"#,
        )
        .unwrap();

        let library = PlanLibrary::load(&path).unwrap();
        assert_eq!(library.len(), 1);
        assert_eq!(library.get("WEEK 1").unwrap().raw_text, "new");
    }

    #[test]
    fn test_load_rejects_unparseable_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.json");
        std::fs::write(
            &path,
            r#"[{"name": "Broken", "raw_text": "x", "days": 0, "meals_per_day": 3, "calories_per_day": 2000}]"#,
        )
        .unwrap();

        match PlanLibrary::load(&path) {
            Err(MealPlanError::InvalidConfig(msg)) => assert!(msg.contains("Broken")),
            other => panic!("expected InvalidConfig, got {:?}", other.map(|l| l.len())),
        }
    }
}
