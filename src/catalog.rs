use std::{collections::BTreeSet, path::Path};

use anyhow::Context as _;

use crate::{
    foundation::error::{AnimlibError, AnimlibResult},
    state::{Direction, Easing, FillMode, IterationCount},
};

/// Per-animation preview defaults. Missing keys fall back to the gallery-wide defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationDefaults {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
    pub iterations: IterationCount,
    pub direction: Direction,
    pub fill_mode: FillMode,
}

impl AnimationDefaults {
    pub const DURATION_MS: f64 = 700.0;
    pub const DELAY_MS: f64 = 0.0;
}

impl Default for AnimationDefaults {
    fn default() -> Self {
        Self {
            duration_ms: Self::DURATION_MS,
            delay_ms: Self::DELAY_MS,
            easing: Easing::Ease,
            iterations: IterationCount::Count(1),
            direction: Direction::Normal,
            fill_mode: FillMode::Both,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub class_name: String,
    pub keyframes_name: String,
    #[serde(default)]
    pub defaults: AnimationDefaults,
}

impl AnimationRecord {
    pub fn validate(&self) -> AnimlibResult<()> {
        if self.id.trim().is_empty() {
            return Err(AnimlibError::validation("animation id must be non-empty"));
        }
        if self.class_name.trim().is_empty() {
            return Err(AnimlibError::validation(format!(
                "animation '{}' has an empty className",
                self.id
            )));
        }
        if self.keyframes_name.trim().is_empty() {
            return Err(AnimlibError::validation(format!(
                "animation '{}' has an empty keyframesName",
                self.id
            )));
        }
        let d = &self.defaults;
        if !d.duration_ms.is_finite() || d.duration_ms <= 0.0 {
            return Err(AnimlibError::validation(format!(
                "animation '{}' default duration must be > 0",
                self.id
            )));
        }
        if !d.delay_ms.is_finite() || d.delay_ms < 0.0 {
            return Err(AnimlibError::validation(format!(
                "animation '{}' default delay must be >= 0",
                self.id
            )));
        }
        Ok(())
    }

    fn matches_query(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.tags.join(" ").to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }
}

/// Gallery search: optional free-text query plus optional category.
#[derive(Clone, Debug, Default)]
pub struct CatalogFilter {
    pub query: Option<String>,
    pub category: Option<String>, // None or "all" = every category
}

impl CatalogFilter {
    pub const ALL_CATEGORIES: &'static str = "all";

    pub fn matches(&self, record: &AnimationRecord) -> bool {
        if let Some(cat) = self.category.as_deref()
            && cat != Self::ALL_CATEGORIES
            && record.category != cat
        {
            return false;
        }

        let needle = self
            .query
            .as_deref()
            .map(|q| q.trim().to_lowercase())
            .unwrap_or_default();
        needle.is_empty() || record.matches_query(&needle)
    }
}

/// The static animation catalog, in file order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    records: Vec<AnimationRecord>,
}

impl Catalog {
    pub fn new(records: Vec<AnimationRecord>) -> Self {
        Self { records }
    }

    pub fn from_json_str(s: &str) -> AnimlibResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| AnimlibError::catalog(format!("parse catalog JSON: {e}")))
    }

    #[tracing::instrument]
    pub fn load(path: &Path) -> AnimlibResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read catalog '{}'", path.display()))?;
        let catalog: Self = serde_json::from_str(&s).map_err(|e| {
            AnimlibError::catalog(format!("parse catalog '{}': {e}", path.display()))
        })?;
        tracing::debug!(count = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn validate(&self) -> AnimlibResult<()> {
        let mut seen = BTreeSet::new();
        for record in &self.records {
            record.validate()?;
            if !seen.insert(record.id.as_str()) {
                return Err(AnimlibError::validation(format!(
                    "duplicate animation id '{}'",
                    record.id
                )));
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&AnimationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn filter<'a>(&'a self, filter: &CatalogFilter) -> Vec<&'a AnimationRecord> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }
}
