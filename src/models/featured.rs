use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Admin-curated home-page selection: an ordered list of work ids.
///
/// At most [`FeaturedConfig::MAX`] entries, no duplicates; violating writes
/// are rejected wholesale. An empty or absent config falls back to the first
/// six works by stored order at read time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FeaturedConfig {
    #[serde(default)]
    pub ids: Vec<Uuid>,
}

impl FeaturedConfig {
    pub const FILE: &'static str = "featured-projects.json";
    pub const MAX: usize = 6;

    /// Validation applied before any write; the error text goes to the admin UI.
    pub fn validate(&self) -> Result<(), String> {
        if self.ids.len() > Self::MAX {
            return Err(format!(
                "At most {} featured projects are allowed",
                Self::MAX
            ));
        }
        let mut seen = std::collections::HashSet::new();
        for id in &self.ids {
            if !seen.insert(id) {
                return Err(format!("Duplicate featured project id: {}", id));
            }
        }
        Ok(())
    }
}
