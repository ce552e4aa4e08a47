use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::locale::{Locale, LocalizedText};
use crate::repository::Record;

/// Founders are listed in stored order and have no reorder operation.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Founder {
    pub id: Uuid,
    pub name: String,
    pub title: LocalizedText,
    pub about: LocalizedText,
    #[serde(default)]
    pub cv: Option<LocalizedText>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub imdb: Option<String>,
}

impl Founder {
    pub const FILE: &'static str = "founders.json";

    pub fn normalize(&mut self, default: Locale) {
        self.title.normalize(default);
        self.about.normalize(default);
        if let Some(cv) = &mut self.cv {
            cv.normalize(default);
        }
    }
}

impl Record for Founder {
    fn id(&self) -> Uuid {
        self.id
    }
}
