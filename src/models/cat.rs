use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::locale::{Locale, LocalizedText};
use crate::repository::{Ordered, Record};

/// Office mascot. Keyed by `id` like every other entity; `name` is purely a
/// display attribute and never used for lookups.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Cat {
    pub id: Uuid,
    pub name: String,
    pub role: LocalizedText,
    pub about: LocalizedText,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub order: u32,
}

impl Cat {
    pub const FILE: &'static str = "cats.json";

    pub fn normalize(&mut self, default: Locale) {
        self.role.normalize(default);
        self.about.normalize(default);
    }
}

impl Record for Cat {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Ordered for Cat {
    fn order(&self) -> u32 {
        self.order
    }
    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}
