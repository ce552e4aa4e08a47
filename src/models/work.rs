use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::locale::{Locale, LocalizedText};
use crate::repository::{Ordered, Record};
use crate::slug::slugify;

/// A production in the studio's portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Work {
    pub id: Uuid,
    pub title: String,
    pub description: LocalizedText,
    #[serde(default)]
    pub prod_year: Option<i32>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub trailer: Option<String>,
    /// Ordered gallery image paths.
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub client: Option<String>,
}

impl Work {
    pub const FILE: &'static str = "works.json";

    pub fn slug(&self) -> String {
        slugify(&self.title)
    }

    pub fn normalize(&mut self, default: Locale) {
        self.description.normalize(default);
    }
}

impl Record for Work {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Ordered for Work {
    fn order(&self) -> u32 {
        self.order
    }
    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

/// Display order: explicit `order` first, newer productions first among
/// records that share an `order` value.
pub fn sort_for_display(works: &mut [Work]) {
    works.sort_by(|a, b| {
        a.order
            .cmp(&b.order)
            .then_with(|| b.prod_year.cmp(&a.prod_year))
    });
}
