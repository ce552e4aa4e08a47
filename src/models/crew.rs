use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::locale::{Locale, LocalizedText};
use crate::repository::{Ordered, Record};

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CrewMember {
    pub id: Uuid,
    pub name: String,
    pub title: LocalizedText,
    pub department: LocalizedText,
    #[serde(default)]
    pub cv: Option<LocalizedText>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub order: u32,
}

impl CrewMember {
    pub const FILE: &'static str = "crew.json";

    pub fn normalize(&mut self, default: Locale) {
        self.title.normalize(default);
        self.department.normalize(default);
        if let Some(cv) = &mut self.cv {
            cv.normalize(default);
        }
    }
}

impl Record for CrewMember {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Ordered for CrewMember {
    fn order(&self) -> u32 {
        self.order
    }
    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}
