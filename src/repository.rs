use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An entity with a server-generated identity.
pub trait Record {
    fn id(&self) -> Uuid;
}

/// An entity with an explicit display position within its collection.
pub trait Ordered: Record {
    fn order(&self) -> u32;
    fn set_order(&mut self, order: u32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ReorderRequest {
    pub id: Uuid,
    pub direction: Direction,
}

#[derive(Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct OrderEntry {
    pub id: Uuid,
    pub order: u32,
}

pub fn find<T: Record>(items: &[T], id: Uuid) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

pub fn find_mut<T: Record>(items: &mut [T], id: Uuid) -> Option<&mut T> {
    items.iter_mut().find(|item| item.id() == id)
}

/// Remove by id; `false` when nothing matched.
pub fn remove<T: Record>(items: &mut Vec<T>, id: Uuid) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

/// The `order` a freshly created record is appended with.
pub fn next_order<T: Ordered>(items: &[T]) -> u32 {
    items.len() as u32 + 1
}

/// Renumber every item to its 1-based position.
pub fn renumber<T: Ordered>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_order(index as u32 + 1);
    }
}

/// Move one record a single position up or down, clamped at the boundaries
/// (a boundary move is a no-op), then renumber the whole collection so that
/// `order` values are exactly `1..=N`. Returns the resulting mapping, or
/// `None` when the id is not present.
pub fn reorder<T: Ordered>(
    items: &mut Vec<T>,
    id: Uuid,
    direction: Direction,
) -> Option<Vec<OrderEntry>> {
    let index = items.iter().position(|item| item.id() == id)?;
    let new_index = match direction {
        Direction::Up => index.saturating_sub(1),
        Direction::Down => (index + 1).min(items.len() - 1),
    };
    if new_index != index {
        let item = items.remove(index);
        items.insert(new_index, item);
    }
    renumber(items);
    Some(
        items
            .iter()
            .map(|item| OrderEntry {
                id: item.id(),
                order: item.order(),
            })
            .collect(),
    )
}
