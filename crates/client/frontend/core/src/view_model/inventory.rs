//! Inventory ordering and weight classification.

use std::cmp::Ordering;

use player_data::InventoryItem;
use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};

/// Visual weight class of an inventory row.
///
/// - heavy: `weight > 5`
/// - medium: `2 < weight <= 5`
/// - light: `weight <= 2`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum WeightCategory {
    Light,
    Medium,
    Heavy,
}

impl WeightCategory {
    pub const HEAVY_ABOVE: f32 = 5.0;
    pub const MEDIUM_ABOVE: f32 = 2.0;

    pub fn from_weight(weight: f32) -> Self {
        if weight > Self::HEAVY_ABOVE {
            Self::Heavy
        } else if weight > Self::MEDIUM_ABOVE {
            Self::Medium
        } else {
            Self::Light
        }
    }
}

/// Client-side ordering of the inventory view.
///
/// Discriminants match the sort dropdown indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, FromRepr)]
#[repr(usize)]
pub enum SortMode {
    /// Order the items arrived in.
    #[default]
    #[strum(to_string = "Unsorted")]
    Unsorted = 0,
    #[strum(to_string = "Name")]
    ByName = 1,
    #[strum(to_string = "Quantity")]
    ByQuantityDesc = 2,
    #[strum(to_string = "Weight")]
    ByWeightDesc = 3,
}

impl SortMode {
    /// Map a dropdown index to a mode.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::from_repr(index)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Following mode, wrapping back to `Unsorted`.
    pub fn next(self) -> Self {
        let count = Self::iter().count();
        Self::from_repr((self.index() + 1) % count).unwrap_or_default()
    }

    /// Ordered view over `items`.
    ///
    /// The slice itself is never reordered. All orderings are stable, so
    /// equal keys keep their fetched order. `ByWeightDesc` places NaN
    /// weights last and treats `-0.0` and `0.0` as equal.
    pub fn apply(self, items: &[InventoryItem]) -> Vec<&InventoryItem> {
        let mut view: Vec<&InventoryItem> = items.iter().collect();

        match self {
            Self::Unsorted => {}
            // Ordinal comparison: "Zweihander" sorts before "axe".
            Self::ByName => view.sort_by(|a, b| a.item_name.cmp(&b.item_name)),
            Self::ByQuantityDesc => view.sort_by(|a, b| b.quantity.cmp(&a.quantity)),
            Self::ByWeightDesc => view.sort_by(|a, b| weight_desc(a.weight, b.weight)),
        }

        view
    }
}

/// Descending weight order with NaN after every number.
fn weight_desc(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
