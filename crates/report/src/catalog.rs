//! Food item catalog: product code -> name and shelf life.

use std::collections::BTreeMap;

use serde::Serialize;

use larder_core::ProductCode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodItem {
    pub code: ProductCode,
    pub name: String,
    /// Days from receipt until a batch of this item expires.
    pub shelf_life: u32,
}

/// Known food items, ordered by product code.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: BTreeMap<ProductCode, FoodItem>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item. The first definition of a code wins; returns
    /// `false` if the code was already known.
    pub fn insert(&mut self, item: FoodItem) -> bool {
        if self.items.contains_key(&item.code) {
            return false;
        }
        self.items.insert(item.code.clone(), item);
        true
    }

    pub fn get(&self, code: &ProductCode) -> Option<&FoodItem> {
        self.items.get(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
