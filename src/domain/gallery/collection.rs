// SPDX-License-Identifier: MPL-2.0
//! Fixed, ordered, non-empty list of gallery items.

use super::item::{Item, ItemId};
use crate::error::{Error, Result};
use std::collections::HashSet;

/// The gallery's items, in display order.
///
/// A `Collection` cannot be empty and offers no mutation once built, so any
/// index in `0..len()` stays valid for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    items: Vec<Item>,
}

impl Collection {
    /// Builds a collection from items in display order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] when `items` is empty and
    /// [`Error::DuplicateItemId`] when two items share an id.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyCollection);
        }

        let mut seen: HashSet<ItemId> = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(Error::DuplicateItemId(item.id().value()));
            }
        }

        Ok(Self { items })
    }

    /// Number of items, always at least one.
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::ops::Index<usize> for Collection {
    type Output = Item;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::ImageRef;

    fn item(id: u32) -> Item {
        Item::new(
            ItemId::new(id),
            ImageRef::new(format!("{id}.svg")),
            format!("Item {id}"),
            "Maker",
            "2024",
        )
    }

    #[test]
    fn empty_collection_is_rejected() {
        assert_eq!(Collection::new(Vec::new()), Err(Error::EmptyCollection));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Collection::new(vec![item(1), item(2), item(1)]);
        assert_eq!(result, Err(Error::DuplicateItemId(1)));
    }

    #[test]
    fn order_is_preserved() {
        let collection = Collection::new(vec![item(3), item(1), item(2)]).unwrap();
        let ids: Vec<u32> = collection.iter().map(|i| i.id().value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(collection[0].id(), ItemId::new(3));
    }

    #[test]
    fn single_item_collection_is_valid() {
        let collection = Collection::new(vec![item(1)]).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!((&collection).into_iter().count(), 1);
    }
}
