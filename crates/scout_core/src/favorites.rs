use std::collections::HashSet;

use crate::Item;

/// Ordered list of favorited items, unique by id.
///
/// The only mutators are [`toggle`] and [`FavoritesSet::clear`]; everything
/// else reads.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesSet {
    items: Vec<Item>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from persisted items. Later duplicates of an id are dropped.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut seen = HashSet::new();
        let items = items
            .into_iter()
            .filter(|item| seen.insert(item.id.clone()))
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Which branch a toggle took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

impl ToggleOutcome {
    pub fn notice(self) -> &'static str {
        match self {
            ToggleOutcome::Added => "Added to favorites",
            ToggleOutcome::Removed => "Removed from favorites",
        }
    }
}

/// Membership test by id.
pub fn is_favorited(item: &Item, favorites: &FavoritesSet) -> bool {
    favorites.contains_id(&item.id)
}

/// Removes `item` by id if present, otherwise appends it.
///
/// Applying the same toggle twice restores the original membership.
pub fn toggle(item: &Item, favorites: FavoritesSet) -> (FavoritesSet, ToggleOutcome) {
    let mut items = favorites.items;
    let before = items.len();
    items.retain(|fav| fav.id != item.id);
    let outcome = if items.len() < before {
        ToggleOutcome::Removed
    } else {
        items.push(item.clone());
        ToggleOutcome::Added
    };
    (FavoritesSet { items }, outcome)
}

/// Pairs every row of a result list with its favorited flag.
pub fn mark_favorites<'a>(
    items: &'a [Item],
    favorites: &FavoritesSet,
) -> impl Iterator<Item = (&'a Item, bool)> + 'a {
    let ids: HashSet<String> = favorites.items.iter().map(|fav| fav.id.clone()).collect();
    items.iter().map(move |item| (item, ids.contains(&item.id)))
}
