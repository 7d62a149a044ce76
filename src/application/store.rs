// SPDX-License-Identifier: MPL-2.0
//! Gallery store: current position, description visibility, and change
//! notification.
//!
//! The store is the only holder of mutable gallery state. Every operation is
//! total: the collection is never empty and indices move with modular
//! arithmetic, so `current_index` is always valid. Navigation hides the
//! description; toggling never moves the index.

use crate::application::projection::{self, GalleryView, ProjectionOptions};
use crate::domain::gallery::{Collection, Item};
use std::fmt;
use std::sync::Arc;

/// Mutable state of one viewing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    current_index: usize,
    description_visible: bool,
}

impl ViewState {
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn description_visible(&self) -> bool {
        self.description_visible
    }
}

/// What an operation did, delivered to subscribers after the state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// `next()` or `previous()` ran. `from == to` for single-item collections.
    Navigated { from: usize, to: usize },
    DescriptionToggled { visible: bool },
}

/// Handle returned by [`GalleryStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(Change, &ViewState)>;

pub struct GalleryStore {
    collection: Arc<Collection>,
    state: ViewState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for GalleryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryStore")
            .field("len", &self.collection.len())
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl GalleryStore {
    /// Creates a store positioned on the first item with the description hidden.
    #[must_use]
    pub fn new(collection: impl Into<Arc<Collection>>) -> Self {
        Self {
            collection: collection.into(),
            state: ViewState::default(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Moves to the following item, wrapping from the last to the first.
    pub fn next(&mut self) {
        let from = self.state.current_index;
        let to = (from + 1) % self.collection.len();
        self.navigate(from, to);
    }

    /// Moves to the preceding item, wrapping from the first to the last.
    pub fn previous(&mut self) {
        let len = self.collection.len();
        let from = self.state.current_index;
        let to = (from + len - 1) % len;
        self.navigate(from, to);
    }

    /// Flips description visibility.
    ///
    /// This is plain negation and also runs for items without a description;
    /// the view simply offers no control for those.
    pub fn toggle_description(&mut self) {
        self.state.description_visible = !self.state.description_visible;
        let visible = self.state.description_visible;
        self.notify(Change::DescriptionToggled { visible });
    }

    #[must_use]
    pub fn current_item(&self) -> &Item {
        &self.collection[self.state.current_index]
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.state
    }

    #[must_use]
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    /// Derives the render description for the current state.
    #[must_use]
    pub fn project(&self, options: &ProjectionOptions) -> GalleryView<'_> {
        projection::project(&self.collection, &self.state, options)
    }

    /// Registers a listener called after every state change, in
    /// subscription order.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(Change, &ViewState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn navigate(&mut self, from: usize, to: usize) {
        self.state.current_index = to;
        self.state.description_visible = false;
        self.notify(Change::Navigated { from, to });
    }

    fn notify(&mut self, change: Change) {
        let state = self.state;
        for (_, listener) in &mut self.listeners {
            listener(change, &state);
        }
    }
}
