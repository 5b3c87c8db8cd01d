//! In-memory moderation queue for user-submitted restaurants.
//!
//! Records enter `pending` on submission and move to `approved` when an admin
//! approves them by name. Nothing is persisted; both lists start empty.

use crate::models::Restaurant;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Inner {
    pending: Vec<Restaurant>,
    approved: Vec<Restaurant>,
}

/// Shared handle to the pending and approved restaurant lists.
///
/// Both lists sit behind one lock so an approval's scan, removal and append
/// are observed as a single step.
#[derive(Debug, Clone, Default)]
pub struct ModerationStore {
    inner: Arc<RwLock<Inner>>,
}

impl ModerationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a restaurant for approval. Duplicate names are accepted.
    pub async fn submit(&self, restaurant: Restaurant) {
        self.inner.write().await.pending.push(restaurant);
    }

    /// Move the first pending restaurant called `name` to the approved list.
    ///
    /// Returns the approved record, or `None` when nothing pending matches.
    pub async fn approve(&self, name: &str) -> Option<Restaurant> {
        let mut inner = self.inner.write().await;
        let position = inner.pending.iter().position(|r| r.name == name)?;
        let restaurant = inner.pending.remove(position);
        inner.approved.push(restaurant.clone());
        Some(restaurant)
    }

    pub async fn list_approved(&self) -> Vec<Restaurant> {
        self.inner.read().await.approved.clone()
    }

    pub async fn list_pending(&self) -> Vec<Restaurant> {
        self.inner.read().await.pending.clone()
    }

    /// `(pending, approved)` sizes.
    pub async fn counts(&self) -> (usize, usize) {
        let inner = self.inner.read().await;
        (inner.pending.len(), inner.approved.len())
    }
}
