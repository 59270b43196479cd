//! # The Entity Store
//!
//! A normalized, insertion-ordered collection of [`Order`]s, keyed by id.
//!
//! The shape follows the classic entity-adapter layout: a `HashMap` from id to
//! record for O(1) lookup, plus a `Vec` of ids preserving insertion order for
//! iteration. Invariant: the id vector and the map always hold exactly the
//! same set of ids.
//!
//! The store is the single source of truth. Every derived view in
//! [`crate::views`] is a pure function over [`OrderStore::iter`]; nothing is
//! written back.

use crate::model::{Order, OrderStatus, OrderUpdate};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Errors from direct store operations. Both are local and recoverable; a
/// failed operation leaves the store untouched.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// An order with this id is already present.
    #[error("duplicate order id: {0}")]
    DuplicateId(String),

    /// No order with this id exists.
    #[error("order not found: {0}")]
    NotFound(String),
}

/// Id-keyed order collection with stable insertion order.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    entities: HashMap<String, Order>,
    ids: Vec<String>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one order at the end of the sequence.
    ///
    /// Fails with [`StoreError::DuplicateId`] when the id is already taken,
    /// leaving the store unchanged.
    pub fn add_one(&mut self, order: Order) -> Result<(), StoreError> {
        if self.entities.contains_key(&order.id) {
            return Err(StoreError::DuplicateId(order.id));
        }
        self.ids.push(order.id.clone());
        self.entities.insert(order.id.clone(), order);
        Ok(())
    }

    /// Inserts a batch, applying [`OrderStore::add_one`] semantics per entry.
    ///
    /// A duplicate (against existing state or earlier entries of the same
    /// batch) only skips that entry; the rest of the batch still lands.
    /// Returns the number of orders actually accepted.
    pub fn add_many(&mut self, orders: Vec<Order>) -> usize {
        let mut accepted = 0;
        for order in orders {
            match self.add_one(order) {
                Ok(()) => accepted += 1,
                Err(err) => debug!(%err, "skipping order in batch"),
            }
        }
        accepted
    }

    /// Replaces the whole collection with `orders` (duplicates within the
    /// batch are skipped like in [`OrderStore::add_many`]).
    pub fn set_all(&mut self, orders: Vec<Order>) -> usize {
        self.remove_all();
        self.add_many(orders)
    }

    /// Merges `update` into the order with `id`, returning the merged record.
    pub fn update_one(&mut self, id: &str, update: OrderUpdate) -> Result<Order, StoreError> {
        let order = self
            .entities
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        if let Some(customer) = update.customer {
            order.customer = customer;
        }
        if let Some(amount) = update.amount {
            order.amount = amount;
        }
        if let Some(status) = update.status {
            order.status = status;
        }
        Ok(order.clone())
    }

    /// Sets just the status field, returning the updated record.
    pub fn set_status(&mut self, id: &str, status: OrderStatus) -> Result<Order, StoreError> {
        self.update_one(
            id,
            OrderUpdate {
                status: Some(status),
                ..OrderUpdate::default()
            },
        )
    }

    /// Removes and returns the order with `id`.
    pub fn remove_one(&mut self, id: &str) -> Result<Order, StoreError> {
        let order = self
            .entities
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.ids.retain(|existing| existing != id);
        Ok(order)
    }

    /// Drops every order.
    pub fn remove_all(&mut self) {
        self.entities.clear();
        self.ids.clear();
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.entities.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entities.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates orders in insertion order.
    ///
    /// The iterator borrows the store, is finite, and can be restarted by
    /// calling `iter()` again; iteration has no side effects.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.ids.iter().map(|id| &self.entities[id])
    }
}
