//! Aggregate root trait for state-based domain models.

use chrono::{DateTime, Utc};

use crate::entity::Entity;

/// Aggregate root: the single entry point to a consistency boundary.
///
/// Aggregates are mutated in place through their own guarded methods and are
/// **not** internally synchronized. Callers must serialize access to one
/// instance (own it in a single task, or lock it by id); `&mut self` on every
/// mutation makes the compiler enforce this within a process.
pub trait AggregateRoot: Entity {
    /// When the aggregate was first created. Never changes.
    fn created_at(&self) -> DateTime<Utc>;

    /// When the aggregate last changed successfully.
    fn updated_at(&self) -> DateTime<Utc>;
}
