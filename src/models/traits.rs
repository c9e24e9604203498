//! Trait definitions for domain models
//!
//! Every entity stored in a school implements `EntityModel`, which gives
//! collections a typed handle and a unique name to index by.

use crate::error::EntityKind;
use std::fmt::Debug;
use std::hash::Hash;

/// A trait that all school entities implement.
///
/// The identifier is a typed handle that doubles as the entity's position in
/// its collection, so it converts to and from `usize`.
pub trait EntityModel: Debug {
    /// The type of identifier used for this model
    type Id: Copy + Eq + Hash + Debug + From<usize> + Into<usize>;

    /// Kind reported in lookup errors
    const KIND: EntityKind;

    /// Get the handle of this entity
    fn id(&self) -> Self::Id;

    /// Get the unique name of this entity
    fn name(&self) -> &str;
}
