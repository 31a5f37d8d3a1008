// Copyright 2025 Cowboy AI, LLC.

//! Formal domain vocabulary
//!
//! Every domain type in the crate carries one of these marker traits:
//! - **ValueObject**: immutable, compared by its attributes (e.g. `Address`)
//! - **DomainEntity**: identified by an id that outlives its attributes
//!   (e.g. `User`, `Order`, `Customer`)

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Root trait for all domain concepts
pub trait DomainConcept: Send + Sync + 'static {}

/// Value Objects are immutable and compared by value
///
/// # Properties
/// - Immutable after creation
/// - No identity beyond their attributes
/// - Own the validation of their attributes
pub trait ValueObject: DomainConcept + Clone + PartialEq + Eq + Debug {}

/// Domain Entities have identity beyond their attributes
pub trait DomainEntity: DomainConcept {
    /// The type of ID for this entity
    type Id: Copy + Eq + Hash + Debug + Display;

    /// Get the entity's identifier
    fn id(&self) -> Self::Id;
}
