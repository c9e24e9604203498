//! School registry
//!
//! This module contains `School`, which owns every entity collection and
//! orchestrates cross-entity operations: grading, lessons, and the
//! parent/child bookkeeping.

pub mod school;

pub use school::School;
