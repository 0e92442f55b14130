//! # Storage Layer
//!
//! [`StudentStore`] is the seam between the command layer and wherever
//! student records live. The only implementation is
//! [`memory::InMemoryStore`]: records exist for the lifetime of the process.
//!
//! ## Lifecycle
//!
//! A store is an ordinary value. It is built once when a session starts
//! (see [`crate::init`]) and handed to [`crate::api::RosterApi`], which owns
//! it from then on. Tests build a fresh store each, so nothing leaks between
//! them.
//!
//! ## Contract
//!
//! - `list` preserves insertion order.
//! - `get` reports absence as `None`; it is not an error.
//! - `create` assigns the id; any id-like data in the input is ignored.
//! - `update` is a shallow merge and fails with
//!   [`RosterError::StudentNotFound`](crate::error::RosterError::StudentNotFound)
//!   for an unknown id, leaving the store unchanged.
//! - `delete` of an unknown id is a no-op.
//!
//! Stores never validate. That is the job of [`crate::validation`].

use crate::error::Result;
use crate::model::{NewStudent, StudentId, StudentPatch, StudentRecord};

pub mod memory;

pub trait StudentStore {
    /// All records, oldest first.
    fn list(&self) -> Result<Vec<StudentRecord>>;

    fn get(&self, id: &StudentId) -> Result<Option<StudentRecord>>;

    /// Stores a new record and returns it with its id and search terms filled.
    fn create(&mut self, student: NewStudent) -> Result<StudentRecord>;

    /// Merges `patch` into the record and returns the merged record.
    fn update(&mut self, id: &StudentId, patch: StudentPatch) -> Result<StudentRecord>;

    /// Removes the record if present. Returns the id either way.
    fn delete(&mut self, id: &StudentId) -> Result<StudentId>;
}
