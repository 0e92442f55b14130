//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every roster operation, whatever UI sits on top.
//!
//! It dispatches to `commands::*`, turns raw id strings into [`StudentId`]s
//! and hands back `Result<CmdResult>`. It holds no business logic and does
//! no I/O.
//!
//! ## Ownership
//!
//! `RosterApi<S: StudentStore>` owns its store and its course catalog.
//! Mutating calls take `&mut self`, reads take `&self`, so a client can never
//! interleave a read with a half-applied write.
//!
//! ## Failures
//!
//! A failing call leaves the roster exactly as it was. Against the in-memory
//! store a well-formed call can fail in two ways:
//! [`RosterError::StudentNotFound`](crate::error::RosterError::StudentNotFound)
//! from `update_student`, and
//! [`RosterError::Api`](crate::error::RosterError::Api) from `create_student`
//! once no larger id is left.
//!
//! Creating or editing a student with a course outside the catalog succeeds
//! with a warning message: stats only count catalog courses.

use crate::catalog::CourseCatalog;
use crate::commands;
use crate::error::Result;
use crate::model::{NewStudent, StudentId, StudentPatch};
use crate::store::StudentStore;

pub struct RosterApi<S: StudentStore> {
    store: S,
    catalog: CourseCatalog,
}

impl<S: StudentStore> RosterApi<S> {
    pub fn new(store: S, catalog: CourseCatalog) -> Self {
        Self { store, catalog }
    }

    pub fn list_students(&self, filter: &StudentFilter) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn get_student(&self, id: &str) -> Result<CmdResult> {
        commands::get::run(&self.store, &parse_id(id))
    }

    pub fn create_student(&mut self, student: NewStudent) -> Result<CmdResult> {
        commands::create::run(&mut self.store, &self.catalog, student)
    }

    pub fn update_student(&mut self, id: &str, patch: StudentPatch) -> Result<CmdResult> {
        commands::update::run(&mut self.store, &self.catalog, &parse_id(id), patch)
    }

    pub fn delete_student(&mut self, id: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, &parse_id(id))
    }

    pub fn list_courses(&self) -> Result<CmdResult> {
        commands::courses::run(&self.catalog)
    }

    pub fn search(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store, &self.catalog)
    }

    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn parse_id(raw: &str) -> StudentId {
    StudentId::new(raw.trim())
}

pub use crate::stats::{compute_stats, CourseStat, StudentStats};
pub use commands::list::{CourseFilter, StudentFilter};
pub use commands::{CmdMessage, CmdResult, MessageLevel};
