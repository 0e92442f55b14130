//! # Roster Architecture
//!
//! Roster is a **UI-agnostic student-management library**: a roster of
//! student records, a course catalog, prefix search and dashboard
//! statistics. The `roster` binary is one client of it, an interactive
//! terminal session; a web dashboard would be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads session input, validates forms, prints results     │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (raw id strings → StudentId)           │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic per operation                             │
//! │  - Search, filtering and stats via search.rs / stats.rs     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StudentStore trait                                       │
//! │  - InMemoryStore, built once per session and injected       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes and returns plain Rust values, never
//! prints, and never exits the process. Diagnostics go through `tracing`;
//! installing a subscriber is the client's business.
//!
//! ## Validation lives at the edge
//!
//! The store accepts whatever it is given. Form rules (required name,
//! well-formed email, 10-digit phone...) are in [`validation`] and are
//! applied by clients before calling the API.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: Core data types (`StudentRecord`, `NewStudent`, `StudentPatch`, `Course`)
//! - [`search`]: Search-term derivation, prefix matching, stale-response guard
//! - [`stats`]: Dashboard statistics
//! - [`catalog`]: The course catalog
//! - [`validation`]: Form-level input rules
//! - [`config`]: Configuration management
//! - [`init`]: Session bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod search;
pub mod stats;
pub mod store;
pub mod validation;
