// regenchoice-core/src/lib.rs

// 1. Documentation
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (traits)
// The persistence contract (QuestionStore).
pub mod ports;

// 2. Domain (core rules)
// Question model, factory, validator, project settings.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (adapters)
// Config files, JSON file store, atomic writes.
pub mod infrastructure;

// 4. Application (use cases)
// Question bank session, form binding, open/save/import/export.
pub mod application;

// --- GLOBAL ERROR ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::RegenError;
