//! API endpoint integration tests
//!
//! Drives the fully composed router (CORS + tracing layers included)
//! against an in-memory SQLite store.

#![allow(dead_code)]

mod accounts;
mod common;
mod jobs;
mod scenario;
