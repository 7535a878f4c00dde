//! Accounts domain layer: entities and their validation

pub mod entities;
