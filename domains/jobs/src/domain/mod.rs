//! Jobs domain layer

pub mod entities;
