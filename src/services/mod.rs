//! Service layer for business logic.
//!
//! This module contains services that coordinate models and storage for the
//! outer surfaces (web API, CLI).

pub mod layouts;

pub use layouts::LayoutRepository;
