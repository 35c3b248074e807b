//! Button Studio Library
//!
//! This library provides the widget layout core of the Button Studio CSS
//! button designer: the widget and layout models, the placement engine, the
//! layout store with its key-value persistence, the render adapter, and the
//! server-side layout repository with its web API.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod models;
pub mod render;
pub mod services;
pub mod storage;
pub mod store;
#[cfg(feature = "web")]
pub mod web;
