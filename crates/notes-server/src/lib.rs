//! notes-server: HTTP API server for the notes service
//!
//! This crate provides:
//! - REST endpoints for note CRUD and a health check
//! - Request body validation
//! - Request logging, request ids, CORS and panic recovery
//!
//! # Architecture
//!
//! The server is built on Axum. Handlers reach the notes through
//! [`AppState`], which holds a [`notes_store::NoteRepository`] built once at
//! startup. [`app::build_app`] assembles routes and the middleware stack.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_server::{app, config::ServerConfig, state::AppState};
//! use notes_store::MemoryStore;
//!
//! let config = ServerConfig::from_env()?;
//! let state = AppState::new(MemoryStore::new(), config);
//! let router = app::build_app(state);
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod validate;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig, ServerMode};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use notes_core;
pub use notes_store;
