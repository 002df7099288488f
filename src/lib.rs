//! Petsy: a small HTTP service that keeps pet records in process memory.
//!
//! The interesting part is [`infrastructure::in_memory_pet_repository`], a
//! store that hands out monotonic ids and serializes writes behind a single
//! lock. Everything else is a thin axum adapter around it:
//!
//! - **`domain`**: pet snapshots, patches, filters and the error taxonomy.
//! - **`application`**: request DTOs, validation and the `PetService`.
//! - **`interface`**: HTTP handlers and the `{"detail": ...}` error body.
//! - **`app`**: router and tower-http layers.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod state;

pub use app::build_router;
