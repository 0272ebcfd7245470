//! Song catalog search - queries a public catalog API and normalizes
//! results into our [`Song`](crate::model::Song) shape.
//!
//! Follows the same layering as the other external integrations:
//! - **DTOs** (`dto.rs`) - exact upstream response shapes
//! - **Adapter** (`adapter.rs`) - DTO to domain conversion
//! - **Client** (`client.rs`) - the HTTP call itself

pub mod dto;
mod adapter;
mod client;

pub use adapter::to_song;
pub use client::{CatalogClient, CatalogError};
