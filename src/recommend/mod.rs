//! LLM recommendation module - sends prompts to a selectable backend and
//! turns the reply text into song stubs.
//!
//! # Architecture
//!
//! - **Backend** (`backend.rs`) - closed enum over the known LLM services;
//!   adding a backend is a new variant, not a new conditional
//! - **DTOs** (`dto.rs`) - per-backend response shapes
//! - **Client** (`client.rs`) - one outbound POST per request, normalized
//!   to plain text
//! - **Parser** (`parser.rs`) - pure text-to-songs conversion; never fails

pub mod dto;
pub mod parser;
mod backend;
mod client;

pub use backend::Backend;
pub use client::{RecommendClient, RecommendError};
pub use parser::parse;
