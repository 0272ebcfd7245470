//! Solid pod storage gateway - persists playlist records as Turtle
//! documents in the user's pod and reads prior checkpoints back.
//!
//! # Architecture
//!
//! - **Vocab** (`vocab.rs`) - the IRIs we read and write
//! - **Turtle** (`turtle.rs`) - minimal serialization and scanning
//! - **Document** (`document.rs`) - record to/from triples
//! - **Client** (`client.rs`) - discovery, container handling, reads/writes
//!
//! The namespace under `<root>/recommendations/` is append-only from this
//! module's perspective: it creates new documents, never edits or deletes.

pub mod turtle;
pub mod vocab;
mod client;
mod document;

pub use client::{Identity, PodClient, PodError, CONTAINER_NAME};
pub use document::{record_from_document, record_to_turtle};
