//! Repository trait definitions (ports).
//!
//! These traits define the listing and storage interface that the
//! infrastructure layer (hireboard-infra) implements. The core crate never
//! depends on any specific storage technology.

pub mod listing;
pub mod provider;
