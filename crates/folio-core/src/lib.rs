//! # folio-core
//!
//! Content types, scalar coercion, default content, and the document
//! normalizer for Folio.
//!
//! This crate holds everything about portfolio content that does not touch a
//! store:
//! - Canonical record structs for every content kind (home, about, resume,
//!   skills, blog, projects)
//! - The raw document model (`FieldValue`, `Document`, `StoredDocument`)
//! - Coercion of legacy list and date encodings
//! - The default content registry and sample listings
//! - Declarative field-spec tables and the one generic normalizer driven by
//!   them
//! - Slug helpers shared by readers and writers

pub mod coerce;
pub mod defaults;
pub mod document;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod fields;
pub mod normalize;
pub mod slug;
