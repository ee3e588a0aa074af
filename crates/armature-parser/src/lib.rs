//! CSV loading for armature class diagrams.
//!
//! Two tabular inputs feed a diagram: a members file
//! (`DisplayName, Annotation, Stereotype`) and a connections file
//! (`RelationshipKind, Participant1, Participant2, ...`), each with an
//! optional header row. This crate parses the raw CSV text into records
//! ([`csv`] module) and turns rows into [`Member`](armature_core::Member) and
//! [`Connection`](armature_core::Connection) values ([`loader`] module).
//!
//! Relationship kinds are *not* validated here; an unknown kind only fails
//! once the connection is resolved into an edge.

pub mod csv;
pub mod error;
pub mod loader;

pub use csv::{Record, parse_records};
pub use error::ParseError;
pub use loader::{CsvOptions, parse_connections, parse_members};
