//! Armature core types and definitions.
//!
//! This crate provides the foundational types for CSV-driven class diagrams:
//!
//! - **Identifiers**: sanitized, string-interned node identifiers
//!   ([`identifier::Id`])
//! - **Markup**: escaping for record-label text ([`markup`] module)
//! - **Stereotypes**: role stereotypes carrying fill and border colors
//!   ([`stereotype::RoleStereotype`])
//! - **Members**: diagram nodes with labels and style attributes
//!   ([`member::Member`])
//! - **Connections**: diagram edges resolved through the fixed
//!   relationship-style table ([`connection::Connection`],
//!   [`relation::RelationKind`])
//!
//! Rendering is out of scope here; these types only describe what an exporter
//! hands to Graphviz.

pub mod connection;
pub mod identifier;
pub mod markup;
pub mod member;
pub mod relation;
pub mod stereotype;

pub use connection::{Connection, ConnectionError};
pub use identifier::{Id, sanitize};
pub use markup::escape_markup;
pub use member::{Member, StyleAttrs, StyleValue};
pub use relation::{EdgeDraw, RelationKind};
pub use stereotype::RoleStereotype;
