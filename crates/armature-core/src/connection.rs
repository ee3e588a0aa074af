//! Diagram connections (edges) between members.
//!
//! A [`Connection`] keeps the relationship kind exactly as it appeared in the
//! CSV. Validation against the fixed kind table is lazy: it happens when
//! [`Connection::edge`] resolves the draw instruction, not at load time.

use thiserror::Error;

use crate::{identifier::Id, relation::EdgeDraw, relation::RelationKind};

/// Errors raised when resolving a connection into an edge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    /// The kind is not one of the ten recognized relationship kinds.
    #[error("unknown relationship kind `{kind}`")]
    UnknownRelation { kind: String },

    /// Fewer than two participants were supplied.
    #[error("relationship needs two participants, found {found}")]
    MissingParticipants { found: usize },
}

/// One diagram edge, as loaded from the connections CSV.
///
/// Participants are kept in CSV order and may exceed two; only the first two
/// are meaningful to the binary style table (extras are carried but unused, a
/// preserved quirk of the format).
///
/// # Examples
///
/// ```
/// use armature_core::{Connection, Id};
///
/// let conn = Connection::new("inherits", vec![Id::new("Child"), Id::new("Parent")]);
/// let draw = conn.edge().unwrap();
/// // inherits draws supertype-first
/// assert_eq!(draw.source, Id::new("Parent"));
/// assert_eq!(draw.target, Id::new("Child"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    kind: String,
    participants: Vec<Id>,
}

impl Connection {
    /// Creates a connection with a raw kind and ordered participants.
    pub fn new(kind: impl Into<String>, participants: Vec<Id>) -> Self {
        Self {
            kind: kind.into(),
            participants,
        }
    }

    /// The raw relationship kind, unvalidated.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The ordered participant identifiers.
    pub fn participants(&self) -> &[Id] {
        &self.participants
    }

    /// Resolves this connection into a draw instruction.
    ///
    /// # Errors
    ///
    /// [`ConnectionError::UnknownRelation`] if the kind is not in the fixed
    /// table, [`ConnectionError::MissingParticipants`] if fewer than two
    /// participants are present.
    pub fn edge(&self) -> Result<EdgeDraw, ConnectionError> {
        let kind: RelationKind =
            self.kind
                .parse()
                .map_err(|()| ConnectionError::UnknownRelation {
                    kind: self.kind.clone(),
                })?;

        match self.participants[..] {
            [a, b, ..] => Ok(kind.draw(a, b)),
            _ => Err(ConnectionError::MissingParticipants {
                found: self.participants.len(),
            }),
        }
    }
}
