//! The fixed relationship-kind table and its edge styles.
//!
//! Ten relationship kinds are recognized. Each maps an ordered participant
//! pair `(a, b)` to a draw instruction: the endpoint order actually handed to
//! Graphviz plus the arrow and line attributes. Some kinds draw their arrow
//! at the tail end (`dir=back`), and `inherits`/`realizes` additionally swap
//! the endpoints so the triangle sits on the supertype.

use std::{fmt, str::FromStr};

use crate::{
    identifier::Id,
    member::{StyleAttrs, StyleValue},
};

/// A resolved edge: the draw-order endpoints and the edge style attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeDraw {
    /// Graphic source node (may differ from the CSV participant order).
    pub source: Id,
    /// Graphic target node.
    pub target: Id,
    /// Edge attributes in emission order.
    pub attrs: StyleAttrs,
}

/// The closed set of relationship kinds.
///
/// Keeping this a closed enum (rather than a dynamic table) makes the
/// kind-to-style mapping exhaustiveness-checked at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    Calls,
    Creates,
    Uses,
    Has,
    References,
    Inherits,
    Realizes,
    Aggregates,
    Composites,
    Associates,
}

impl RelationKind {
    /// All recognized kind names, as they appear in the connections CSV.
    pub const NAMES: [&'static str; 10] = [
        "calls",
        "creates",
        "uses",
        "has",
        "references",
        "inherits",
        "realizes",
        "aggregates",
        "composites",
        "associates",
    ];

    /// All kinds, in table order.
    pub const ALL: [RelationKind; 10] = [
        RelationKind::Calls,
        RelationKind::Creates,
        RelationKind::Uses,
        RelationKind::Has,
        RelationKind::References,
        RelationKind::Inherits,
        RelationKind::Realizes,
        RelationKind::Aggregates,
        RelationKind::Composites,
        RelationKind::Associates,
    ];

    /// Resolves the draw instruction for participants `(a, b)`.
    ///
    /// The returned endpoints are in *draw* order: `inherits` and `realizes`
    /// reverse them so the hollow triangle attaches to the supertype, while
    /// the diamond-tailed kinds keep `(a, b)` and express direction through
    /// `dir=back`.
    pub fn draw(&self, a: Id, b: Id) -> EdgeDraw {
        use StyleValue::{Ident, Quoted};

        let (source, target, attrs): (Id, Id, StyleAttrs) = match self {
            RelationKind::Calls => (
                a,
                b,
                vec![
                    ("arrowhead", Ident("vee")),
                    ("style", Ident("dashed")),
                    ("label", Quoted("calls".to_string())),
                ],
            ),
            RelationKind::Creates => (
                a,
                b,
                vec![
                    ("dir", Ident("back")),
                    ("arrowtail", Ident("diamond")),
                    ("label", Quoted("creates".to_string())),
                ],
            ),
            RelationKind::Uses => (
                a,
                b,
                vec![
                    ("arrowhead", Ident("vee")),
                    ("style", Ident("dashed")),
                    ("label", Quoted("uses".to_string())),
                ],
            ),
            RelationKind::Has => (
                a,
                b,
                vec![
                    ("dir", Ident("back")),
                    ("arrowtail", Ident("odiamond")),
                    ("label", Quoted("has".to_string())),
                ],
            ),
            RelationKind::References => (
                a,
                b,
                vec![
                    ("arrowhead", Ident("vee")),
                    ("label", Quoted("references".to_string())),
                ],
            ),
            RelationKind::Inherits => (
                b,
                a,
                vec![("dir", Ident("back")), ("arrowtail", Ident("empty"))],
            ),
            RelationKind::Realizes => (
                b,
                a,
                vec![
                    ("dir", Ident("back")),
                    ("style", Ident("dotted")),
                    ("arrowtail", Ident("empty")),
                ],
            ),
            RelationKind::Aggregates => (
                a,
                b,
                vec![("dir", Ident("back")), ("arrowtail", Ident("diamond"))],
            ),
            RelationKind::Composites => (
                a,
                b,
                vec![("dir", Ident("back")), ("arrowtail", Ident("odiamond"))],
            ),
            RelationKind::Associates => (
                a,
                b,
                vec![("arrowhead", Ident("none")), ("arrowtail", Ident("none"))],
            ),
        };

        EdgeDraw {
            source,
            target,
            attrs,
        }
    }
}

impl FromStr for RelationKind {
    type Err = ();

    /// Parses a kind name exactly as it appears in the connections CSV.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "calls" => Ok(RelationKind::Calls),
            "creates" => Ok(RelationKind::Creates),
            "uses" => Ok(RelationKind::Uses),
            "has" => Ok(RelationKind::Has),
            "references" => Ok(RelationKind::References),
            "inherits" => Ok(RelationKind::Inherits),
            "realizes" => Ok(RelationKind::Realizes),
            "aggregates" => Ok(RelationKind::Aggregates),
            "composites" => Ok(RelationKind::Composites),
            "associates" => Ok(RelationKind::Associates),
            _ => Err(()),
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RelationKind::Calls => "calls",
            RelationKind::Creates => "creates",
            RelationKind::Uses => "uses",
            RelationKind::Has => "has",
            RelationKind::References => "references",
            RelationKind::Inherits => "inherits",
            RelationKind::Realizes => "realizes",
            RelationKind::Aggregates => "aggregates",
            RelationKind::Composites => "composites",
            RelationKind::Associates => "associates",
        };
        write!(f, "{}", name)
    }
}
