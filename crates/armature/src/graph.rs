//! Graph assembly: members and connections into a `dot-structures` graph.
//!
//! This is the bridge between the core model and Graphviz. Each member
//! becomes one node statement (identifier, record label, style attributes)
//! and each connection one directed edge statement with its resolved draw
//! instruction. No validation happens beyond what the model types enforce;
//! duplicate member identifiers simply emit duplicate node statements and
//! Graphviz keeps the last definition.

use dot_structures::{Attribute, Edge, EdgeTy, Graph, Id as DotId, Node, NodeId, Stmt, Vertex};
use log::debug;

use armature_core::{Connection, ConnectionError, Member, StyleValue};

use crate::config::StyleConfig;

/// Build a named directed graph from the model.
///
/// Graph-level `bgcolor` and `rankdir` statements come from the style
/// configuration when set.
///
/// # Errors
///
/// [`ConnectionError`] when a connection cannot be resolved into an edge
/// (unknown relationship kind, missing participants). This is where lazy
/// kind validation finally bites.
pub(crate) fn build_graph(
    name: &str,
    members: &[Member],
    connections: &[Connection],
    style: &StyleConfig,
) -> Result<Graph, ConnectionError> {
    let mut stmts = Vec::with_capacity(members.len() + connections.len() + 2);

    if let Some(color) = style.background_color() {
        stmts.push(Stmt::Attribute(Attribute(plain("bgcolor"), quoted(color))));
    }
    if let Some(rankdir) = style.rankdir() {
        stmts.push(Stmt::Attribute(Attribute(
            plain("rankdir"),
            plain(rankdir.as_str()),
        )));
    }

    for member in members {
        let mut attributes = vec![Attribute(plain("label"), DotId::Html(member.label()))];
        attributes.extend(
            member
                .attributes()
                .into_iter()
                .map(|(key, value)| Attribute(plain(key), style_value(&value))),
        );
        stmts.push(Stmt::Node(Node {
            id: node_id(member.id()),
            attributes,
        }));
    }

    for connection in connections {
        let draw = connection.edge()?;
        let attributes = draw
            .attrs
            .iter()
            .map(|(key, value)| Attribute(plain(key), style_value(value)))
            .collect();
        stmts.push(Stmt::Edge(Edge {
            ty: EdgeTy::Pair(
                Vertex::N(node_id(draw.source)),
                Vertex::N(node_id(draw.target)),
            ),
            attributes,
        }));
    }

    debug!(nodes = members.len(), edges = connections.len(); "Graph assembled");

    Ok(Graph::DiGraph {
        id: quoted(name),
        strict: false,
        stmts,
    })
}

fn plain(value: &str) -> DotId {
    DotId::Plain(value.to_string())
}

/// A DOT double-quoted identifier, with embedded quotes and backslashes
/// escaped.
fn quoted(value: &str) -> DotId {
    DotId::Escaped(format!(
        "\"{}\"",
        value.replace('\\', "\\\\").replace('"', "\\\"")
    ))
}

fn node_id(id: armature_core::Id) -> NodeId {
    NodeId(quoted(&id.to_string()), None)
}

fn style_value(value: &StyleValue) -> DotId {
    match value {
        StyleValue::Ident(keyword) => plain(keyword),
        StyleValue::Quoted(text) => quoted(text),
        StyleValue::Markup(markup) => DotId::Html(markup.clone()),
    }
}
