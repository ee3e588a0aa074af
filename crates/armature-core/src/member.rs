//! Diagram members (nodes) and their style attributes.
//!
//! A [`Member`] is one node of the class diagram: a sanitized identifier, the
//! raw display name, and optional annotation and stereotype. Members compute
//! their own record-label markup and node style attributes; the exporter maps
//! those onto Graphviz without further interpretation.

use crate::{identifier::Id, markup::escape_markup, stereotype::RoleStereotype};

/// A style attribute value, tagged with how the exporter must emit it.
///
/// Core stays renderer-agnostic: it describes *what* an attribute value is,
/// and the export layer decides the concrete DOT spelling (bare keyword,
/// quoted string, or verbatim HTML-like markup).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValue {
    /// A bare Graphviz keyword such as `record`, `vee`, or `back`.
    Ident(&'static str),
    /// Free text that must be quoted in DOT output (labels, colors).
    Quoted(String),
    /// HTML-like markup emitted verbatim between angle brackets.
    Markup(String),
}

/// An ordered list of style attributes, as `(key, value)` pairs.
///
/// Order is preserved so the emitted DOT matches the fixed tables exactly.
pub type StyleAttrs = Vec<(&'static str, StyleValue)>;

/// One diagram node.
///
/// Created once per members-CSV data row and immutable thereafter. The graph
/// builder consumes a member to emit exactly one node.
///
/// # Examples
///
/// ```
/// use armature_core::{Id, Member, RoleStereotype};
///
/// let member = Member::new(
///     Id::sanitized("Order Service"),
///     "Order Service",
///     Some("service".to_string()),
///     RoleStereotype::parse("Service Provider"),
/// );
/// assert_eq!(member.id(), "OrderService");
/// assert_eq!(member.label(), "<{«service» Order Service|}>");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    id: Id,
    display_name: String,
    annotation: Option<String>,
    stereotype: Option<RoleStereotype>,
}

impl Member {
    /// Creates a member from its parts.
    ///
    /// The identifier is taken as-is; callers that start from free text use
    /// [`Id::sanitized`]. The display name is kept raw and only escaped when
    /// the label is computed.
    pub fn new(
        id: Id,
        display_name: impl Into<String>,
        annotation: Option<String>,
        stereotype: Option<RoleStereotype>,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            annotation,
            stereotype,
        }
    }

    /// Convenience constructor that sanitizes the display name into the id.
    pub fn from_display_name(display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        Self::new(Id::sanitized(&display_name), display_name, None, None)
    }

    /// The node identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// The raw display name as read from the CSV.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The optional annotation shown in guillemets before the name.
    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    /// The optional role stereotype.
    pub fn stereotype(&self) -> Option<RoleStereotype> {
        self.stereotype
    }

    /// Record-label markup for this member.
    ///
    /// Produces `<{«annotation» DisplayName|}>`, with the annotation prefix
    /// omitted when absent. Both the annotation and the display name are
    /// markup-escaped; the surrounding angle brackets mark the label as
    /// HTML-like for Graphviz.
    pub fn label(&self) -> String {
        let annotation = match &self.annotation {
            Some(annotation) => format!("«{}» ", escape_markup(annotation)),
            None => String::new(),
        };
        format!("<{{{}{}|}}>", annotation, escape_markup(&self.display_name))
    }

    /// Node style attributes for this member.
    ///
    /// Always `shape=record`; a stereotype additionally contributes its fill
    /// color, border color, and `style=filled`.
    pub fn attributes(&self) -> StyleAttrs {
        let mut attrs: StyleAttrs = vec![("shape", StyleValue::Ident("record"))];
        if let Some(stereotype) = self.stereotype {
            attrs.push((
                "fillcolor",
                StyleValue::Quoted(stereotype.fill_color().to_string()),
            ));
            attrs.push((
                "color",
                StyleValue::Quoted(stereotype.border_color().to_string()),
            ));
            attrs.push(("style", StyleValue::Ident("filled")));
        }
        attrs
    }
}
