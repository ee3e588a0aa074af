//! Role stereotypes for diagram members.
//!
//! A stereotype is a UML-style visual classification of a member. Each
//! stereotype carries a fill color and a border color that the exporter
//! applies to the member's node. The set follows the six Wirfs-Brock role
//! stereotypes.

use std::fmt;

/// The closed set of recognized role stereotypes.
///
/// Each variant maps to a fixed fill/border color pair. Lookup from raw CSV
/// text goes through [`RoleStereotype::parse`], which returns `None` for
/// unrecognized values rather than failing the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleStereotype {
    /// Knows and provides information.
    InformationHolder,
    /// Maintains relationships between objects.
    Structurer,
    /// Performs work on demand.
    ServiceProvider,
    /// Delegates work to other objects.
    Coordinator,
    /// Makes decisions and directs the actions of others.
    Controller,
    /// Transforms information between the system and its surroundings.
    Interfacer,
}

impl RoleStereotype {
    /// All recognized stereotypes, in display order.
    pub const ALL: [RoleStereotype; 6] = [
        RoleStereotype::InformationHolder,
        RoleStereotype::Structurer,
        RoleStereotype::ServiceProvider,
        RoleStereotype::Coordinator,
        RoleStereotype::Controller,
        RoleStereotype::Interfacer,
    ];

    /// Looks up a stereotype from raw text.
    ///
    /// Matching ignores case and any spaces, underscores, or hyphens, so
    /// `"Information Holder"`, `"information_holder"`, and
    /// `"InformationHolder"` all resolve to the same variant. Unrecognized
    /// or empty text yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "informationholder" => Some(RoleStereotype::InformationHolder),
            "structurer" => Some(RoleStereotype::Structurer),
            "serviceprovider" => Some(RoleStereotype::ServiceProvider),
            "coordinator" => Some(RoleStereotype::Coordinator),
            "controller" => Some(RoleStereotype::Controller),
            "interfacer" => Some(RoleStereotype::Interfacer),
            _ => None,
        }
    }

    /// Background fill color for the member's node.
    pub fn fill_color(&self) -> &'static str {
        match self {
            RoleStereotype::InformationHolder => "#fadbd8",
            RoleStereotype::Structurer => "#fdebd0",
            RoleStereotype::ServiceProvider => "#d6eaf8",
            RoleStereotype::Coordinator => "#fcf3cf",
            RoleStereotype::Controller => "#d5f5e3",
            RoleStereotype::Interfacer => "#e8daef",
        }
    }

    /// Border color for the member's node.
    pub fn border_color(&self) -> &'static str {
        match self {
            RoleStereotype::InformationHolder => "#c0392b",
            RoleStereotype::Structurer => "#ca6f1e",
            RoleStereotype::ServiceProvider => "#2471a3",
            RoleStereotype::Coordinator => "#b7950b",
            RoleStereotype::Controller => "#1e8449",
            RoleStereotype::Interfacer => "#7d3c98",
        }
    }
}

impl fmt::Display for RoleStereotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoleStereotype::InformationHolder => "Information Holder",
            RoleStereotype::Structurer => "Structurer",
            RoleStereotype::ServiceProvider => "Service Provider",
            RoleStereotype::Coordinator => "Coordinator",
            RoleStereotype::Controller => "Controller",
            RoleStereotype::Interfacer => "Interfacer",
        };
        write!(f, "{}", name)
    }
}
