//! Armature - render UML class diagrams from CSV descriptions.
//!
//! Two CSV files (diagram members and the relationships between them) are
//! loaded into a [`ClassModel`], assembled into a Graphviz graph description,
//! and handed to Graphviz for layout and rendering. This crate does not lay
//! out graphs or rasterize images itself; its whole job is the CSV-to-graph
//! translation.

pub mod config;

mod error;
mod export;
mod graph;

pub use armature_core::{
    Connection, ConnectionError, Id, Member, RelationKind, RoleStereotype, escape_markup, sanitize,
};
pub use armature_parser::{CsvOptions, ParseError};

pub use error::ArmatureError;
pub use export::{ExportError, OutputFormat};

use std::{fs, path::Path};

use dot_structures::Graph;
use log::{debug, info};

use config::AppConfig;

/// A loaded diagram: the graph name plus member and connection lists.
///
/// Immutable once loaded; the builder consumes it to emit nodes and edges.
#[derive(Debug, Clone)]
pub struct ClassModel {
    name: String,
    members: Vec<Member>,
    connections: Vec<Connection>,
}

impl ClassModel {
    /// Creates a model directly, bypassing CSV loading.
    pub fn new(name: impl Into<String>, members: Vec<Member>, connections: Vec<Connection>) -> Self {
        Self {
            name: name.into(),
            members,
            connections,
        }
    }

    /// The graph name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The diagram members, in CSV order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// The diagram connections, in CSV order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }
}

/// Builder for loading and rendering class diagrams.
///
/// # Examples
///
/// ```
/// use armature::{DiagramBuilder, config::AppConfig};
///
/// let members = "Name,Annotation,Stereotype\nChild,,\nParent,,\n";
/// let connections = "Kind,From,To\ninherits,Child,Parent\n";
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let model = builder.parse(members, connections).expect("valid CSV");
/// let dot = builder.dot_source(&model).expect("known kinds");
/// assert!(dot.contains("digraph"));
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse members and connections CSV text into a model.
    ///
    /// Relationship kinds are not validated here; unknown kinds surface
    /// later, when the graph is built.
    ///
    /// # Errors
    ///
    /// [`ArmatureError::Parse`] for malformed CSV or rows with too few
    /// columns.
    pub fn parse(
        &self,
        members_src: &str,
        connections_src: &str,
    ) -> Result<ClassModel, ArmatureError> {
        self.parse_named(members_src, "members", connections_src, "connections")
    }

    /// Read and parse the two CSV files into a model.
    ///
    /// # Errors
    ///
    /// [`ArmatureError::FileAccess`] when either path cannot be read, plus
    /// everything [`DiagramBuilder::parse`] can return.
    pub fn load_csv(
        &self,
        members_path: impl AsRef<Path>,
        connections_path: impl AsRef<Path>,
    ) -> Result<ClassModel, ArmatureError> {
        let members_path = members_path.as_ref();
        let connections_path = connections_path.as_ref();

        let members_src = read_input(members_path)?;
        let connections_src = read_input(connections_path)?;

        self.parse_named(
            &members_src,
            &members_path.display().to_string(),
            &connections_src,
            &connections_path.display().to_string(),
        )
    }

    fn parse_named(
        &self,
        members_src: &str,
        members_name: &str,
        connections_src: &str,
        connections_name: &str,
    ) -> Result<ClassModel, ArmatureError> {
        let options = CsvOptions {
            has_headers: self.config.graph().has_headers(),
        };

        let members = armature_parser::parse_members(members_src, &options)
            .map_err(|err| ArmatureError::new_parse_error(err, members_name, members_src))?;
        let connections = armature_parser::parse_connections(connections_src, &options)
            .map_err(|err| ArmatureError::new_parse_error(err, connections_name, connections_src))?;

        info!(
            members = members.len(),
            connections = connections.len();
            "Loaded diagram model"
        );

        Ok(ClassModel::new(
            self.config.graph().name(),
            members,
            connections,
        ))
    }

    /// Assemble the model into a Graphviz graph description.
    ///
    /// # Errors
    ///
    /// [`ArmatureError::Connection`] when a connection has an unknown
    /// relationship kind or too few participants.
    pub fn build_graph(&self, model: &ClassModel) -> Result<Graph, ArmatureError> {
        debug!(name = model.name(); "Building graph");
        let graph = graph::build_graph(
            model.name(),
            model.members(),
            model.connections(),
            self.config.style(),
        )?;
        Ok(graph)
    }

    /// The DOT source for the model's graph.
    ///
    /// # Errors
    ///
    /// Same as [`DiagramBuilder::build_graph`].
    pub fn dot_source(&self, model: &ClassModel) -> Result<String, ArmatureError> {
        let graph = self.build_graph(model)?;
        Ok(export::dot_source(&graph))
    }

    /// Build the graph and export it, format selected by the output path's
    /// extension.
    ///
    /// `.dot`/`.gv` write DOT source directly; `.png`, `.svg`, and `.pdf`
    /// require the Graphviz `dot` executable on the PATH.
    ///
    /// # Errors
    ///
    /// [`ArmatureError::Connection`] for unresolvable connections,
    /// [`ArmatureError::Export`] for unsupported extensions or Graphviz
    /// failures.
    pub fn render(&self, model: &ClassModel, output: impl AsRef<Path>) -> Result<(), ArmatureError> {
        let graph = self.build_graph(model)?;
        export::export(graph, output.as_ref())?;
        Ok(())
    }
}

fn read_input(path: &Path) -> Result<String, ArmatureError> {
    fs::read_to_string(path).map_err(|source| ArmatureError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}
