//! Configuration types for diagram rendering.
//!
//! All types implement [`serde::Deserialize`] so a TOML file can override any
//! subset of the defaults.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining graph and style settings.
//! - [`GraphConfig`] - Graph name and CSV header handling.
//! - [`StyleConfig`] - Visual options passed through as graph-level Graphviz
//!   attributes.
//!
//! # Example
//!
//! ```
//! # use armature::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.graph().name(), "Class Diagram");
//! assert!(config.graph().has_headers());
//! ```

use serde::Deserialize;

/// Top-level configuration combining graph and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Graph configuration section.
    #[serde(default)]
    graph: GraphConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(graph: GraphConfig, style: StyleConfig) -> Self {
        Self { graph, style }
    }

    /// Returns the graph configuration.
    pub fn graph(&self) -> &GraphConfig {
        &self.graph
    }

    /// Returns the graph configuration for modification.
    ///
    /// The CLI uses this to fold command-line overrides into a loaded
    /// configuration.
    pub fn graph_mut(&mut self) -> &mut GraphConfig {
        &mut self.graph
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Graph-level settings: diagram name and CSV header handling.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    /// Name of the generated graph.
    #[serde(default = "default_graph_name")]
    name: String,

    /// Whether the first row of each CSV file is a header row.
    #[serde(default = "default_has_headers")]
    has_headers: bool,
}

fn default_graph_name() -> String {
    "Class Diagram".to_string()
}

fn default_has_headers() -> bool {
    true
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            name: default_graph_name(),
            has_headers: default_has_headers(),
        }
    }
}

impl GraphConfig {
    /// The diagram name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Overrides the diagram name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Whether the first CSV row is skipped as a header.
    pub fn has_headers(&self) -> bool {
        self.has_headers
    }

    /// Overrides header handling.
    pub fn set_has_headers(&mut self, has_headers: bool) {
        self.has_headers = has_headers;
    }
}

/// Layout direction of the graph, mapped to Graphviz `rankdir`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rankdir {
    Tb,
    Lr,
    Bt,
    Rl,
}

impl Rankdir {
    /// The Graphviz attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rankdir::Tb => "TB",
            Rankdir::Lr => "LR",
            Rankdir::Bt => "BT",
            Rankdir::Rl => "RL",
        }
    }
}

/// Visual styling options emitted as graph-level attributes.
///
/// Unset fields fall back to Graphviz defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleConfig {
    /// Background color for the whole diagram.
    #[serde(default)]
    background_color: Option<String>,

    /// Layout direction.
    #[serde(default)]
    rankdir: Option<Rankdir>,
}

impl StyleConfig {
    /// Creates a style configuration from its parts.
    pub fn new(background_color: Option<String>, rankdir: Option<Rankdir>) -> Self {
        Self {
            background_color,
            rankdir,
        }
    }

    /// The configured background color, if any.
    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }

    /// The configured layout direction, if any.
    pub fn rankdir(&self) -> Option<Rankdir> {
        self.rankdir
    }
}
