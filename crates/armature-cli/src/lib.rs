//! CLI logic for the armature diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::path::Path;

use log::info;

use armature::{ArmatureError, DiagramBuilder};

/// Run the armature CLI application
///
/// Loads the two CSV files, builds the graph description, and exports it to
/// the output file.
///
/// # Errors
///
/// Returns `ArmatureError` for:
/// - File I/O and configuration loading errors
/// - CSV parsing errors
/// - Unknown relationship kinds
/// - Export errors (unsupported extension, Graphviz failures)
pub fn run(args: &Args) -> Result<(), ArmatureError> {
    let mut app_config = config::load_config(args.config.as_ref())?;

    // Command-line flags win over the configuration file.
    if let Some(name) = &args.name {
        app_config.graph_mut().set_name(name.clone());
    }
    if args.no_headers {
        app_config.graph_mut().set_has_headers(false);
    }

    info!(
        members = args.members,
        connections = args.connections,
        output = args.output;
        "Rendering class diagram"
    );

    let builder = DiagramBuilder::new(app_config);
    let model = builder.load_csv(&args.members, &args.connections)?;
    builder.render(&model, Path::new(&args.output))?;

    info!(output = args.output; "Diagram exported successfully");

    Ok(())
}
