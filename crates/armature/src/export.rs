//! Export of assembled graphs.
//!
//! The output format is selected by the output filename extension. `.dot`
//! (and `.gv`) write the printed DOT source directly; raster and vector
//! formats delegate to the Graphviz `dot` executable through
//! [`graphviz_rust::exec`] — layout and rasterization are entirely its
//! responsibility.

use std::{fs, io, path::Path};

use dot_structures::Graph;
use graphviz_rust::{
    cmd::{CommandArg, Format},
    exec,
    printer::{DotPrinter, PrinterContext},
};
use log::info;
use thiserror::Error;

/// Errors raised while exporting a graph.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output filename extension maps to no supported format.
    #[error("unsupported output format `{extension}`: expected dot, gv, png, svg, or pdf")]
    UnsupportedFormat { extension: String },

    /// The Graphviz executable failed or could not be found.
    #[error("graphviz rendering failed: {0}")]
    Render(#[source] io::Error),

    /// Writing the DOT source file failed.
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

/// Supported output formats, keyed by filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Dot,
    Png,
    Svg,
    Pdf,
}

impl OutputFormat {
    /// Selects the format from the output path's extension
    /// (case-insensitive).
    ///
    /// # Errors
    ///
    /// [`ExportError::UnsupportedFormat`] for missing or unrecognized
    /// extensions.
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "dot" | "gv" => Ok(OutputFormat::Dot),
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            "pdf" => Ok(OutputFormat::Pdf),
            _ => Err(ExportError::UnsupportedFormat { extension }),
        }
    }
}

/// The DOT source for a graph.
pub(crate) fn dot_source(graph: &Graph) -> String {
    graph.print(&mut PrinterContext::default())
}

/// Export a graph to the given path, format selected by extension.
pub(crate) fn export(graph: Graph, output: &Path) -> Result<(), ExportError> {
    let format = OutputFormat::from_path(output)?;

    let render_format = match format {
        OutputFormat::Dot => {
            fs::write(output, dot_source(&graph)).map_err(ExportError::Write)?;
            info!(output = output.display().to_string(); "DOT source written");
            return Ok(());
        }
        OutputFormat::Png => Format::Png,
        OutputFormat::Svg => Format::Svg,
        OutputFormat::Pdf => Format::Pdf,
    };

    exec(
        graph,
        &mut PrinterContext::default(),
        vec![
            CommandArg::Format(render_format),
            CommandArg::Output(output.display().to_string()),
        ],
    )
    .map_err(ExportError::Render)?;

    info!(output = output.display().to_string(), format:? = format; "Diagram rendered");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out.dot")).unwrap(),
            OutputFormat::Dot
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("out.gv")).unwrap(),
            OutputFormat::Dot
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("out.PNG")).unwrap(),
            OutputFormat::Png
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("dir/out.svg")).unwrap(),
            OutputFormat::Svg
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("out.pdf")).unwrap(),
            OutputFormat::Pdf
        );
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let err = OutputFormat::from_path(Path::new("out.bmp")).unwrap_err();
        assert!(matches!(
            err,
            ExportError::UnsupportedFormat { ref extension } if extension == "bmp"
        ));
    }

    #[test]
    fn test_missing_extension_is_rejected() {
        let err = OutputFormat::from_path(Path::new("out")).unwrap_err();
        assert!(matches!(
            err,
            ExportError::UnsupportedFormat { ref extension } if extension.is_empty()
        ));
    }
}
