//! Output policy resolver
//!
//! Decides whether a materialized workbook replaces the original artifact or
//! becomes a new file. The two outcomes are a sum type, so a caller can never
//! mistake one for the other.

use crate::error::OutputError;
use sheetfill_core::Workbook;
use sheetfill_xlsx::XlsxWriter;
use std::path::{Path, PathBuf};

/// The terminal value of a materialization request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputArtifact {
    /// A new file was written at this path; the original is untouched
    NewFile(PathBuf),
    /// The original artifact at this path had its content replaced
    OverwrittenOriginal(PathBuf),
}

impl OutputArtifact {
    /// The path the workbook was written to
    pub fn path(&self) -> &Path {
        match self {
            OutputArtifact::NewFile(p) => p,
            OutputArtifact::OverwrittenOriginal(p) => p,
        }
    }

    /// Did this request replace the original?
    pub fn is_overwrite(&self) -> bool {
        matches!(self, OutputArtifact::OverwrittenOriginal(_))
    }
}

/// Write the workbook and resolve its disposition
///
/// With `overwrite` set, `original` must name an existing file; its content is
/// replaced and the result is [`OutputArtifact::OverwrittenOriginal`]. Without
/// `overwrite`, the workbook goes to `output` if given, otherwise to a path
/// derived from `original` (`<stem>_output.xlsx` next to it), and the result
/// is [`OutputArtifact::NewFile`].
pub fn resolve_output(
    workbook: &Workbook,
    overwrite: bool,
    original: Option<&Path>,
    output: Option<&Path>,
) -> Result<OutputArtifact, OutputError> {
    if overwrite {
        let Some(path) = original else {
            return Err(OutputError::MissingSource(PathBuf::from("<none>")));
        };
        if !path.is_file() {
            return Err(OutputError::MissingSource(path.to_path_buf()));
        }

        XlsxWriter::write_file(workbook, path)?;
        return Ok(OutputArtifact::OverwrittenOriginal(path.to_path_buf()));
    }

    let target = match (output, original) {
        (Some(explicit), _) => explicit.to_path_buf(),
        (None, Some(original)) => derive_output_path(original),
        (None, None) => return Err(OutputError::NoDestination),
    };

    XlsxWriter::write_file(workbook, &target)?;
    Ok(OutputArtifact::NewFile(target))
}

/// Derive the new-file path from the original: `data.csv` -> `data_output.xlsx`
fn derive_output_path(original: &Path) -> PathBuf {
    let stem = original
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "workbook".to_string());

    original.with_file_name(format!("{}_output.xlsx", stem))
}
