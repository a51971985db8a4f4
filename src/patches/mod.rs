pub use self::initializer::patch_initializer;
pub use self::type_fields::patch_types_file;
pub use self::ui_fields::patch_ui_file;

pub mod initializer;
pub mod matcher;
pub mod snippet;
pub mod type_fields;
pub mod ui_fields;

use crate::types::{PatchOutcome, SkipReason};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Result of editing a file's content in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Splice {
    Done { content: String, inserted: String },
    Skip(SkipReason),
}

/// Reads `path`, runs `edit` over its content and overwrites the file only
/// when the edit produced new content.
pub(crate) fn rewrite_file<F>(path: &Path, edit: F) -> Result<PatchOutcome>
where
    F: FnOnce(&str) -> Result<Splice>,
{
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    match edit(&content)? {
        Splice::Done {
            content: updated,
            inserted,
        } => {
            fs::write(path, &updated)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            debug!(
                path = %path.display(),
                before = content.len(),
                after = updated.len(),
                "file rewritten"
            );
            Ok(PatchOutcome::Applied { inserted })
        }
        Splice::Skip(reason) => {
            debug!(path = %path.display(), %reason, "file left untouched");
            Ok(PatchOutcome::Skipped(reason))
        }
    }
}
