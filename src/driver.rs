use crate::patches::{patch_initializer, patch_types_file, patch_ui_file};
use crate::plan::PatchPlan;
use crate::types::{Patch, PatchOutcome, SkipReason};
use crate::utils::render_insertion;
use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const PREVIEW_LINES: usize = 6;

#[derive(Clone, Debug)]
pub struct PatchResult {
    pub path: PathBuf,
    pub patch: Patch,
    pub outcome: PatchOutcome,
}

#[derive(Clone, Debug, Default)]
pub struct RunReport {
    pub results: Vec<PatchResult>,
}

impl RunReport {
    pub fn applied(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_applied()).count()
    }

    pub fn skipped(&self) -> Vec<(&PatchResult, &SkipReason)> {
        self.results
            .iter()
            .filter_map(|r| match &r.outcome {
                PatchOutcome::Skipped(reason) => Some((r, reason)),
                PatchOutcome::Applied { .. } => None,
            })
            .collect()
    }
}

pub fn apply(path: &Path, patch: &Patch) -> Result<PatchOutcome> {
    match patch {
        Patch::UiFields { variant } => patch_ui_file(path, *variant),
        Patch::TypeFields { interfaces } => patch_types_file(path, interfaces),
        Patch::Initializer {
            declaration,
            type_name,
            block,
        } => patch_initializer(path, declaration, type_name, *block),
    }
}

/// Runs every patch of the plan in order, writing a transcript to `out`.
///
/// Skipped patches are reported and the run moves on. I/O errors stop the
/// run where it is; files patched before that point keep their changes.
pub fn run(plan: &PatchPlan, out: &mut dyn Write) -> Result<RunReport> {
    let mut report = RunReport::default();
    writeln!(
        out,
        "\u{001b}[94mUpdating files to add RRSP and TFSA contribution room fields...\u{001b}[0m"
    )?;

    for target in &plan.targets {
        let path = plan.resolve(target);
        writeln!(out, "Processing {}...", target.path.display())?;
        if target.patches.is_empty() {
            warn!(path = %path.display(), "no patches registered for file");
        }

        for patch in &target.patches {
            let outcome = apply(&path, patch)?;
            match &outcome {
                PatchOutcome::Applied { inserted } => {
                    info!(path = %path.display(), patch = %patch.describe(), "patched");
                    writeln!(
                        out,
                        "\u{001b}[32mSuccessfully updated {} in {}\u{001b}[0m",
                        patch.describe(),
                        target.path.display()
                    )?;
                    writeln!(out, "{}", render_insertion(inserted, PREVIEW_LINES))?;
                }
                PatchOutcome::Skipped(reason) => {
                    writeln!(
                        out,
                        "\u{001b}[91mFailed to update {} in {}: {}\u{001b}[0m",
                        patch.describe(),
                        target.path.display(),
                        reason
                    )?;
                }
            }
            report.results.push(PatchResult {
                path: target.path.clone(),
                patch: patch.clone(),
                outcome,
            });
        }
    }

    writeln!(out, "All files processed.")?;
    Ok(report)
}
