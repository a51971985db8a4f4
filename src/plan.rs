use crate::types::{InitBlock, Patch, Target, Variant};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Files touched by a default run, in the order they're processed.
pub const DEFAULT_FILES: &[&str] = &[
    "src/components/forms/InputForm/PersonalInfoStep.tsx",
    "src/components/forms/InputForm/PrimaryPersonStep.tsx",
    "src/components/forms/InputForm/SpouseInfoStep.tsx",
    "src/models/types.ts",
    "src/pages/InputForm.tsx",
];

/// What to patch and where. Target paths are relative to `root`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PatchPlan {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    pub targets: Vec<Target>,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

impl PatchPlan {
    /// The built-in target list rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let targets = DEFAULT_FILES
            .iter()
            .map(|path| Target {
                path: PathBuf::from(path),
                patches: patches_for(path),
            })
            .collect();
        Self {
            root: root.into(),
            targets,
        }
    }

    /// Reads a JSON plan. A plan without `root` resolves against the
    /// directory the file lives in.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan: {}", path.display()))?;
        let mut plan: PatchPlan = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse plan: {}", path.display()))?;
        if plan.root.is_relative() {
            if let Some(dir) = path.parent() {
                plan.root = dir.join(&plan.root);
            }
        }
        Ok(plan)
    }

    pub fn resolve(&self, target: &Target) -> PathBuf {
        self.root.join(&target.path)
    }
}

/// Picks the patches a file receives from its name.
pub fn patches_for(path: &str) -> Vec<Patch> {
    let file_name = Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path);

    match file_name {
        "SpouseInfoStep.tsx" => vec![
            Patch::UiFields {
                variant: Variant::Spouse,
            },
            spouse_defaults(),
        ],
        "PersonalInfoStep.tsx" => vec![
            Patch::UiFields {
                variant: Variant::Primary,
            },
            spouse_defaults(),
        ],
        "PrimaryPersonStep.tsx" => vec![Patch::UiFields {
            variant: Variant::Primary,
        }],
        "types.ts" => vec![Patch::TypeFields {
            interfaces: vec!["UserInput".to_string(), "SpouseInfo".to_string()],
        }],
        "InputForm.tsx" => vec![Patch::Initializer {
            declaration: "initialUserInput".to_string(),
            type_name: "UserInput".to_string(),
            block: InitBlock::Contribution,
        }],
        _ => Vec::new(),
    }
}

fn spouse_defaults() -> Patch {
    Patch::Initializer {
        declaration: "defaultSpouseInfo".to_string(),
        type_name: "SpouseInfo".to_string(),
        block: InitBlock::SpouseDefaults,
    }
}
