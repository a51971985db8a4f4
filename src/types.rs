use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Whose form section a UI snippet is rendered for.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Primary,
    Spouse,
}

/// Which literal key/value block an initializer receives.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InitBlock {
    Contribution,   // top-level initial state, commented
    SpouseDefaults, // nested inside a component, deeper indent
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Patch {
    UiFields {
        variant: Variant,
    },
    TypeFields {
        interfaces: Vec<String>,
    },
    Initializer {
        declaration: String,
        type_name: String,
        block: InitBlock,
    },
}

impl Patch {
    /// Short human label used in the transcript ("types", "initial values", ...).
    pub fn describe(&self) -> String {
        match self {
            Patch::UiFields { variant: Variant::Primary } => "form fields".to_string(),
            Patch::UiFields { variant: Variant::Spouse } => "spouse form fields".to_string(),
            Patch::TypeFields { .. } => "types".to_string(),
            Patch::Initializer { declaration, .. } => format!("{} values", declaration),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pub path: PathBuf, // relative to the plan root
    pub patches: Vec<Patch>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatchOutcome {
    Applied { inserted: String },
    Skipped(SkipReason),
}

impl PatchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, PatchOutcome::Applied { .. })
    }
}

/// Recoverable reasons a mutator left its file untouched.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    #[error("could not find {anchor}")]
    AnchorNotFound { anchor: String },
    #[error("fields already exist in {location}")]
    AlreadyPresent { location: String },
    #[error("no comma to insert after in {declaration}")]
    NoInsertionPoint { declaration: String },
}
