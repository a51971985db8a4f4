use crate::plan::PatchPlan;
use anyhow::Result;
use std::env;
use std::path::PathBuf;

pub const ROOT_VAR: &str = "ROOM_PATCH_ROOT";
pub const PLAN_VAR: &str = "ROOM_PATCH_PLAN";

#[derive(Clone, Debug, Default)]
pub struct Config {
    pub root: Option<PathBuf>,
    pub plan_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            root: env::var(ROOT_VAR).ok().filter(|s| !s.is_empty()).map(PathBuf::from),
            plan_file: env::var(PLAN_VAR).ok().filter(|s| !s.is_empty()).map(PathBuf::from),
        }
    }

    /// The plan to run: the plan file if one is configured, otherwise the
    /// built-in targets. An explicit root always wins.
    pub fn load_plan(&self) -> Result<PatchPlan> {
        let mut plan = match &self.plan_file {
            Some(path) => PatchPlan::from_file(path)?,
            None => PatchPlan::new("."),
        };
        if let Some(root) = &self.root {
            plan.root = root.clone();
        }
        Ok(plan)
    }
}
