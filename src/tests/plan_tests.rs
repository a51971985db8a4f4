use crate::config::Config;
use crate::plan::{DEFAULT_FILES, PatchPlan, patches_for};
use crate::types::{InitBlock, Patch, Variant};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dispatch_by_file_name() {
        assert_eq!(
            patches_for("src/components/forms/InputForm/PrimaryPersonStep.tsx"),
            vec![Patch::UiFields {
                variant: Variant::Primary
            }]
        );

        let spouse = patches_for("src/components/forms/InputForm/SpouseInfoStep.tsx");
        assert_eq!(spouse.len(), 2);
        assert_eq!(
            spouse[0],
            Patch::UiFields {
                variant: Variant::Spouse
            }
        );

        assert_eq!(
            patches_for("src/pages/InputForm.tsx"),
            vec![Patch::Initializer {
                declaration: "initialUserInput".to_string(),
                type_name: "UserInput".to_string(),
                block: InitBlock::Contribution,
            }]
        );
        assert!(patches_for("src/App.tsx").is_empty());
    }

    #[test]
    fn test_default_plan_keeps_file_order() {
        let plan = PatchPlan::new("/project");
        let paths: Vec<PathBuf> = plan.targets.iter().map(|t| t.path.clone()).collect();
        let expected: Vec<PathBuf> = DEFAULT_FILES.iter().map(PathBuf::from).collect();
        assert_eq!(paths, expected);
        assert_eq!(
            plan.resolve(&plan.targets[3]),
            PathBuf::from("/project/src/models/types.ts")
        );
    }

    #[test]
    fn test_plan_file_resolves_relative_to_itself() {
        let temp_dir = TempDir::new().unwrap();
        let plan_path = temp_dir.path().join("plan.json");
        fs::write(
            &plan_path,
            r#"{
                "targets": [
                    {
                        "path": "types.ts",
                        "patches": [{ "kind": "type_fields", "interfaces": ["UserInput"] }]
                    },
                    {
                        "path": "Step.tsx",
                        "patches": [{ "kind": "ui_fields", "variant": "spouse" }]
                    }
                ]
            }"#,
        )
        .unwrap();

        let plan = PatchPlan::from_file(&plan_path).unwrap();
        assert_eq!(plan.root, temp_dir.path().join("."));
        assert_eq!(
            plan.targets[0].patches,
            vec![Patch::TypeFields {
                interfaces: vec!["UserInput".to_string()]
            }]
        );
        assert_eq!(
            plan.targets[1].patches,
            vec![Patch::UiFields {
                variant: Variant::Spouse
            }]
        );
    }

    #[test]
    fn test_bad_plan_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let plan_path = temp_dir.path().join("plan.json");
        fs::write(&plan_path, r#"{ "targets": [{ "path": "a", "patches": [{ "kind": "nope" }] }] }"#).unwrap();
        assert!(PatchPlan::from_file(&plan_path).is_err());
        assert!(PatchPlan::from_file(&temp_dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_config_root_overrides_plan_root() {
        let config = Config {
            root: Some(PathBuf::from("/srv/app")),
            plan_file: None,
        };
        let plan = config.load_plan().unwrap();
        assert_eq!(plan.root, PathBuf::from("/srv/app"));
        assert_eq!(plan.targets.len(), DEFAULT_FILES.len());

        let plan = Config::default().load_plan().unwrap();
        assert_eq!(plan.root, PathBuf::from("."));
    }
}
