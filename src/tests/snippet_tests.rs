use crate::patches::snippet::{build_ui_snippet, initializer_fields, mentions_fields, type_fields};
use crate::types::{InitBlock, Variant};
use crate::tests::fixtures::count;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_primary_snippet_uses_direct_access() {
        let snippet = build_ui_snippet(Variant::Primary);

        assert!(snippet.starts_with('\n'));
        assert!(snippet.contains(r#"label="RRSP Contribution Room""#));
        assert!(snippet.contains(r#"label="TFSA Contribution Room""#));
        assert!(snippet.contains("value={userInput.rrspRoom || 0}"));
        assert!(snippet.contains(
            "onChange={(e) => onInputChange('tfsaRoom', parseFloat(e.target.value))}"
        ));
        assert!(!snippet.contains("spouseInfo"));
    }

    #[test]
    fn test_spouse_snippet_merges_into_spouse_info() {
        let snippet = build_ui_snippet(Variant::Spouse);

        assert!(snippet.contains(r#"label="Spouse's RRSP Contribution Room""#));
        assert!(snippet.contains("value={userInput.spouseInfo?.tfsaRoom || 0}"));
        assert!(snippet.contains(
            "onChange={(e) => onInputChange('spouseInfo', { ...userInput.spouseInfo!, rrspRoom: parseFloat(e.target.value) })}"
        ));
    }

    #[test]
    fn test_snippet_has_two_balanced_field_blocks() {
        for variant in [Variant::Primary, Variant::Spouse] {
            let snippet = build_ui_snippet(variant);
            assert_eq!(count(&snippet, "<Grid item xs={12} md={4}>"), 2);
            assert_eq!(count(&snippet, "</Grid>"), 2);
            assert_eq!(count(&snippet, "{"), count(&snippet, "}"));
            assert!(!snippet.contains("{label_prefix}"));
            assert!(!snippet.contains("{on_change}"));
        }
    }

    #[test]
    fn test_literal_blocks() {
        assert_eq!(
            type_fields(),
            "\n\n  // Contribution Room\n  rrspRoom: number;\n  tfsaRoom: number;"
        );
        assert_eq!(
            initializer_fields(InitBlock::Contribution),
            "\n\n  // Contribution Room\n  rrspRoom: 0,\n  tfsaRoom: 0,"
        );
        assert_eq!(
            initializer_fields(InitBlock::SpouseDefaults),
            "\n        rrspRoom: 0,\n        tfsaRoom: 0,"
        );
    }

    #[test]
    fn test_mentions_fields_checks_either_name() {
        assert!(mentions_fields("  rrspRoom: number;"));
        assert!(mentions_fields("  tfsaRoom: 0,"));
        assert!(!mentions_fields("  currentRSP: 0,\n  currentTFSA: 0,"));
    }
}
