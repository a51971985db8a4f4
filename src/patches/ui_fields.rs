use super::matcher;
use super::snippet::{FIELD_NAMES, build_ui_snippet};
use super::{Splice, rewrite_file};
use crate::types::{PatchOutcome, SkipReason, Variant};
use anyhow::Result;
use std::path::Path;
use tracing::warn;

// A `md={4}` grid cell holding the "... Other Investments" TextField, up to its
// closing tag. The label may not cross a quote, so neighbouring fields can't
// be swallowed into the match.
const OTHER_INVESTMENTS_FIELD: &str = r#"<Grid item xs=\{12\} md=\{4\}>\s*<TextField\s*fullWidth\s*label="[^"]*Other Investments".*?</Grid>"#;

/// Inserts the RRSP/TFSA contribution room fields after the "Other Investments"
/// field of a form step.
pub fn patch_ui_file(path: &Path, variant: Variant) -> Result<PatchOutcome> {
    rewrite_file(path, |content| splice_ui_fields(content, variant))
}

/// True when the form already renders our labels or reads either field
/// through the variant's property path, however it is labelled.
fn binds_fields(content: &str, variant: Variant) -> bool {
    let labels = [variant.field_label("RRSP"), variant.field_label("TFSA")];
    if labels
        .iter()
        .any(|label| content.contains(&format!("label=\"{}\"", label)))
    {
        return true;
    }

    // `userInput.spouseInfo?.x` and `userInput.spouseInfo.x` read the same field
    let path = variant.property_path();
    let paths = [path.to_string(), path.replace("?.", ".")];
    FIELD_NAMES.iter().any(|field| {
        paths
            .iter()
            .any(|path| content.contains(&format!("{}{}", path, field)))
    })
}

pub fn splice_ui_fields(content: &str, variant: Variant) -> Result<Splice> {
    if binds_fields(content, variant) {
        return Ok(Splice::Skip(SkipReason::AlreadyPresent {
            location: format!("{}form markup", variant.label_prefix().to_lowercase()),
        }));
    }

    let candidates = matcher::find_all(content, OTHER_INVESTMENTS_FIELD)?;
    let Some(anchor) = candidates.first() else {
        return Ok(Splice::Skip(SkipReason::AnchorNotFound {
            anchor: "the Other Investments field".to_string(),
        }));
    };
    if candidates.len() > 1 {
        warn!(
            count = candidates.len(),
            "several Other Investments fields found, using the first"
        );
    }

    let snippet = build_ui_snippet(variant);
    let mut updated = String::with_capacity(content.len() + snippet.len());
    updated.push_str(&content[..anchor.span.end]);
    updated.push_str(&snippet);
    updated.push_str(&content[anchor.span.end..]);

    Ok(Splice::Done {
        content: updated,
        inserted: snippet,
    })
}
