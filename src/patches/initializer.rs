use super::matcher;
use super::snippet::{initializer_fields, mentions_fields};
use super::{Splice, rewrite_file};
use crate::types::{InitBlock, PatchOutcome, SkipReason};
use anyhow::Result;
use std::path::Path;

/// Adds zeroed contribution room values to a `const <declaration>: <type_name> = { ... };`
/// object literal, right after its last top-level comma.
pub fn patch_initializer(
    path: &Path,
    declaration: &str,
    type_name: &str,
    block: InitBlock,
) -> Result<PatchOutcome> {
    rewrite_file(path, |content| {
        splice_initializer(content, declaration, type_name, block)
    })
}

pub fn splice_initializer(
    content: &str,
    declaration: &str,
    type_name: &str,
    block: InitBlock,
) -> Result<Splice> {
    let header = format!(
        r"const\s+{}\s*:\s*{}\s*=\s*\{{",
        regex::escape(declaration),
        regex::escape(type_name)
    );
    let not_found = || {
        Splice::Skip(SkipReason::AnchorNotFound {
            anchor: declaration.to_string(),
        })
    };

    let Some(anchor) = matcher::find_braced(content, &header)? else {
        return Ok(not_found());
    };
    // the literal must be closed as `};`
    if !content[anchor.span.end..].starts_with(';') {
        return Ok(not_found());
    }
    let Some(body) = anchor.body.clone() else {
        return Ok(not_found());
    };

    if mentions_fields(&content[body.clone()]) {
        return Ok(Splice::Skip(SkipReason::AlreadyPresent {
            location: declaration.to_string(),
        }));
    }

    let Some(comma) = matcher::top_level_commas(&content[body.clone()]).last().copied() else {
        return Ok(Splice::Skip(SkipReason::NoInsertionPoint {
            declaration: declaration.to_string(),
        }));
    };

    let fields = initializer_fields(block);
    let at = body.start + comma + 1;
    let mut updated = content.to_string();
    updated.insert_str(at, fields);

    Ok(Splice::Done {
        content: updated,
        inserted: fields.to_string(),
    })
}
