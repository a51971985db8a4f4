use super::matcher::{self, Anchor};
use super::snippet::{mentions_fields, type_fields};
use super::{Splice, rewrite_file};
use crate::types::{PatchOutcome, SkipReason};
use anyhow::{Result, bail};
use std::path::Path;
use tracing::{debug, info};

fn interface_header(name: &str) -> String {
    format!(r"export\s+interface\s+{}\s*\{{", regex::escape(name))
}

/// Declares the contribution room fields on every named interface of a types
/// file. The first interface decides whether the file is patched at all; the
/// remaining ones must exist and are updated in the same write.
pub fn patch_types_file(path: &Path, interfaces: &[String]) -> Result<PatchOutcome> {
    rewrite_file(path, |content| splice_type_fields(content, interfaces))
}

pub fn splice_type_fields(content: &str, interfaces: &[String]) -> Result<Splice> {
    let Some((first, rest)) = interfaces.split_first() else {
        bail!("No interfaces given for the types patch");
    };

    let Some(lead) = matcher::find_braced(content, &interface_header(first))? else {
        return Ok(Splice::Skip(SkipReason::AnchorNotFound {
            anchor: format!("interface {}", first),
        }));
    };
    if mentions_fields(lead.body_text(content)) {
        return Ok(Splice::Skip(SkipReason::AlreadyPresent {
            location: format!("interface {}", first),
        }));
    }

    let mut pending: Vec<Anchor> = vec![lead];
    for name in rest {
        let Some(anchor) = matcher::find_braced(content, &interface_header(name))? else {
            // all or nothing
            return Ok(Splice::Skip(SkipReason::AnchorNotFound {
                anchor: format!("interface {}", name),
            }));
        };
        if mentions_fields(anchor.body_text(content)) {
            debug!(interface = %name, "fields already declared, leaving as is");
            continue;
        }
        pending.push(anchor);
    }

    // Fields go after the last member, before the body's trailing whitespace.
    let mut positions: Vec<usize> = pending
        .iter()
        .filter_map(|anchor| anchor.body.clone())
        .map(|body| body.start + content[body].trim_end().len())
        .collect();
    positions.sort_unstable_by(|a, b| b.cmp(a));
    positions.dedup();

    let mut updated = content.to_string();
    for pos in &positions {
        updated.insert_str(*pos, type_fields());
    }
    info!(interfaces = positions.len(), "declared contribution room fields");

    Ok(Splice::Done {
        content: updated,
        inserted: type_fields().to_string(),
    })
}
