//! Merging fluid declarations back into a style object.

use std::cmp::Ordering;

use indexmap::IndexSet;

use crate::style::StyleObject;
use crate::unit::parse_media_query_width;

/// Overlays fluid declarations onto the literal style object.
///
/// Base declarations are copied unchanged. Media blocks from both inputs
/// are combined per query, with fluid declarations winning, then ordered by
/// ascending width. Queries that don't carry a min-width sort last in the
/// order they were first seen. Blocks left empty are dropped.
pub fn merge_styles(style: &StyleObject, fluid: &StyleObject) -> StyleObject {
    let mut queries: Vec<&str> = style
        .media_queries()
        .chain(fluid.media_queries())
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect();
    queries.sort_by(|a, b| compare_widths(parse_media_query_width(a), parse_media_query_width(b)));

    let mut merged = StyleObject::new();
    for (property, value) in style.base() {
        merged.insert(property, value.clone());
    }

    for query in queries {
        let mut block = style.block(query).cloned().unwrap_or_default();
        if let Some(fluid_block) = fluid.block(query) {
            block.extend(fluid_block.iter().map(|(p, v)| (p.clone(), v.clone())));
        }
        if !block.is_empty() {
            merged.set_block(query, block);
        }
    }

    merged
}

fn compare_widths(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
