//! Closure unions over term collections

use std::collections::BTreeSet;

use crate::errors::Result;
use crate::features::ontology_graph::domain::OntologyGraph;
use crate::shared::models::TermId;

/// Union of the ancestor closures of `ids`, as primary identifiers.
/// Fails on the first unknown identifier.
pub fn augment_with_ancestors<'a, G, I>(graph: &G, ids: I, include_sources: bool) -> Result<BTreeSet<TermId>>
where
    G: OntologyGraph,
    I: IntoIterator<Item = &'a TermId>,
{
    let mut out = BTreeSet::new();
    for id in ids {
        out.extend(graph.get_ancestors(id, include_sources)?.cloned());
    }
    Ok(out)
}

/// Union of the descendant closures of `ids`, as primary identifiers
pub fn augment_with_descendants<'a, G, I>(graph: &G, ids: I, include_sources: bool) -> Result<BTreeSet<TermId>>
where
    G: OntologyGraph,
    I: IntoIterator<Item = &'a TermId>,
{
    let mut out = BTreeSet::new();
    for id in ids {
        out.extend(graph.get_descendants(id, include_sources)?.cloned());
    }
    Ok(out)
}
