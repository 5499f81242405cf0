//! Human-readable term references for finding messages

use crate::features::ontology_graph::OntologyGraph;
use crate::shared::models::TermId;

/// `Seizure [HP:0001250]`, or the bare id without a name
pub(crate) fn describe<G: OntologyGraph>(graph: &G, id: &TermId) -> String {
    match graph.term_label(id) {
        Some(name) => format!("{} [{}]", name, id.value()),
        None => id.value().to_string(),
    }
}
