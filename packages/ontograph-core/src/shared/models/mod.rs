//! Shared models

mod term;
mod term_id;

pub use term::{Identified, MinimalTerm, OntologyTerm, Synonym, SynonymCategory, SynonymType, Term};
pub use term_id::{TermId, TermIdError};
