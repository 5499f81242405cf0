//! Term records
//!
//! Two metadata tiers share one capability trait: [`MinimalTerm`] carries
//! what the hierarchy needs (id, name, alternate ids, obsolescence);
//! [`Term`] adds definition, comment, synonyms and cross-references.

use serde::{Deserialize, Serialize};

use super::term_id::TermId;

/// Capability shared by every term tier
pub trait OntologyTerm: Send + Sync {
    fn identifier(&self) -> &TermId;

    fn name(&self) -> &str;

    /// Obsolete identifiers that resolve to this term
    fn alt_term_ids(&self) -> &[TermId];

    fn is_obsolete(&self) -> bool;

    fn is_current(&self) -> bool {
        !self.is_obsolete()
    }
}

/// Anything that names one term: a bare identifier, a term record or an
/// annotation that refers to a term
pub trait Identified {
    fn term_id(&self) -> &TermId;
}

impl Identified for TermId {
    fn term_id(&self) -> &TermId {
        self
    }
}

impl Identified for MinimalTerm {
    fn term_id(&self) -> &TermId {
        &self.identifier
    }
}

impl Identified for Term {
    fn term_id(&self) -> &TermId {
        &self.minimal.identifier
    }
}

/// Term with the metadata required to build and query a hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimalTerm {
    pub identifier: TermId,
    pub name: String,
    #[serde(default)]
    pub alt_term_ids: Vec<TermId>,
    #[serde(default)]
    pub is_obsolete: bool,
}

impl MinimalTerm {
    pub fn new(
        identifier: TermId,
        name: impl Into<String>,
        alt_term_ids: Vec<TermId>,
        is_obsolete: bool,
    ) -> Self {
        Self {
            identifier,
            name: name.into(),
            alt_term_ids,
            is_obsolete,
        }
    }
}

impl OntologyTerm for MinimalTerm {
    fn identifier(&self) -> &TermId {
        &self.identifier
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn alt_term_ids(&self) -> &[TermId] {
        &self.alt_term_ids
    }

    fn is_obsolete(&self) -> bool {
        self.is_obsolete
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynonymCategory {
    Exact,
    Related,
    Broad,
    Narrow,
}

/// Synonym type as provided by Obographs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynonymType {
    LaypersonTerm,
    Abbreviation,
    UkSpelling,
    ObsoleteSynonym,
    PluralForm,
    AllelicRequirement,
}

impl SynonymType {
    pub fn is_obsolete(self) -> bool {
        self == SynonymType::ObsoleteSynonym
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synonym {
    pub name: String,
    #[serde(default)]
    pub category: Option<SynonymCategory>,
    #[serde(default)]
    pub synonym_type: Option<SynonymType>,
    #[serde(default)]
    pub xrefs: Vec<TermId>,
}

impl Synonym {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
            synonym_type: None,
            xrefs: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: SynonymCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_type(mut self, synonym_type: SynonymType) -> Self {
        self.synonym_type = Some(synonym_type);
        self
    }

    /// A synonym without a type is current
    pub fn is_obsolete(&self) -> bool {
        self.synonym_type.is_some_and(SynonymType::is_obsolete)
    }
}

/// Term with full metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    #[serde(flatten)]
    pub minimal: MinimalTerm,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<Synonym>,
    #[serde(default)]
    pub xrefs: Vec<TermId>,
}

impl Term {
    pub fn new(minimal: MinimalTerm) -> Self {
        Self {
            minimal,
            definition: None,
            comment: None,
            synonyms: Vec::new(),
            xrefs: Vec::new(),
        }
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_synonyms(mut self, synonyms: Vec<Synonym>) -> Self {
        self.synonyms = synonyms;
        self
    }

    pub fn with_xrefs(mut self, xrefs: Vec<TermId>) -> Self {
        self.xrefs = xrefs;
        self
    }

    pub fn current_synonyms(&self) -> impl Iterator<Item = &Synonym> {
        self.synonyms.iter().filter(|s| !s.is_obsolete())
    }

    pub fn obsolete_synonyms(&self) -> impl Iterator<Item = &Synonym> {
        self.synonyms.iter().filter(|s| s.is_obsolete())
    }
}

impl OntologyTerm for Term {
    fn identifier(&self) -> &TermId {
        &self.minimal.identifier
    }

    fn name(&self) -> &str {
        &self.minimal.name
    }

    fn alt_term_ids(&self) -> &[TermId] {
        &self.minimal.alt_term_ids
    }

    fn is_obsolete(&self) -> bool {
        self.minimal.is_obsolete
    }
}
