//! Validator and runner tests over the HPO slice

mod common;

use common::*;
use pretty_assertions::assert_eq;

use ontograph_core::features::validation::{
    ANNOTATION_PROPAGATION_CATEGORY, OBSOLETE_TERM_ID_CATEGORY, PHENOTYPIC_ABNORMALITY_CATEGORY,
    SUBTREE_MEMBERSHIP_CATEGORY,
};
use ontograph_core::{
    AnnotationPropagationValidator, ObsoleteTermIdsValidator, RuleValidator,
    SubtreeMembershipValidator, ValidationLevel, ValidationRunner,
};

// ============================================================
// Obsolete identifiers
// ============================================================

#[test]
fn test_obsolete_id_names_its_replacement() {
    let ontology = hpo_ontology();
    let validator = ObsoleteTermIdsValidator::new(&ontology);

    let results = validator.validate(&tids(&[SEIZURE_ALT, ARACHNODACTYLY]));

    assert_eq!(results.len(), 1);
    let finding = &results.results()[0];
    assert_eq!(finding.level, ValidationLevel::Warning);
    assert_eq!(finding.category, OBSOLETE_TERM_ID_CATEGORY);
    assert_eq!(finding.term_ids, tids(&[SEIZURE_ALT, SEIZURE]));
    assert_eq!(
        finding.message,
        "Using the obsolete HP:0002279 instead of HP:0001250 for Seizure"
    );
    assert!(results.is_ok());
}

#[test]
fn test_obsolete_validator_ignores_unknown_ids() {
    let ontology = hpo_ontology();
    let results = ObsoleteTermIdsValidator::new(&ontology).validate(&tids(&["HP:9999999", OBSOLETE_TERM]));
    assert!(results.is_empty());
}

#[test]
fn test_obsolete_validator_without_names_uses_primary_id() {
    let ontology = hpo_ontology();
    let results = ObsoleteTermIdsValidator::new(ontology.graph()).validate(&tids(&[ARACHNODACTYLY_ALT]));
    assert_eq!(
        results.results()[0].message,
        "Using the obsolete HP:0001519 instead of HP:0001166 for HP:0001166"
    );
}

// ============================================================
// Subtree membership
// ============================================================

#[test]
fn test_terms_outside_phenotypic_abnormality_are_errors() {
    let ontology = hpo_ontology();
    let validator = SubtreeMembershipValidator::phenotypic_abnormality(&ontology).unwrap();

    let results = validator.validate(&tids(&[
        SEIZURE,
        AUTOSOMAL_DOMINANT,
        PHENOTYPIC_ABNORMALITY,
        ONSET,
        "HP:9999999",
    ]));

    assert!(!results.is_ok());
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.category == PHENOTYPIC_ABNORMALITY_CATEGORY));
    assert_eq!(results.results()[0].term_ids, tids(&[AUTOSOMAL_DOMINANT]));
    assert_eq!(
        results.results()[0].message,
        "Autosomal dominant inheritance [HP:0000006] is not a descendant of Phenotypic abnormality [HP:0000118]"
    );
    assert_eq!(results.results()[1].term_ids, tids(&[ONSET]));
}

#[test]
fn test_subtree_membership_maps_alternate_ids() {
    let ontology = hpo_ontology();
    let validator = SubtreeMembershipValidator::new(&ontology, &tid(NERVOUS_SYSTEM)).unwrap();

    assert!(validator.validate(&tids(&[SEIZURE_ALT])).is_empty());

    let results = validator.validate(&tids(&[ARACHNODACTYLY_ALT]));
    assert_eq!(results.results()[0].category, SUBTREE_MEMBERSHIP_CATEGORY);
    assert_eq!(results.results()[0].term_ids, tids(&[ARACHNODACTYLY]));
}

#[test]
fn test_subtree_root_must_exist() {
    let graph = toy_graph();
    let err = SubtreeMembershipValidator::new(&graph, &tid("T:404")).err().unwrap();
    assert!(err.is_not_found());
    assert!(SubtreeMembershipValidator::phenotypic_abnormality(&graph).is_err());
}

// ============================================================
// Annotation propagation
// ============================================================

#[test]
fn test_term_with_its_ancestor_is_one_error() {
    let ontology = hpo_ontology();
    let validator = AnnotationPropagationValidator::new(&ontology);

    let results = validator.validate(&tids(&[SEIZURE, FOCAL_CLONIC_SEIZURE]));

    assert_eq!(results.len(), 1);
    let finding = &results.results()[0];
    assert_eq!(finding.level, ValidationLevel::Error);
    assert_eq!(finding.category, ANNOTATION_PROPAGATION_CATEGORY);
    assert_eq!(finding.term_ids, tids(&[FOCAL_CLONIC_SEIZURE, SEIZURE]));
    assert_eq!(
        finding.message,
        "Terms should not contain both Focal clonic seizure [HP:0002266] and its ancestor Seizure [HP:0001250]"
    );
}

#[test]
fn test_unrelated_terms_pass() {
    let ontology = hpo_ontology();
    let results = AnnotationPropagationValidator::new(&ontology).validate(&tids(&[SEIZURE, ARACHNODACTYLY]));
    assert!(results.is_ok());
    assert!(results.is_empty());
}

#[test]
fn test_every_pair_is_checked() {
    let ontology = hpo_ontology();
    let results = AnnotationPropagationValidator::new(&ontology).validate(&tids(&[
        NERVOUS_SYSTEM,
        ARACHNODACTYLY,
        FOCAL_CLONIC_SEIZURE,
        SEIZURE_ALT,
    ]));

    let pairs: Vec<_> = results.iter().map(|r| r.term_ids.clone()).collect();
    assert_eq!(
        pairs,
        vec![
            tids(&[FOCAL_CLONIC_SEIZURE, NERVOUS_SYSTEM]),
            tids(&[SEIZURE, NERVOUS_SYSTEM]),
            tids(&[FOCAL_CLONIC_SEIZURE, SEIZURE]),
        ]
    );
}

#[test]
fn test_alternate_and_primary_id_are_not_a_violation() {
    let ontology = hpo_ontology();
    let results = AnnotationPropagationValidator::new(&ontology).validate(&tids(&[SEIZURE, SEIZURE_ALT]));
    assert!(results.is_empty());
}

// ============================================================
// Runner
// ============================================================

#[test]
fn test_runner_concatenates_in_registration_order() {
    let ontology = hpo_ontology();
    let runner = ValidationRunner::default()
        .with(ObsoleteTermIdsValidator::new(&ontology))
        .with(SubtreeMembershipValidator::phenotypic_abnormality(&ontology).unwrap())
        .with(AnnotationPropagationValidator::new(&ontology));
    assert_eq!(runner.len(), 3);

    let results = runner.validate_all(&tids(&[SEIZURE_ALT, FOCAL_CLONIC_SEIZURE, MODE_OF_INHERITANCE]));

    let categories: Vec<_> = results.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(
        categories,
        vec![
            OBSOLETE_TERM_ID_CATEGORY,
            PHENOTYPIC_ABNORMALITY_CATEGORY,
            ANNOTATION_PROPAGATION_CATEGORY,
        ]
    );
    assert_eq!(results.warnings().count(), 1);
    assert_eq!(results.errors().count(), 2);
    assert!(!results.is_ok());
}

#[test]
fn test_warnings_alone_do_not_fail_validation() {
    let ontology = hpo_ontology();
    let runner = ValidationRunner::default()
        .with(ObsoleteTermIdsValidator::new(&ontology))
        .with(AnnotationPropagationValidator::new(&ontology));

    let results = runner.validate_all(&tids(&[ARACHNODACTYLY_ALT, SEIZURE]));
    assert_eq!(results.len(), 1);
    assert!(results.is_ok());
}

#[test]
fn test_results_serialize_as_finding_list() {
    let ontology = hpo_ontology();
    let results = AnnotationPropagationValidator::new(&ontology).validate(&tids(&[SEIZURE, FOCAL_CLONIC_SEIZURE]));

    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json[0]["level"], "error");
    assert_eq!(json[0]["category"], ANNOTATION_PROPAGATION_CATEGORY);
    assert_eq!(json[0]["term_ids"][1], SEIZURE);
}
