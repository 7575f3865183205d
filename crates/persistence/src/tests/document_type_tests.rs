// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Document type persistence tests.

use super::{create_test_document_type, setup_persistence};
use crate::{DocumentTypeData, DocumentTypePage, Persistence, PersistenceError};

#[test]
fn test_create_document_type_returns_persisted_row() {
    let mut persistence: Persistence = setup_persistence();

    let document_type: DocumentTypeData = persistence
        .create_document_type("Work Contract")
        .expect("Document type creation should succeed");

    assert!(document_type.id > 0);
    assert_eq!(document_type.name, "Work Contract");
    assert!(!document_type.created_at.is_empty());
}

#[test]
fn test_get_document_type_by_id_and_name() {
    let mut persistence: Persistence = setup_persistence();
    let created: DocumentTypeData = create_test_document_type(&mut persistence, "Medical Exam");

    let by_id: Option<DocumentTypeData> = persistence
        .get_document_type(created.id)
        .expect("Lookup should succeed");
    assert_eq!(by_id, Some(created.clone()));

    let by_name: Option<DocumentTypeData> = persistence
        .get_document_type_by_name("Medical Exam")
        .expect("Lookup should succeed");
    assert_eq!(by_name, Some(created));

    let missing: Option<DocumentTypeData> = persistence
        .get_document_type_by_name("Nonexistent")
        .expect("Lookup should succeed");
    assert!(missing.is_none());
}

#[test]
fn test_duplicate_document_type_name_rejected() {
    let mut persistence: Persistence = setup_persistence();
    create_test_document_type(&mut persistence, "Work Permit");

    let result: Result<DocumentTypeData, PersistenceError> =
        persistence.create_document_type("Work Permit");

    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_list_document_types_paginates_in_insertion_order() {
    let mut persistence: Persistence = setup_persistence();
    for name in ["RG", "CPF Card", "Proof of Address", "Diploma"] {
        create_test_document_type(&mut persistence, name);
    }

    let page: DocumentTypePage = persistence
        .list_document_types(1, 2)
        .expect("Listing should succeed");
    assert_eq!(page.total, 4);
    assert_eq!(page.rows.len(), 2);
    assert_eq!(page.rows[0].name, "CPF Card");
    assert_eq!(page.rows[1].name, "Proof of Address");
}

#[test]
fn test_list_all_document_types() {
    let mut persistence: Persistence = setup_persistence();
    create_test_document_type(&mut persistence, "RG");
    create_test_document_type(&mut persistence, "CTPS");

    let all: Vec<DocumentTypeData> = persistence
        .list_all_document_types()
        .expect("Listing should succeed");

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "RG");
    assert_eq!(all[1].name, "CTPS");
}

#[test]
fn test_update_document_type_rename() {
    let mut persistence: Persistence = setup_persistence();
    let created: DocumentTypeData = create_test_document_type(&mut persistence, "Drivers License");

    let updated: DocumentTypeData = persistence
        .update_document_type(created.id, "CNH")
        .expect("Update should succeed");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "CNH");
}

#[test]
fn test_update_document_type_to_taken_name_rejected() {
    let mut persistence: Persistence = setup_persistence();
    create_test_document_type(&mut persistence, "RG");
    let other: DocumentTypeData = create_test_document_type(&mut persistence, "CPF Card");

    let result: Result<DocumentTypeData, PersistenceError> =
        persistence.update_document_type(other.id, "RG");

    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_delete_document_type() {
    let mut persistence: Persistence = setup_persistence();
    let created: DocumentTypeData = create_test_document_type(&mut persistence, "Vaccination Card");

    let deleted: usize = persistence
        .delete_document_type(created.id)
        .expect("Delete should succeed");
    assert_eq!(deleted, 1);

    let gone: Option<DocumentTypeData> = persistence
        .get_document_type(created.id)
        .expect("Lookup should succeed");
    assert!(gone.is_none());
}
