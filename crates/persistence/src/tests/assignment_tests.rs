// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee-document assignment persistence tests.
//!
//! Covers assignment creation, the unique pair constraint, transactional
//! rollback, submission stamping, cascade deletes, and the pending-documents
//! filtered listing.

use super::{create_test_document_type, create_test_employee, setup_persistence};
use crate::{
    DocumentTypeData, EmployeeData, EmployeeDocumentData, EmployeeDocumentWithRelations,
    PendingDocumentFilter, PendingDocumentSet, Persistence, PersistenceError,
};

/// Seeds one employee and two document types.
fn setup_with_entities() -> (Persistence, EmployeeData, DocumentTypeData, DocumentTypeData) {
    let mut persistence: Persistence = setup_persistence();
    let employee: EmployeeData = create_test_employee(&mut persistence, "Helena Prado", 100);
    let rg: DocumentTypeData = create_test_document_type(&mut persistence, "RG");
    let cpf_card: DocumentTypeData = create_test_document_type(&mut persistence, "CPF Card");
    (persistence, employee, rg, cpf_card)
}

#[test]
fn test_assign_creates_pending_rows_in_request_order() {
    let (mut persistence, employee, rg, cpf_card) = setup_with_entities();

    let assigned: Vec<EmployeeDocumentWithRelations> = persistence
        .assign_document_types(employee.id, &[rg.id, cpf_card.id])
        .expect("Assignment should succeed");

    assert_eq!(assigned.len(), 2);
    assert_eq!(assigned[0].document_type_name, "RG");
    assert_eq!(assigned[1].document_type_name, "CPF Card");
    for row in &assigned {
        assert_eq!(row.employee_id, employee.id);
        assert_eq!(row.employee_name, "Helena Prado");
        assert_eq!(row.status, "PENDING");
        assert!(row.submitted_at.is_none());
    }
}

#[test]
fn test_assign_duplicate_pair_rejected() {
    let (mut persistence, employee, rg, _) = setup_with_entities();

    persistence
        .assign_document_types(employee.id, &[rg.id])
        .expect("First assignment should succeed");

    let result: Result<Vec<EmployeeDocumentWithRelations>, PersistenceError> =
        persistence.assign_document_types(employee.id, &[rg.id]);

    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_assign_rolls_back_on_partial_failure() {
    let (mut persistence, employee, rg, cpf_card) = setup_with_entities();

    persistence
        .assign_document_types(employee.id, &[cpf_card.id])
        .expect("Seed assignment should succeed");

    // Second element collides, so the first must roll back too.
    let result: Result<Vec<EmployeeDocumentWithRelations>, PersistenceError> =
        persistence.assign_document_types(employee.id, &[rg.id, cpf_card.id]);
    assert!(result.is_err());

    let rg_row: Option<EmployeeDocumentData> = persistence
        .find_employee_document(employee.id, rg.id)
        .expect("Lookup should succeed");
    assert!(rg_row.is_none());
}

#[test]
fn test_assign_unknown_document_type_violates_foreign_key() {
    let (mut persistence, employee, _, _) = setup_with_entities();

    let result: Result<Vec<EmployeeDocumentWithRelations>, PersistenceError> =
        persistence.assign_document_types(employee.id, &[9999]);

    assert!(matches!(
        result,
        Err(PersistenceError::ForeignKeyViolation(_))
    ));
}

#[test]
fn test_unassign_deletes_matching_pairs_only() {
    let (mut persistence, employee, rg, cpf_card) = setup_with_entities();
    persistence
        .assign_document_types(employee.id, &[rg.id, cpf_card.id])
        .expect("Assignment should succeed");

    let deleted: usize = persistence
        .unassign_document_types(employee.id, &[rg.id])
        .expect("Unassignment should succeed");
    assert_eq!(deleted, 1);

    let remaining: Vec<EmployeeDocumentWithRelations> = persistence
        .list_documents_for_employee(employee.id)
        .expect("Listing should succeed");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].document_type_id, cpf_card.id);
}

#[test]
fn test_unassign_missing_pair_deletes_nothing() {
    let (mut persistence, employee, rg, _) = setup_with_entities();

    let deleted: usize = persistence
        .unassign_document_types(employee.id, &[rg.id])
        .expect("Unassignment should succeed");

    assert_eq!(deleted, 0);
}

#[test]
fn test_submit_document_stamps_submitted_at() {
    let (mut persistence, employee, rg, _) = setup_with_entities();
    persistence
        .assign_document_types(employee.id, &[rg.id])
        .expect("Assignment should succeed");

    let submitted: EmployeeDocumentData = persistence
        .submit_document(employee.id, rg.id)
        .expect("Submission should succeed");

    assert_eq!(submitted.status, "SUBMITTED");
    assert!(submitted.submitted_at.is_some());
}

#[test]
fn test_submit_unassigned_pair_returns_not_found() {
    let (mut persistence, employee, rg, _) = setup_with_entities();

    let result: Result<EmployeeDocumentData, PersistenceError> =
        persistence.submit_document(employee.id, rg.id);

    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_submit_twice_returns_invalid_transition() {
    let (mut persistence, employee, rg, _) = setup_with_entities();
    persistence
        .assign_document_types(employee.id, &[rg.id])
        .expect("Assignment should succeed");
    persistence
        .submit_document(employee.id, rg.id)
        .expect("First submission should succeed");

    // The update filters on PENDING, so the second submission matches no
    // rows even though the pair exists.
    let result: Result<EmployeeDocumentData, PersistenceError> =
        persistence.submit_document(employee.id, rg.id);

    assert!(matches!(
        result,
        Err(PersistenceError::InvalidTransition(_))
    ));
}

#[test]
fn test_delete_employee_cascades_to_assignments() {
    let (mut persistence, employee, rg, cpf_card) = setup_with_entities();
    persistence
        .assign_document_types(employee.id, &[rg.id, cpf_card.id])
        .expect("Assignment should succeed");

    persistence
        .delete_employee(employee.id)
        .expect("Delete should succeed");

    let orphan: Option<EmployeeDocumentData> = persistence
        .find_employee_document(employee.id, rg.id)
        .expect("Lookup should succeed");
    assert!(orphan.is_none());
}

#[test]
fn test_delete_document_type_cascades_to_assignments() {
    let (mut persistence, employee, rg, _) = setup_with_entities();
    persistence
        .assign_document_types(employee.id, &[rg.id])
        .expect("Assignment should succeed");

    persistence
        .delete_document_type(rg.id)
        .expect("Delete should succeed");

    let orphan: Option<EmployeeDocumentData> = persistence
        .find_employee_document(employee.id, rg.id)
        .expect("Lookup should succeed");
    assert!(orphan.is_none());
}

#[test]
fn test_list_pending_documents_excludes_submitted() {
    let (mut persistence, employee, rg, cpf_card) = setup_with_entities();
    persistence
        .assign_document_types(employee.id, &[rg.id, cpf_card.id])
        .expect("Assignment should succeed");
    persistence
        .submit_document(employee.id, rg.id)
        .expect("Submission should succeed");

    let pending: PendingDocumentSet = persistence
        .list_pending_documents(&PendingDocumentFilter::default())
        .expect("Listing should succeed");

    assert_eq!(pending.total, 1);
    assert_eq!(pending.rows.len(), 1);
    assert_eq!(pending.rows[0].document_type_id, cpf_card.id);
    assert_eq!(pending.rows[0].status, "PENDING");
}

#[test]
fn test_list_pending_documents_filters_by_employee_and_type() {
    let (mut persistence, first, rg, cpf_card) = setup_with_entities();
    let second: EmployeeData = create_test_employee(&mut persistence, "Igor Teles", 101);
    persistence
        .assign_document_types(first.id, &[rg.id, cpf_card.id])
        .expect("Assignment should succeed");
    persistence
        .assign_document_types(second.id, &[rg.id])
        .expect("Assignment should succeed");

    let by_employee: PendingDocumentSet = persistence
        .list_pending_documents(&PendingDocumentFilter {
            employee_id: Some(second.id),
            document_type_id: None,
        })
        .expect("Listing should succeed");
    assert_eq!(by_employee.total, 1);
    assert_eq!(by_employee.rows[0].employee_id, second.id);

    let by_type: PendingDocumentSet = persistence
        .list_pending_documents(&PendingDocumentFilter {
            employee_id: None,
            document_type_id: Some(rg.id),
        })
        .expect("Listing should succeed");
    assert_eq!(by_type.total, 2);
    assert!(by_type.rows.iter().all(|r| r.document_type_id == rg.id));

    let by_both: PendingDocumentSet = persistence
        .list_pending_documents(&PendingDocumentFilter {
            employee_id: Some(first.id),
            document_type_id: Some(cpf_card.id),
        })
        .expect("Listing should succeed");
    assert_eq!(by_both.total, 1);
    assert_eq!(by_both.rows[0].employee_id, first.id);
    assert_eq!(by_both.rows[0].document_type_id, cpf_card.id);
}

#[test]
fn test_list_pending_documents_preserves_insertion_order() {
    let (mut persistence, first, rg, cpf_card) = setup_with_entities();
    let second: EmployeeData = create_test_employee(&mut persistence, "Joana Brito", 102);

    persistence
        .assign_document_types(first.id, &[rg.id])
        .expect("Assignment should succeed");
    persistence
        .assign_document_types(second.id, &[cpf_card.id])
        .expect("Assignment should succeed");
    persistence
        .assign_document_types(first.id, &[cpf_card.id])
        .expect("Assignment should succeed");

    let pending: PendingDocumentSet = persistence
        .list_pending_documents(&PendingDocumentFilter::default())
        .expect("Listing should succeed");

    let order: Vec<i64> = pending.rows.iter().map(|r| r.employee_id).collect();
    assert_eq!(order, vec![first.id, second.id, first.id]);
}
