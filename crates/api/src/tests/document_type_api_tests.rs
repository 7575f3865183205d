// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Document type handler tests.

use super::helpers::{create_test_document_type, setup_persistence};
use crate::error::ApiError;
use crate::handlers;
use crate::request_response::{
    CreateDocumentTypeRequest, DocumentTypeInfo, DocumentTypeListResponse,
    ListDocumentTypesRequest, UpdateDocumentTypeRequest,
};
use doctrack_persistence::Persistence;

#[test]
fn test_create_document_type_rejects_empty_and_overlong_names() {
    let mut persistence: Persistence = setup_persistence();

    let empty = handlers::create_document_type(
        &mut persistence,
        CreateDocumentTypeRequest {
            name: String::from("  "),
        },
    );
    assert!(matches!(empty, Err(ApiError::InvalidInput { .. })));

    let overlong = handlers::create_document_type(
        &mut persistence,
        CreateDocumentTypeRequest {
            name: "x".repeat(101),
        },
    );
    assert!(matches!(overlong, Err(ApiError::InvalidInput { .. })));

    // 100 characters is exactly at the limit.
    let at_limit = handlers::create_document_type(
        &mut persistence,
        CreateDocumentTypeRequest {
            name: "x".repeat(100),
        },
    );
    assert!(at_limit.is_ok());
}

#[test]
fn test_create_document_type_duplicate_name_is_conflict() {
    let mut persistence: Persistence = setup_persistence();
    create_test_document_type(&mut persistence, "Work Contract");

    let result = handlers::create_document_type(
        &mut persistence,
        CreateDocumentTypeRequest {
            name: String::from("Work Contract"),
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::Conflict { rule, .. }) if rule == "unique_document_type_name"
    ));
}

#[test]
fn test_get_document_type_unknown_is_not_found() {
    let mut persistence: Persistence = setup_persistence();

    let result = handlers::get_document_type(&mut persistence, 7);

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { resource_type, .. }) if resource_type == "Document type"
    ));
}

#[test]
fn test_list_document_types_pagination_metadata() {
    let mut persistence: Persistence = setup_persistence();
    for name in ["RG", "CPF Card", "Diploma"] {
        create_test_document_type(&mut persistence, name);
    }

    let page: DocumentTypeListResponse = handlers::list_document_types(
        &mut persistence,
        ListDocumentTypesRequest {
            page: Some(1),
            limit: Some(2),
        },
    )
    .expect("Listing should succeed");

    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].name, "RG");
}

#[test]
fn test_update_document_type_rename_and_collision() {
    let mut persistence: Persistence = setup_persistence();
    let rg: DocumentTypeInfo = create_test_document_type(&mut persistence, "RG");
    let cnh: DocumentTypeInfo = create_test_document_type(&mut persistence, "CNH");

    // Renaming to its own name is a no-op, not a conflict.
    let unchanged: DocumentTypeInfo = handlers::update_document_type(
        &mut persistence,
        rg.id,
        UpdateDocumentTypeRequest {
            name: String::from("RG"),
        },
    )
    .expect("Self-rename should succeed");
    assert_eq!(unchanged.name, "RG");

    let collision = handlers::update_document_type(
        &mut persistence,
        cnh.id,
        UpdateDocumentTypeRequest {
            name: String::from("RG"),
        },
    );
    assert!(matches!(
        collision,
        Err(ApiError::Conflict { rule, .. }) if rule == "unique_document_type_name"
    ));
}

#[test]
fn test_delete_document_type_then_lookup_fails() {
    let mut persistence: Persistence = setup_persistence();
    let created: DocumentTypeInfo = create_test_document_type(&mut persistence, "Vaccination Card");

    handlers::delete_document_type(&mut persistence, created.id).expect("Delete should succeed");

    let result = handlers::get_document_type(&mut persistence, created.id);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}
