// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared helpers for API handler tests.

use doctrack_domain::generate_cpf;
use doctrack_persistence::Persistence;

use crate::handlers;
use crate::request_response::{
    AssignDocumentTypesRequest, CreateDocumentTypeRequest, CreateEmployeeRequest, DocumentTypeInfo,
    EmployeeInfo,
};

pub fn setup_persistence() -> Persistence {
    Persistence::new_in_memory().expect("In-memory database should initialize")
}

/// Creates an employee through the API with a deterministic valid CPF.
pub fn create_test_employee(persistence: &mut Persistence, name: &str, seed: u64) -> EmployeeInfo {
    handlers::create_employee(
        persistence,
        CreateEmployeeRequest {
            name: String::from(name),
            cpf: generate_cpf(seed),
            hired_at: String::from("2024-03-01"),
        },
    )
    .expect("Employee creation should succeed")
}

pub fn create_test_document_type(persistence: &mut Persistence, name: &str) -> DocumentTypeInfo {
    handlers::create_document_type(
        persistence,
        CreateDocumentTypeRequest {
            name: String::from(name),
        },
    )
    .expect("Document type creation should succeed")
}

/// Assigns the given document types through the API.
pub fn assign(persistence: &mut Persistence, employee_id: i64, document_type_ids: Vec<i64>) {
    handlers::assign_document_types(
        persistence,
        employee_id,
        AssignDocumentTypesRequest { document_type_ids },
    )
    .expect("Assignment should succeed");
}
