// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the DocTrack document-tracking service.
//!
//! This crate sits between the HTTP server and the persistence layer. It
//! owns the request/response DTOs, translates domain and persistence errors
//! into the API error contract, and enforces the service-level rules that
//! span more than one table: CPF uniqueness, document type name uniqueness,
//! ordered precondition checks on assignment and submission, and the
//! employee-grouped pending-documents listing.
//!
//! The handlers here are transport-agnostic plain functions. The server
//! crate maps them onto routes and maps [`ApiError`] onto HTTP statuses.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod mapper;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error, translate_persistence_error};
pub use handlers::{
    assign_document_types, create_document_type, create_employee, delete_document_type,
    delete_employee, get_document_type, get_employee, get_employee_document_status,
    list_document_types, list_employees, list_pending_documents, submit_document,
    unassign_document_types, update_document_type, update_employee,
};
pub use request_response::{
    AssignDocumentTypesRequest, AssignDocumentTypesResponse, CreateDocumentTypeRequest,
    CreateEmployeeRequest, DeleteDocumentTypeResponse, DeleteEmployeeResponse, DocumentDetail,
    DocumentTypeInfo, DocumentTypeListResponse, EmployeeDocumentStatusResponse, EmployeeInfo,
    EmployeeListResponse, ListDocumentTypesRequest, ListEmployeesRequest,
    ListPendingDocumentsRequest, PendingDocumentInfo, PendingDocumentsPage, PendingEmployeeGroup,
    SubmitDocumentResponse, UnassignDocumentTypesRequest, UnassignDocumentTypesResponse,
    UpdateDocumentTypeRequest, UpdateEmployeeRequest,
};
