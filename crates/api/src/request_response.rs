// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};

/// Default page size for paginated listings.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Maximum page size for paginated listings.
pub const MAX_PAGE_LIMIT: i64 = 100;

// ============================================================================
// Employees
// ============================================================================

/// API request to create a new employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// The employee's full name.
    pub name: String,
    /// The employee's CPF; punctuation is accepted and stripped.
    pub cpf: String,
    /// The hire date as ISO 8601 (`YYYY-MM-DD`).
    pub hired_at: String,
}

/// API request to update an employee. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub hired_at: Option<String>,
}

/// A single employee as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInfo {
    pub id: i64,
    pub name: String,
    /// Canonical 11-digit CPF.
    pub cpf: String,
    pub hired_at: String,
    pub created_at: String,
    pub updated_at: String,
}

/// API request parameters for the employee listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEmployeesRequest {
    /// 1-based page number.
    pub page: Option<i64>,
    /// Page size, capped at [`MAX_PAGE_LIMIT`].
    pub limit: Option<i64>,
}

/// One page of employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    pub data: Vec<EmployeeInfo>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

/// API response for a successful employee deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteEmployeeResponse {
    pub employee_id: i64,
    pub message: String,
}

// ============================================================================
// Document Types
// ============================================================================

/// API request to create a new document type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDocumentTypeRequest {
    /// The unique document type name.
    pub name: String,
}

/// API request to rename a document type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDocumentTypeRequest {
    pub name: String,
}

/// A single document type as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTypeInfo {
    pub id: i64,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// API request parameters for the document type listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDocumentTypesRequest {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// One page of document types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTypeListResponse {
    pub data: Vec<DocumentTypeInfo>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

/// API response for a successful document type deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteDocumentTypeResponse {
    pub document_type_id: i64,
    pub message: String,
}

// ============================================================================
// Assignments
// ============================================================================

/// API request to assign document types to an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignDocumentTypesRequest {
    /// The document types to assign; must be non-empty and duplicate-free.
    pub document_type_ids: Vec<i64>,
}

/// One assignment as seen from an employee's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDetail {
    pub document_type_id: i64,
    pub document_type_name: String,
    /// `PENDING` or `SUBMITTED`.
    pub status: String,
    pub submitted_at: Option<String>,
}

/// API response for a successful assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignDocumentTypesResponse {
    pub employee_id: i64,
    /// The newly created assignments, in request order.
    pub documents: Vec<DocumentDetail>,
    pub message: String,
}

/// API request to unassign document types from an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnassignDocumentTypesRequest {
    pub document_type_ids: Vec<i64>,
}

/// API response for a successful unassignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnassignDocumentTypesResponse {
    pub employee_id: i64,
    /// The number of assignments actually removed.
    pub removed: i64,
    pub message: String,
}

/// API response for a successful document submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitDocumentResponse {
    pub employee_id: i64,
    pub document_type_id: i64,
    pub status: String,
    pub submitted_at: Option<String>,
    pub message: String,
}

/// The full document status picture for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDocumentStatusResponse {
    pub employee_id: i64,
    pub employee_name: String,
    /// Every assignment for the employee, in assignment order.
    pub documents: Vec<DocumentDetail>,
}

// ============================================================================
// Pending Documents Listing
// ============================================================================

/// API request parameters for the grouped pending-documents listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPendingDocumentsRequest {
    /// 1-based page number over employee groups.
    pub page: Option<i64>,
    /// Page size in employee groups, capped at [`MAX_PAGE_LIMIT`].
    pub limit: Option<i64>,
    /// Restrict to a single employee.
    pub employee_id: Option<i64>,
    /// Restrict to a single document type.
    pub document_type_id: Option<i64>,
}

/// One pending document inside an employee group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDocumentInfo {
    pub document_type_id: i64,
    pub document_type_name: String,
    /// When the document was assigned.
    pub assigned_at: String,
}

/// One employee together with every document they still owe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingEmployeeGroup {
    pub employee_id: i64,
    pub employee_name: String,
    pub employee_cpf: String,
    pub pending_documents: Vec<PendingDocumentInfo>,
}

/// One page of employee groups with pending documents.
///
/// Pagination counts employee groups, not individual documents; an employee
/// never straddles a page boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDocumentsPage {
    pub data: Vec<PendingEmployeeGroup>,
    /// Total number of employees with at least one matching pending document.
    pub total_employees: i64,
    /// Total number of matching pending documents across all employees.
    pub total_pending_documents: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}
