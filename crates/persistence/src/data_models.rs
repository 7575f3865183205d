// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Serializable representation of an employee row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeData {
    pub id: i64,
    pub name: String,
    /// Canonical 11-digit CPF.
    pub cpf: String,
    /// Hire date as ISO 8601 (`YYYY-MM-DD`) text.
    pub hired_at: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Serializable representation of a document type row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTypeData {
    pub id: i64,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Serializable representation of an employee-document assignment row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDocumentData {
    pub id: i64,
    pub employee_id: i64,
    pub document_type_id: i64,
    /// Persisted status string (`PENDING` or `SUBMITTED`).
    pub status: String,
    /// Submission timestamp; set exactly once, on submission.
    pub submitted_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// An assignment row joined with its employee and document type.
///
/// Produced only by join queries, so the related names are always present.
/// The mapper layer relies on this: a value of this type cannot be missing
/// its relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDocumentWithRelations {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub employee_cpf: String,
    pub document_type_id: i64,
    pub document_type_name: String,
    pub status: String,
    pub submitted_at: Option<String>,
    pub created_at: String,
}

/// Optional filters for the pending-documents listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingDocumentFilter {
    /// Restrict to a single employee.
    pub employee_id: Option<i64>,
    /// Restrict to a single document type.
    pub document_type_id: Option<i64>,
}

/// The full filtered set of pending assignment rows plus the raw row count.
///
/// No row-level pagination is applied here; grouping and pagination over
/// employees happen in the service layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDocumentSet {
    /// Every matching pending row, in insertion order.
    pub rows: Vec<EmployeeDocumentWithRelations>,
    /// Total number of matching pending rows.
    pub total: i64,
}

/// One page of employee rows plus the total row count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeePage {
    pub rows: Vec<EmployeeData>,
    pub total: i64,
}

/// One page of document type rows plus the total row count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTypePage {
    pub rows: Vec<DocumentTypeData>,
    pub total: i64,
}

/// Type alias for assignment rows joined with employee and document type.
pub type EmployeeDocumentJoinRow = (
    i64,
    i64,
    String,
    String,
    i64,
    String,
    String,
    Option<String>,
    String,
);

impl From<EmployeeDocumentJoinRow> for EmployeeDocumentWithRelations {
    fn from(row: EmployeeDocumentJoinRow) -> Self {
        Self {
            id: row.0,
            employee_id: row.1,
            employee_name: row.2,
            employee_cpf: row.3,
            document_type_id: row.4,
            document_type_name: row.5,
            status: row.6,
            submitted_at: row.7,
            created_at: row.8,
        }
    }
}
