// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee-document assignment queries.
//!
//! Join queries project assignment rows together with their employee and
//! document type, so callers never see an assignment without its relations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use doctrack_domain::DocumentStatus;
use tracing::debug;

use crate::data_models::{
    EmployeeDocumentData, EmployeeDocumentJoinRow, EmployeeDocumentWithRelations,
    PendingDocumentFilter, PendingDocumentSet,
};
use crate::diesel_schema::{document_types, employee_documents, employees};
use crate::error::PersistenceError;

/// Diesel Queryable struct for bare assignment rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = employee_documents)]
struct EmployeeDocumentRow {
    id: i64,
    employee_id: i64,
    document_type_id: i64,
    status: String,
    submitted_at: Option<String>,
    created_at: String,
    updated_at: String,
}

impl From<EmployeeDocumentRow> for EmployeeDocumentData {
    fn from(row: EmployeeDocumentRow) -> Self {
        Self {
            id: row.id,
            employee_id: row.employee_id,
            document_type_id: row.document_type_id,
            status: row.status,
            submitted_at: row.submitted_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// The join projection shared by every relation-bearing query.
macro_rules! join_columns {
    () => {
        (
            employee_documents::id,
            employee_documents::employee_id,
            employees::name,
            employees::cpf,
            employee_documents::document_type_id,
            document_types::name,
            employee_documents::status,
            employee_documents::submitted_at,
            employee_documents::created_at,
        )
    };
}

backend_fn! {
/// Retrieves the assignment row for an (employee, document type) pair.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the pair has no assignment.
pub fn find_employee_document(
    conn: &mut _,
    employee_id: i64,
    document_type_id: i64,
) -> Result<Option<EmployeeDocumentData>, PersistenceError> {
    debug!(
        employee_id,
        document_type_id, "Looking up employee-document assignment"
    );

    let result: Result<EmployeeDocumentRow, diesel::result::Error> = employee_documents::table
        .filter(employee_documents::employee_id.eq(employee_id))
        .filter(employee_documents::document_type_id.eq(document_type_id))
        .select(EmployeeDocumentRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves every assignment for one employee, joined with relations.
///
/// Rows come back in insertion order (ascending assignment ID), which is
/// the ordering contract of the status report.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_documents_for_employee(
    conn: &mut _,
    employee_id: i64,
) -> Result<Vec<EmployeeDocumentWithRelations>, PersistenceError> {
    debug!(employee_id, "Listing documents for employee");

    let rows: Vec<EmployeeDocumentJoinRow> = employee_documents::table
        .inner_join(employees::table)
        .inner_join(document_types::table)
        .filter(employee_documents::employee_id.eq(employee_id))
        .order(employee_documents::id.asc())
        .select(join_columns!())
        .load(conn)?;

    Ok(rows.into_iter().map(Into::into).collect())
}
}

backend_fn! {
/// Retrieves the full filtered set of PENDING assignment rows.
///
/// No row-level pagination is applied: the service groups the full set by
/// employee and paginates the groups, so a row-level page can never split
/// one employee's documents across page boundaries. The raw row count is
/// returned alongside the rows.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_pending_documents(
    conn: &mut _,
    filter: &PendingDocumentFilter,
) -> Result<PendingDocumentSet, PersistenceError> {
    debug!(
        employee_id = ?filter.employee_id,
        document_type_id = ?filter.document_type_id,
        "Listing pending documents"
    );

    let mut query = employee_documents::table
        .inner_join(employees::table)
        .inner_join(document_types::table)
        .filter(employee_documents::status.eq(DocumentStatus::Pending.as_str()))
        .order(employee_documents::id.asc())
        .select(join_columns!())
        .into_boxed();

    if let Some(employee_id) = filter.employee_id {
        query = query.filter(employee_documents::employee_id.eq(employee_id));
    }
    if let Some(document_type_id) = filter.document_type_id {
        query = query.filter(employee_documents::document_type_id.eq(document_type_id));
    }

    let rows: Vec<EmployeeDocumentJoinRow> = query.load(conn)?;
    let total: i64 = i64::try_from(rows.len()).unwrap_or(i64::MAX);

    Ok(PendingDocumentSet {
        rows: rows.into_iter().map(Into::into).collect(),
        total,
    })
}
}
