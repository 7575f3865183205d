// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee-document assignment mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use doctrack_domain::DocumentStatus;
use tracing::{debug, info};

use crate::data_models::{
    EmployeeDocumentData, EmployeeDocumentJoinRow, EmployeeDocumentWithRelations,
};
use crate::diesel_schema::{document_types, employee_documents, employees};
use crate::error::PersistenceError;

/// Queryable struct for re-reading an assignment after mutation.
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

backend_fn! {
/// Creates one PENDING assignment per requested document type.
///
/// Inserts and the follow-up read run in one transaction, so a concurrent
/// assign for the same pair surfaces as a `UniqueViolation` on the
/// composite key rather than a partial write.
///
/// Returns the created rows joined with employee and document type names,
/// in insertion order.
///
/// # Errors
///
/// Returns `UniqueViolation` if any pair is already assigned, or another
/// error if the insert fails.
pub fn assign_document_types(
    conn: &mut _,
    employee_id: i64,
    document_type_ids: &[i64],
) -> Result<Vec<EmployeeDocumentWithRelations>, PersistenceError> {
    info!(
        employee_id,
        count = document_type_ids.len(),
        "Assigning document types to employee"
    );

    conn.transaction(|conn| {
        for document_type_id in document_type_ids {
            diesel::insert_into(employee_documents::table)
                .values((
                    employee_documents::employee_id.eq(employee_id),
                    employee_documents::document_type_id.eq(*document_type_id),
                    employee_documents::status.eq(DocumentStatus::Pending.as_str()),
                ))
                .execute(conn)?;
        }

        let rows: Vec<EmployeeDocumentJoinRow> = employee_documents::table
            .inner_join(employees::table)
            .inner_join(document_types::table)
            .filter(employee_documents::employee_id.eq(employee_id))
            .filter(employee_documents::document_type_id.eq_any(document_type_ids.iter().copied()))
            .order(employee_documents::id.asc())
            .select((
                employee_documents::id,
                employee_documents::employee_id,
                employees::name,
                employees::cpf,
                employee_documents::document_type_id,
                document_types::name,
                employee_documents::status,
                employee_documents::submitted_at,
                employee_documents::created_at,
            ))
            .load(conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    })
}
}

backend_fn! {
/// Deletes assignments matching (employee, any of the document types).
///
/// Bulk-delete semantics: pairs with no assignment simply match nothing.
/// Returns the number of rows deleted, which may be zero.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn unassign_document_types(
    conn: &mut _,
    employee_id: i64,
    document_type_ids: &[i64],
) -> Result<usize, PersistenceError> {
    info!(
        employee_id,
        count = document_type_ids.len(),
        "Unassigning document types from employee"
    );

    let affected: usize = diesel::delete(employee_documents::table)
        .filter(employee_documents::employee_id.eq(employee_id))
        .filter(employee_documents::document_type_id.eq_any(document_type_ids.iter().copied()))
        .execute(conn)?;

    debug!(affected, "Unassign complete");
    Ok(affected)
}
}

backend_fn! {
/// Marks an assignment SUBMITTED and stamps `submitted_at`.
///
/// The update filters on PENDING status, so the transition is enforced at
/// the storage level: a row that is already SUBMITTED matches nothing. The
/// update and the follow-up read run in one transaction.
///
/// # Errors
///
/// Returns `NotFound` if the pair has no assignment row,
/// `InvalidTransition` if the assignment was already submitted, or another
/// error if the update fails.
pub fn submit_document(
    conn: &mut _,
    employee_id: i64,
    document_type_id: i64,
) -> Result<EmployeeDocumentData, PersistenceError> {
    info!(employee_id, document_type_id, "Submitting document");

    conn.transaction(|conn| {
        let affected: usize = diesel::update(employee_documents::table)
            .filter(employee_documents::employee_id.eq(employee_id))
            .filter(employee_documents::document_type_id.eq(document_type_id))
            .filter(employee_documents::status.eq(DocumentStatus::Pending.as_str()))
            .set((
                employee_documents::status.eq(DocumentStatus::Submitted.as_str()),
                employee_documents::submitted_at.eq(diesel::dsl::sql::<
                    diesel::sql_types::Nullable<diesel::sql_types::Text>,
                >("CURRENT_TIMESTAMP")),
                employee_documents::updated_at
                    .eq(diesel::dsl::sql::<diesel::sql_types::Text>("CURRENT_TIMESTAMP")),
            ))
            .execute(conn)?;

        if affected == 0 {
            // Zero matches is either a missing pair or one that has already
            // left PENDING; distinguish the two for the caller.
            let existing: Result<EmployeeDocumentRow, diesel::result::Error> =
                employee_documents::table
                    .filter(employee_documents::employee_id.eq(employee_id))
                    .filter(employee_documents::document_type_id.eq(document_type_id))
                    .select(EmployeeDocumentRow::as_select())
                    .first(conn);
            return match existing {
                Ok(_) => Err(PersistenceError::InvalidTransition(format!(
                    "Document already submitted for employee {employee_id} and document type {document_type_id}"
                ))),
                Err(diesel::result::Error::NotFound) => Err(PersistenceError::NotFound(format!(
                    "No assignment for employee {employee_id} and document type {document_type_id}"
                ))),
                Err(e) => Err(PersistenceError::from(e)),
            };
        }

        let row: EmployeeDocumentRow = employee_documents::table
            .filter(employee_documents::employee_id.eq(employee_id))
            .filter(employee_documents::document_type_id.eq(document_type_id))
            .select(EmployeeDocumentRow::as_select())
            .first(conn)?;

        Ok(row.into())
    })
}
}
