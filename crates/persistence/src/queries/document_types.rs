// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Document type queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::{DocumentTypeData, DocumentTypePage};
use crate::diesel_schema::document_types;
use crate::error::PersistenceError;

/// Diesel Queryable struct for document type rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = document_types)]
struct DocumentTypeRow {
    id: i64,
    name: String,
    created_at: String,
    updated_at: String,
}

impl From<DocumentTypeRow> for DocumentTypeData {
    fn from(row: DocumentTypeRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

backend_fn! {
/// Retrieves a document type by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the document type is not found.
pub fn get_document_type_by_id(
    conn: &mut _,
    document_type_id: i64,
) -> Result<Option<DocumentTypeData>, PersistenceError> {
    debug!("Looking up document type by ID: {}", document_type_id);

    let result: Result<DocumentTypeRow, diesel::result::Error> = document_types::table
        .filter(document_types::id.eq(document_type_id))
        .select(DocumentTypeRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves a document type by its unique name.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no document type has this name.
pub fn get_document_type_by_name(
    conn: &mut _,
    name: &str,
) -> Result<Option<DocumentTypeData>, PersistenceError> {
    debug!("Looking up document type by name: {}", name);

    let result: Result<DocumentTypeRow, diesel::result::Error> = document_types::table
        .filter(document_types::name.eq(name))
        .select(DocumentTypeRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves one page of document types plus the total count.
///
/// The page and the count execute in a single transaction so the total
/// matches the returned page under concurrent writes.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_document_types(
    conn: &mut _,
    offset: i64,
    limit: i64,
) -> Result<DocumentTypePage, PersistenceError> {
    debug!(offset, limit, "Listing document types");

    conn.transaction(|conn| {
        let total: i64 = document_types::table.count().get_result(conn)?;

        let rows: Vec<DocumentTypeRow> = document_types::table
            .order(document_types::id.asc())
            .offset(offset)
            .limit(limit)
            .select(DocumentTypeRow::as_select())
            .load(conn)?;

        Ok(DocumentTypePage {
            rows: rows.into_iter().map(Into::into).collect(),
            total,
        })
    })
}
}

backend_fn! {
/// Retrieves every document type, unpaginated.
///
/// Used by the assignment flow to resolve requested IDs against the full
/// catalog in one pass.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_all_document_types(
    conn: &mut _,
) -> Result<Vec<DocumentTypeData>, PersistenceError> {
    let rows: Vec<DocumentTypeRow> = document_types::table
        .order(document_types::id.asc())
        .select(DocumentTypeRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Into::into).collect())
}
}
