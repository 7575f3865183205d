// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Document type mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::document_types;
use crate::error::PersistenceError;

backend_fn! {
/// Creates a new document type.
///
/// The `name` column's `UNIQUE` constraint backs the application-level
/// duplicate check.
///
/// # Errors
///
/// Returns `UniqueViolation` if the name is already taken, or another
/// error if the insert fails.
pub fn create_document_type(conn: &mut _, name: &str) -> Result<i64, PersistenceError> {
    info!("Creating document type: {}", name);

    diesel::insert_into(document_types::table)
        .values(document_types::name.eq(name))
        .execute(conn)?;

    let document_type_id: i64 = conn.get_last_insert_rowid()?;

    info!(document_type_id, "Document type created");
    Ok(document_type_id)
}
}

backend_fn! {
/// Renames a document type and bumps `updated_at`.
///
/// # Errors
///
/// Returns `UniqueViolation` if the new name collides with another
/// document type, or another error if the update fails.
pub fn update_document_type(
    conn: &mut _,
    document_type_id: i64,
    name: &str,
) -> Result<(), PersistenceError> {
    debug!(document_type_id, "Updating document type");

    diesel::update(document_types::table)
        .filter(document_types::id.eq(document_type_id))
        .set((
            document_types::name.eq(name),
            document_types::updated_at
                .eq(diesel::dsl::sql::<diesel::sql_types::Text>("CURRENT_TIMESTAMP")),
        ))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Deletes a document type.
///
/// Assignment rows cascade via the foreign key. Returns the number of
/// document type rows deleted (0 or 1).
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_document_type(
    conn: &mut _,
    document_type_id: i64,
) -> Result<usize, PersistenceError> {
    info!(document_type_id, "Deleting document type");

    let affected: usize = diesel::delete(document_types::table)
        .filter(document_types::id.eq(document_type_id))
        .execute(conn)?;

    Ok(affected)
}
}
