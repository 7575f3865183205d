// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
};
use clap::Parser;
use doctrack_api::{
    ApiError, AssignDocumentTypesRequest, AssignDocumentTypesResponse, CreateDocumentTypeRequest,
    CreateEmployeeRequest, DeleteDocumentTypeResponse, DeleteEmployeeResponse, DocumentTypeInfo,
    DocumentTypeListResponse, EmployeeDocumentStatusResponse, EmployeeInfo, EmployeeListResponse,
    ListDocumentTypesRequest, ListEmployeesRequest, ListPendingDocumentsRequest,
    PendingDocumentsPage, SubmitDocumentResponse, UnassignDocumentTypesRequest,
    UnassignDocumentTypesResponse, UpdateDocumentTypeRequest, UpdateEmployeeRequest,
    assign_document_types, create_document_type, create_employee, delete_document_type,
    delete_employee, get_document_type, get_employee, get_employee_document_status,
    list_document_types, list_employees, list_pending_documents, submit_document,
    unassign_document_types, update_document_type, update_employee,
};
use doctrack_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// DocTrack Server - HTTP server for the DocTrack document-tracking service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for employees, document types, and assignments.
    persistence: Arc<Mutex<Persistence>>,
}

/// API request to change an employee's document assignments.
///
/// Used by both the assign and unassign endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct AssignmentApiRequest {
    /// The employee the assignments belong to.
    employee_id: i64,
    /// The document types to assign or unassign.
    document_type_ids: Vec<i64>,
}

/// API request to submit one document.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SubmitApiRequest {
    /// The employee submitting the document.
    employee_id: i64,
    /// The document type being submitted.
    document_type_id: i64,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

// ============================================================================
// Employee endpoints
// ============================================================================

async fn handle_create_employee(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeInfo>), HttpError> {
    let mut persistence = state.persistence.lock().await;
    let employee: EmployeeInfo = create_employee(&mut persistence, req)?;
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn handle_list_employees(
    AxumState(state): AxumState<AppState>,
    Query(params): Query<ListEmployeesRequest>,
) -> Result<Json<EmployeeListResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let page: EmployeeListResponse = list_employees(&mut persistence, params)?;
    Ok(Json(page))
}

async fn handle_get_employee(
    AxumState(state): AxumState<AppState>,
    Path(employee_id): Path<i64>,
) -> Result<Json<EmployeeInfo>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let employee: EmployeeInfo = get_employee(&mut persistence, employee_id)?;
    Ok(Json(employee))
}

async fn handle_update_employee(
    AxumState(state): AxumState<AppState>,
    Path(employee_id): Path<i64>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<Json<EmployeeInfo>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let employee: EmployeeInfo = update_employee(&mut persistence, employee_id, req)?;
    Ok(Json(employee))
}

async fn handle_delete_employee(
    AxumState(state): AxumState<AppState>,
    Path(employee_id): Path<i64>,
) -> Result<Json<DeleteEmployeeResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response: DeleteEmployeeResponse = delete_employee(&mut persistence, employee_id)?;
    Ok(Json(response))
}

async fn handle_get_employee_documents(
    AxumState(state): AxumState<AppState>,
    Path(employee_id): Path<i64>,
) -> Result<Json<EmployeeDocumentStatusResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response: EmployeeDocumentStatusResponse =
        get_employee_document_status(&mut persistence, employee_id)?;
    Ok(Json(response))
}

// ============================================================================
// Document type endpoints
// ============================================================================

async fn handle_create_document_type(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<CreateDocumentTypeRequest>,
) -> Result<(StatusCode, Json<DocumentTypeInfo>), HttpError> {
    let mut persistence = state.persistence.lock().await;
    let document_type: DocumentTypeInfo = create_document_type(&mut persistence, req)?;
    Ok((StatusCode::CREATED, Json(document_type)))
}

async fn handle_list_document_types(
    AxumState(state): AxumState<AppState>,
    Query(params): Query<ListDocumentTypesRequest>,
) -> Result<Json<DocumentTypeListResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let page: DocumentTypeListResponse = list_document_types(&mut persistence, params)?;
    Ok(Json(page))
}

async fn handle_get_document_type(
    AxumState(state): AxumState<AppState>,
    Path(document_type_id): Path<i64>,
) -> Result<Json<DocumentTypeInfo>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let document_type: DocumentTypeInfo = get_document_type(&mut persistence, document_type_id)?;
    Ok(Json(document_type))
}

async fn handle_update_document_type(
    AxumState(state): AxumState<AppState>,
    Path(document_type_id): Path<i64>,
    Json(req): Json<UpdateDocumentTypeRequest>,
) -> Result<Json<DocumentTypeInfo>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let document_type: DocumentTypeInfo =
        update_document_type(&mut persistence, document_type_id, req)?;
    Ok(Json(document_type))
}

async fn handle_delete_document_type(
    AxumState(state): AxumState<AppState>,
    Path(document_type_id): Path<i64>,
) -> Result<Json<DeleteDocumentTypeResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response: DeleteDocumentTypeResponse =
        delete_document_type(&mut persistence, document_type_id)?;
    Ok(Json(response))
}

// ============================================================================
// Assignment endpoints
// ============================================================================

async fn handle_assign_documents(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<AssignmentApiRequest>,
) -> Result<(StatusCode, Json<AssignDocumentTypesResponse>), HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response: AssignDocumentTypesResponse = assign_document_types(
        &mut persistence,
        req.employee_id,
        AssignDocumentTypesRequest {
            document_type_ids: req.document_type_ids,
        },
    )?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn handle_unassign_documents(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<AssignmentApiRequest>,
) -> Result<Json<UnassignDocumentTypesResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response: UnassignDocumentTypesResponse = unassign_document_types(
        &mut persistence,
        req.employee_id,
        UnassignDocumentTypesRequest {
            document_type_ids: req.document_type_ids,
        },
    )?;
    Ok(Json(response))
}

async fn handle_submit_document(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<SubmitApiRequest>,
) -> Result<Json<SubmitDocumentResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response: SubmitDocumentResponse =
        submit_document(&mut persistence, req.employee_id, req.document_type_id)?;
    Ok(Json(response))
}

async fn handle_list_pending_documents(
    AxumState(state): AxumState<AppState>,
    Query(params): Query<ListPendingDocumentsRequest>,
) -> Result<Json<PendingDocumentsPage>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let page: PendingDocumentsPage = list_pending_documents(&mut persistence, params)?;
    Ok(Json(page))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/employees", post(handle_create_employee))
        .route("/employees", get(handle_list_employees))
        .route("/employees/{employee_id}", get(handle_get_employee))
        .route("/employees/{employee_id}", patch(handle_update_employee))
        .route("/employees/{employee_id}", delete(handle_delete_employee))
        .route(
            "/employees/{employee_id}/documents",
            get(handle_get_employee_documents),
        )
        .route("/document_types", post(handle_create_document_type))
        .route("/document_types", get(handle_list_document_types))
        .route(
            "/document_types/{document_type_id}",
            get(handle_get_document_type),
        )
        .route(
            "/document_types/{document_type_id}",
            patch(handle_update_document_type),
        )
        .route(
            "/document_types/{document_type_id}",
            delete(handle_delete_document_type),
        )
        .route("/employee_documents/assign", post(handle_assign_documents))
        .route(
            "/employee_documents/unassign",
            delete(handle_unassign_documents),
        )
        .route("/employee_documents/submit", patch(handle_submit_document))
        .route(
            "/employee_documents/pending",
            get(handle_list_pending_documents),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing DocTrack Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
