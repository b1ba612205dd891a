//! # REST API for Transactions
//!
//! Endpoint for recording the transactions reports are generated from.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use tracing::info;

use crate::io::rest::{auth::CurrentUser, error::ApiError, mappers::transaction_mapper::TransactionMapper};
use crate::AppState;
use shared::{CreateTransactionRequest, CreateTransactionResponse};

/// Create a router for transaction related APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/create", post(create_transaction))
}

/// Record a new transaction for the caller
pub async fn create_transaction(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateTransactionResponse>), ApiError> {
    let Json(request) = payload?;
    info!("POST /api/transaction/create - user: {}, request: {:?}", user_id, request);

    let command = TransactionMapper::to_command(user_id, request);
    let transaction = state.transaction_service.create_transaction(command).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateTransactionResponse {
            message: "Transaction created successfully".to_string(),
            transaction: TransactionMapper::to_dto(transaction),
        }),
    ))
}
