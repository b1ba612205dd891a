//! Transaction service domain logic for recording report input data.
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::domain::{
    commands::transactions::CreateTransactionCommand,
    date_range::{format_timestamp, parse_report_date},
    errors::{ReportError, ReportResult},
    models::transaction::Transaction,
};
use crate::storage::{Connection, TransactionStorage};
use shared::FieldError;

const MAX_TITLE_LENGTH: usize = 256;
const MAX_CATEGORY_LENGTH: usize = 64;

#[derive(Clone)]
pub struct TransactionService<C: Connection> {
    transaction_repository: C::TransactionRepository,
}

impl<C: Connection> TransactionService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            transaction_repository: connection.create_transaction_repository(),
        }
    }

    pub async fn create_transaction(&self, command: CreateTransactionCommand) -> ReportResult<Transaction> {
        let mut errors = Vec::new();

        let title = command.title.trim();
        if title.is_empty() || title.chars().count() > MAX_TITLE_LENGTH {
            errors.push(field_error("title", "Title must be between 1 and 256 characters"));
        }

        let category = command.category.trim();
        if category.is_empty() || category.chars().count() > MAX_CATEGORY_LENGTH {
            errors.push(field_error("category", "Category must be between 1 and 64 characters"));
        }

        if !command.amount.is_finite() || command.amount <= 0.0 {
            errors.push(field_error("amount", "Amount must be a positive number"));
        }

        // Unlike report ranges, an explicit but unusable date is a client error here
        let now = Utc::now();
        let date = match command.date.as_deref() {
            None => Some(now),
            Some(raw) => {
                let parsed = parse_report_date(Some(raw));
                if parsed.is_none() {
                    errors.push(field_error("date", "Date must be a valid ISO 8601 date"));
                }
                parsed
            }
        };

        let date = match date {
            Some(date) if errors.is_empty() => date,
            _ => return Err(ReportError::Validation(errors)),
        };

        let transaction = Transaction {
            id: Transaction::generate_id(command.transaction_type, now.timestamp_millis()),
            user_id: command.user_id,
            title: title.to_string(),
            amount: command.amount,
            category: category.to_lowercase(),
            transaction_type: command.transaction_type,
            date: format_timestamp(date),
            created_at: format_timestamp(now),
        };

        self.transaction_repository.store_transaction(&transaction).await?;
        info!(
            "Recorded {} transaction {} for user {}",
            transaction.transaction_type, transaction.id, transaction.user_id
        );

        Ok(transaction)
    }
}

fn field_error(field: &str, message: &str) -> FieldError {
    FieldError {
        field: field.to_string(),
        message: message.to_string(),
    }
}
