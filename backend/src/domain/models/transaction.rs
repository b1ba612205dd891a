//! Domain model for a recorded transaction.
use serde::{Deserialize, Serialize};
use shared::TransactionType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub amount: f64, // always positive
    pub category: String,
    pub transaction_type: TransactionType,
    pub date: String,       // RFC 3339 timestamp
    pub created_at: String, // RFC 3339 timestamp
}

impl Transaction {
    /// Transaction ID in format: "transaction::<income|expense>::epoch_millis::suffix"
    pub fn generate_id(transaction_type: TransactionType, epoch_millis: i64) -> String {
        let kind = match transaction_type {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        };
        format!("transaction::{}::{}::{}", kind, epoch_millis, uuid::Uuid::new_v4().simple())
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}
