use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sqlx::Row;

use crate::domain::models::transaction::Transaction;
use crate::storage::connection::DbConnection;
use crate::storage::traits::TransactionStorage;

/// Repository for recorded transactions
#[derive(Clone)]
pub struct TransactionRepository {
    db: DbConnection,
}

impl TransactionRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransactionStorage for TransactionRepository {
    async fn store_transaction(&self, transaction: &Transaction) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO transactions (id, user_id, title, amount, category, transaction_type, date, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&transaction.id)
        .bind(&transaction.user_id)
        .bind(&transaction.title)
        .bind(transaction.amount)
        .bind(&transaction.category)
        .bind(transaction.transaction_type.to_string())
        .bind(&transaction.date)
        .bind(&transaction.created_at)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn list_transactions_in_range(
        &self,
        user_id: &str,
        from: &str,
        to: &str,
    ) -> Result<Vec<Transaction>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, title, amount, category, transaction_type, date, created_at
            FROM transactions
            WHERE user_id = ? AND date >= ? AND date <= ?
            ORDER BY date ASC
            "#,
        )
        .bind(user_id)
        .bind(from)
        .bind(to)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter()
            .map(|row| {
                let transaction_type: String = row.get("transaction_type");
                Ok(Transaction {
                    id: row.get("id"),
                    user_id: row.get("user_id"),
                    title: row.get("title"),
                    amount: row.get("amount"),
                    category: row.get("category"),
                    transaction_type: transaction_type.parse().map_err(|e: String| anyhow!(e))?,
                    date: row.get("date"),
                    created_at: row.get("created_at"),
                })
            })
            .collect()
    }
}
