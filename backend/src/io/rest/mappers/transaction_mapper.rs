//! Mappers for converting between transaction domain models and shared DTOs.

use crate::domain::{
    commands::transactions::CreateTransactionCommand,
    models::transaction::Transaction as DomainTransaction,
};
use shared::{CreateTransactionRequest, Transaction as SharedTransaction};

pub struct TransactionMapper;

impl TransactionMapper {
    pub fn to_dto(domain: DomainTransaction) -> SharedTransaction {
        SharedTransaction {
            id: domain.id,
            user_id: domain.user_id,
            title: domain.title,
            amount: domain.amount,
            category: domain.category,
            transaction_type: domain.transaction_type,
            date: domain.date,
            created_at: domain.created_at,
        }
    }

    pub fn to_command(user_id: String, request: CreateTransactionRequest) -> CreateTransactionCommand {
        CreateTransactionCommand {
            user_id,
            title: request.title,
            amount: request.amount,
            category: request.category,
            transaction_type: request.transaction_type,
            date: request.date,
        }
    }
}
