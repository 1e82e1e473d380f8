use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Expense entity - a charge against the shared tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub amount: Decimal,
    pub description: String,
    pub player_name: String,
    pub timestamp: DateTime<Utc>,
}

impl Expense {
    pub fn new(amount: Decimal, description: String, player_name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            amount,
            description,
            player_name,
            timestamp: Utc::now(),
        }
    }
}
