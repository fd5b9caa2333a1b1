//! Shared spending records and split math.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpendCategory {
    Food,
    Entertainment,
    Transport,
    Shopping,
    Gift,
    #[default]
    Other,
}

impl SpendCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Entertainment => "entertainment",
            Self::Transport => "transport",
            Self::Shopping => "shopping",
            Self::Gift => "gift",
            Self::Other => "other",
        }
    }
}

/// Row in the `transactions` table. Amounts are minor units (cents) so
/// split math stays exact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub amount_cents: i64,
    #[serde(default)]
    pub category: SpendCategory,
    pub spent_on: NaiveDate,
    /// Identity that fronted the money.
    pub paid_by: String,
    #[serde(default)]
    pub is_shared: bool,
    pub created_at: DateTime<Utc>,
}

/// Totals derived from the raw transaction list at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BudgetSummary {
    pub total_cents: i64,
    pub paid_by_me_cents: i64,
    pub paid_by_partner_cents: i64,
    /// Over shared spending only: what the partner owes me (negative
    /// when I owe them). Even split, odd cent goes to the payer.
    pub balance_cents: i64,
}

/// Fold the transaction list into display totals for `me`.
pub fn summarize(transactions: &[Transaction], me: &str) -> BudgetSummary {
    let mut summary = BudgetSummary::default();
    let mut shared_total = 0i64;
    let mut shared_mine = 0i64;

    for tx in transactions {
        summary.total_cents += tx.amount_cents;
        if tx.paid_by == me {
            summary.paid_by_me_cents += tx.amount_cents;
        } else {
            summary.paid_by_partner_cents += tx.amount_cents;
        }
        if tx.is_shared {
            shared_total += tx.amount_cents;
            if tx.paid_by == me {
                shared_mine += tx.amount_cents;
            }
        }
    }

    summary.balance_cents = shared_mine - shared_total / 2;
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(amount: i64, paid_by: &str, shared: bool) -> Transaction {
        Transaction {
            id: crate::models::new_id(),
            user_id: "u-1".into(),
            title: "dinner".into(),
            amount_cents: amount,
            category: SpendCategory::Food,
            spent_on: "2026-01-15".parse().unwrap(),
            paid_by: paid_by.into(),
            is_shared: shared,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_totals_by_payer() {
        let txs = vec![tx(12000, "me", true), tx(20000, "her", true), tx(5000, "me", true)];
        let s = summarize(&txs, "me");
        assert_eq!(s.total_cents, 37000);
        assert_eq!(s.paid_by_me_cents, 17000);
        assert_eq!(s.paid_by_partner_cents, 20000);
    }

    #[test]
    fn test_balance_splits_shared_spending_evenly() {
        let txs = vec![tx(10000, "me", true), tx(4000, "her", true)];
        let s = summarize(&txs, "me");
        // shared 14000, my half 7000, I fronted 10000
        assert_eq!(s.balance_cents, 3000);
    }

    #[test]
    fn test_personal_spending_stays_out_of_balance() {
        let txs = vec![tx(10000, "me", false), tx(6000, "her", true)];
        let s = summarize(&txs, "me");
        assert_eq!(s.balance_cents, -3000);
        assert_eq!(s.total_cents, 16000);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(summarize(&[], "me"), BudgetSummary::default());
    }
}
