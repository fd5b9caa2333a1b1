//! Shared budget screen.

use chrono::NaiveDate;

use crate::backend::Backend;
use crate::models::{summarize, BudgetSummary, SpendCategory, Transaction};
use crate::{db, SessionContext};

use super::notice;

pub struct BudgetScreen {
    backend: Backend,
    session: SessionContext,
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    pub notice: Option<String>,
}

impl BudgetScreen {
    pub fn new(backend: Backend, session: SessionContext) -> Self {
        Self {
            backend,
            session,
            transactions: Vec::new(),
            loading: false,
            notice: None,
        }
    }

    pub async fn refresh(&mut self) {
        let Some(me) = self.session.identity() else {
            return;
        };
        self.loading = true;
        match db::list_transactions(&self.backend, &me.id).await {
            Ok(transactions) => self.transactions = transactions,
            Err(e) => self.notice = Some(notice("Could not load transactions", &e)),
        }
        self.loading = false;
    }

    pub async fn add_transaction(
        &mut self,
        title: &str,
        amount_cents: i64,
        category: SpendCategory,
        spent_on: NaiveDate,
        paid_by: &str,
        is_shared: bool,
    ) {
        let Some(me) = self.session.identity() else {
            return;
        };
        if amount_cents <= 0 {
            self.notice = Some("Amount must be positive".into());
            return;
        }

        match db::add_transaction(
            &self.backend,
            &me.id,
            title,
            amount_cents,
            category,
            spent_on,
            paid_by,
            is_shared,
        )
        .await
        {
            Ok(_) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not save the transaction", &e)),
        }
    }

    pub async fn delete_transaction(&mut self, id: &str) {
        match db::delete_transaction(&self.backend, id).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.notice = Some(notice("Could not delete the transaction", &e)),
        }
    }

    /// Totals and even-split balance for the signed-in identity,
    /// computed from the loaded list.
    pub fn summary(&self) -> BudgetSummary {
        match self.session.identity() {
            Some(me) => summarize(&self.transactions, &me.id),
            None => BudgetSummary::default(),
        }
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
