use chrono::{Local, NaiveDateTime};
use rand::Rng;

use crate::domain::{BankTransaction, Cents, Operation};

/// Synthesizes fixed-width bank transactions.
///
/// The date snapshot is taken once at construction and reused for every
/// record: all lines of one file carry the same business-date stamp even
/// though generation spans wall-clock time.
pub struct TransactionSynthesizer {
    business_date: String,
    system_date: String,
    compact_date: String,
    debit_ratio: f64,
    base_amount: f64,
}

impl TransactionSynthesizer {
    /// Create a synthesizer stamped with the current local time
    pub fn new(debit_ratio: f64, base_amount: f64) -> Self {
        Self::with_clock(Local::now().naive_local(), debit_ratio, base_amount)
    }

    /// Create a synthesizer with an explicit clock snapshot
    pub fn with_clock(now: NaiveDateTime, debit_ratio: f64, base_amount: f64) -> Self {
        Self {
            business_date: now.format("%Y-%m-%d").to_string(),
            system_date: now.format("%Y-%m-%dT%H:%M:%S").to_string(),
            compact_date: now.format("%Y%m%d").to_string(),
            debit_ratio,
            base_amount,
        }
    }

    pub fn business_date(&self) -> &str {
        &self.business_date
    }

    pub fn system_date(&self) -> &str {
        &self.system_date
    }

    /// Produce one transaction record.
    ///
    /// Debit vs. credit is drawn per record at the configured ratio; amounts
    /// are `base × (0.5 + uniform[0,1))` and fees `10 + uniform[0,1) × 40`,
    /// truncated to cents here so downstream totals stay consistent with the
    /// encoded fields. Inputs are not validated.
    pub fn synthesize<R: Rng>(&self, rng: &mut R) -> BankTransaction {
        let operation = if rng.r#gen::<f64>() < self.debit_ratio {
            Operation::Debit
        } else {
            Operation::Credit
        };

        let transaction_amount =
            Cents::from_f64_truncated(self.base_amount * (0.5 + rng.r#gen::<f64>()));
        let fee_amount = Cents::from_f64_truncated(10.0 + rng.r#gen::<f64>() * 40.0);

        BankTransaction {
            operation,
            source_uid: format!("500022223455123_5hu12e2{:04}", rng.gen_range(1_000..10_000)),
            request_uid: format!(
                "494_{}_{:06}",
                self.compact_date,
                rng.gen_range(100_000..1_000_000)
            ),
            transaction_amount,
            fee_amount,
            account_number: rng.gen_range(1_000_000_000..1_009_000_000),
            merchant_ref: format!("TEST{}", rng.gen_range(1_000..10_000)),
            terminal_id: format!("KB{}", rng.gen_range(100_000..1_000_000)),
            business_date: self.business_date.clone(),
        }
    }
}
