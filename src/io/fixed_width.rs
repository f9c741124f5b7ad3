use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::Rng;

use super::error::IoError;
use crate::domain::{BankTransaction, Cents, Operation};
use crate::synth::TransactionSynthesizer;

/// Every line of the bank file occupies exactly this many characters
pub const LINE_WIDTH: usize = 550;

/// Append `value` left-justified in a field of exactly `width` characters.
/// Overlong values are truncated to the declared width.
fn push_left(buf: &mut String, value: &str, width: usize) {
    if value.len() >= width {
        buf.push_str(&value[..width]);
    } else {
        buf.push_str(value);
        buf.extend(std::iter::repeat(' ').take(width - value.len()));
    }
}

/// Append an unsigned value zero-padded to exactly `width` digits
fn push_zero_padded(buf: &mut String, value: u64, width: usize) {
    let _ = write!(buf, "{:0width$}", value, width = width);
}

/// Append an amount as its ×100 scaled integer, zero-padded to `width`
fn push_cents(buf: &mut String, amount: Cents, width: usize) {
    push_zero_padded(buf, amount.raw() as u64, width);
}

/// Totals reconciled by the trailer line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    pub records: usize,
    pub debit_total: Cents,
    pub credit_total: Cents,
}

/// Streams fixed-width bank transaction files: one header, N transaction
/// lines, one trailer carrying the record count and cent-scaled sums.
pub struct BankFileWriter {
    synth: TransactionSynthesizer,
}

impl BankFileWriter {
    pub fn new(debit_ratio: f64, base_amount: f64) -> Self {
        Self::with_synthesizer(TransactionSynthesizer::new(debit_ratio, base_amount))
    }

    /// Build from a preconfigured synthesizer (fixed clock for tests)
    pub fn with_synthesizer(synth: TransactionSynthesizer) -> Self {
        Self { synth }
    }

    /// Legacy dataset name, suffixed with the record count
    pub fn file_name(num_records: usize) -> String {
        format!("SHARC.EDCMP.FCS3D01.RETAIL.DEBIT.TCB_{}", num_records)
    }

    /// Generate and stream `num_records` transactions to `path`.
    ///
    /// The file is created fresh; a mid-loop write failure surfaces
    /// immediately and leaves the partial file on disk. The buffered writer
    /// is flushed and the handle closed on every return path.
    pub fn write<P: AsRef<Path>, R: Rng>(
        &self,
        num_records: usize,
        path: P,
        rng: &mut R,
    ) -> Result<WriteSummary, IoError> {
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);

        let mut debit_total = Cents::zero();
        let mut credit_total = Cents::zero();

        writeln!(out, "{}", self.header_line())?;

        for _ in 0..num_records {
            let tx = self.synth.synthesize(rng);
            match tx.operation {
                Operation::Debit => debit_total = debit_total + tx.transaction_amount,
                Operation::Credit => credit_total = credit_total + tx.transaction_amount,
            }
            writeln!(out, "{}", transaction_line(&tx))?;
        }

        // Trailer carries no line terminator, per the legacy format
        out.write_all(trailer_line(num_records, debit_total, credit_total).as_bytes())?;
        out.flush()?;

        Ok(WriteSummary {
            records: num_records,
            debit_total,
            credit_total,
        })
    }

    /// `H01` + system/business date stamps + file codes + filler
    pub fn header_line(&self) -> String {
        let mut line = String::with_capacity(LINE_WIDTH);
        push_left(&mut line, "H01", 3);
        push_left(&mut line, self.synth.system_date(), 33);
        push_left(&mut line, self.synth.business_date(), 10);
        push_left(&mut line, "494", 5);
        push_left(&mut line, "AcctInf", 8);
        push_left(&mut line, "000001", 6);
        push_left(&mut line, "", 485);
        line
    }
}

/// Format one transaction into its 550-character line
pub fn transaction_line(tx: &BankTransaction) -> String {
    let mut line = String::with_capacity(LINE_WIDTH);
    push_left(&mut line, &tx.source_uid, 40);
    push_left(&mut line, &tx.request_uid, 47);
    push_left(&mut line, tx.operation.code(), 2);
    push_left(&mut line, "01", 2);
    push_left(&mut line, "0001", 4);
    push_left(&mut line, "K0999999", 8);
    push_left(&mut line, "A04CIS01", 8);
    push_left(&mut line, &tx.business_date, 10);
    push_left(&mut line, "Transaction for testing", 45);
    push_left(&mut line, &tx.merchant_ref, 55);
    push_zero_padded(&mut line, tx.account_number as u64, 10);
    push_cents(&mut line, tx.transaction_amount, 18);
    push_cents(&mut line, tx.fee_amount, 18);
    push_left(&mut line, "9180", 4);
    push_left(&mut line, &tx.terminal_id, 15);
    push_left(&mut line, "001", 3);
    push_left(&mut line, &tx.business_date, 10);
    push_left(&mut line, "N", 1);
    push_left(&mut line, "001", 3);
    push_left(&mut line, "", 247);
    line
}

/// `T01` + record count + total/debit/credit sums in cents + filler
pub fn trailer_line(records: usize, debit_total: Cents, credit_total: Cents) -> String {
    let total = debit_total + credit_total;
    let mut line = String::with_capacity(LINE_WIDTH);
    push_left(&mut line, "T01", 3);
    push_zero_padded(&mut line, records as u64, 15);
    push_cents(&mut line, total, 18);
    push_cents(&mut line, debit_total, 18);
    push_cents(&mut line, credit_total, 18);
    push_left(&mut line, "", 478);
    line
}
