use std::fs::File;
use std::path::Path;

use rand::Rng;

use super::error::IoError;
use crate::domain::{
    CustomerAccount, CustomerIdentity, CustomerIncome, CustomerKind, CustomerProfile,
};
use crate::synth::{CustomerSynthesizer, IdentitySynthesizer, SynthesisStrategy, corporate_count};

/// Open a CSV writer with the header row written explicitly.
///
/// Headers come from the record structs' declared column lists, never from
/// serde's automatic header pass, so a zero-record run still produces a
/// header-only file and column order is fixed.
fn extract_writer<P: AsRef<Path>>(
    path: P,
    headers: &[&str],
) -> Result<csv::Writer<File>, IoError> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    wtr.write_record(headers)?;
    Ok(wtr)
}

/// Income extract filename: `Customer_extract_<yyyymmdd>_<count>.csv`
pub fn income_extract_name(date_stamp: &str, num_records: usize) -> String {
    format!("Customer_extract_{}_{}.csv", date_stamp, num_records)
}

/// Account extract filename: `customer_data_<Strategy>_<count>.csv`
pub fn account_extract_name(strategy: SynthesisStrategy, num_records: usize) -> String {
    format!("customer_data_{}_{}.csv", strategy.label(), num_records)
}

/// Profile extract filename: `customer_data_<count>records.csv`
pub fn profile_extract_name(num_records: usize) -> String {
    format!("customer_data_{}records.csv", num_records)
}

/// Identity extract filename: `customer_data_<Strategy>_<count>records.csv`
pub fn identity_extract_name(strategy: SynthesisStrategy, num_records: usize) -> String {
    format!("customer_data_{}_{}records.csv", strategy.label(), num_records)
}

/// Stream `num_records` income rows to `path`; returns rows written
pub fn write_income_extract<P: AsRef<Path>, R: Rng>(
    synth: &CustomerSynthesizer,
    num_records: usize,
    path: P,
    rng: &mut R,
) -> Result<usize, IoError> {
    let mut wtr = extract_writer(path, &CustomerIncome::HEADERS)?;

    for _ in 0..num_records {
        wtr.serialize(synth.income(rng))?;
    }

    wtr.flush()?;
    Ok(num_records)
}

/// Stream account rows: the first `floor(ratio × N)` corporate, the rest
/// individual, ordering deterministic
pub fn write_account_extract<P: AsRef<Path>, R: Rng>(
    synth: &CustomerSynthesizer,
    num_records: usize,
    path: P,
    corporate_ratio: f64,
    strategy: SynthesisStrategy,
    rng: &mut R,
) -> Result<usize, IoError> {
    let num_corporate = corporate_count(num_records, corporate_ratio);
    let mut wtr = extract_writer(path, &CustomerAccount::HEADERS)?;

    for index in 0..num_records {
        let kind = CustomerKind::for_index(index, num_corporate);
        wtr.serialize(synth.account(rng, kind, index, strategy))?;
    }

    wtr.flush()?;
    Ok(num_records)
}

/// Stream profile rows with sequential ids, corporate segment first
pub fn write_profile_extract<P: AsRef<Path>, R: Rng>(
    synth: &mut CustomerSynthesizer,
    num_records: usize,
    path: P,
    corporate_ratio: f64,
    rng: &mut R,
) -> Result<usize, IoError> {
    let num_corporate = corporate_count(num_records, corporate_ratio);
    let mut wtr = extract_writer(path, &CustomerProfile::HEADERS)?;

    for index in 0..num_records {
        let kind = CustomerKind::for_index(index, num_corporate);
        wtr.serialize(synth.profile(rng, kind))?;
    }

    wtr.flush()?;
    Ok(num_records)
}

/// Stream identity rows.
///
/// `PerRecord` draws both ids inside the loop; `Precomputed` pregenerates the
/// whole id batch (two per record) and consumes it in order. Output shape is
/// identical either way.
pub fn write_identity_extract<P: AsRef<Path>, R: Rng>(
    synth: &mut IdentitySynthesizer,
    num_records: usize,
    path: P,
    corporate_ratio: f64,
    strategy: SynthesisStrategy,
    rng: &mut R,
) -> Result<usize, IoError> {
    let num_corporate = corporate_count(num_records, corporate_ratio);
    let mut wtr = extract_writer(path, &CustomerIdentity::HEADERS)?;

    match strategy {
        SynthesisStrategy::PerRecord => {
            for index in 0..num_records {
                let kind = CustomerKind::for_index(index, num_corporate);
                wtr.serialize(synth.identity(rng, kind))?;
            }
        }
        SynthesisStrategy::Precomputed => {
            let ids = synth.id_batch(rng, num_records * 2);
            for index in 0..num_records {
                let kind = CustomerKind::for_index(index, num_corporate);
                let row = synth.identity_from_pool(
                    rng,
                    kind,
                    index,
                    &ids[index * 2],
                    &ids[index * 2 + 1],
                );
                wtr.serialize(row)?;
            }
        }
    }

    wtr.flush()?;
    Ok(num_records)
}
