use chrono::{Duration, Local, NaiveDate};
use rand::Rng;

use super::SynthesisStrategy;
use crate::domain::{
    CORPORATE_BRANCH, CustomerAccount, CustomerIncome, CustomerKind, CustomerProfile,
    INDIVIDUAL_BRANCH, ReferenceData, pick,
};

/// Synthesizes the CSV customer extracts (income, account, profile rows).
///
/// Holds the master data, a monotonic id counter for sequential profile ids,
/// and a date snapshot taken at construction. Every row of one run carries
/// the snapshot date.
pub struct CustomerSynthesizer {
    reference: ReferenceData,
    today: NaiveDate,
    transaction_date: String,
    next_id: u64,
}

impl CustomerSynthesizer {
    pub fn new() -> Self {
        Self::with_clock(Local::now().date_naive())
    }

    /// Create a synthesizer with an explicit date snapshot
    pub fn with_clock(today: NaiveDate) -> Self {
        Self {
            reference: ReferenceData::new(),
            today,
            transaction_date: today.format("%Y-%m-%d").to_string(),
            next_id: 1,
        }
    }

    pub fn transaction_date(&self) -> &str {
        &self.transaction_date
    }

    /// Snapshot date as `YYYYMMDD`, used in output filename stamps
    pub fn compact_date(&self) -> String {
        self.today.format("%Y%m%d").to_string()
    }

    /// Random date of birth 20 to 60 years before the snapshot date
    pub fn date_of_birth<R: Rng>(&self, rng: &mut R) -> String {
        let age_years = rng.gen_range(20..61);
        let days = age_years * 365 + rng.gen_range(0..365);
        (self.today - Duration::days(days))
            .format("%Y-%m-%d")
            .to_string()
    }

    /// One income extract row
    pub fn income<R: Rng>(&self, rng: &mut R) -> CustomerIncome {
        CustomerIncome {
            transaction_date: self.transaction_date.clone(),
            customer_id: format!("C{:07}", rng.gen_range(1_000_000..10_000_000)),
            income: rng.gen_range(100_000_000..1_000_000_000),
        }
    }

    /// One account extract row for the record at `index`.
    ///
    /// The strategy only changes where derived text comes from (formatted in
    /// the loop vs. drawn from precomputed pools); the column set, the
    /// snapshot date, and the corporate-first ordering are identical.
    pub fn account<R: Rng>(
        &self,
        rng: &mut R,
        kind: CustomerKind,
        index: usize,
        strategy: SynthesisStrategy,
    ) -> CustomerAccount {
        let customer_id = format!(
            "{}{}",
            kind.id_prefix(),
            rng.gen_range(1_000_000..10_000_000)
        );

        let full_name = match (strategy, kind) {
            (SynthesisStrategy::PerRecord, CustomerKind::Corporate) => {
                format!("Corporation {}", customer_id)
            }
            (SynthesisStrategy::PerRecord, CustomerKind::Individual) => {
                format!("Individual {}", customer_id)
            }
            (SynthesisStrategy::Precomputed, _) => {
                format!("{} Customer {}", kind.label(), index + 1)
            }
        };

        let address_prefix = match kind {
            CustomerKind::Corporate => "Corporate Address",
            CustomerKind::Individual => "Home Address",
        };

        let (branch_id, birthday, total_assets) = match kind {
            CustomerKind::Corporate => (
                CORPORATE_BRANCH,
                String::new(),
                rng.gen_range(1_000_000_000..10_000_000_000),
            ),
            CustomerKind::Individual => (
                INDIVIDUAL_BRANCH,
                self.date_of_birth(rng),
                rng.gen_range(100_000_000..1_000_000_000),
            ),
        };

        CustomerAccount {
            transaction_date: self.transaction_date.clone(),
            branch_id: branch_id.to_string(),
            customer_id,
            customer_type: kind.type_code().to_string(),
            full_name,
            birthday,
            address: format!("{} {}", address_prefix, rng.gen_range(1..1_001)),
            province_code: pick(self.reference.province_codes, rng).to_string(),
            total_assets,
        }
    }

    /// One profile extract row; sequential ids, master-data draws per field
    pub fn profile<R: Rng>(&mut self, rng: &mut R, kind: CustomerKind) -> CustomerProfile {
        let r = &self.reference;
        let id = format!("{}{:06}", kind.id_prefix(), self.next_id);
        self.next_id += 1;

        let mut profile = CustomerProfile {
            id,
            kind: kind.label().to_string(),
            company_name: None,
            first_name: None,
            last_name: None,
            position: None,
            company_size: None,
            bank_code: pick(r.bank_codes, rng).to_string(),
            country_code: pick(r.country_codes, rng).to_string(),
            province_code: pick(r.province_codes, rng).to_string(),
        };

        match kind {
            CustomerKind::Corporate => {
                profile.company_name = Some(format!(
                    "{} {} {}",
                    pick(r.company_types, rng),
                    pick(r.first_names, rng),
                    pick(r.company_suffixes, rng)
                ));
                profile.position = Some(pick(r.positions, rng).to_string());
                profile.company_size = Some(pick(r.company_sizes, rng).to_string());
            }
            CustomerKind::Individual => {
                profile.first_name = Some(pick(r.first_names, rng).to_string());
                profile.last_name = Some(pick(r.last_names, rng).to_string());
            }
        }

        profile
    }
}

impl Default for CustomerSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixed_synth() -> CustomerSynthesizer {
        CustomerSynthesizer::with_clock(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    }

    #[test]
    fn income_rows_carry_snapshot_date() {
        let synth = fixed_synth();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let row = synth.income(&mut rng);
            assert_eq!(row.transaction_date, "2024-03-15");
            assert_eq!(row.customer_id.len(), 8);
            assert!(row.customer_id.starts_with('C'));
            assert!((100_000_000..1_000_000_000).contains(&row.income));
        }
    }

    #[test]
    fn date_of_birth_is_20_to_61_years_back() {
        let synth = fixed_synth();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..200 {
            let dob: NaiveDate = synth.date_of_birth(&mut rng).parse().unwrap();
            let days_back = (synth.today - dob).num_days();
            assert!(days_back >= 20 * 365);
            assert!(days_back < 61 * 365);
        }
    }

    #[test]
    fn corporate_account_has_no_birthday() {
        let synth = fixed_synth();
        let mut rng = StdRng::seed_from_u64(3);

        let row = synth.account(
            &mut rng,
            CustomerKind::Corporate,
            0,
            SynthesisStrategy::PerRecord,
        );
        assert_eq!(row.branch_id, CORPORATE_BRANCH);
        assert_eq!(row.customer_type, "P01");
        assert!(row.birthday.is_empty());
        assert!(row.customer_id.starts_with('C'));
        assert!(row.total_assets >= 1_000_000_000);
    }

    #[test]
    fn individual_account_has_birthday_and_smaller_assets() {
        let synth = fixed_synth();
        let mut rng = StdRng::seed_from_u64(4);

        let row = synth.account(
            &mut rng,
            CustomerKind::Individual,
            7,
            SynthesisStrategy::PerRecord,
        );
        assert_eq!(row.branch_id, INDIVIDUAL_BRANCH);
        assert_eq!(row.customer_type, "P02");
        assert!(!row.birthday.is_empty());
        assert!(row.address.starts_with("Home Address "));
        assert!(row.total_assets < 1_000_000_000);
    }

    #[test]
    fn precomputed_names_are_numbered_by_index() {
        let synth = fixed_synth();
        let mut rng = StdRng::seed_from_u64(5);

        let row = synth.account(
            &mut rng,
            CustomerKind::Corporate,
            41,
            SynthesisStrategy::Precomputed,
        );
        assert_eq!(row.full_name, "Corporate Customer 42");
    }

    #[test]
    fn profile_ids_are_sequential_per_run() {
        let mut synth = fixed_synth();
        let mut rng = StdRng::seed_from_u64(6);

        let first = synth.profile(&mut rng, CustomerKind::Corporate);
        let second = synth.profile(&mut rng, CustomerKind::Individual);
        assert_eq!(first.id, "C000001");
        assert_eq!(second.id, "I000002");
    }

    #[test]
    fn profile_segments_fill_disjoint_optionals() {
        let mut synth = fixed_synth();
        let mut rng = StdRng::seed_from_u64(7);

        let corp = synth.profile(&mut rng, CustomerKind::Corporate);
        assert!(corp.company_name.is_some());
        assert!(corp.position.is_some());
        assert!(corp.company_size.is_some());
        assert!(corp.first_name.is_none());
        assert!(corp.last_name.is_none());

        let indiv = synth.profile(&mut rng, CustomerKind::Individual);
        assert!(indiv.first_name.is_some());
        assert!(indiv.last_name.is_some());
        assert!(indiv.company_name.is_none());
    }
}
