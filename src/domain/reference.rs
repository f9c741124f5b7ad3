use rand::Rng;

/// Pick a uniformly random element from a non-empty slice
pub fn pick<'a, T, R: Rng>(items: &'a [T], rng: &mut R) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Immutable master data used to draw pseudo-random field values.
///
/// Built once per generator and read-only for the process lifetime. The
/// cross-product pools (`person_names`, `company_base_names`) back the
/// precomputed synthesis strategy, which trades setup cost for cheaper
/// per-record work.
pub struct ReferenceData {
    pub province_codes: &'static [&'static str],
    pub country_codes: &'static [&'static str],
    pub bank_codes: &'static [&'static str],
    pub positions: &'static [&'static str],
    pub company_sizes: &'static [&'static str],
    pub first_names: &'static [&'static str],
    pub last_names: &'static [&'static str],
    pub company_types: &'static [&'static str],
    pub company_suffixes: &'static [&'static str],
    pub person_names: Vec<String>,
    pub company_base_names: Vec<String>,
}

/// Branch id for the corporate customer segment
pub const CORPORATE_BRANCH: &str = "80001";
/// Branch id for the individual customer segment
pub const INDIVIDUAL_BRANCH: &str = "90001";

impl ReferenceData {
    pub fn new() -> Self {
        let first_names: &'static [&'static str] =
            &["Somchai", "Arthit", "Kittisak", "Naphat", "Mali"];
        let last_names: &'static [&'static str] =
            &["Kasikorn", "KBTG", "K+", "KhunThong", "MeowJot"];
        let company_types: &'static [&'static str] = &["Trading", "Technology", "Services"];
        let company_suffixes: &'static [&'static str] = &["Group", "Corp", "Co", "PLC"];

        let person_names = first_names
            .iter()
            .flat_map(|f| last_names.iter().map(move |l| format!("{} {}", f, l)))
            .collect();

        let company_base_names = company_types
            .iter()
            .flat_map(|t| company_suffixes.iter().map(move |s| format!("{} {}", t, s)))
            .collect();

        Self {
            province_codes: &["BKK", "CNX", "NTB", "PTT", "NKP"],
            country_codes: &["TH", "US", "GB", "JP", "SG"],
            bank_codes: &["79601001", "79601002", "79601003"],
            positions: &["Manager", "Staff", "Director", "Supervisor"],
            company_sizes: &["S", "M", "L"],
            first_names,
            last_names,
            company_types,
            company_suffixes,
            person_names,
            company_base_names,
        }
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::new()
    }
}
