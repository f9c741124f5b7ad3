use serde::Serialize;

use super::amount::Cents;

/// Bank transaction operation flag, encoded as a 2-character code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Debit,
    Credit,
}

impl Operation {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Debit => "DR",
            Self::Credit => "CR",
        }
    }
}

/// Customer segment, encoded as a `P01`/`P02` type code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerKind {
    Corporate,
    Individual,
}

impl CustomerKind {
    /// Segment for the record at `index` in a run where the first
    /// `num_corporate` records are corporate and the remainder individual
    pub fn for_index(index: usize, num_corporate: usize) -> Self {
        if index < num_corporate {
            Self::Corporate
        } else {
            Self::Individual
        }
    }

    pub fn type_code(&self) -> &'static str {
        match self {
            Self::Corporate => "P01",
            Self::Individual => "P02",
        }
    }

    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::Corporate => "C",
            Self::Individual => "I",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Corporate => "Corporate",
            Self::Individual => "Individual",
        }
    }
}

/// One fixed-width bank transaction line, pre-serialization.
///
/// Amounts are already truncated to cents; the fixed-width writer encodes
/// them as zero-padded scaled integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankTransaction {
    pub operation: Operation,
    pub source_uid: String,
    pub request_uid: String,
    pub transaction_amount: Cents,
    pub fee_amount: Cents,
    pub account_number: u32,
    pub merchant_ref: String,
    pub terminal_id: String,
    pub business_date: String,
}

/// Row of the income extract (`TransactionDate,CUSTID,INCOME`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerIncome {
    #[serde(rename = "TransactionDate")]
    pub transaction_date: String,
    #[serde(rename = "CUSTID")]
    pub customer_id: String,
    #[serde(rename = "INCOME")]
    pub income: u32,
}

impl CustomerIncome {
    pub const HEADERS: [&'static str; 3] = ["TransactionDate", "CUSTID", "INCOME"];
}

/// Row of the account extract
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerAccount {
    #[serde(rename = "TransactionDate")]
    pub transaction_date: String,
    #[serde(rename = "BRID")]
    pub branch_id: String,
    #[serde(rename = "CUSTID")]
    pub customer_id: String,
    #[serde(rename = "CUST_TYPE")]
    pub customer_type: String,
    #[serde(rename = "FULL_NAME")]
    pub full_name: String,
    #[serde(rename = "BIRTHDAY")]
    pub birthday: String,
    #[serde(rename = "ADDRESS")]
    pub address: String,
    #[serde(rename = "PROVINCE_CODE")]
    pub province_code: String,
    #[serde(rename = "TOTAL_ASSETS")]
    pub total_assets: u64,
}

impl CustomerAccount {
    pub const HEADERS: [&'static str; 9] = [
        "TransactionDate",
        "BRID",
        "CUSTID",
        "CUST_TYPE",
        "FULL_NAME",
        "BIRTHDAY",
        "ADDRESS",
        "PROVINCE_CODE",
        "TOTAL_ASSETS",
    ];
}

/// Row of the profile extract.
///
/// Carries the union of corporate and individual columns; fields that do not
/// apply to a segment serialize as empty strings. The column set and order
/// are fixed by this struct, never by iteration over a transient map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerProfile {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "CompanyName")]
    pub company_name: Option<String>,
    #[serde(rename = "FirstName")]
    pub first_name: Option<String>,
    #[serde(rename = "LastName")]
    pub last_name: Option<String>,
    #[serde(rename = "Position")]
    pub position: Option<String>,
    #[serde(rename = "CompanySize")]
    pub company_size: Option<String>,
    #[serde(rename = "BankCode")]
    pub bank_code: String,
    #[serde(rename = "CountryCode")]
    pub country_code: String,
    #[serde(rename = "ProvinceCode")]
    pub province_code: String,
}

impl CustomerProfile {
    pub const HEADERS: [&'static str; 10] = [
        "ID",
        "Type",
        "CompanyName",
        "FirstName",
        "LastName",
        "Position",
        "CompanySize",
        "BankCode",
        "CountryCode",
        "ProvinceCode",
    ];
}

/// Row of the identity extract
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerIdentity {
    #[serde(rename = "CUSTID")]
    pub customer_id: String,
    #[serde(rename = "FULL_NAME")]
    pub full_name: String,
    #[serde(rename = "CUST_TYPE")]
    pub customer_type: String,
    #[serde(rename = "IDENTITY_NUM")]
    pub identity_num: String,
}

impl CustomerIdentity {
    pub const HEADERS: [&'static str; 4] = ["CUSTID", "FULL_NAME", "CUST_TYPE", "IDENTITY_NUM"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_codes() {
        assert_eq!(Operation::Debit.code(), "DR");
        assert_eq!(Operation::Credit.code(), "CR");
    }

    #[test]
    fn kind_for_index_splits_corporate_first() {
        assert_eq!(CustomerKind::for_index(0, 5), CustomerKind::Corporate);
        assert_eq!(CustomerKind::for_index(4, 5), CustomerKind::Corporate);
        assert_eq!(CustomerKind::for_index(5, 5), CustomerKind::Individual);
        assert_eq!(CustomerKind::for_index(100, 5), CustomerKind::Individual);
    }

    #[test]
    fn kind_for_index_with_zero_corporate() {
        assert_eq!(CustomerKind::for_index(0, 0), CustomerKind::Individual);
    }

    #[test]
    fn kind_codes() {
        assert_eq!(CustomerKind::Corporate.type_code(), "P01");
        assert_eq!(CustomerKind::Individual.type_code(), "P02");
        assert_eq!(CustomerKind::Corporate.id_prefix(), "C");
        assert_eq!(CustomerKind::Individual.id_prefix(), "I");
    }

    #[test]
    fn profile_headers_match_field_order() {
        // The serialized field order must agree with the declared header row
        let profile = CustomerProfile {
            id: "C000001".to_string(),
            kind: "Corporate".to_string(),
            company_name: Some("Trading Group 1".to_string()),
            first_name: None,
            last_name: None,
            position: Some("Manager".to_string()),
            company_size: Some("M".to_string()),
            bank_code: "79601001".to_string(),
            country_code: "TH".to_string(),
            province_code: "BKK".to_string(),
        };

        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.serialize(&profile).unwrap();
        wtr.flush().unwrap();
        let out = String::from_utf8(wtr.into_inner().unwrap()).unwrap();

        let header_line = out.lines().next().unwrap();
        assert_eq!(header_line, CustomerProfile::HEADERS.join(","));
    }

    #[test]
    fn optional_fields_serialize_as_empty() {
        let profile = CustomerProfile {
            id: "I000002".to_string(),
            kind: "Individual".to_string(),
            company_name: None,
            first_name: Some("Mali".to_string()),
            last_name: Some("KBTG".to_string()),
            position: None,
            company_size: None,
            bank_code: "79601002".to_string(),
            country_code: "SG".to_string(),
            province_code: "CNX".to_string(),
        };

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        wtr.serialize(&profile).unwrap();
        wtr.flush().unwrap();
        let out = String::from_utf8(wtr.into_inner().unwrap()).unwrap();

        assert_eq!(
            out.trim_end(),
            "I000002,Individual,,Mali,KBTG,,,79601002,SG,CNX"
        );
    }
}
