pub mod csv_writer;
pub mod error;
pub mod fixed_width;

// Re-export commonly used types
pub use csv_writer::{
    account_extract_name, identity_extract_name, income_extract_name, profile_extract_name,
    write_account_extract, write_identity_extract, write_income_extract, write_profile_extract,
};
pub use error::IoError;
pub use fixed_width::{BankFileWriter, LINE_WIDTH, WriteSummary};
