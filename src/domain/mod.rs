pub mod amount;
pub mod record;
pub mod reference;

// Re-export commonly used types
pub use amount::Cents;
pub use record::{
    BankTransaction, CustomerAccount, CustomerIdentity, CustomerIncome, CustomerKind,
    CustomerProfile, Operation,
};
pub use reference::{CORPORATE_BRANCH, INDIVIDUAL_BRANCH, ReferenceData, pick};
