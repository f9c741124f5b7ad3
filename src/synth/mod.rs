pub mod customer;
pub mod identity;
pub mod transaction;

// Re-export commonly used types
pub use customer::CustomerSynthesizer;
pub use identity::IdentitySynthesizer;
pub use transaction::TransactionSynthesizer;

/// How a synthesizer restructures its per-record work.
///
/// `PerRecord` formats every derived value inside the generation loop;
/// `Precomputed` draws from pools built once up front. Both produce the same
/// record shape, so the choice is a single knob rather than two generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthesisStrategy {
    PerRecord,
    Precomputed,
}

impl SynthesisStrategy {
    /// Label used in output filenames and comparison tables
    pub fn label(&self) -> &'static str {
        match self {
            Self::PerRecord => "WithinLoop",
            Self::Precomputed => "Precomputed",
        }
    }

    pub const ALL: [SynthesisStrategy; 2] = [Self::PerRecord, Self::Precomputed];
}

/// Number of leading corporate records in a run of `total` records
pub fn corporate_count(total: usize, ratio: f64) -> usize {
    (total as f64 * ratio) as usize
}
