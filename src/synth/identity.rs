use rand::Rng;

use crate::domain::{CustomerIdentity, CustomerKind, ReferenceData, pick};

/// Synthesizes identity extract rows with Thai-style 13-digit national ids.
///
/// Ids combine a random 1-9 prefix, a zero-padded monotonic 9-digit sequence
/// number, and a random check digit, so they are unique within a run. Two ids
/// are consumed per record (customer id and identity number).
pub struct IdentitySynthesizer {
    reference: ReferenceData,
    next_id: u64,
}

impl IdentitySynthesizer {
    pub fn new() -> Self {
        Self {
            reference: ReferenceData::new(),
            next_id: 0,
        }
    }

    /// Next national id; advances the monotonic counter
    pub fn national_id<R: Rng>(&mut self, rng: &mut R) -> String {
        self.next_id += 1;
        format!(
            "{}{:09}{}",
            rng.gen_range(1..10),
            self.next_id,
            rng.gen_range(0..10)
        )
    }

    /// Pregenerate `count` ids in one pass (precomputed strategy)
    pub fn id_batch<R: Rng>(&mut self, rng: &mut R, count: usize) -> Vec<String> {
        (0..count).map(|_| self.national_id(rng)).collect()
    }

    /// One row, all derived values formatted inside the loop.
    ///
    /// Corporate names are numbered with the counter value as it stood
    /// before the record's two ids were drawn.
    pub fn identity<R: Rng>(&mut self, rng: &mut R, kind: CustomerKind) -> CustomerIdentity {
        let name_seq = self.next_id;
        let customer_digits = self.national_id(rng);
        let identity_num = self.national_id(rng);

        let full_name = match kind {
            CustomerKind::Corporate => format!(
                "{} {} {}",
                pick(self.reference.company_types, rng),
                pick(self.reference.company_suffixes, rng),
                name_seq
            ),
            CustomerKind::Individual => format!(
                "{} {}",
                pick(self.reference.first_names, rng),
                pick(self.reference.last_names, rng)
            ),
        };

        CustomerIdentity {
            customer_id: format!("{}{}", kind.id_prefix(), customer_digits),
            full_name,
            customer_type: kind.type_code().to_string(),
            identity_num,
        }
    }

    /// One row built from pregenerated ids and the precomputed name pools
    pub fn identity_from_pool<R: Rng>(
        &self,
        rng: &mut R,
        kind: CustomerKind,
        index: usize,
        customer_digits: &str,
        identity_num: &str,
    ) -> CustomerIdentity {
        let full_name = match kind {
            CustomerKind::Corporate => format!(
                "{} {}",
                pick(&self.reference.company_base_names, rng),
                index + 1
            ),
            CustomerKind::Individual => pick(&self.reference.person_names, rng).clone(),
        };

        CustomerIdentity {
            customer_id: format!("{}{}", kind.id_prefix(), customer_digits),
            full_name,
            customer_type: kind.type_code().to_string(),
            identity_num: identity_num.to_string(),
        }
    }
}

impl Default for IdentitySynthesizer {
    fn default() -> Self {
        Self::new()
    }
}
