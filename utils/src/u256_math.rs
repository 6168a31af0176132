use soroban_sdk::{Env, U256};

pub fn u256_max(e: &Env) -> U256 {
    U256::from_parts(e, u64::MAX, u64::MAX, u64::MAX, u64::MAX)
}

pub trait ExtraMath {
    // multiplication that reports leaving the 256-bit domain instead of trapping
    fn checked_mul_u256(&self, other: &U256) -> Option<U256>;
}

impl ExtraMath for U256 {
    fn checked_mul_u256(&self, other: &U256) -> Option<U256> {
        let e = self.env();
        let zero = U256::from_u32(e, 0);
        if *self == zero || *other == zero {
            return Some(zero);
        }

        // a * b <= MAX  <=>  a <= floor(MAX / b)
        if *self > u256_max(e).div(other) {
            return None;
        }

        Some(self.mul(other))
    }
}
