use crate::constants::{APY_PRECISION, SECONDS_PER_YEAR};
use soroban_sdk::{panic_with_error, Env, U256};
use utils::math_errors::MathError;
use utils::u256_math::ExtraMath;

fn yearly_scale(e: &Env) -> U256 {
    U256::from_u128(e, SECONDS_PER_YEAR * APY_PRECISION)
}

// Unit-for-unit yield of a single-asset stake, scaled by APY_PRECISION and truncated.
// A 128-bit rate times the yearly scale stays below 2^167, so the product cannot leave U256.
//
// rate = distribution_per_second * SECONDS_PER_YEAR * APY_PRECISION / total_supply
pub(crate) fn compute_unit_apy(e: &Env, distribution_per_second: u128, total_supply: u128) -> U256 {
    if total_supply == 0 {
        return U256::from_u32(e, 0);
    }

    U256::from_u128(e, distribution_per_second)
        .mul(&yearly_scale(e))
        .div(&U256::from_u128(e, total_supply))
}

// Value-for-value yield: both operands already converted to the reference currency, each a
// product of two 128-bit factors. Scaling such a numerator by a year can leave U256.
pub(crate) fn compute_value_apy(e: &Env, reward_value: &U256, staked_value: &U256) -> U256 {
    let zero = U256::from_u32(e, 0);
    if *staked_value == zero {
        return zero;
    }

    match reward_value.checked_mul_u256(&yearly_scale(e)) {
        Some(numerator) => numerator.div(staked_value),
        None => panic_with_error!(e, MathError::NumberOverflow),
    }
}

// Widening product of two 128-bit factors; always fits 256 bits.
pub(crate) fn mul_wide(e: &Env, a: u128, b: u128) -> U256 {
    U256::from_u128(e, a).mul(&U256::from_u128(e, b))
}
