pub(crate) const SECONDS_PER_YEAR: u128 = 365 * 86400;

// 10_000 = 100.00%
pub(crate) const APY_PRECISION: u128 = 10_000;
