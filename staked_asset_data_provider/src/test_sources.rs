#![cfg(test)]
extern crate std;

use crate::errors::DataProviderError;
use crate::testutils::{
    create_contract, pool_asset_id, pool_feed, reference_feed, reward_feed, single_asset_id, Setup,
};
use crate::types::{AssetKind, DataProviderConfig};
use soroban_sdk::{Error, InvokeError, Symbol, U256};

fn assert_fails_with<T: core::fmt::Debug>(
    result: Result<T, Result<Error, InvokeError>>,
    expected: DataProviderError,
) {
    match result {
        Err(Ok(error)) => assert_eq!(error, Error::from(expected)),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

#[test]
fn test_protocol_field_failures() {
    let fields = [
        ("total_supply", DataProviderError::TotalSupplyUnavailable),
        ("preview_redeem", DataProviderError::PreviewRedeemUnavailable),
        ("cooldown_seconds", DataProviderError::CooldownSecondsUnavailable),
        ("unstake_window_seconds", DataProviderError::UnstakeWindowUnavailable),
        ("distribution_end", DataProviderError::DistributionEndUnavailable),
        ("emission_per_second", DataProviderError::EmissionUnavailable),
    ];

    for (field, expected) in fields {
        let setup = Setup::default();
        setup
            .single_asset
            .set_broken(&Symbol::new(&setup.env, field));

        assert_fails_with(
            setup.contract.try_get_snapshot(&single_asset_id()),
            expected,
        );
        assert_fails_with(setup.contract.try_get_all_snapshots(), expected);
        assert_fails_with(
            setup
                .contract
                .try_get_user_position(&single_asset_id(), &setup.user),
            expected,
        );

        // the other asset is read from its own source
        setup.contract.get_snapshot(&pool_asset_id());
    }
}

#[test]
fn test_user_field_failures() {
    let fields = [
        ("balance", DataProviderError::BalanceUnavailable),
        ("total_rewards_balance", DataProviderError::RewardsBalanceUnavailable),
        ("underlying_balance", DataProviderError::UnderlyingBalanceUnavailable),
        ("cooldown_state", DataProviderError::CooldownStateUnavailable),
    ];

    for (field, expected) in fields {
        let setup = Setup::default();
        setup.pool_asset.set_broken(&Symbol::new(&setup.env, field));

        assert_fails_with(
            setup
                .contract
                .try_get_user_position(&pool_asset_id(), &setup.user),
            expected,
        );
        assert_fails_with(
            setup.contract.try_get_all_user_positions(&setup.user),
            expected,
        );

        // snapshots never touch per-user reads
        setup.contract.get_snapshot(&pool_asset_id());
    }
}

#[test]
fn test_reward_feed_failure() {
    let setup = Setup::default();
    setup.oracle.set_feed_broken(&reward_feed());

    assert_fails_with(
        setup.contract.try_get_snapshot(&single_asset_id()),
        DataProviderError::PriceFeedUnavailable,
    );
    assert_fails_with(
        setup.contract.try_get_snapshot(&pool_asset_id()),
        DataProviderError::PriceFeedUnavailable,
    );
}

#[test]
fn test_staked_price_feed_missing() {
    let setup = Setup::default();
    let other_feed = Symbol::new(&setup.env, "unknown_feed");
    let config = setup.contract.get_config();
    let mut assets = config.assets.clone();
    let mut pool = assets.get_unchecked(1);
    pool.kind = AssetKind::PoolBacked(other_feed);
    assets.set(1, pool);
    let contract = create_contract(&setup.env, &DataProviderConfig { assets, ..config });

    assert_fails_with(
        contract.try_get_snapshot(&pool_asset_id()),
        DataProviderError::PriceFeedUnavailable,
    );
    contract.get_snapshot(&single_asset_id());
}

#[test]
fn test_reference_feed_failure() {
    let setup = Setup::default();
    setup.oracle.set_feed_broken(&reference_feed());

    assert_fails_with(
        setup.contract.try_get_reference_price(),
        DataProviderError::PriceFeedUnavailable,
    );
    assert_fails_with(
        setup.contract.try_get_all_snapshots(),
        DataProviderError::PriceFeedUnavailable,
    );
    assert_fails_with(
        setup.contract.try_get_all_user_positions(&setup.user),
        DataProviderError::PriceFeedUnavailable,
    );

    // single lookups carry no reference price
    setup.contract.get_snapshot(&single_asset_id());
    setup
        .contract
        .get_user_position(&pool_asset_id(), &setup.user);
}

#[test]
#[should_panic(expected = "Error(Contract, #1202)")]
fn test_negative_staked_price() {
    let setup = Setup::default();
    setup.oracle.set_price(&pool_feed(), &-4);
    setup.contract.get_snapshot(&pool_asset_id());
}

#[test]
#[should_panic(expected = "Error(Contract, #1202)")]
fn test_negative_reward_price_pool_backed() {
    let setup = Setup::default();
    setup.oracle.set_price(&reward_feed(), &-2);
    setup.contract.get_snapshot(&pool_asset_id());
}

#[test]
fn test_single_asset_large_emission_is_exact() {
    let setup = Setup::default();
    setup.single_asset.set_total_supply(&1);

    setup
        .single_asset
        .set_emission_per_second(&10_000_000_000_000_000_000_000_000_000);
    let snapshot = setup.contract.get_snapshot(&single_asset_id());
    // 10^28 * 315_360_000_000 = 3.1536 * 10^39, beyond u128
    assert_eq!(
        snapshot.annualized_yield_rate,
        U256::from_u128(&setup.env, 10_000_000_000_000_000_000_000_000_000)
            .mul(&U256::from_u128(&setup.env, 315_360_000_000))
    );
    assert_eq!(snapshot.annualized_yield_rate.to_u128(), None);

    setup.single_asset.set_emission_per_second(&u128::MAX);
    assert_eq!(
        setup
            .contract
            .get_snapshot(&single_asset_id())
            .annualized_yield_rate,
        U256::from_u128(&setup.env, u128::MAX)
            .mul(&U256::from_u128(&setup.env, 315_360_000_000))
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #510)")]
fn test_pool_backed_wide_overflow() {
    let setup = Setup::default();
    setup.pool_asset.set_emission_per_second(&u128::MAX);
    setup.oracle.set_price(&reward_feed(), &i128::MAX);
    setup.contract.get_snapshot(&pool_asset_id());
}

#[test]
fn test_near_max_operands() {
    let setup = Setup::default();
    setup.single_asset.set_total_supply(&u128::MAX);
    setup.single_asset.set_emission_per_second(&u128::MAX);

    let snapshot = setup.contract.get_snapshot(&single_asset_id());
    assert_eq!(snapshot.total_redeemable_value, u128::MAX);
    assert_eq!(
        snapshot.annualized_yield_rate,
        U256::from_u128(&setup.env, 315_360_000_000)
    );

    setup.pool_asset.set_total_supply(&u128::MAX);
    setup.oracle.set_price(&pool_feed(), &i128::MAX);
    let snapshot = setup.contract.get_snapshot(&pool_asset_id());
    assert_eq!(snapshot.annualized_yield_rate, U256::from_u32(&setup.env, 0));
}
