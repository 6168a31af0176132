#![cfg(test)]
extern crate std;

use crate::errors::DataProviderError;
use crate::testutils::{
    create_contract, pool_asset_id, pool_feed, reference_feed, reward_feed, single_asset_id,
    Setup, DISTRIBUTION_END,
};
use crate::types::{DataProviderConfig, StakedAssetConfig};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{symbol_short, Address, Env, Error, Symbol, Vec, U256};
use utils::test_utils::jump_to;

fn rate(e: &Env, value: u128) -> U256 {
    U256::from_u128(e, value)
}

#[test]
fn test_get_config() {
    let setup = Setup::default();
    assert_eq!(setup.contract.get_config(), setup.config);
}

#[test]
fn test_version() {
    let setup = Setup::default();
    assert_eq!(setup.contract.version(), 100);
    assert_eq!(
        setup.contract.contract_name(),
        Symbol::new(&setup.env, "StakedAssetDataProvider")
    );
}

#[test]
fn test_single_asset_snapshot() {
    let setup = Setup::default();

    let snapshot = setup.contract.get_snapshot(&single_asset_id());
    assert_eq!(snapshot.asset_id, single_asset_id());
    assert_eq!(snapshot.asset, setup.single_asset.address);
    assert_eq!(snapshot.total_supply, 1_000_000);
    assert_eq!(snapshot.total_redeemable_value, 1_000_000);
    assert_eq!(snapshot.cooldown_seconds, 864_000);
    assert_eq!(snapshot.unstake_window_seconds, 172_800);
    assert_eq!(snapshot.distribution_end_timestamp, DISTRIBUTION_END);
    assert_eq!(snapshot.distribution_per_second, 10);
    assert_eq!(snapshot.reward_asset_price, 2);
    assert_eq!(snapshot.staked_asset_price, 2);
    // floor(10 * 31_536_000 * 10_000 / 1_000_000)
    assert_eq!(snapshot.annualized_yield_rate, rate(&setup.env, 3_153_600));
}

#[test]
fn test_pool_backed_snapshot() {
    let setup = Setup::default();

    let snapshot = setup.contract.get_snapshot(&pool_asset_id());
    assert_eq!(snapshot.asset_id, pool_asset_id());
    assert_eq!(snapshot.asset, setup.pool_asset.address);
    assert_eq!(snapshot.total_supply, 100);
    assert_eq!(snapshot.distribution_per_second, 5);
    assert_eq!(snapshot.reward_asset_price, 2);
    assert_eq!(snapshot.staked_asset_price, 4);
    // 5 * 2 = 10 reward value per second over 100 * 4 = 400 staked value
    assert_eq!(snapshot.annualized_yield_rate, rate(&setup.env, 7_884_000_000));
}

#[test]
fn test_single_asset_price_follows_reward_feed() {
    let setup = Setup::default();

    for price in [0, 1, 3_5000000, -7] {
        setup.oracle.set_price(&reward_feed(), &price);
        let snapshot = setup.contract.get_snapshot(&single_asset_id());
        assert_eq!(snapshot.reward_asset_price, price);
        assert_eq!(snapshot.staked_asset_price, price);
        assert_eq!(snapshot.annualized_yield_rate, rate(&setup.env, 3_153_600));
    }
}

#[test]
fn test_pool_backed_rate_ignores_price_scale() {
    let setup = Setup::default();

    let base_rate = setup
        .contract
        .get_snapshot(&pool_asset_id())
        .annualized_yield_rate;
    setup.oracle.set_price(&reward_feed(), &4);
    setup.oracle.set_price(&pool_feed(), &8);
    assert_eq!(
        setup
            .contract
            .get_snapshot(&pool_asset_id())
            .annualized_yield_rate,
        base_rate
    );

    setup.oracle.set_price(&reward_feed(), &2_0000000);
    setup.oracle.set_price(&pool_feed(), &4_0000000);
    assert_eq!(
        setup
            .contract
            .get_snapshot(&pool_asset_id())
            .annualized_yield_rate,
        base_rate
    );
}

#[test]
fn test_zero_supply() {
    let setup = Setup::default();
    setup.single_asset.set_total_supply(&0);
    setup.pool_asset.set_total_supply(&0);

    let aggregate = setup.contract.get_all_snapshots();
    for snapshot in aggregate.snapshots.iter() {
        assert_eq!(snapshot.total_supply, 0);
        assert_eq!(snapshot.total_redeemable_value, 0);
        assert_eq!(snapshot.annualized_yield_rate, rate(&setup.env, 0));
        assert!(snapshot.distribution_per_second > 0);
    }
}

#[test]
fn test_zero_staked_price() {
    let setup = Setup::default();
    setup.oracle.set_price(&pool_feed(), &0);

    let snapshot = setup.contract.get_snapshot(&pool_asset_id());
    assert_eq!(snapshot.staked_asset_price, 0);
    assert_eq!(snapshot.annualized_yield_rate, rate(&setup.env, 0));
}

#[test]
fn test_distribution_end() {
    let setup = Setup::default();

    jump_to(&setup.env, DISTRIBUTION_END - 1);
    let snapshot = setup.contract.get_snapshot(&single_asset_id());
    assert_eq!(snapshot.distribution_per_second, 10);
    assert_eq!(snapshot.annualized_yield_rate, rate(&setup.env, 3_153_600));

    jump_to(&setup.env, DISTRIBUTION_END);
    for asset_id in [single_asset_id(), pool_asset_id()] {
        let snapshot = setup.contract.get_snapshot(&asset_id);
        assert_eq!(snapshot.distribution_per_second, 0);
        assert_eq!(snapshot.annualized_yield_rate, rate(&setup.env, 0));
        assert_eq!(snapshot.distribution_end_timestamp, DISTRIBUTION_END);
    }

    // expired distribution never reads the prices into the ratio
    setup.oracle.set_price(&pool_feed(), &-1);
    assert_eq!(
        setup
            .contract
            .get_snapshot(&pool_asset_id())
            .annualized_yield_rate,
        rate(&setup.env, 0)
    );
}

#[test]
fn test_total_redeemable_value_follows_supply() {
    let setup = Setup::default();
    setup.single_asset.set_exchange_rate(&7, &3);

    let mut previous = 0;
    for supply in [0, 1, 2, 3, 1_000, 1_001, 999_999_999, u128::MAX / 7] {
        setup.single_asset.set_total_supply(&supply);
        let snapshot = setup.contract.get_snapshot(&single_asset_id());
        assert_eq!(snapshot.total_redeemable_value, supply * 7 / 3);
        assert!(snapshot.total_redeemable_value >= previous);
        previous = snapshot.total_redeemable_value;
    }
}

#[test]
fn test_redeemable_value() {
    let setup = Setup::default();
    setup.single_asset.set_exchange_rate(&11, &10);

    let small = Address::generate(&setup.env);
    let large = Address::generate(&setup.env);
    setup.single_asset.set_balance(&small, &100);
    setup.single_asset.set_balance(&large, &200);

    let small_view = setup
        .contract
        .get_user_position(&single_asset_id(), &small);
    let large_view = setup
        .contract
        .get_user_position(&single_asset_id(), &large);

    assert_eq!(small_view.snapshot.total_redeemable_value, 1_100_000);
    assert_eq!(small_view.position.redeemable_value, 110);
    assert_eq!(large_view.position.redeemable_value, 220);
    assert!(large_view.position.redeemable_value >= small_view.position.redeemable_value);
}

#[test]
fn test_user_position() {
    let setup = Setup::default();
    setup.pool_asset.set_exchange_rate(&3, &2);
    setup.pool_asset.set_balance(&setup.user, &40);
    setup.pool_asset.set_rewards(&setup.user, &7);
    setup.pool_asset.set_underlying_balance(&setup.user, &1_000);
    setup.pool_asset.set_cooldown(&setup.user, &12_345, &30);

    let view = setup
        .contract
        .get_user_position(&pool_asset_id(), &setup.user);
    assert_eq!(view.snapshot, setup.contract.get_snapshot(&pool_asset_id()));
    assert_eq!(view.position.asset_id, pool_asset_id());
    assert_eq!(view.position.staked_balance, 40);
    assert_eq!(view.position.claimable_rewards, 7);
    assert_eq!(view.position.underlying_balance, 1_000);
    assert_eq!(view.position.redeemable_value, 60);
    assert_eq!(view.position.cooldown_started_at, 12_345);
    assert_eq!(view.position.cooldown_amount, 30);
}

#[test]
fn test_user_without_cooldown() {
    let setup = Setup::default();
    setup.single_asset.set_balance(&setup.user, &500);

    let view = setup
        .contract
        .get_user_position(&single_asset_id(), &setup.user);
    assert_eq!(view.position.staked_balance, 500);
    assert_eq!(view.position.cooldown_started_at, 0);
    assert_eq!(view.position.cooldown_amount, 0);
}

#[test]
fn test_all_user_positions() {
    let setup = Setup::default();
    setup.single_asset.set_balance(&setup.user, &500);
    setup.pool_asset.set_balance(&setup.user, &20);

    let aggregate = setup.contract.get_all_user_positions(&setup.user);
    assert_eq!(aggregate.reference_price, 1_0000000);
    assert_eq!(aggregate.snapshots.len(), 2);
    assert_eq!(aggregate.positions.len(), 2);
    for (snapshot, position) in aggregate.snapshots.iter().zip(aggregate.positions.iter()) {
        assert_eq!(snapshot.asset_id, position.asset_id);
    }
    assert_eq!(aggregate.positions.get_unchecked(0).staked_balance, 500);
    assert_eq!(aggregate.positions.get_unchecked(1).staked_balance, 20);
    assert_eq!(
        aggregate.snapshots,
        setup.contract.get_all_snapshots().snapshots
    );
}

#[test]
fn test_all_snapshots() {
    let setup = Setup::default();

    let aggregate = setup.contract.get_all_snapshots();
    assert_eq!(aggregate.reference_price, 1_0000000);
    assert_eq!(
        aggregate.reference_price,
        setup.contract.get_reference_price()
    );
    assert_eq!(
        aggregate.snapshots,
        Vec::from_array(
            &setup.env,
            [
                setup.contract.get_snapshot(&single_asset_id()),
                setup.contract.get_snapshot(&pool_asset_id()),
            ]
        )
    );
}

#[test]
fn test_reads_are_idempotent() {
    let setup = Setup::default();
    setup.single_asset.set_balance(&setup.user, &500);
    setup.single_asset.set_exchange_rate(&7, &3);

    assert_eq!(
        setup.contract.get_all_snapshots(),
        setup.contract.get_all_snapshots()
    );
    assert_eq!(
        setup.contract.get_all_user_positions(&setup.user),
        setup.contract.get_all_user_positions(&setup.user)
    );
}

#[test]
fn test_batch_lookups() {
    let setup = Setup::default();

    let snapshots = setup.contract.get_snapshots(&Vec::from_array(
        &setup.env,
        [pool_asset_id(), single_asset_id()],
    ));
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots.get_unchecked(0).asset_id, pool_asset_id());
    assert_eq!(snapshots.get_unchecked(1).asset_id, single_asset_id());

    let views = setup.contract.get_user_positions(
        &Vec::from_array(&setup.env, [single_asset_id()]),
        &setup.user,
    );
    assert_eq!(views.len(), 1);
    assert_eq!(
        views.get_unchecked(0),
        setup
            .contract
            .get_user_position(&single_asset_id(), &setup.user)
    );

    assert!(setup
        .contract
        .get_snapshots(&Vec::new(&setup.env))
        .is_empty());
}

#[test]
#[should_panic(expected = "Error(Contract, #1201)")]
fn test_unknown_asset_snapshot() {
    let setup = Setup::default();
    setup.contract.get_snapshot(&symbol_short!("stkbtc"));
}

#[test]
#[should_panic(expected = "Error(Contract, #1201)")]
fn test_unknown_asset_user_position() {
    let setup = Setup::default();
    setup
        .contract
        .get_user_position(&symbol_short!("stkbtc"), &setup.user);
}

#[test]
fn test_unknown_asset_in_batch() {
    let setup = Setup::default();

    let asset_ids = Vec::from_array(&setup.env, [single_asset_id(), symbol_short!("stkbtc")]);
    assert_eq!(
        setup.contract.try_get_snapshots(&asset_ids).err(),
        Some(Ok(Error::from(DataProviderError::InvalidConfiguration)))
    );
    assert_eq!(
        setup
            .contract
            .try_get_user_positions(&asset_ids, &setup.user)
            .err(),
        Some(Ok(Error::from(DataProviderError::InvalidConfiguration)))
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #1201)")]
fn test_constructor_empty_assets() {
    let setup = Setup::default();
    create_contract(
        &setup.env,
        &DataProviderConfig {
            price_oracle: setup.oracle.address.clone(),
            reference_feed: reference_feed(),
            assets: Vec::new(&setup.env),
        },
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #1201)")]
fn test_constructor_duplicate_asset_ids() {
    let setup = Setup::default();
    let asset = setup.config.assets.get_unchecked(0);
    let duplicate = StakedAssetConfig {
        asset: setup.pool_asset.address.clone(),
        ..asset.clone()
    };
    create_contract(
        &setup.env,
        &DataProviderConfig {
            price_oracle: setup.oracle.address.clone(),
            reference_feed: reference_feed(),
            assets: Vec::from_array(&setup.env, [asset, duplicate]),
        },
    );
}
