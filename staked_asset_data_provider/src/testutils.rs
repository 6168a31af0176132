#![cfg(test)]
extern crate std;

use crate::types::{AssetKind, CooldownState, DataProviderConfig, StakedAssetConfig};
use crate::StakedAssetDataProviderClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, symbol_short, Address,
    Env, Symbol, Vec, U256,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MockError {
    NotSet = 9001,
    Broken = 9002,
}

#[derive(Clone)]
#[contracttype]
enum MockKey {
    Price(Symbol),
    TotalSupply,
    CooldownSeconds,
    UnstakeWindow,
    DistributionEnd,
    Emission,
    ExchangeRate,
    Balance(Address),
    Rewards(Address),
    Underlying(Address),
    Cooldown(Address),
    Broken(Symbol),
}

fn ensure_working(e: &Env, name: Symbol) {
    if e.storage()
        .instance()
        .get(&MockKey::Broken(name))
        .unwrap_or(false)
    {
        panic_with_error!(e, MockError::Broken);
    }
}

fn read<V>(e: &Env, key: &MockKey, default: V) -> V
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    e.storage().instance().get(key).unwrap_or(default)
}

#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    pub fn set_price(e: Env, feed_id: Symbol, price: i128) {
        e.storage().instance().set(&MockKey::Price(feed_id), &price);
    }

    pub fn set_feed_broken(e: Env, feed_id: Symbol) {
        e.storage().instance().set(&MockKey::Broken(feed_id), &true);
    }

    pub fn latest_price(e: Env, feed_id: Symbol) -> i128 {
        ensure_working(&e, feed_id.clone());
        match e.storage().instance().get(&MockKey::Price(feed_id)) {
            Some(price) => price,
            None => panic_with_error!(&e, MockError::NotSet),
        }
    }
}

#[contract]
pub struct MockStakedAsset;

#[contractimpl]
impl MockStakedAsset {
    pub fn set_total_supply(e: Env, value: u128) {
        e.storage().instance().set(&MockKey::TotalSupply, &value);
    }

    pub fn set_cooldown_seconds(e: Env, value: u64) {
        e.storage().instance().set(&MockKey::CooldownSeconds, &value);
    }

    pub fn set_unstake_window_seconds(e: Env, value: u64) {
        e.storage().instance().set(&MockKey::UnstakeWindow, &value);
    }

    pub fn set_distribution_end(e: Env, value: u64) {
        e.storage().instance().set(&MockKey::DistributionEnd, &value);
    }

    pub fn set_emission_per_second(e: Env, value: u128) {
        e.storage().instance().set(&MockKey::Emission, &value);
    }

    // underlying = staked * numerator / denominator
    pub fn set_exchange_rate(e: Env, numerator: u128, denominator: u128) {
        e.storage()
            .instance()
            .set(&MockKey::ExchangeRate, &(numerator, denominator));
    }

    pub fn set_balance(e: Env, user: Address, value: u128) {
        e.storage().instance().set(&MockKey::Balance(user), &value);
    }

    pub fn set_rewards(e: Env, user: Address, value: u128) {
        e.storage().instance().set(&MockKey::Rewards(user), &value);
    }

    pub fn set_underlying_balance(e: Env, user: Address, value: u128) {
        e.storage().instance().set(&MockKey::Underlying(user), &value);
    }

    pub fn set_cooldown(e: Env, user: Address, started_at: u64, amount: u128) {
        e.storage().instance().set(
            &MockKey::Cooldown(user),
            &CooldownState { started_at, amount },
        );
    }

    pub fn set_broken(e: Env, field: Symbol) {
        e.storage().instance().set(&MockKey::Broken(field), &true);
    }

    pub fn total_supply(e: Env) -> u128 {
        ensure_working(&e, Symbol::new(&e, "total_supply"));
        read(&e, &MockKey::TotalSupply, 0)
    }

    pub fn preview_redeem(e: Env, amount: u128) -> u128 {
        ensure_working(&e, Symbol::new(&e, "preview_redeem"));
        let (numerator, denominator): (u128, u128) = read(&e, &MockKey::ExchangeRate, (1, 1));
        U256::from_u128(&e, amount)
            .mul(&U256::from_u128(&e, numerator))
            .div(&U256::from_u128(&e, denominator))
            .to_u128()
            .unwrap()
    }

    pub fn cooldown_seconds(e: Env) -> u64 {
        ensure_working(&e, Symbol::new(&e, "cooldown_seconds"));
        read(&e, &MockKey::CooldownSeconds, 0)
    }

    pub fn unstake_window_seconds(e: Env) -> u64 {
        ensure_working(&e, Symbol::new(&e, "unstake_window_seconds"));
        read(&e, &MockKey::UnstakeWindow, 0)
    }

    pub fn distribution_end(e: Env) -> u64 {
        ensure_working(&e, Symbol::new(&e, "distribution_end"));
        read(&e, &MockKey::DistributionEnd, 0)
    }

    pub fn emission_per_second(e: Env) -> u128 {
        ensure_working(&e, Symbol::new(&e, "emission_per_second"));
        read(&e, &MockKey::Emission, 0)
    }

    pub fn balance(e: Env, user: Address) -> u128 {
        ensure_working(&e, Symbol::new(&e, "balance"));
        read(&e, &MockKey::Balance(user), 0)
    }

    pub fn total_rewards_balance(e: Env, user: Address) -> u128 {
        ensure_working(&e, Symbol::new(&e, "total_rewards_balance"));
        read(&e, &MockKey::Rewards(user), 0)
    }

    pub fn underlying_balance(e: Env, user: Address) -> u128 {
        ensure_working(&e, Symbol::new(&e, "underlying_balance"));
        read(&e, &MockKey::Underlying(user), 0)
    }

    pub fn cooldown_state(e: Env, user: Address) -> CooldownState {
        ensure_working(&e, Symbol::new(&e, "cooldown_state"));
        read(
            &e,
            &MockKey::Cooldown(user),
            CooldownState {
                started_at: 0,
                amount: 0,
            },
        )
    }
}

pub(crate) const DISTRIBUTION_END: u64 = 1_000_000;

pub(crate) fn reward_feed() -> Symbol {
    symbol_short!("AQUA")
}

pub(crate) fn pool_feed() -> Symbol {
    symbol_short!("AQUAXLM")
}

pub(crate) fn reference_feed() -> Symbol {
    symbol_short!("USD")
}

pub(crate) fn single_asset_id() -> Symbol {
    symbol_short!("stkaqua")
}

pub(crate) fn pool_asset_id() -> Symbol {
    symbol_short!("stklp")
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,
    pub(crate) oracle: MockPriceFeedClient<'a>,
    pub(crate) single_asset: MockStakedAssetClient<'a>,
    pub(crate) pool_asset: MockStakedAssetClient<'a>,
    pub(crate) config: DataProviderConfig,
    pub(crate) user: Address,
    pub(crate) contract: StakedAssetDataProviderClient<'a>,
}

impl Default for Setup<'_> {
    // Two staked assets: a single-asset stake of the reward token and a pool-backed stake
    fn default() -> Self {
        let e = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();

        let oracle = create_price_feed(&e);
        oracle.set_price(&reward_feed(), &2);
        oracle.set_price(&pool_feed(), &4);
        oracle.set_price(&reference_feed(), &1_0000000);

        let single_asset = create_staked_asset(&e);
        single_asset.set_total_supply(&1_000_000);
        single_asset.set_emission_per_second(&10);
        single_asset.set_distribution_end(&DISTRIBUTION_END);
        single_asset.set_cooldown_seconds(&864_000);
        single_asset.set_unstake_window_seconds(&172_800);

        let pool_asset = create_staked_asset(&e);
        pool_asset.set_total_supply(&100);
        pool_asset.set_emission_per_second(&5);
        pool_asset.set_distribution_end(&DISTRIBUTION_END);
        pool_asset.set_cooldown_seconds(&604_800);
        pool_asset.set_unstake_window_seconds(&86_400);

        let config = DataProviderConfig {
            price_oracle: oracle.address.clone(),
            reference_feed: reference_feed(),
            assets: Vec::from_array(
                &e,
                [
                    StakedAssetConfig {
                        id: single_asset_id(),
                        asset: single_asset.address.clone(),
                        reward_feed: reward_feed(),
                        kind: AssetKind::SingleAsset,
                    },
                    StakedAssetConfig {
                        id: pool_asset_id(),
                        asset: pool_asset.address.clone(),
                        reward_feed: reward_feed(),
                        kind: AssetKind::PoolBacked(pool_feed()),
                    },
                ],
            ),
        };
        let contract = create_contract(&e, &config);
        let user = Address::generate(&e);

        Self {
            env: e,
            oracle,
            single_asset,
            pool_asset,
            config,
            user,
            contract,
        }
    }
}

pub(crate) fn create_price_feed<'a>(e: &Env) -> MockPriceFeedClient<'a> {
    MockPriceFeedClient::new(e, &e.register(MockPriceFeed, ()))
}

pub(crate) fn create_staked_asset<'a>(e: &Env) -> MockStakedAssetClient<'a> {
    MockStakedAssetClient::new(e, &e.register(MockStakedAsset, ()))
}

pub(crate) fn create_contract<'a>(
    e: &Env,
    config: &DataProviderConfig,
) -> StakedAssetDataProviderClient<'a> {
    StakedAssetDataProviderClient::new(
        e,
        &e.register(crate::StakedAssetDataProvider, (config.clone(),)),
    )
}
