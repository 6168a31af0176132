use crate::errors::DataProviderError;
use crate::types::{CooldownState, ProtocolState, StakedAssetConfig, UserState};
use soroban_sdk::{contractclient, log, panic_with_error, Address, Env, Symbol};

#[contractclient(name = "StakedAssetSourceClient")]
pub trait StakedAssetSource {
    fn total_supply(e: Env) -> u128;

    // projected underlying amount for `amount` staked units, must not decrease as `amount` grows
    fn preview_redeem(e: Env, amount: u128) -> u128;

    fn cooldown_seconds(e: Env) -> u64;

    fn unstake_window_seconds(e: Env) -> u64;

    fn distribution_end(e: Env) -> u64;

    // configured rate of the distribution targeting this asset, regardless of its end time
    fn emission_per_second(e: Env) -> u128;

    fn balance(e: Env, user: Address) -> u128;

    fn total_rewards_balance(e: Env, user: Address) -> u128;

    fn underlying_balance(e: Env, user: Address) -> u128;

    fn cooldown_state(e: Env, user: Address) -> CooldownState;
}

pub(crate) struct StakedAssetAdapter {
    env: Env,
    config: StakedAssetConfig,
}

impl StakedAssetAdapter {
    pub(crate) fn new(e: &Env, config: &StakedAssetConfig) -> Self {
        Self {
            env: e.clone(),
            config: config.clone(),
        }
    }

    fn client(&self) -> StakedAssetSourceClient {
        StakedAssetSourceClient::new(&self.env, &self.config.asset)
    }

    fn unavailable(&self, field: &str, error: DataProviderError) -> ! {
        log!(
            &self.env,
            "staked asset source unavailable",
            self.config.id.clone(),
            Symbol::new(&self.env, field)
        );
        panic_with_error!(&self.env, error)
    }

    pub(crate) fn get_protocol_state(&self) -> ProtocolState {
        let client = self.client();

        let total_supply = match client.try_total_supply() {
            Ok(Ok(value)) => value,
            _ => self.unavailable("total_supply", DataProviderError::TotalSupplyUnavailable),
        };
        let cooldown_seconds = match client.try_cooldown_seconds() {
            Ok(Ok(value)) => value,
            _ => self.unavailable(
                "cooldown_seconds",
                DataProviderError::CooldownSecondsUnavailable,
            ),
        };
        let unstake_window_seconds = match client.try_unstake_window_seconds() {
            Ok(Ok(value)) => value,
            _ => self.unavailable(
                "unstake_window_seconds",
                DataProviderError::UnstakeWindowUnavailable,
            ),
        };
        let distribution_end_timestamp = match client.try_distribution_end() {
            Ok(Ok(value)) => value,
            _ => self.unavailable(
                "distribution_end",
                DataProviderError::DistributionEndUnavailable,
            ),
        };
        let raw_emission_per_second = match client.try_emission_per_second() {
            Ok(Ok(value)) => value,
            _ => self.unavailable(
                "emission_per_second",
                DataProviderError::EmissionUnavailable,
            ),
        };

        ProtocolState {
            total_supply,
            cooldown_seconds,
            unstake_window_seconds,
            distribution_end_timestamp,
            raw_emission_per_second,
        }
    }

    pub(crate) fn preview_redeem(&self, amount: u128) -> u128 {
        match self.client().try_preview_redeem(&amount) {
            Ok(Ok(value)) => value,
            _ => self.unavailable("preview_redeem", DataProviderError::PreviewRedeemUnavailable),
        }
    }

    pub(crate) fn get_user_state(&self, user: &Address) -> UserState {
        let client = self.client();

        let staked_balance = match client.try_balance(user) {
            Ok(Ok(value)) => value,
            _ => self.unavailable("balance", DataProviderError::BalanceUnavailable),
        };
        let claimable_rewards = match client.try_total_rewards_balance(user) {
            Ok(Ok(value)) => value,
            _ => self.unavailable(
                "total_rewards_balance",
                DataProviderError::RewardsBalanceUnavailable,
            ),
        };
        let underlying_balance = match client.try_underlying_balance(user) {
            Ok(Ok(value)) => value,
            _ => self.unavailable(
                "underlying_balance",
                DataProviderError::UnderlyingBalanceUnavailable,
            ),
        };
        let cooldown = match client.try_cooldown_state(user) {
            Ok(Ok(value)) => value,
            _ => self.unavailable(
                "cooldown_state",
                DataProviderError::CooldownStateUnavailable,
            ),
        };

        UserState {
            staked_balance,
            claimable_rewards,
            underlying_balance,
            cooldown,
        }
    }
}
