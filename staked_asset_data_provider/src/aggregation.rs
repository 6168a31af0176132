use crate::apy::{compute_unit_apy, compute_value_apy, mul_wide};
use crate::errors::DataProviderError;
use crate::price_feed::PriceFeedAdapter;
use crate::staked_asset::StakedAssetAdapter;
use crate::types::{
    AggregateSnapshot, AggregateUserView, AssetKind, DataProviderConfig, ProtocolState,
    StakedAssetConfig, StakedAssetSnapshot, StakedAssetUserView, UserPosition,
};
use soroban_sdk::{log, panic_with_error, Address, Env, Symbol, Vec, U256};

// Emission stops at the distribution end, whatever rate is still configured.
pub(crate) fn active_distribution_per_second(now: u64, state: &ProtocolState) -> u128 {
    if now < state.distribution_end_timestamp {
        state.raw_emission_per_second
    } else {
        0
    }
}

pub(crate) struct AggregationService {
    env: Env,
    config: DataProviderConfig,
    price_feed: PriceFeedAdapter,
}

impl AggregationService {
    pub(crate) fn new(e: &Env, config: DataProviderConfig) -> Self {
        let price_feed = PriceFeedAdapter::new(e, &config.price_oracle);
        Self {
            env: e.clone(),
            config,
            price_feed,
        }
    }

    pub(crate) fn reference_price(&self) -> i128 {
        self.price_feed
            .get_latest_price(&self.config.reference_feed)
    }

    pub(crate) fn resolve_asset(&self, asset_id: &Symbol) -> StakedAssetConfig {
        match self.config.find_asset(asset_id) {
            Some(asset) => asset,
            None => {
                log!(&self.env, "staked asset not configured", asset_id.clone());
                panic_with_error!(&self.env, DataProviderError::InvalidConfiguration)
            }
        }
    }

    // all ids are resolved before any source is read
    pub(crate) fn resolve_assets(&self, asset_ids: &Vec<Symbol>) -> Vec<StakedAssetConfig> {
        let mut assets = Vec::new(&self.env);
        for asset_id in asset_ids.iter() {
            assets.push_back(self.resolve_asset(&asset_id));
        }
        assets
    }

    pub(crate) fn snapshot(&self, asset: &StakedAssetConfig) -> StakedAssetSnapshot {
        let adapter = StakedAssetAdapter::new(&self.env, asset);
        self.snapshot_from(&adapter, asset)
    }

    pub(crate) fn snapshots(&self, assets: &Vec<StakedAssetConfig>) -> Vec<StakedAssetSnapshot> {
        let mut result = Vec::new(&self.env);
        for asset in assets.iter() {
            result.push_back(self.snapshot(&asset));
        }
        result
    }

    pub(crate) fn user_view(&self, asset: &StakedAssetConfig, user: &Address) -> StakedAssetUserView {
        let adapter = StakedAssetAdapter::new(&self.env, asset);
        StakedAssetUserView {
            snapshot: self.snapshot_from(&adapter, asset),
            position: self.position_from(&adapter, asset, user),
        }
    }

    pub(crate) fn user_views(
        &self,
        assets: &Vec<StakedAssetConfig>,
        user: &Address,
    ) -> Vec<StakedAssetUserView> {
        let mut result = Vec::new(&self.env);
        for asset in assets.iter() {
            result.push_back(self.user_view(&asset, user));
        }
        result
    }

    pub(crate) fn all_snapshots(&self) -> AggregateSnapshot {
        AggregateSnapshot {
            snapshots: self.snapshots(&self.config.assets),
            reference_price: self.reference_price(),
        }
    }

    pub(crate) fn all_user_positions(&self, user: &Address) -> AggregateUserView {
        let mut snapshots = Vec::new(&self.env);
        let mut positions = Vec::new(&self.env);
        for view in self.user_views(&self.config.assets, user).iter() {
            snapshots.push_back(view.snapshot);
            positions.push_back(view.position);
        }

        AggregateUserView {
            snapshots,
            positions,
            reference_price: self.reference_price(),
        }
    }

    fn snapshot_from(
        &self,
        adapter: &StakedAssetAdapter,
        asset: &StakedAssetConfig,
    ) -> StakedAssetSnapshot {
        let state = adapter.get_protocol_state();
        let total_redeemable_value = adapter.preview_redeem(state.total_supply);
        let reward_asset_price = self.price_feed.get_latest_price(&asset.reward_feed);
        let distribution_per_second =
            active_distribution_per_second(self.env.ledger().timestamp(), &state);

        let (staked_asset_price, annualized_yield_rate) = match &asset.kind {
            AssetKind::SingleAsset => (
                reward_asset_price,
                compute_unit_apy(&self.env, distribution_per_second, state.total_supply),
            ),
            AssetKind::PoolBacked(staked_feed) => {
                let staked_asset_price = self.price_feed.get_latest_price(staked_feed);
                (
                    staked_asset_price,
                    self.value_weighted_apy(
                        distribution_per_second,
                        reward_asset_price,
                        state.total_supply,
                        staked_asset_price,
                    ),
                )
            }
        };

        StakedAssetSnapshot {
            asset_id: asset.id.clone(),
            asset: asset.asset.clone(),
            total_supply: state.total_supply,
            total_redeemable_value,
            cooldown_seconds: state.cooldown_seconds,
            unstake_window_seconds: state.unstake_window_seconds,
            reward_asset_price,
            distribution_end_timestamp: state.distribution_end_timestamp,
            distribution_per_second,
            staked_asset_price,
            annualized_yield_rate,
        }
    }

    fn position_from(
        &self,
        adapter: &StakedAssetAdapter,
        asset: &StakedAssetConfig,
        user: &Address,
    ) -> UserPosition {
        let state = adapter.get_user_state(user);
        let redeemable_value = adapter.preview_redeem(state.staked_balance);

        UserPosition {
            asset_id: asset.id.clone(),
            staked_balance: state.staked_balance,
            claimable_rewards: state.claimable_rewards,
            underlying_balance: state.underlying_balance,
            redeemable_value,
            cooldown_started_at: state.cooldown.started_at,
            cooldown_amount: state.cooldown.amount,
        }
    }

    // Both sides converted to the reference currency before the ratio:
    // apy(distribution * reward_price, supply * staked_price)
    fn value_weighted_apy(
        &self,
        distribution_per_second: u128,
        reward_asset_price: i128,
        total_supply: u128,
        staked_asset_price: i128,
    ) -> U256 {
        if distribution_per_second == 0 || total_supply == 0 {
            return U256::from_u32(&self.env, 0);
        }

        let reward_value = mul_wide(
            &self.env,
            distribution_per_second,
            self.unsigned_price(reward_asset_price),
        );
        let staked_value = mul_wide(
            &self.env,
            total_supply,
            self.unsigned_price(staked_asset_price),
        );
        compute_value_apy(&self.env, &reward_value, &staked_value)
    }

    fn unsigned_price(&self, price: i128) -> u128 {
        if price < 0 {
            log!(&self.env, "negative price", price);
            panic_with_error!(&self.env, DataProviderError::NegativePrice);
        }
        price as u128
    }
}
