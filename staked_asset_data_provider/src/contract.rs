use crate::aggregation::AggregationService;
use crate::errors::DataProviderError;
use crate::interface::{DataProviderInterface, VersionedContract};
use crate::storage::{get_config, set_config};
use crate::types::{
    AggregateSnapshot, AggregateUserView, DataProviderConfig, StakedAssetSnapshot,
    StakedAssetUserView,
};
use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, Address, Env, Symbol, Vec,
};

#[contract]
pub struct StakedAssetDataProvider;

#[contractimpl]
impl StakedAssetDataProvider {
    // __constructor
    // Stores the provider configuration. It cannot be changed afterwards.
    //
    // Arguments:
    //   - e: The Soroban environment.
    //   - config: Price oracle, reference feed and a non-empty list of staked assets with unique ids.
    pub fn __constructor(e: Env, config: DataProviderConfig) {
        if !config.is_valid() {
            log!(&e, "invalid data provider config", config.assets.len());
            panic_with_error!(&e, DataProviderError::InvalidConfiguration);
        }

        set_config(&e, &config);
    }
}

#[contractimpl]
impl DataProviderInterface for StakedAssetDataProvider {
    fn get_config(e: Env) -> DataProviderConfig {
        get_config(&e)
    }

    fn get_reference_price(e: Env) -> i128 {
        AggregationService::new(&e, get_config(&e)).reference_price()
    }

    fn get_all_snapshots(e: Env) -> AggregateSnapshot {
        AggregationService::new(&e, get_config(&e)).all_snapshots()
    }

    // get_snapshot
    // Snapshot of a single configured staked asset.
    //
    // Arguments:
    //   - e: The Soroban environment.
    //   - asset_id: Identifier from the configuration.
    //
    // Panics:
    //   - InvalidConfiguration if the id is not configured.
    fn get_snapshot(e: Env, asset_id: Symbol) -> StakedAssetSnapshot {
        let service = AggregationService::new(&e, get_config(&e));
        let asset = service.resolve_asset(&asset_id);
        service.snapshot(&asset)
    }

    fn get_snapshots(e: Env, asset_ids: Vec<Symbol>) -> Vec<StakedAssetSnapshot> {
        let service = AggregationService::new(&e, get_config(&e));
        let assets = service.resolve_assets(&asset_ids);
        service.snapshots(&assets)
    }

    fn get_all_user_positions(e: Env, user: Address) -> AggregateUserView {
        AggregationService::new(&e, get_config(&e)).all_user_positions(&user)
    }

    // get_user_position
    // Snapshot of a single staked asset together with the user's position in it.
    //
    // Arguments:
    //   - e: The Soroban environment.
    //   - asset_id: Identifier from the configuration.
    //   - user: The account to report on.
    //
    // Returns:
    //   - StakedAssetUserView. A user without cooldown reports zero start time and amount.
    fn get_user_position(e: Env, asset_id: Symbol, user: Address) -> StakedAssetUserView {
        let service = AggregationService::new(&e, get_config(&e));
        let asset = service.resolve_asset(&asset_id);
        service.user_view(&asset, &user)
    }

    fn get_user_positions(
        e: Env,
        asset_ids: Vec<Symbol>,
        user: Address,
    ) -> Vec<StakedAssetUserView> {
        let service = AggregationService::new(&e, get_config(&e));
        let assets = service.resolve_assets(&asset_ids);
        service.user_views(&assets, &user)
    }
}

#[contractimpl]
impl VersionedContract for StakedAssetDataProvider {
    fn version() -> u32 {
        100
    }

    fn contract_name(e: Env) -> Symbol {
        Symbol::new(&e, "StakedAssetDataProvider")
    }
}
