use crate::types::{
    AggregateSnapshot, AggregateUserView, DataProviderConfig, StakedAssetSnapshot,
    StakedAssetUserView,
};
use soroban_sdk::{Address, Env, Symbol, Vec};

pub trait DataProviderInterface {
    // Stored configuration: price oracle, reference feed and the staked asset list.
    fn get_config(e: Env) -> DataProviderConfig;

    // Latest price of the reference asset, as published by the oracle.
    fn get_reference_price(e: Env) -> i128;

    // get_all_snapshots
    // Protocol-wide figures for every configured staked asset.
    //
    // Arguments:
    //   - e: The Soroban environment.
    //
    // Returns:
    //   - One snapshot per configured asset, in configuration order, and the reference price.
    fn get_all_snapshots(e: Env) -> AggregateSnapshot;

    fn get_snapshot(e: Env, asset_id: Symbol) -> StakedAssetSnapshot;

    // Snapshots for a subset of configured assets, in request order.
    fn get_snapshots(e: Env, asset_ids: Vec<Symbol>) -> Vec<StakedAssetSnapshot>;

    // get_all_user_positions
    // Snapshots plus the user's position in every configured staked asset.
    //
    // Arguments:
    //   - e: The Soroban environment.
    //   - user: The account to report on. No authorization required.
    //
    // Returns:
    //   - Index-aligned snapshots and positions, and the reference price.
    fn get_all_user_positions(e: Env, user: Address) -> AggregateUserView;

    fn get_user_position(e: Env, asset_id: Symbol, user: Address) -> StakedAssetUserView;

    fn get_user_positions(e: Env, asset_ids: Vec<Symbol>, user: Address)
        -> Vec<StakedAssetUserView>;
}

pub trait VersionedContract {
    // Get contract version
    fn version() -> u32;

    // Get contract type symbolic name
    fn contract_name(e: Env) -> Symbol;
}
