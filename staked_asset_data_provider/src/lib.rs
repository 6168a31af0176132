#![no_std]

mod aggregation;
mod apy;
mod constants;
mod contract;
mod errors;
mod interface;
mod price_feed;
mod staked_asset;
mod storage;
mod test;
mod test_sources;
mod testutils;
mod types;

pub use crate::contract::{StakedAssetDataProvider, StakedAssetDataProviderClient};
pub use crate::errors::DataProviderError;
pub use crate::price_feed::{PriceFeedSource, PriceFeedSourceClient};
pub use crate::staked_asset::{StakedAssetSource, StakedAssetSourceClient};
pub use crate::types::{
    AggregateSnapshot, AggregateUserView, AssetKind, CooldownState, DataProviderConfig,
    StakedAssetConfig, StakedAssetSnapshot, StakedAssetUserView, UserPosition,
};
