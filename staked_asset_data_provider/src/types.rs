use soroban_sdk::{contracttype, Address, Symbol, Vec, U256};

// How the staked asset is priced and how its yield is measured.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AssetKind {
    // Staked asset is the reward asset itself: shares the reward feed, unit-for-unit yield.
    SingleAsset,
    // Staked asset is a pool position with its own price feed: value-for-value yield.
    PoolBacked(Symbol),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedAssetConfig {
    pub id: Symbol,
    pub asset: Address,
    pub reward_feed: Symbol,
    pub kind: AssetKind,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DataProviderConfig {
    pub price_oracle: Address,
    pub reference_feed: Symbol,
    pub assets: Vec<StakedAssetConfig>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CooldownState {
    pub started_at: u64,
    pub amount: u128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProtocolState {
    pub total_supply: u128,
    pub cooldown_seconds: u64,
    pub unstake_window_seconds: u64,
    pub distribution_end_timestamp: u64,
    pub raw_emission_per_second: u128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserState {
    pub staked_balance: u128,
    pub claimable_rewards: u128,
    pub underlying_balance: u128,
    pub cooldown: CooldownState,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedAssetSnapshot {
    pub asset_id: Symbol,
    pub asset: Address,
    pub total_supply: u128,
    pub total_redeemable_value: u128,
    pub cooldown_seconds: u64,
    pub unstake_window_seconds: u64,
    pub reward_asset_price: i128,
    pub distribution_end_timestamp: u64,
    pub distribution_per_second: u128,
    pub staked_asset_price: i128,
    // fixed point, APY_PRECISION = 100%
    pub annualized_yield_rate: U256,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserPosition {
    pub asset_id: Symbol,
    pub staked_balance: u128,
    pub claimable_rewards: u128,
    pub underlying_balance: u128,
    pub redeemable_value: u128,
    pub cooldown_started_at: u64,
    pub cooldown_amount: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedAssetUserView {
    pub snapshot: StakedAssetSnapshot,
    pub position: UserPosition,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AggregateSnapshot {
    pub snapshots: Vec<StakedAssetSnapshot>,
    pub reference_price: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AggregateUserView {
    pub snapshots: Vec<StakedAssetSnapshot>,
    // index-aligned with `snapshots`
    pub positions: Vec<UserPosition>,
    pub reference_price: i128,
}

impl DataProviderConfig {
    pub(crate) fn find_asset(&self, asset_id: &Symbol) -> Option<StakedAssetConfig> {
        self.assets.iter().find(|asset| asset.id == *asset_id)
    }

    pub(crate) fn is_valid(&self) -> bool {
        if self.assets.is_empty() {
            return false;
        }

        for i in 0..self.assets.len() {
            let id = self.assets.get_unchecked(i).id;
            for j in (i + 1)..self.assets.len() {
                if self.assets.get_unchecked(j).id == id {
                    return false;
                }
            }
        }
        true
    }
}
