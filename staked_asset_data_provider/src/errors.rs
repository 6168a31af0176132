use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DataProviderError {
    InvalidConfiguration = 1201,
    NegativePrice = 1202,

    // source reads, one code per field
    PriceFeedUnavailable = 1301,
    TotalSupplyUnavailable = 1302,
    PreviewRedeemUnavailable = 1303,
    CooldownSecondsUnavailable = 1304,
    UnstakeWindowUnavailable = 1305,
    DistributionEndUnavailable = 1306,
    EmissionUnavailable = 1307,
    BalanceUnavailable = 1308,
    RewardsBalanceUnavailable = 1309,
    UnderlyingBalanceUnavailable = 1310,
    CooldownStateUnavailable = 1311,
}
