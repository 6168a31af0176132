use crate::errors::DataProviderError;
use soroban_sdk::{contractclient, log, panic_with_error, Address, Env, Symbol};

#[contractclient(name = "PriceFeedSourceClient")]
pub trait PriceFeedSource {
    // latest reported price for the feed, sign and scale as published
    fn latest_price(e: Env, feed_id: Symbol) -> i128;
}

pub(crate) struct PriceFeedAdapter {
    env: Env,
    oracle: Address,
}

impl PriceFeedAdapter {
    pub(crate) fn new(e: &Env, oracle: &Address) -> Self {
        Self {
            env: e.clone(),
            oracle: oracle.clone(),
        }
    }

    pub(crate) fn get_latest_price(&self, feed_id: &Symbol) -> i128 {
        match PriceFeedSourceClient::new(&self.env, &self.oracle).try_latest_price(feed_id) {
            Ok(Ok(price)) => price,
            _ => {
                log!(&self.env, "price feed unavailable", self.oracle, feed_id.clone());
                panic_with_error!(&self.env, DataProviderError::PriceFeedUnavailable)
            }
        }
    }
}
