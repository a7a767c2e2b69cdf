#![no_std]

mod config;
mod error;

pub use config::AMM_CONTRACT_ID;
pub use error::QueryError;

use amm_types::{AmmClient, PoolId};
use soroban_sdk::{contract, contractimpl, symbol_short, Env, Symbol, Vec};

/// Topic of the event carrying the pool registry
pub const POOLS_TOPIC: Symbol = symbol_short!("pools");

#[contract]
pub struct AmmQuery;

#[contractimpl]
impl AmmQuery {
    /// Read the configured AMM's pool registry and publish it unchanged
    /// as a single `pools` event
    ///
    /// Any failure aborts the invocation, so nothing is published.
    pub fn run(env: Env) -> Result<(), QueryError> {
        let amm = AmmClient::new(&env, &AMM_CONTRACT_ID.to_address(&env));
        let pools = fetch_pools(&amm)?;

        env.events().publish((POOLS_TOPIC,), pools);
        Ok(())
    }
}

fn fetch_pools(amm: &AmmClient<'_>) -> Result<Vec<PoolId>, QueryError> {
    match amm.try_pools() {
        Ok(Ok(pools)) => Ok(pools),
        Ok(Err(_)) => Err(QueryError::InterfaceMismatch),
        Err(_) => Err(QueryError::AmmCallFailed),
    }
}
