use soroban_sdk::{contractclient, Env, Vec};

use crate::PoolId;

/// Read surface of an AMM contract that keeps a registry of its pools
///
/// `AmmClient::new(&env, &address)` binds the interface to a deployed
/// contract. The client only exposes what is declared here.
#[contractclient(name = "AmmClient")]
pub trait AmmInterface {
    /// All pools currently registered with the AMM
    fn pools(env: Env) -> Vec<PoolId>;
}
