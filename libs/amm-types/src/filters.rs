use soroban_sdk::{Address, Env, Vec};

use crate::Pool;

/// Pools trading none of the `blacklist` tokens
pub fn filter_blacklisted_tokens(
    env: &Env,
    pools: &Vec<Pool>,
    blacklist: &Vec<Address>,
) -> Vec<Pool> {
    retain(env, pools, |pool| {
        !blacklist.contains(&pool.token_0) && !blacklist.contains(&pool.token_1)
    })
}

/// Pools whose contract address is not in `blacklist`
pub fn filter_blacklisted_amms(
    env: &Env,
    pools: &Vec<Pool>,
    blacklist: &Vec<Address>,
) -> Vec<Pool> {
    retain(env, pools, |pool| !blacklist.contains(&pool.address))
}

/// Drops pools whose pair was never loaded
pub fn filter_empty_amms(env: &Env, pools: &Vec<Pool>) -> Vec<Pool> {
    retain(env, pools, Pool::is_populated)
}

/// Drops pools holding nothing on either side
pub fn filter_amms_with_empty_reserves(env: &Env, pools: &Vec<Pool>) -> Vec<Pool> {
    retain(env, pools, |pool| pool.reserve_0 != 0 || pool.reserve_1 != 0)
}

fn retain(env: &Env, pools: &Vec<Pool>, keep: impl Fn(&Pool) -> bool) -> Vec<Pool> {
    let mut kept = Vec::new(env);
    for pool in pools.iter() {
        if keep(&pool) {
            kept.push_back(pool);
        }
    }
    kept
}
