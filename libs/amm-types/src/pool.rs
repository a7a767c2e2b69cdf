use soroban_sdk::{contracttype, vec, Address, Env, Vec, U256};

use crate::{decimal_scale, div_uu, get_amount_out, ArithmeticError, SwapSimulationError};

/// Key of a pool in the AMM registry
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolId {
    /// First asset of the pair
    pub token_0: Address,
    /// Second asset of the pair
    pub token_1: Address,
    /// True for stable-curve pools, false for constant product
    pub is_stable: bool,
}

impl PoolId {
    pub fn new(token_0: Address, token_1: Address, is_stable: bool) -> Self {
        Self {
            token_0,
            token_1,
            is_stable,
        }
    }
}

/// AMM implementation a pool belongs to
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AmmKind {
    Oxiswap,
    MiraV1,
}

/// Local snapshot of a pool: pair, decimals, reserves and fee
///
/// All swap and price computations run against the snapshot; nothing here
/// touches the chain.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    pub kind: AmmKind,
    /// Contract holding the pool
    pub address: Address,
    pub token_0: Address,
    pub token_0_decimals: u32,
    pub token_1: Address,
    pub token_1_decimals: u32,
    pub reserve_0: u64,
    pub reserve_1: u64,
    /// Swap fee in hundred-thousandths (300 = 0.3%)
    pub fee: u64,
    /// Always false for Oxiswap
    pub is_stable: bool,
}

impl Pool {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kind: AmmKind,
        address: Address,
        token_0: Address,
        token_0_decimals: u32,
        token_1: Address,
        token_1_decimals: u32,
        reserve_0: u64,
        reserve_1: u64,
        fee: u64,
        is_stable: bool,
    ) -> Self {
        Self {
            kind,
            address,
            token_0,
            token_0_decimals,
            token_1,
            token_1_decimals,
            reserve_0,
            reserve_1,
            fee,
            is_stable: is_stable && kind == AmmKind::MiraV1,
        }
    }

    /// Placeholder for a pool whose pair has not been loaded yet
    /// Both token slots hold the pool address.
    pub fn unpopulated(kind: AmmKind, address: Address) -> Self {
        Self::new(kind, address.clone(), address.clone(), 0, address, 0, 0, 0, 0, false)
    }

    pub fn is_populated(&self) -> bool {
        self.token_0 != self.token_1
    }

    pub fn address(&self) -> Address {
        self.address.clone()
    }

    /// Registry key of the pool
    pub fn id(&self) -> PoolId {
        PoolId::new(self.token_0.clone(), self.token_1.clone(), self.is_stable)
    }

    pub fn tokens(&self, env: &Env) -> Vec<Address> {
        vec![env, self.token_0.clone(), self.token_1.clone()]
    }

    /// The other token of the pair
    pub fn get_token_out(&self, token_in: &Address) -> Address {
        if self.token_0 == *token_in {
            self.token_1.clone()
        } else {
            self.token_0.clone()
        }
    }

    pub fn get_amount_out(
        &self,
        env: &Env,
        amount_in: u128,
        reserve_in: u64,
        reserve_out: u64,
    ) -> Result<u64, SwapSimulationError> {
        get_amount_out(env, amount_in, reserve_in, reserve_out, self.fee)
    }

    /// Output for selling `amount_in` of `base_token`, reserves untouched
    pub fn simulate_swap(
        &self,
        env: &Env,
        base_token: &Address,
        amount_in: u128,
    ) -> Result<u64, SwapSimulationError> {
        if self.token_0 == *base_token {
            self.get_amount_out(env, amount_in, self.reserve_0, self.reserve_1)
        } else {
            self.get_amount_out(env, amount_in, self.reserve_1, self.reserve_0)
        }
    }

    /// Like `simulate_swap`, then moves the reserves to their post-swap values
    /// Reserves are left unchanged on error.
    pub fn simulate_swap_mut(
        &mut self,
        env: &Env,
        base_token: &Address,
        amount_in: u128,
    ) -> Result<u64, SwapSimulationError> {
        let amount_out = self.simulate_swap(env, base_token, amount_in)?;
        let amount_in = u64::try_from(amount_in).map_err(|_| SwapSimulationError::Overflow)?;

        if self.token_0 == *base_token {
            self.reserve_0 = checked_add(self.reserve_0, amount_in)?;
            self.reserve_1 -= amount_out;
        } else {
            self.reserve_1 = checked_add(self.reserve_1, amount_in)?;
            self.reserve_0 -= amount_out;
        }

        Ok(amount_out)
    }

    /// Price of `base_token` in the other token, as Q64.64
    ///
    /// Reserves are first brought to a common decimal base. An empty base
    /// side prices at `u128::MAX`.
    pub fn calculate_price_64_x_64(
        &self,
        env: &Env,
        base_token: &Address,
    ) -> Result<u128, ArithmeticError> {
        let reserve_0 = U256::from_u128(env, self.reserve_0 as u128);
        let reserve_1 = U256::from_u128(env, self.reserve_1 as u128);

        let (scaled_0, scaled_1) = if self.token_0_decimals < self.token_1_decimals {
            let scale = decimal_scale(env, self.token_1_decimals - self.token_0_decimals)?;
            (reserve_0.mul(&scale), reserve_1)
        } else {
            let scale = decimal_scale(env, self.token_0_decimals - self.token_1_decimals)?;
            (reserve_0, reserve_1.mul(&scale))
        };

        let zero = U256::from_u32(env, 0);
        if self.token_0 == *base_token {
            if scaled_0 == zero {
                return Ok(u128::MAX);
            }
            div_uu(env, &scaled_1, &scaled_0)
        } else {
            if scaled_1 == zero {
                return Ok(u128::MAX);
            }
            div_uu(env, &scaled_0, &scaled_1)
        }
    }
}

fn checked_add(reserve: u64, amount: u64) -> Result<u64, SwapSimulationError> {
    reserve
        .checked_add(amount)
        .ok_or(SwapSimulationError::Overflow)
}
