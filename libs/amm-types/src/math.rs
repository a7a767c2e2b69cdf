use soroban_sdk::{Env, U256};

use crate::{ArithmeticError, SwapSimulationError};

/// Largest decimal difference a price computation rescales by
pub const MAX_DECIMAL_SHIFT: u32 = 38;

/// Constant-product output for `amount_in` against the given reserves
///
/// `fee` is in hundred-thousandths: 300 is 0.3%, which keeps 997 per mille
/// of the input. Zero input or an empty reserve yields zero.
pub fn get_amount_out(
    env: &Env,
    amount_in: u128,
    reserve_in: u64,
    reserve_out: u64,
    fee: u64,
) -> Result<u64, SwapSimulationError> {
    if amount_in == 0 || reserve_in == 0 || reserve_out == 0 {
        return Ok(0);
    }

    let fee_factor = 10_000u64
        .checked_sub(fee / 10)
        .ok_or(SwapSimulationError::InvalidFee)?
        / 10;

    // amount_in < 2^128, fee_factor <= 1000, reserves < 2^64: products stay below 2^256
    let amount_in_with_fee =
        U256::from_u128(env, amount_in).mul(&U256::from_u128(env, fee_factor as u128));
    let numerator = amount_in_with_fee.mul(&U256::from_u128(env, reserve_out as u128));
    let denominator = U256::from_u128(env, reserve_in as u128)
        .mul(&U256::from_u32(env, 1000))
        .add(&amount_in_with_fee);

    numerator
        .div(&denominator)
        .to_u128()
        .and_then(|out| u64::try_from(out).ok())
        .ok_or(SwapSimulationError::Overflow)
}

/// `x / y` as a Q64.64 fixed point number
///
/// Quotients above the u128 range collapse to zero.
pub fn div_uu(env: &Env, x: &U256, y: &U256) -> Result<u128, ArithmeticError> {
    if *y == U256::from_u32(env, 0) {
        return Err(ArithmeticError::YIsZero);
    }

    // x << 64 must stay inside 256 bits
    if *x >= U256::from_u32(env, 1).shl(192) {
        return Err(ArithmeticError::Overflow);
    }

    Ok(x.shl(64).div(y).to_u128().unwrap_or(0))
}

/// 10^shift as U256
pub fn decimal_scale(env: &Env, shift: u32) -> Result<U256, ArithmeticError> {
    if shift > MAX_DECIMAL_SHIFT {
        return Err(ArithmeticError::Overflow);
    }
    Ok(U256::from_u32(env, 10).pow(shift))
}
