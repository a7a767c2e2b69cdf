use soroban_sdk::contracterror;

/// Failures of price computation
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ArithmeticError {
    /// Division by a zero denominator
    YIsZero = 1,
    /// An intermediate value does not fit its fixed-width type
    Overflow = 2,
}

/// Failures of local swap simulation
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SwapSimulationError {
    /// A reserve or output left the u64 range
    Overflow = 1,
    /// Fee above 100% (more than 100_009 in pool fee units)
    InvalidFee = 2,
}
