use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum QueryError {
    /// The AMM call trapped: no contract, no `pools` function, or a revert
    AmmCallFailed = 1,
    /// The AMM answered with a value that is not a vector
    InterfaceMismatch = 2,
}
