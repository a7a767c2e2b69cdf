use amm_types::ContractId;

/// AMM deployment queried when the build does not name another one
const DEFAULT_AMM_CONTRACT_ID: ContractId =
    ContractId::from_hex("2e40f2b244b98ed6b8204b3de0156c6961f98525c8162f80162fcf53eebd90e7");

/// AMM the runner is bound to
///
/// Fixed at compile time. Export `AMM_CONTRACT_ID` (64 hex digits, optional
/// `0x`) while building to target a different deployment; a malformed value
/// fails the build.
pub const AMM_CONTRACT_ID: ContractId = match option_env!("AMM_CONTRACT_ID") {
    Some(hex) => ContractId::from_hex(hex),
    None => DEFAULT_AMM_CONTRACT_ID,
};
