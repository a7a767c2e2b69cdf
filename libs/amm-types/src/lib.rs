#![no_std]

mod contract_id;
mod error;
mod filters;
mod interface;
mod math;
mod pool;

pub use contract_id::*;
pub use error::*;
pub use filters::*;
pub use interface::*;
pub use math::*;
pub use pool::*;
