#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod contract;
mod controller;
pub mod errors;
mod events;
mod ledger;
pub mod msg;
pub mod storage;

pub use contract::*;
pub use ledger::StakingLedgerTrait;
