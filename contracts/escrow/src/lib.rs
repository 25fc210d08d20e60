#![no_std]

mod entities;
mod errors;
mod escrow_contract;
mod guard;
mod ledger;
mod resolution;
mod settlement;

pub use entities::{DataKey, Party, Transaction, TransactionState};
pub use errors::{Error, ErrorKind};
pub use escrow_contract::{EscrowContract, EscrowContractClient};
