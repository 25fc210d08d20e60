//! Stake and payout bookkeeping.
//!
//! Both helpers mutate the in-memory record only. Callers persist the
//! record before touching the token, so a payout is never issued against
//! a stake that is still on the books.

use crate::entities::{Party, Transaction, TransactionState};
use crate::errors::Error;

/// Adds `amount` to `party`'s stake and activates the deal once both sides have funds in.
pub fn credit_stake(
    transaction: &mut Transaction,
    party: Party,
    amount: u128,
) -> Result<TransactionState, Error> {
    if transaction.state != TransactionState::Inactive {
        return Err(Error::MustBeInactive);
    }

    let stake = match party {
        Party::Buyer => &mut transaction.buyer_stake,
        Party::Seller => &mut transaction.seller_stake,
    };
    *stake = stake.checked_add(amount).ok_or(Error::ArithmeticOverflow)?;

    if transaction.buyer_stake > 0 && transaction.seller_stake > 0 {
        transaction.state = TransactionState::Active;
    }
    Ok(transaction.state)
}

/// Computes what `party` is owed right now and removes it from the record.
///
/// On a successful deal the whole pool belongs to the seller; the buyer's
/// stake stays reserved for the seller and the buyer is owed nothing.
pub fn take_payout(transaction: &mut Transaction, party: Party) -> Result<u128, Error> {
    match (transaction.state, party) {
        (TransactionState::Active, _) => Err(Error::TransactionActive),
        (TransactionState::Successful, Party::Seller) => {
            let pooled = transaction
                .buyer_stake
                .checked_add(transaction.seller_stake)
                .ok_or(Error::ArithmeticOverflow)?;
            transaction.buyer_stake = 0;
            transaction.seller_stake = 0;
            Ok(pooled)
        }
        (TransactionState::Successful, Party::Buyer) => Ok(0),
        (TransactionState::Inactive | TransactionState::Cancelled, Party::Buyer) => {
            Ok(core::mem::take(&mut transaction.buyer_stake))
        }
        (TransactionState::Inactive | TransactionState::Cancelled, Party::Seller) => {
            Ok(core::mem::take(&mut transaction.seller_stake))
        }
    }
}

/// Converts a ledger amount to the token interface's signed amount type.
pub fn to_token_amount(amount: u128) -> Result<i128, Error> {
    i128::try_from(amount).map_err(|_| Error::ArithmeticOverflow)
}
