use crate::entities::{Party, Transaction, TransactionState};
use crate::errors::Error;

/// Maps the agreement vector after a vote to the next lifecycle state.
///
/// A `false` vote cancels immediately, even before the other side has voted.
/// Otherwise the deal succeeds once both flags are set, and stays Active
/// while either side still holds back.
pub fn resolve(buyer_state: bool, seller_state: bool, latest_vote: bool) -> TransactionState {
    match (latest_vote, buyer_state && seller_state) {
        (false, _) => TransactionState::Cancelled,
        (true, true) => TransactionState::Successful,
        (true, false) => TransactionState::Active,
    }
}

/// Records `party`'s vote on an Active transaction and resolves it.
pub fn apply_vote(
    transaction: &mut Transaction,
    party: Party,
    agree: bool,
) -> Result<TransactionState, Error> {
    if transaction.state != TransactionState::Active {
        return Err(Error::NotActive);
    }

    match party {
        Party::Buyer => transaction.buyer_state = agree,
        Party::Seller => transaction.seller_state = agree,
    }
    transaction.state = resolve(transaction.buyer_state, transaction.seller_state, agree);
    Ok(transaction.state)
}
