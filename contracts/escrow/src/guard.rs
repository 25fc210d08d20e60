use crate::entities::{Party, Transaction};
use crate::errors::Error;
use soroban_sdk::Address;

/// Resolves `caller` to its side of `transaction`, rejecting anyone else.
pub fn party_of(transaction: &Transaction, caller: &Address) -> Result<Party, Error> {
    if *caller == transaction.buyer {
        Ok(Party::Buyer)
    } else if *caller == transaction.seller {
        Ok(Party::Seller)
    } else {
        Err(Error::NotBuyerOrSeller)
    }
}

/// Side credited by a stake. Anything other than the buyer stakes for the seller.
pub fn staking_side(transaction: &Transaction, acting_party: &Address) -> Party {
    if *acting_party == transaction.buyer {
        Party::Buyer
    } else {
        Party::Seller
    }
}

/// Like [`party_of`], but also demands the caller signed the invocation.
pub fn require_party(transaction: &Transaction, caller: &Address) -> Result<Party, Error> {
    caller.require_auth();
    party_of(transaction, caller)
}
