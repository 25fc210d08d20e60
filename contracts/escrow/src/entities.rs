use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransactionState {
    Inactive,
    Active,
    Successful,
    Cancelled,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub id: u128,
    pub buyer: Address,
    pub seller: Address,
    pub token: Address,
    pub buyer_stake: u128,
    pub seller_stake: u128,
    pub buyer_state: bool,
    pub seller_state: bool,
    pub state: TransactionState,
}

impl Transaction {
    /// Fresh record: nothing staked, seller pre-agreed, buyer not yet.
    pub fn new(id: u128, buyer: Address, seller: Address, token: Address) -> Self {
        Self {
            id,
            buyer,
            seller,
            token,
            buyer_stake: 0,
            seller_stake: 0,
            buyer_state: false,
            seller_state: true,
            state: TransactionState::Inactive,
        }
    }
}

/// Which side of a transaction an address acts for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Party {
    Buyer,
    Seller,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Transaction(u128),
    TransactionCounter,
}
