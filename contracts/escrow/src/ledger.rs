use crate::entities::{DataKey, Transaction};
use crate::errors::Error;
use soroban_sdk::Env;

pub const DAY_IN_LEDGERS: u32 = 17_280;
/// Remaining lifetime below which a touched record gets its TTL bumped.
pub const RECORD_TTL_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
pub const RECORD_TTL_EXTEND_TO: u32 = 30 * DAY_IN_LEDGERS;

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND_TO);
}

/// Highest id handed out so far; zero before the first transaction.
pub fn transaction_count(env: &Env) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::TransactionCounter)
        .unwrap_or(0u128)
}

/// Reserves the next transaction id. Ids start at 1 and are never reused.
pub fn next_id(env: &Env) -> Result<u128, Error> {
    let id = transaction_count(env)
        .checked_add(1)
        .ok_or(Error::ArithmeticOverflow)?;
    env.storage()
        .persistent()
        .set(&DataKey::TransactionCounter, &id);
    bump(env, &DataKey::TransactionCounter);
    Ok(id)
}

pub fn load(env: &Env, id: u128) -> Result<Transaction, Error> {
    let key = DataKey::Transaction(id);
    let transaction = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::TransactionNotFound)?;
    bump(env, &key);
    Ok(transaction)
}

pub fn save(env: &Env, transaction: &Transaction) {
    let key = DataKey::Transaction(transaction.id);
    env.storage().persistent().set(&key, transaction);
    bump(env, &key);
}
