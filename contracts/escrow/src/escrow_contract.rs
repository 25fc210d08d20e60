use crate::entities::*;
use crate::errors::*;
use crate::{guard, ledger, resolution, settlement};
use soroban_sdk::{contract, contractimpl, contractmeta, log, symbol_short, token, Address, Env};

contractmeta!(
    key = "Description",
    val = "Two-party token escrow released on mutual agreement"
);

#[contract]
pub struct EscrowContract;

#[contractimpl]
impl EscrowContract {
    pub fn create_transaction(
        env: Env,
        buyer: Address,
        seller: Address,
        token: Address,
    ) -> Result<u128, Error> {
        if buyer == seller {
            return Err(Error::InvalidParties);
        }

        let transaction_id = ledger::next_id(&env)?;
        let transaction = Transaction::new(transaction_id, buyer, seller, token);
        ledger::save(&env, &transaction);

        env.events()
            .publish((symbol_short!("tx_create"),), transaction.clone());

        log!(&env, "Transaction {} created", transaction_id);
        Ok(transaction_id)
    }

    /// Pulls `amount` from `acting_party` into escrow and credits it to that
    /// party's side. Anyone may submit the stake; the pull spends
    /// `acting_party`'s allowance to this contract.
    pub fn activate_transaction(
        env: Env,
        transaction_id: u128,
        amount: u128,
        acting_party: Address,
    ) -> Result<TransactionState, Error> {
        let mut transaction = ledger::load(&env, transaction_id)?;
        let party = guard::staking_side(&transaction, &acting_party);
        let token_amount = settlement::to_token_amount(amount)?;
        let state = settlement::credit_stake(&mut transaction, party, amount)?;

        let escrow = env.current_contract_address();
        let token_client = token::Client::new(&env, &transaction.token);
        let pulled =
            token_client.try_transfer_from(&escrow, &acting_party, &escrow, &token_amount);
        if !matches!(pulled, Ok(Ok(()))) {
            log!(
                &env,
                "Stake of {} for transaction {} rejected by token",
                amount,
                transaction_id
            );
            return Err(Error::TransferFailed);
        }

        ledger::save(&env, &transaction);

        env.events().publish(
            (symbol_short!("staked"), transaction_id),
            (acting_party, amount, state),
        );
        Ok(state)
    }

    pub fn change_my_state(
        env: Env,
        transaction_id: u128,
        agree: bool,
        caller: Address,
    ) -> Result<TransactionState, Error> {
        let mut transaction = ledger::load(&env, transaction_id)?;
        let party = guard::require_party(&transaction, &caller)?;
        let state = resolution::apply_vote(&mut transaction, party, agree)?;
        ledger::save(&env, &transaction);

        env.events().publish(
            (symbol_short!("state_set"), transaction_id),
            (caller, agree, state),
        );

        if state != TransactionState::Active {
            log!(&env, "Transaction {} resolved", transaction_id);
        }
        Ok(state)
    }

    /// Pays `caller` everything currently owed to them and returns the amount.
    pub fn withdraw_all(env: Env, transaction_id: u128, caller: Address) -> Result<u128, Error> {
        let mut transaction = ledger::load(&env, transaction_id)?;
        // Party check precedes the Active lock: outsiders see NotBuyerOrSeller in every state.
        let party = guard::require_party(&transaction, &caller)?;
        let payout = settlement::take_payout(&mut transaction, party)?;
        let token_amount = settlement::to_token_amount(payout)?;

        // Stakes hit storage before the token is called.
        ledger::save(&env, &transaction);

        if payout > 0 {
            let token_client = token::Client::new(&env, &transaction.token);
            let pushed =
                token_client.try_transfer(&env.current_contract_address(), &caller, &token_amount);
            if !matches!(pushed, Ok(Ok(()))) {
                log!(
                    &env,
                    "Payout of {} for transaction {} rejected by token",
                    payout,
                    transaction_id
                );
                return Err(Error::TransferFailed);
            }
        }

        env.events().publish(
            (symbol_short!("withdrawn"), transaction_id),
            (caller, payout),
        );
        Ok(payout)
    }

    pub fn get_transaction(env: Env, transaction_id: u128) -> Result<Transaction, Error> {
        ledger::load(&env, transaction_id)
    }

    pub fn transaction_count(env: Env) -> u128 {
        ledger::transaction_count(&env)
    }

    /// Tokens of `token` currently held by the escrow across all transactions.
    pub fn escrowed_balance(env: Env, token: Address) -> i128 {
        token::Client::new(&env, &token).balance(&env.current_contract_address())
    }
}
