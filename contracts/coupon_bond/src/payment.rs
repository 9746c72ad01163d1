//! Payment-token integration.
//!
//! Centralizes pulls into the contract and payouts from it. The token
//! address is stored once at initialization.

use soroban_sdk::token::TokenClient;
use soroban_sdk::{panic_with_error, Address, Env};

use crate::errors::Error;
use crate::storage;

fn token_client(env: &Env) -> TokenClient<'_> {
    let token = storage::get_token(env);
    TokenClient::new(env, &token)
}

/// Pull `amount` from `from` into the contract.
///
/// `from` must have authorized the invocation; a failed pull aborts it
/// with the token's own error.
pub fn pull(env: &Env, from: &Address, amount: i128) {
    if amount == 0 {
        return;
    }
    let contract = env.current_contract_address();
    token_client(env).transfer(from, &contract, &amount);
}

/// Pay `amount` out of the contract to `to`.
///
/// Fails with `TransferFailed` when the token transfer does not succeed;
/// the host then rolls back every state write of the invocation.
pub fn payout(env: &Env, to: &Address, amount: i128) {
    if amount == 0 {
        return;
    }
    let contract = env.current_contract_address();
    if token_client(env)
        .try_transfer(&contract, to, &amount)
        .is_err()
    {
        panic_with_error!(env, Error::TransferFailed);
    }
}

/// Payment-token balance currently held by the contract.
pub fn contract_balance(env: &Env) -> i128 {
    token_client(env).balance(&env.current_contract_address())
}
