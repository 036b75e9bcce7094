use soroban_sdk::{log, token, Address, Env};

use crate::errors::{ContractError, StakingResult};

/// Pulls `amount` of `token` from `from` into ledger custody, spending the
/// allowance `from` granted the ledger.
pub fn receive(env: &Env, token: &Address, from: &Address, amount: i128) -> StakingResult {
    let ledger = env.current_contract_address();
    match token::TokenClient::new(env, token).try_transfer_from(&ledger, from, &ledger, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(
                env,
                "Staking: Token: transfer into the ledger failed, check balance and allowance"
            );
            Err(ContractError::TransferFailed)
        }
    }
}

/// Pays `amount` of `token` out of ledger custody to `to`.
pub fn send(env: &Env, token: &Address, to: &Address, amount: i128) -> StakingResult {
    let ledger = env.current_contract_address();
    match token::TokenClient::new(env, token).try_transfer(&ledger, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(
                env,
                "Staking: Token: transfer out of the ledger failed, ledger balance too low"
            );
            Err(ContractError::TransferFailed)
        }
    }
}

pub fn ledger_balance(env: &Env, token: &Address) -> i128 {
    token::TokenClient::new(env, token).balance(&env.current_contract_address())
}
