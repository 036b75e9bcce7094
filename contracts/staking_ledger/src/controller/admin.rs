use soroban_sdk::{Address, Env, String};
use staking_common::{
    constants::{MAX_REWARD_PERCENTAGE, MIN_REWARD_PERCENTAGE, MIN_REWARD_PERIOD, NULL_ACCOUNT},
    validate,
};

use crate::{
    errors::{ContractError, StakingResult},
    storage::get_owner,
};

/// Guard shared by every owner-only entry point. Runs before any value
/// validation.
pub fn require_owner(env: &Env, sender: &Address) -> StakingResult {
    let owner = get_owner(env);
    validate!(
        env,
        *sender == owner,
        ContractError::NotOwner,
        "Staking: Only the owner is allowed to perform this operation"
    )
}

pub fn validate_reward_percentage(env: &Env, reward_percentage: u32) -> StakingResult {
    validate!(
        env,
        reward_percentage >= MIN_REWARD_PERCENTAGE,
        ContractError::PercentageZero,
        "Staking: Reward percentage can not be zero"
    )?;
    validate!(
        env,
        reward_percentage <= MAX_REWARD_PERCENTAGE,
        ContractError::PercentageExceedsMax,
        "Staking: Reward percentage can not exceed 100%"
    )
}

pub fn validate_reward_period(env: &Env, reward_period: u64) -> StakingResult {
    validate!(
        env,
        reward_period >= MIN_REWARD_PERIOD,
        ContractError::PeriodZero,
        "Staking: Reward period can not be zero"
    )
}

/// Rejects the null account and the ledger itself, neither of which can ever
/// sign an owner call.
pub fn validate_new_owner(env: &Env, new_owner: &Address) -> StakingResult {
    let null_account = Address::from_string(&String::from_str(env, NULL_ACCOUNT));
    validate!(
        env,
        *new_owner != null_account && *new_owner != env.current_contract_address(),
        ContractError::InvalidOwner,
        "Staking: Transferring ownership to the zero address is not allowed"
    )
}
