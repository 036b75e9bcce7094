use soroban_sdk::Env;
use staking_common::{math::percentage::percentage_of, math::safe_math::SafeMath, validate};

use crate::{
    errors::{ContractError, StakingResult},
    storage::{Config, StakeRecord},
};

fn elapsed_since_stake(record: &StakeRecord, now: u64) -> u64 {
    now.saturating_sub(record.last_stake_timestamp)
}

/// Adds `amount` to the record and restarts both the withdrawal and the
/// reward clock.
pub fn add_stake(env: &Env, record: &mut StakeRecord, amount: i128, now: u64) -> StakingResult {
    validate!(
        env,
        amount > 0,
        ContractError::InvalidAmount,
        "Staking: Stake: Amount to stake must be positive"
    )?;

    record.amount = record.amount.safe_add(amount, env)?;
    record.last_stake_timestamp = now;
    record.reward_claimed = false;

    Ok(())
}

pub fn validate_unstake(
    env: &Env,
    record: &StakeRecord,
    config: &Config,
    now: u64,
) -> StakingResult {
    validate!(
        env,
        record.amount > 0,
        ContractError::NothingStaked,
        "Staking: Unstake: The caller has nothing at stake"
    )?;
    validate!(
        env,
        elapsed_since_stake(record, now) >= config.stake_withdrawal_timeout,
        ContractError::WithdrawalTimeoutNotElapsed,
        "Staking: Unstake: Stake withdrawal is not allowed due to an insufficient time passed since the last stake was made"
    )
}

/// Reward payable for `record` at `now`: `floor(amount * reward_percentage / 100)`
/// once a full reward period has passed since the last stake, paid at most once
/// per stake.
pub fn calculate_reward(
    env: &Env,
    record: &StakeRecord,
    config: &Config,
    now: u64,
) -> StakingResult<i128> {
    validate!(
        env,
        record.amount > 0 && !record.reward_claimed,
        ContractError::NoRewardAvailable,
        "Staking: Claim: No reward for the caller"
    )?;
    validate!(
        env,
        elapsed_since_stake(record, now) >= config.reward_period,
        ContractError::NoRewardAvailable,
        "Staking: Claim: Reward period has not elapsed yet"
    )?;

    let reward = percentage_of(record.amount, config.reward_percentage)?;

    validate!(
        env,
        reward > 0,
        ContractError::NoRewardAvailable,
        "Staking: Claim: Reward rounds down to zero"
    )?;

    Ok(reward)
}
