use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, BytesN, Env};
use staking_common::math::safe_math::SafeMath;

use crate::{
    controller::{
        admin::{require_owner, validate_new_owner, validate_reward_percentage, validate_reward_period},
        stake::{add_stake, calculate_reward, validate_unstake},
        token,
    },
    errors::ContractError,
    events::StakingEvents,
    ledger::StakingLedgerTrait,
    msg::{ConfigResponse, StakedResponse},
    storage::{
        get_config, get_owner, get_stake_record, get_total_stake, remove_stake_record,
        save_config, save_owner, save_stake_record, save_total_stake,
        utils::{bump_instance, is_initialized, set_initialized},
        Config,
    },
};

contractmeta!(
    key = "Description",
    val = "Token staking ledger paying a flat reward per elapsed reward period"
);

#[contract]
pub struct StakingLedger;

#[contractimpl]
impl StakingLedgerTrait for StakingLedger {
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        owner: Address,
        staking_token: Address,
        reward_token: Address,
        reward_percentage: u32,
        reward_period: u64,
        stake_withdrawal_timeout: u64,
    ) -> Result<(), ContractError> {
        if is_initialized(&env) {
            log!(
                &env,
                "Staking: Initialize: initializing contract twice is not allowed"
            );
            return Err(ContractError::AlreadyInitialized);
        }

        validate_reward_percentage(&env, reward_percentage)?;
        validate_reward_period(&env, reward_period)?;
        validate_new_owner(&env, &owner)?;

        set_initialized(&env);

        save_config(
            &env,
            &Config {
                staking_token: staking_token.clone(),
                reward_token: reward_token.clone(),
                reward_percentage,
                reward_period,
                stake_withdrawal_timeout,
            },
        );
        save_owner(&env, &owner);
        save_total_stake(&env, 0);
        bump_instance(&env);

        StakingEvents::initialize(&env, owner, staking_token, reward_token);

        Ok(())
    }

    // ################################################################
    //                             Users
    // ################################################################

    fn stake(env: Env, sender: Address, amount: i128) -> Result<(), ContractError> {
        sender.require_auth();
        bump_instance(&env);

        let now = env.ledger().timestamp();
        let config = get_config(&env);

        let mut record = get_stake_record(&env, &sender);
        add_stake(&env, &mut record, amount, now)?;
        let total_stake = get_total_stake(&env).safe_add(amount, &env)?;

        token::receive(&env, &config.staking_token, &sender, amount)?;

        save_stake_record(&env, &sender, &record);
        save_total_stake(&env, total_stake);

        StakingEvents::stake(&env, sender, amount, now);

        Ok(())
    }

    fn unstake(env: Env, sender: Address) -> Result<i128, ContractError> {
        sender.require_auth();
        bump_instance(&env);

        let now = env.ledger().timestamp();
        let config = get_config(&env);

        let record = get_stake_record(&env, &sender);
        validate_unstake(&env, &record, &config, now)?;
        let total_stake = get_total_stake(&env).safe_sub(record.amount, &env)?;

        token::send(&env, &config.staking_token, &sender, record.amount)?;

        remove_stake_record(&env, &sender);
        save_total_stake(&env, total_stake);

        StakingEvents::unstake(&env, sender, record.amount, now);

        Ok(record.amount)
    }

    fn claim(env: Env, sender: Address) -> Result<i128, ContractError> {
        sender.require_auth();
        bump_instance(&env);

        let now = env.ledger().timestamp();
        let config = get_config(&env);

        let mut record = get_stake_record(&env, &sender);
        let reward = calculate_reward(&env, &record, &config, now)?;

        token::send(&env, &config.reward_token, &sender, reward)?;

        record.reward_claimed = true;
        save_stake_record(&env, &sender, &record);

        StakingEvents::claim(&env, sender, reward, now);

        Ok(reward)
    }

    // ################################################################
    //                             Owner
    // ################################################################

    fn set_reward_percentage(
        env: Env,
        sender: Address,
        reward_percentage: u32,
    ) -> Result<(), ContractError> {
        sender.require_auth();
        bump_instance(&env);

        require_owner(&env, &sender)?;
        validate_reward_percentage(&env, reward_percentage)?;

        let mut config = get_config(&env);
        config.reward_percentage = reward_percentage;
        save_config(&env, &config);

        StakingEvents::reward_percentage_updated(&env, sender, reward_percentage);

        Ok(())
    }

    fn set_reward_period(
        env: Env,
        sender: Address,
        reward_period: u64,
    ) -> Result<(), ContractError> {
        sender.require_auth();
        bump_instance(&env);

        require_owner(&env, &sender)?;
        validate_reward_period(&env, reward_period)?;

        let mut config = get_config(&env);
        config.reward_period = reward_period;
        save_config(&env, &config);

        StakingEvents::reward_period_updated(&env, sender, reward_period);

        Ok(())
    }

    fn set_stake_withdrawal_timeout(
        env: Env,
        sender: Address,
        stake_withdrawal_timeout: u64,
    ) -> Result<(), ContractError> {
        sender.require_auth();
        bump_instance(&env);

        require_owner(&env, &sender)?;

        let mut config = get_config(&env);
        config.stake_withdrawal_timeout = stake_withdrawal_timeout;
        save_config(&env, &config);

        StakingEvents::stake_withdrawal_timeout_updated(&env, sender, stake_withdrawal_timeout);

        Ok(())
    }

    fn transfer_ownership(
        env: Env,
        sender: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        sender.require_auth();
        bump_instance(&env);

        require_owner(&env, &sender)?;
        validate_new_owner(&env, &new_owner)?;

        save_owner(&env, &new_owner);

        StakingEvents::ownership_transferred(&env, sender, new_owner);

        Ok(())
    }

    fn update(env: Env, sender: Address, new_wasm_hash: BytesN<32>) -> Result<(), ContractError> {
        sender.require_auth();

        require_owner(&env, &sender)?;

        env.deployer().update_current_contract_wasm(new_wasm_hash);

        Ok(())
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn total_stake(env: Env) -> i128 {
        bump_instance(&env);
        get_total_stake(&env)
    }

    fn get_stake(env: Env, account: Address) -> i128 {
        get_stake_record(&env, &account).amount
    }

    fn owner(env: Env) -> Address {
        bump_instance(&env);
        get_owner(&env)
    }

    fn reward_percentage(env: Env) -> u32 {
        get_config(&env).reward_percentage
    }

    fn reward_period(env: Env) -> u64 {
        get_config(&env).reward_period
    }

    fn stake_withdrawal_timeout(env: Env) -> u64 {
        get_config(&env).stake_withdrawal_timeout
    }

    fn staking_token(env: Env) -> Address {
        get_config(&env).staking_token
    }

    fn reward_token(env: Env) -> Address {
        get_config(&env).reward_token
    }

    fn reward_reserve(env: Env) -> i128 {
        let config = get_config(&env);
        token::ledger_balance(&env, &config.reward_token)
    }

    fn pending_reward(env: Env, account: Address) -> i128 {
        let config = get_config(&env);
        let record = get_stake_record(&env, &account);
        calculate_reward(&env, &record, &config, env.ledger().timestamp()).unwrap_or(0)
    }

    fn query_config(env: Env) -> ConfigResponse {
        bump_instance(&env);
        ConfigResponse {
            config: get_config(&env),
            owner: get_owner(&env),
        }
    }

    fn query_staked(env: Env, account: Address) -> StakedResponse {
        bump_instance(&env);
        let config = get_config(&env);
        let stake = get_stake_record(&env, &account);
        let pending_reward =
            calculate_reward(&env, &stake, &config, env.ledger().timestamp()).unwrap_or(0);

        StakedResponse {
            stake,
            pending_reward,
            total_stake: get_total_stake(&env),
        }
    }
}
