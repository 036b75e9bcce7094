use soroban_sdk::{Address, BytesN, Env};

use crate::{
    errors::ContractError,
    msg::{ConfigResponse, StakedResponse},
};

pub trait StakingLedgerTrait {
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        owner: Address,
        staking_token: Address,
        reward_token: Address,
        reward_percentage: u32,
        reward_period: u64,
        stake_withdrawal_timeout: u64,
    ) -> Result<(), ContractError>;

    // ################################################################
    //                             Users
    // ################################################################

    /// Moves `amount` staking tokens from `sender` into the ledger. The ledger
    /// must have been approved as spender beforehand.
    fn stake(env: Env, sender: Address, amount: i128) -> Result<(), ContractError>;

    /// Withdraws the whole stake of `sender` and returns the amount paid out.
    fn unstake(env: Env, sender: Address) -> Result<i128, ContractError>;

    /// Pays the reward for the current stake of `sender` and returns it.
    fn claim(env: Env, sender: Address) -> Result<i128, ContractError>;

    // ################################################################
    //                             Owner
    // ################################################################

    fn set_reward_percentage(
        env: Env,
        sender: Address,
        reward_percentage: u32,
    ) -> Result<(), ContractError>;

    fn set_reward_period(env: Env, sender: Address, reward_period: u64)
        -> Result<(), ContractError>;

    fn set_stake_withdrawal_timeout(
        env: Env,
        sender: Address,
        stake_withdrawal_timeout: u64,
    ) -> Result<(), ContractError>;

    fn transfer_ownership(
        env: Env,
        sender: Address,
        new_owner: Address,
    ) -> Result<(), ContractError>;

    fn update(env: Env, sender: Address, new_wasm_hash: BytesN<32>) -> Result<(), ContractError>;

    // ################################################################
    //                             Queries
    // ################################################################

    fn total_stake(env: Env) -> i128;

    fn get_stake(env: Env, account: Address) -> i128;

    fn owner(env: Env) -> Address;

    fn reward_percentage(env: Env) -> u32;

    fn reward_period(env: Env) -> u64;

    fn stake_withdrawal_timeout(env: Env) -> u64;

    fn staking_token(env: Env) -> Address;

    fn reward_token(env: Env) -> Address;

    /// Reward tokens currently held by the ledger.
    fn reward_reserve(env: Env) -> i128;

    fn pending_reward(env: Env, account: Address) -> i128;

    fn query_config(env: Env) -> ConfigResponse;

    fn query_staked(env: Env, account: Address) -> StakedResponse;
}
