use soroban_sdk::{contracttype, log, panic_with_error, Address, Env};
use staking_common::ttl::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};

use crate::errors::ContractError;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Owner,
    TotalStake,
    Initialized,
    Stake(Address),
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Token users deposit into the ledger
    pub staking_token: Address,
    /// Token the ledger pays rewards in
    pub reward_token: Address,
    /// Share of the stake paid as reward, in whole percent (1..=100)
    pub reward_percentage: u32,
    /// Seconds a stake must age before its reward can be claimed
    pub reward_period: u64,
    /// Seconds a stake must age before it can be withdrawn
    pub stake_withdrawal_timeout: u64,
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Config {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| {
            log!(env, "Staking: Config not set");
            panic_with_error!(env, ContractError::NotInitialized)
        })
}

pub fn save_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_owner(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .unwrap_or_else(|| {
            log!(env, "Staking: Owner not set");
            panic_with_error!(env, ContractError::NotInitialized)
        })
}

pub fn save_total_stake(env: &Env, total_stake: i128) {
    env.storage()
        .instance()
        .set(&DataKey::TotalStake, &total_stake);
}

pub fn get_total_stake(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalStake)
        .unwrap_or_else(|| {
            log!(env, "Staking: Total stake not set");
            panic_with_error!(env, ContractError::NotInitialized)
        })
}

// ################################################################
//                             Stakes
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakeRecord {
    /// Tokens currently staked, zero when nothing is at stake
    pub amount: i128,
    /// Ledger timestamp of the most recent stake
    pub last_stake_timestamp: u64,
    /// Whether the reward for the current stake has been paid out
    pub reward_claimed: bool,
}

pub fn get_stake_record(env: &Env, account: &Address) -> StakeRecord {
    let key = DataKey::Stake(account.clone());
    match env.storage().persistent().get::<_, StakeRecord>(&key) {
        Some(record) => {
            env.storage().persistent().extend_ttl(
                &key,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
            record
        }
        None => StakeRecord::default(),
    }
}

pub fn save_stake_record(env: &Env, account: &Address, record: &StakeRecord) {
    let key = DataKey::Stake(account.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn remove_stake_record(env: &Env, account: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Stake(account.clone()));
}

pub mod utils {
    use super::*;

    pub fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    pub fn is_initialized(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Initialized)
            .unwrap_or(false)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().instance().set(&DataKey::Initialized, &true);
    }
}
