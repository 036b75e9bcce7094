use soroban_sdk::{contracttype, Address};

use crate::storage::{Config, StakeRecord};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigResponse {
    pub config: Config,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedResponse {
    pub stake: StakeRecord,
    /// Reward `claim` would pay at the current ledger time
    pub pending_reward: i128,
    pub total_stake: i128,
}
