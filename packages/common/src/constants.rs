// Rewards

/// Denominator of the reward percentage
pub const PERCENTAGE_PRECISION: i128 = 100;
pub const MIN_REWARD_PERCENTAGE: u32 = 1;
pub const MAX_REWARD_PERCENTAGE: u32 = 100;
pub const MIN_REWARD_PERIOD: u64 = 1;

// Accounts

/// Strkey of the all-zero ed25519 account. Stellar has no zero address, this
/// is the account conventionally used in its place.
pub const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
