use anchor_lang::prelude::*;

/// Event emitted when a treasury is created and funded
#[event]
pub struct TreasuryInitialized {
    pub treasury: Pubkey,
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

/// Event emitted when a user vault is created
#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a user deposits into their vault
#[event]
pub struct Deposited {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
    pub timestamp: i64,
}

/// Event emitted when the one-time interest payout is disbursed
#[event]
pub struct InterestPaid {
    pub vault: Pubkey,
    pub treasury: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
