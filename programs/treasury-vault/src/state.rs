use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::VaultError;

/// Per-mint treasury funding one-time interest payouts
///
/// The record lives at the PDA derived from `("treasury", mint)` and is
/// itself the authority that owns the treasury token account, so only the
/// program can sign debits from it.
#[account]
pub struct Treasury {
    /// Key that funded the treasury at initialization; immutable afterwards
    pub admin: Pubkey,              // 32 bytes

    /// Mint this treasury holds and pays interest in
    pub mint: Pubkey,               // 32 bytes

    /// Token account holding the treasury funds, owned by this PDA
    pub token_account: Pubkey,      // 32 bytes

    /// Bump seed for the treasury PDA
    pub bump: u8,                   // 1 byte
}

impl Treasury {
    /// 8 (discriminator) + 32 + 32 + 32 + 1 + 64 (padding for upgrades)
    pub const SPACE: usize = 8 + 32 + 32 + 32 + 1 + 64;
}

/// Per-user custodial vault
///
/// Lives at the PDA derived from `("vault", owner)` and owns the vault
/// token account. Balances only ever increase: deposits from the owner and
/// at most one interest payout from the treasury.
#[account]
pub struct Vault {
    /// User this vault belongs to; immutable after creation
    pub owner: Pubkey,              // 32 bytes

    /// Mint of the asset held by this vault
    pub mint: Pubkey,               // 32 bytes

    /// Token account holding the vault funds, owned by this PDA
    pub token_account: Pubkey,      // 32 bytes

    /// Set permanently once the one-time interest payout has been disbursed
    pub interest_paid: bool,        // 1 byte

    /// Bump seed for the vault PDA
    pub bump: u8,                   // 1 byte
}

impl Vault {
    /// 8 (discriminator) + 32 + 32 + 32 + 1 + 1 + 64 (padding for upgrades)
    pub const SPACE: usize = 8 + 32 + 32 + 32 + 1 + 1 + 64;

    /// Interest due on a vault balance: a flat 1% (100 bps), rounded down.
    ///
    /// Widens through u128 so the rate multiplication cannot overflow.
    pub fn interest_due(vault_balance: u64) -> Result<u64> {
        let interest = (vault_balance as u128)
            .checked_mul(INTEREST_RATE_BPS as u128)
            .ok_or(error!(VaultError::MathOverflow))?
            .checked_div(BPS_DENOMINATOR as u128)
            .ok_or(error!(VaultError::MathOverflow))?;

        u64::try_from(interest).map_err(|_| error!(VaultError::MathOverflow))
    }

    /// Consume the one-shot interest entitlement and return the amount due.
    ///
    /// Fails if interest was already paid; on success the flag is set and
    /// the caller must move the returned amount in the same transaction.
    pub fn claim_interest(&mut self, vault_balance: u64) -> Result<u64> {
        require!(!self.interest_paid, VaultError::InterestAlreadyPaid);

        let interest = Self::interest_due(vault_balance)?;
        self.interest_paid = true;

        Ok(interest)
    }
}
