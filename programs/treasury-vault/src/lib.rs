// Treasury Vault - custodial per-user vaults with a one-time interest payout
// funded from a shared per-mint treasury
// Architecture: all records are PDAs addressed by their derivation inputs;
// transfers out of the treasury are signed by a program-derived authority

use anchor_lang::prelude::*;

pub mod authority;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("DcyHAyrMRufeDbcrfhL4wBZeFLtCzm9cgenDMmKoqYxs");

#[program]
pub mod treasury_vault {
    use super::*;

    /// Create the treasury for a mint and fund it from the admin's account
    ///
    /// The signer becomes the treasury admin; this is the only instruction
    /// that ever sets that field. Fails with `TreasuryAlreadyExists` if a
    /// treasury was already created for this mint.
    pub fn initialize_treasury(ctx: Context<InitializeTreasury>, amount: u64) -> Result<()> {
        instructions::initialize_treasury::handler(ctx, amount)
    }

    /// Provision an empty vault for the signing user
    ///
    /// Fails with `VaultAlreadyExists` if the user already has a vault.
    pub fn initialize_vault(ctx: Context<InitializeVault>) -> Result<()> {
        instructions::initialize_vault::handler(ctx)
    }

    /// Deposit assets into the signer's own vault
    ///
    /// Repeatable; the vault balance only ever grows. Rejects zero amounts
    /// and deposits into another user's vault.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Pay the one-time 1% interest from the treasury into a vault
    ///
    /// Callable by any operator signer. The caller supplies the treasury
    /// authority bump, which is re-verified against the derived address
    /// before the treasury PDA signs the transfer. Succeeds at most once
    /// per vault.
    pub fn pay_interest(ctx: Context<PayInterest>, bump: u8) -> Result<()> {
        instructions::pay_interest::handler(ctx, bump)
    }
}
