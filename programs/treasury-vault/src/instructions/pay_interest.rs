use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::authority::TreasuryAuthority;
use crate::{constants::*, errors::*, events::*, state::*};

/// Disburse the one-time interest payout from the treasury into a vault
///
/// Any operator key may trigger the payout; the trust boundary is the
/// one-shot flag on the vault, not the identity of the signer. The transfer
/// out of the treasury is signed by the treasury PDA through a verified
/// [`TreasuryAuthority`] capability.
#[derive(Accounts)]
pub struct PayInterest<'info> {
    /// Operator triggering the payout; pays the transaction fee
    #[account(mut)]
    pub signer: Signer<'info>,

    /// Mint the treasury pays interest in
    pub mint: Account<'info, Mint>,

    /// Vault owner; reference only, does not sign
    /// CHECK: only used to derive and match the vault PDA
    pub user: UncheckedAccount<'info>,

    /// Vault receiving the payout
    #[account(
        mut,
        seeds = [VAULT_SEED, user.key().as_ref()],
        bump = vault.bump,
        constraint = vault.mint == mint.key() @ VaultError::InvalidMint,
    )]
    pub vault: Account<'info, Vault>,

    /// Vault's token account (destination)
    #[account(
        mut,
        constraint = vault_token_account.mint == vault.mint @ VaultError::InvalidMint,
        constraint = vault_token_account.owner == vault.key() @ VaultError::InvalidOwner,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    /// Treasury record PDA
    ///
    /// No seeds constraint here: the handler recomputes the address from
    /// the caller-supplied bump and rejects mismatches with
    /// `InvalidAuthority`.
    pub treasury: Account<'info, Treasury>,

    /// Treasury's token account (source)
    #[account(
        mut,
        constraint = treasury_token_account.key() == treasury.token_account @ VaultError::InvalidOwner,
    )]
    pub treasury_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<PayInterest>, bump: u8) -> Result<()> {
    let vault = &mut ctx.accounts.vault;

    // One-shot guard first: consumes the entitlement and computes the
    // payout. The flag and the transfer below commit atomically or not at
    // all.
    let interest = vault.claim_interest(ctx.accounts.vault_token_account.amount)?;

    let treasury_authority = TreasuryAuthority::verify(
        &ctx.accounts.mint.key(),
        bump,
        &ctx.accounts.treasury.key(),
    )?;

    require!(
        ctx.accounts.treasury_token_account.amount >= interest,
        VaultError::InsufficientFunds
    );

    treasury_authority.transfer(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.treasury_token_account.to_account_info(),
        ctx.accounts.vault_token_account.to_account_info(),
        ctx.accounts.treasury.to_account_info(),
        interest,
    )?;

    emit!(InterestPaid {
        vault: vault.key(),
        treasury: ctx.accounts.treasury.key(),
        owner: vault.owner,
        amount: interest,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
