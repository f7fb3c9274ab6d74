use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, events::*, state::*};

/// Provision an empty vault for a user
///
/// No transfer happens here; the vault token account starts at zero.
#[derive(Accounts)]
pub struct InitializeVault<'info> {
    /// User the vault belongs to
    #[account(mut)]
    pub user: Signer<'info>,

    /// Mint of the asset this vault will hold
    pub mint: Account<'info, Mint>,

    /// Vault record PDA; owns the vault token account
    #[account(
        init_if_needed,
        payer = user,
        space = Vault::SPACE,
        seeds = [VAULT_SEED, user.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, Vault>,

    /// Vault's token account, owned by the vault PDA
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = mint,
        associated_token::authority = vault,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeVault>) -> Result<()> {
    let vault = &mut ctx.accounts.vault;

    // CHECKS: a fresh record has a zeroed owner key
    require!(
        vault.owner == Pubkey::default(),
        VaultError::VaultAlreadyExists
    );

    // EFFECTS
    vault.owner = ctx.accounts.user.key();
    vault.mint = ctx.accounts.mint.key();
    vault.token_account = ctx.accounts.vault_token_account.key();
    vault.interest_paid = false;
    vault.bump = ctx.bumps.vault;

    emit!(VaultInitialized {
        vault: vault.key(),
        owner: vault.owner,
        mint: vault.mint,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
