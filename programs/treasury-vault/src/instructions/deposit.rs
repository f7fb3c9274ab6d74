use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, events::*, state::*};

/// Deposit assets into the signer's vault
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// Depositor; must own the vault
    #[account(mut)]
    pub from: Signer<'info>,

    /// Vault receiving the deposit
    ///
    /// Re-derived from its stored owner on every call, so a genuine record
    /// at the canonical address is the only thing that passes.
    #[account(
        seeds = [VAULT_SEED, vault.owner.as_ref()],
        bump = vault.bump,
        constraint = vault.owner == from.key() @ VaultError::Unauthorized,
    )]
    pub vault: Account<'info, Vault>,

    /// Mint of the deposited asset
    #[account(address = vault.mint @ VaultError::InvalidMint)]
    pub mint: Account<'info, Mint>,

    /// Vault's token account (destination)
    #[account(
        mut,
        constraint = vault_token_account.mint == vault.mint @ VaultError::InvalidMint,
        constraint = vault_token_account.owner == vault.key() @ VaultError::InvalidOwner,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    /// Depositor's token account (source)
    #[account(
        mut,
        constraint = from_token_account.mint == vault.mint @ VaultError::InvalidMint,
        constraint = from_token_account.owner == from.key() @ VaultError::InvalidOwner,
    )]
    pub from_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    // CHECKS
    require!(amount > 0, VaultError::ZeroDepositAmount);
    require!(
        ctx.accounts.from_token_account.amount >= amount,
        VaultError::InsufficientFunds
    );

    let vault_balance = ctx.accounts.vault_token_account.amount;

    // INTERACTIONS: transfer signed by the depositor
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.from_token_account.to_account_info(),
            to: ctx.accounts.vault_token_account.to_account_info(),
            authority: ctx.accounts.from.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, amount)?;

    emit!(Deposited {
        vault: ctx.accounts.vault.key(),
        owner: ctx.accounts.vault.owner,
        amount,
        vault_balance: vault_balance
            .checked_add(amount)
            .ok_or(VaultError::MathOverflow)?,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
