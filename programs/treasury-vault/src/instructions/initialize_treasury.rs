use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, Token, TokenAccount, Transfer},
};

use crate::{constants::*, errors::*, events::*, state::*};

/// Create and fund the treasury for a mint
#[derive(Accounts)]
pub struct InitializeTreasury<'info> {
    /// Admin funding the treasury; recorded in state and fixed thereafter
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Mint the treasury holds and pays interest in
    pub mint: Account<'info, Mint>,

    /// Treasury record PDA; owns the treasury token account
    ///
    /// Duplicate initialization is rejected in the handler so it surfaces
    /// the program's own error code.
    #[account(
        init_if_needed,
        payer = admin,
        space = Treasury::SPACE,
        seeds = [TREASURY_SEED, mint.key().as_ref()],
        bump
    )]
    pub treasury: Account<'info, Treasury>,

    /// Treasury's token account, owned by the treasury PDA
    #[account(
        init_if_needed,
        payer = admin,
        associated_token::mint = mint,
        associated_token::authority = treasury,
    )]
    pub treasury_token_account: Account<'info, TokenAccount>,

    /// Admin's token account; the initial funding comes from here
    #[account(
        mut,
        constraint = admin_token_account.mint == mint.key() @ VaultError::InvalidMint,
        constraint = admin_token_account.owner == admin.key() @ VaultError::InvalidOwner,
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeTreasury>, amount: u64) -> Result<()> {
    let treasury = &mut ctx.accounts.treasury;

    // CHECKS: a fresh record has a zeroed admin key
    require!(
        treasury.admin == Pubkey::default(),
        VaultError::TreasuryAlreadyExists
    );
    require!(
        ctx.accounts.admin_token_account.amount >= amount,
        VaultError::InsufficientFunds
    );

    // EFFECTS: write the record before external calls
    treasury.admin = ctx.accounts.admin.key();
    treasury.mint = ctx.accounts.mint.key();
    treasury.token_account = ctx.accounts.treasury_token_account.key();
    treasury.bump = ctx.bumps.treasury;

    // INTERACTIONS: move the initial funding from the admin
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.admin_token_account.to_account_info(),
            to: ctx.accounts.treasury_token_account.to_account_info(),
            authority: ctx.accounts.admin.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, amount)?;

    emit!(TreasuryInitialized {
        treasury: treasury.key(),
        admin: treasury.admin,
        mint: treasury.mint,
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
