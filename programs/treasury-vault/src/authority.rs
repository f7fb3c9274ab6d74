use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

use crate::constants::TREASURY_SEED;
use crate::errors::VaultError;

/// Capability to sign transfers out of the treasury token account.
///
/// Carries the derivation inputs for the treasury PDA. A value can only be
/// obtained through [`TreasuryAuthority::verify`], so holding one proves the
/// caller-supplied bump recomputes to the treasury account the instruction
/// actually referenced.
pub struct TreasuryAuthority {
    mint: Pubkey,
    bump: u8,
}

impl TreasuryAuthority {
    /// Recompute the treasury PDA from `mint` and a caller-supplied bump and
    /// check it against the account passed in the instruction.
    ///
    /// Rejects substitution of any other account in place of the true
    /// authority, including valid PDAs derived with a non-canonical bump.
    pub fn verify(mint: &Pubkey, bump: u8, provided: &Pubkey) -> Result<Self> {
        let derived = Pubkey::create_program_address(
            &[TREASURY_SEED, mint.as_ref(), &[bump]],
            &crate::ID,
        )
        .map_err(|_| error!(VaultError::InvalidAuthority))?;

        require_keys_eq!(derived, *provided, VaultError::InvalidAuthority);

        Ok(Self { mint: *mint, bump })
    }

    /// Transfer `amount` out of the treasury token account, signed by the
    /// treasury PDA rather than any human-held key.
    pub fn transfer<'info>(
        &self,
        token_program: AccountInfo<'info>,
        from: AccountInfo<'info>,
        to: AccountInfo<'info>,
        authority: AccountInfo<'info>,
        amount: u64,
    ) -> Result<()> {
        let authority_seeds: &[&[u8]] = &[TREASURY_SEED, self.mint.as_ref(), &[self.bump]];
        let signer_seeds = &[&authority_seeds[..]];

        let cpi_ctx = CpiContext::new_with_signer(
            token_program,
            Transfer {
                from,
                to,
                authority,
            },
            signer_seeds,
        );
        token::transfer(cpi_ctx, amount)
    }
}
