use anchor_lang::prelude::*;

/// Custom error codes for the Treasury Vault program
///
/// Each precondition failure resolves to a distinct, stable code so callers
/// can tell "this already happened and will never happen again" apart from
/// "you are not allowed to do this".
#[error_code]
pub enum VaultError {
    #[msg("Treasury already initialized for this mint")]
    TreasuryAlreadyExists,

    #[msg("Vault already initialized for this user")]
    VaultAlreadyExists,

    #[msg("Deposit amount must be greater than zero")]
    ZeroDepositAmount,

    #[msg("Signer does not own this vault")]
    Unauthorized,

    #[msg("Derived treasury authority does not match the account provided")]
    InvalidAuthority,

    #[msg("Insufficient funds for the requested transfer")]
    InsufficientFunds,

    #[msg("Interest has already been paid to this vault")]
    InterestAlreadyPaid,

    #[msg("Invalid token mint - does not match the vault's asset")]
    InvalidMint,

    #[msg("Invalid token account owner")]
    InvalidOwner,

    #[msg("Math overflow occurred during calculation")]
    MathOverflow,
}
