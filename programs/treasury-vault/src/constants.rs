// Constants for the Treasury Vault program

/// Seed for the per-mint treasury PDA
pub const TREASURY_SEED: &[u8] = b"treasury";

/// Seed for the per-user vault PDA
pub const VAULT_SEED: &[u8] = b"vault";

/// One-time interest rate paid from the treasury, in basis points
pub const INTEREST_RATE_BPS: u64 = 100;

/// Basis point denominator (100% = 10_000 bps)
pub const BPS_DENOMINATOR: u64 = 10_000;
