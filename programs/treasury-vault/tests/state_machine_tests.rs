/// State-machine tests for the Treasury Vault program
///
/// Covers the host-testable core: PDA derivation, treasury authority
/// verification, the one-shot interest transition, and account sizing.
/// Transfer execution itself is delegated to the SPL token program and is
/// exercised against a live runtime, not here.

use anchor_lang::prelude::*;
use treasury_vault::{
    authority::TreasuryAuthority,
    constants::*,
    state::{Treasury, Vault},
};

// =============================================================================
// PDA validation
// =============================================================================

#[test]
fn test_treasury_and_vault_seeds_never_collide() {
    // Same discriminator key under both seed tags must yield distinct PDAs
    let program_id = treasury_vault::id();
    let key = Pubkey::new_unique();

    let (treasury, _) = Pubkey::find_program_address(&[TREASURY_SEED, key.as_ref()], &program_id);
    let (vault, _) = Pubkey::find_program_address(&[VAULT_SEED, key.as_ref()], &program_id);

    assert_ne!(treasury, vault);
}

#[test]
fn test_canonical_bump_recomputes_to_same_address() {
    let program_id = treasury_vault::id();
    let mint = Pubkey::new_unique();

    let (expected, bump) =
        Pubkey::find_program_address(&[TREASURY_SEED, mint.as_ref()], &program_id);
    let recomputed =
        Pubkey::create_program_address(&[TREASURY_SEED, mint.as_ref(), &[bump]], &program_id)
            .unwrap();

    assert_eq!(expected, recomputed);
}

// =============================================================================
// Treasury authority capability
// =============================================================================

#[test]
fn test_authority_verify_accepts_canonical_derivation() {
    let mint = Pubkey::new_unique();
    let (treasury, bump) =
        Pubkey::find_program_address(&[TREASURY_SEED, mint.as_ref()], &treasury_vault::ID);

    assert!(TreasuryAuthority::verify(&mint, bump, &treasury).is_ok());
}

#[test]
fn test_authority_verify_rejects_substituted_account() {
    let mint = Pubkey::new_unique();
    let (_, bump) =
        Pubkey::find_program_address(&[TREASURY_SEED, mint.as_ref()], &treasury_vault::ID);
    let attacker_account = Pubkey::new_unique();

    assert!(TreasuryAuthority::verify(&mint, bump, &attacker_account).is_err());
}

#[test]
fn test_authority_verify_rejects_wrong_bump() {
    let mint = Pubkey::new_unique();
    let (treasury, bump) =
        Pubkey::find_program_address(&[TREASURY_SEED, mint.as_ref()], &treasury_vault::ID);

    // Any other bump either fails derivation or lands on a different address
    assert!(TreasuryAuthority::verify(&mint, bump.wrapping_sub(1), &treasury).is_err());
    assert!(TreasuryAuthority::verify(&mint, bump.wrapping_add(1), &treasury).is_err());
}

#[test]
fn test_authority_verify_rejects_wrong_mint() {
    let mint = Pubkey::new_unique();
    let other_mint = Pubkey::new_unique();
    let (treasury, bump) =
        Pubkey::find_program_address(&[TREASURY_SEED, mint.as_ref()], &treasury_vault::ID);

    assert!(TreasuryAuthority::verify(&other_mint, bump, &treasury).is_err());
}

// =============================================================================
// One-shot interest transition
// =============================================================================

fn fresh_vault(owner: Pubkey) -> Vault {
    Vault {
        owner,
        mint: Pubkey::new_unique(),
        token_account: Pubkey::new_unique(),
        interest_paid: false,
        bump: 255,
    }
}

#[test]
fn test_interest_scenario_end_to_end() {
    // Treasury funded with 10 * 10^9, vault deposited 10 * 10^9
    let treasury_balance = 10_000_000_000u64;
    let vault_balance = 10_000_000_000u64;
    let mut vault = fresh_vault(Pubkey::new_unique());

    let interest = vault.claim_interest(vault_balance).unwrap();

    assert_eq!(interest, 100_000_000);
    assert_eq!(vault_balance + interest, 10_100_000_000);
    assert_eq!(treasury_balance - interest, 9_900_000_000);
    assert!(vault.interest_paid);
}

#[test]
fn test_interest_never_pays_twice() {
    let mut vault = fresh_vault(Pubkey::new_unique());

    vault.claim_interest(10_000_000_000).unwrap();

    // The flag is terminal regardless of the balance presented later
    assert!(vault.claim_interest(10_100_000_000).is_err());
    assert!(vault.claim_interest(0).is_err());
    assert!(vault.interest_paid, "Failed claims leave the flag set");
}

#[test]
fn test_interest_payout_covered_by_funded_treasury() {
    // The acceptance scenario's treasury always covers the payout
    let treasury_balance = 10_000_000_000u64;
    let interest = Vault::interest_due(10_000_000_000).unwrap();

    assert!(treasury_balance >= interest);
}

// =============================================================================
// Account sizing
// =============================================================================

#[test]
fn test_account_space_covers_serialized_records() {
    let treasury = Treasury {
        admin: Pubkey::new_unique(),
        mint: Pubkey::new_unique(),
        token_account: Pubkey::new_unique(),
        bump: 254,
    };
    let vault = fresh_vault(Pubkey::new_unique());

    // 8-byte discriminator plus the borsh payload must fit in SPACE
    let mut treasury_buf: Vec<u8> = Vec::new();
    treasury.serialize(&mut treasury_buf).unwrap();
    assert!(8 + treasury_buf.len() <= Treasury::SPACE);

    let mut vault_buf: Vec<u8> = Vec::new();
    vault.serialize(&mut vault_buf).unwrap();
    assert!(8 + vault_buf.len() <= Vault::SPACE);
}
