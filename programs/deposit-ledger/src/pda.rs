use anchor_lang::prelude::*;

use crate::LedgerError;

pub const USER_ACCOUNT_SEED: &[u8] = b"user_account";

pub fn user_account_seeds(owner: &Pubkey) -> [&[u8]; 2] {
    [USER_ACCOUNT_SEED, owner.as_ref()]
}

/// Canonical user account address and bump for `owner` under `program_id`.
///
/// Clients and the program must derive this identically. Exhausting the
/// bump space cannot happen for a 32-byte owner in practice, but is
/// surfaced as an error rather than a panic.
pub fn derive_user_account(owner: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&user_account_seeds(owner), program_id)
        .ok_or_else(|| error!(LedgerError::BumpSeedExhausted))
}

pub fn user_account_address(owner: &Pubkey) -> Result<(Pubkey, u8)> {
    derive_user_account(owner, &crate::ID)
}

/// Checks `address` is the canonical user account of `owner` and returns its bump.
pub fn assert_user_account(address: &Pubkey, owner: &Pubkey, program_id: &Pubkey) -> Result<u8> {
    let (expected, bump) = derive_user_account(owner, program_id)?;
    require_keys_eq!(*address, expected, LedgerError::AddressMismatch);
    Ok(bump)
}
