use anchor_lang::prelude::*;

/// Per-user ledger entry, stored at the address derived from
/// `[b"user_account", owner]`.
///
/// The deposited balance is not a field: it is the account's lamport
/// holding, of which the rent-exempt minimum for `LEN` bytes is never
/// withdrawable.
#[account]
pub struct UserAccount {
    /// Wallet that created the account. Written once, on first deposit.
    pub owner: Pubkey,
}

impl UserAccount {
    pub const LEN: usize = 8 + 32; // discriminator + pubkey

    /// A freshly allocated account is zero-filled until its first deposit.
    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }
}
