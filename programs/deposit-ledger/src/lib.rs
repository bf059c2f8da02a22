#![allow(clippy::result_large_err)]

use anchor_lang::prelude::*;

declare_id!("5uhwkUP4vVQriThomDPHQaK5tqcNd3hXwEZLFiJN5jFh");

pub mod events;
pub mod instructions;
pub mod ledger;
pub mod pda;
pub mod state;

pub use instructions::*;
pub use state::*;

#[program]
pub mod deposit_ledger {
    use super::*;

    /// Deposit lamports into the signer's user account, creating it on first use.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    /// Withdraw lamports back to the owner, keeping the account rent-exempt.
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }
}

#[error_code]
pub enum LedgerError {
    #[msg("Signer does not own this user account")]
    Unauthorized,
    #[msg("Account address does not match the derived user account address")]
    AddressMismatch,
    #[msg("Insufficient funds")]
    InsufficientFunds,
    #[msg("Lamport arithmetic overflow")]
    Overflow,
    #[msg("Unable to find a viable bump seed for the user account")]
    BumpSeedExhausted,
}
