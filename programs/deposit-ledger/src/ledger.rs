//! Lamport arithmetic shared by the deposit and withdraw handlers.
//!
//! A user's balance is the lamport holding of their `UserAccount`. The part
//! of the holding below the rent-exempt floor is never withdrawable, so after
//! any successful instruction `holding >= floor`.

use anchor_lang::prelude::*;

use crate::LedgerError;

/// Minimum holding for an account of `data_len` bytes.
pub fn rent_floor(rent: &Rent, data_len: usize) -> u64 {
    rent.minimum_balance(data_len)
}

pub fn credit(holding: u64, amount: u64) -> Result<u64> {
    holding
        .checked_add(amount)
        .ok_or_else(|| error!(LedgerError::Overflow))
}

/// Lamports that can leave the account without breaching the floor.
pub fn withdrawable(holding: u64, floor: u64) -> u64 {
    holding.saturating_sub(floor)
}

/// Holding after removing `amount`, refusing to go below `floor`.
pub fn debit(holding: u64, floor: u64, amount: u64) -> Result<u64> {
    let remaining = holding
        .checked_sub(amount)
        .ok_or_else(|| error!(LedgerError::InsufficientFunds))?;
    require_gte!(remaining, floor, LedgerError::InsufficientFunds);

    Ok(remaining)
}
