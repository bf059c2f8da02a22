use anchor_lang::prelude::*;

#[event]
pub struct Deposited {
    pub owner: Pubkey,
    pub user_account: Pubkey,
    pub amount: u64,
    /// Lamport holding of the user account after the deposit.
    pub balance: u64,
    /// True when this deposit created the user account.
    pub created: bool,
}

#[event]
pub struct Withdrawn {
    pub owner: Pubkey,
    pub user_account: Pubkey,
    pub amount: u64,
    /// Lamport holding of the user account after the withdrawal.
    pub balance: u64,
}
