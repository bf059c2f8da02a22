use anchor_lang::prelude::*;

use crate::events::Withdrawn;
use crate::ledger;
use crate::pda;
use crate::state::UserAccount;
use crate::LedgerError;

/// Withdraw `amount` lamports from the user account back to its owner
///
/// Only the owner recorded at creation may withdraw, and only down to the
/// rent-exempt minimum for the account's size.
pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.user_account.owner;
    let account_info = ctx.accounts.user_account.to_account_info();
    let user_info = ctx.accounts.user.to_account_info();

    // Ownership is checked by the constraint; this pins the account to the
    // canonical derivation for that owner.
    pda::assert_user_account(account_info.key, &owner, ctx.program_id)?;

    let floor = ledger::rent_floor(&Rent::get()?, account_info.data_len());
    let balance = ledger::debit(account_info.lamports(), floor, amount)?;
    let user_lamports = ledger::credit(user_info.lamports(), amount)?;

    // The program owns the user account, so lamports move directly. A
    // system transfer cannot debit an account that carries data.
    **account_info.try_borrow_mut_lamports()? = balance;
    **user_info.try_borrow_mut_lamports()? = user_lamports;

    msg!(
        "Withdrew {} lamports to {}, balance now {} (floor {})",
        amount,
        owner,
        balance,
        floor
    );

    emit!(Withdrawn {
        owner,
        user_account: *account_info.key,
        amount,
        balance,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        constraint = user_account.owner == user.key() @ LedgerError::Unauthorized
    )]
    pub user_account: Account<'info, UserAccount>,

    pub system_program: Program<'info, System>,
}
