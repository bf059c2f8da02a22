use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::events::Deposited;
use crate::ledger;
use crate::pda::USER_ACCOUNT_SEED;
use crate::state::UserAccount;
use crate::LedgerError;

/// Deposit `amount` lamports into the signer's user account
///
/// The first deposit creates the account at `[b"user_account", user]` and
/// records `user` as its owner. Later deposits must come from that owner.
/// The rent-exempt minimum paid at creation is on top of `amount`.
pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let user_key = ctx.accounts.user.key();
    let user_account = &mut ctx.accounts.user_account;

    let created = !user_account.is_initialized();
    if created {
        user_account.owner = user_key;
        msg!("User account created for: {}", user_key);
    } else {
        require_keys_eq!(user_account.owner, user_key, LedgerError::Unauthorized);
    }

    require!(
        ctx.accounts.user.lamports() >= amount,
        LedgerError::InsufficientFunds
    );

    let balance = ledger::credit(user_account.to_account_info().lamports(), amount)?;

    let cpi_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.user.to_account_info(),
            to: user_account.to_account_info(),
        },
    );
    system_program::transfer(cpi_ctx, amount)?;

    msg!("Deposited {} lamports, balance now {}", amount, balance);

    emit!(Deposited {
        owner: user_key,
        user_account: user_account.key(),
        amount,
        balance,
        created,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    /// Created on the first deposit; Anchor funds the rent-exempt minimum
    /// from `user` before the handler runs.
    #[account(
        init_if_needed,
        payer = user,
        space = UserAccount::LEN,
        seeds = [USER_ACCOUNT_SEED, user.key().as_ref()],
        bump
    )]
    pub user_account: Account<'info, UserAccount>,

    pub system_program: Program<'info, System>,
}
