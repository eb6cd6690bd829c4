use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::VAULT_SEED;
use crate::errors::VaultError;
use crate::events::Deposited;
use crate::state::VaultAccount;

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        mut,
        seeds = [VAULT_SEED, owner.key().as_ref()],
        bump = vault.bump,
        has_one = owner @ VaultError::Unauthorized,
    )]
    pub vault: Account<'info, VaultAccount>,

    /// CHECK: vault owner, only used to address the PDA and validated via has_one
    pub owner: UncheckedAccount<'info>,

    /// Anyone may fund a vault
    #[account(mut)]
    pub funder: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let balance = ctx.accounts.vault.credit(amount)?;

    let cpi_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.funder.to_account_info(),
            to: ctx.accounts.vault.to_account_info(),
        },
    );
    system_program::transfer(cpi_ctx, amount)?;

    emit!(Deposited {
        vault: ctx.accounts.vault.key(),
        funder: ctx.accounts.funder.key(),
        amount,
        balance,
    });

    msg!(
        "[vault] deposit owner={} funder={} amount={} balance={}",
        ctx.accounts.owner.key(),
        ctx.accounts.funder.key(),
        amount,
        balance
    );
    Ok(())
}
