use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::errors::VaultError;
use crate::events::Withdrawn;
use crate::state::VaultAccount;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// Seeds come from the stored owner so a foreign signer reaches the
    /// has_one check and fails with `Unauthorized` instead of a seeds mismatch.
    #[account(
        mut,
        seeds = [VAULT_SEED, vault.owner.as_ref()],
        bump = vault.bump,
        has_one = owner @ VaultError::Unauthorized,
    )]
    pub vault: Account<'info, VaultAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,
}

pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let owner_key = ctx.accounts.owner.key();
    let balance = ctx.accounts.vault.debit(&owner_key, amount)?;

    // The vault is program-owned, so lamports move without a CPI
    let vault_ai = ctx.accounts.vault.to_account_info();
    let owner_ai = ctx.accounts.owner.to_account_info();
    **vault_ai.try_borrow_mut_lamports()? -= amount;
    **owner_ai.try_borrow_mut_lamports()? += amount;

    emit!(Withdrawn {
        vault: ctx.accounts.vault.key(),
        owner: owner_key,
        amount,
        balance,
    });

    msg!(
        "[vault] withdraw owner={} amount={} balance={}",
        owner_key,
        amount,
        balance
    );
    Ok(())
}
