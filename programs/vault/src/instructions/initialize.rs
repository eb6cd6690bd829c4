use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::events::VaultInitialized;
use crate::state::VaultAccount;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// `init` fails if the PDA is already allocated, so each owner gets
    /// exactly one vault. Rent comes out of the owner's lamports.
    #[account(
        init,
        payer = user,
        space = VaultAccount::LEN,
        seeds = [VAULT_SEED, user.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, VaultAccount>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    vault.init(ctx.accounts.user.key(), ctx.bumps.vault);

    emit!(VaultInitialized {
        vault: vault.key(),
        owner: vault.owner,
        bump: vault.bump,
    });

    msg!("[vault] initialized owner={} bump={}", vault.owner, vault.bump);
    Ok(())
}
