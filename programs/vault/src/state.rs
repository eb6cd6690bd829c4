use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::errors::VaultError;

/// Per-owner lamport ledger (PDA, seeds = [b"vault", owner])
///
/// `balance` tracks only deposited lamports. The rent-exempt reserve paid at
/// creation sits on top of it and is never reachable through `debit`.
#[account]
pub struct VaultAccount {
    /// Owner pubkey, the only signer allowed to withdraw
    pub owner: Pubkey,
    /// Withdrawable lamports
    pub balance: u64,
    /// Canonical bump, stored so later accesses skip the bump search
    pub bump: u8,
}

impl VaultAccount {
    pub const LEN: usize = 8 + 32 + 8 + 1; // discriminator + pubkey + u64 + u8

    /// PDA and canonical bump for `owner`'s vault under this program.
    pub fn derive_address(owner: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[VAULT_SEED, owner.as_ref()], &crate::ID)
    }

    /// Fresh record for `owner` with a zero balance.
    pub fn init(&mut self, owner: Pubkey, bump: u8) {
        self.owner = owner;
        self.balance = 0;
        self.bump = bump;
    }

    /// Adds `amount` to the balance and returns the new balance.
    ///
    /// The record is left untouched on error.
    pub fn credit(&mut self, amount: u64) -> Result<u64> {
        require!(amount > 0, VaultError::InvalidAmount);

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(VaultError::Overflow)?;

        Ok(self.balance)
    }

    /// Removes `amount` from the balance on behalf of `authority` and returns
    /// the new balance.
    ///
    /// The record is left untouched on error.
    pub fn debit(&mut self, authority: &Pubkey, amount: u64) -> Result<u64> {
        require_keys_eq!(self.owner, *authority, VaultError::Unauthorized);
        require!(amount > 0, VaultError::InvalidAmount);

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(VaultError::InsufficientFunds)?;

        Ok(self.balance)
    }
}
