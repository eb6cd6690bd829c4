#![allow(unexpected_cfgs)]
#![allow(ambiguous_glob_reexports)]

//! # Vault
//!
//! One lamport vault per user, stored at the PDA `[b"vault", owner]`.
//! Anyone may deposit into an existing vault; only its owner may withdraw.
//! Balances use checked arithmetic and never include the rent reserve.

use anchor_lang::prelude::*;

declare_id!("9EazK4wyfzy7XzLPnERbdzLhu95KeJTsKejjB2WZzN8h");

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use errors::*;
pub use instructions::*;
pub use state::*;

#[program]
pub mod vault {
    use super::*;

    /// Create the caller's vault with a zero balance.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Move `amount` lamports from the funder into the owner's vault.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    /// Return `amount` lamports from the vault to its owner.
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }
}
