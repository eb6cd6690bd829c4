use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub bump: u8,
}

#[event]
pub struct Deposited {
    pub vault: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
    pub balance: u64,
}

#[event]
pub struct Withdrawn {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub balance: u64,
}
