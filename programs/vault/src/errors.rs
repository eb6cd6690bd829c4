use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Signer is not the vault owner")]
    Unauthorized,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Vault balance would overflow")]
    Overflow,
    #[msg("Insufficient funds in vault")]
    InsufficientFunds,
}
