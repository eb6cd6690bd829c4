/// Namespace tag for every vault PDA: `[VAULT_SEED, owner]`.
pub const VAULT_SEED: &[u8] = b"vault";
