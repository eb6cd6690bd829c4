#![no_main]

use anchor_lang::prelude::Pubkey;
use libfuzzer_sys::fuzz_target;
use vault::VaultAccount;

const OWNER: Pubkey = Pubkey::new_from_array([1; 32]);
const STRANGER: Pubkey = Pubkey::new_from_array([2; 32]);

// Each 9-byte chunk is one op: tag byte, then a little-endian u64 amount.
// tag % 3: 0 = deposit, 1 = owner withdraw, 2 = stranger withdraw.
fuzz_target!(|data: &[u8]| {
    let mut vault = VaultAccount {
        owner: Pubkey::default(),
        balance: 0,
        bump: 0,
    };
    vault.init(OWNER, 255);

    let mut net: u128 = 0;

    for chunk in data.chunks_exact(9) {
        let amount = u64::from_le_bytes(chunk[1..9].try_into().unwrap_or([0; 8]));
        let before = vault.balance;
        let tag = chunk[0] % 3;

        let result = match tag {
            0 => vault.credit(amount),
            1 => vault.debit(&OWNER, amount),
            _ => vault.debit(&STRANGER, amount),
        };

        match (tag, result) {
            (0, Ok(balance)) => {
                net += u128::from(amount);
                assert_eq!(balance, vault.balance);
            }
            (1, Ok(balance)) => {
                assert!(amount > 0 && amount <= before);
                net -= u128::from(amount);
                assert_eq!(balance, vault.balance);
            }
            (_, Ok(_)) => panic!("stranger withdrew {amount}"),
            (_, Err(_)) => assert_eq!(vault.balance, before),
        }

        assert_eq!(u128::from(vault.balance), net);
        assert_eq!(vault.owner, OWNER);
    }
});
