use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    program::{invoke, invoke_signed},
    system_instruction,
};

use crate::{
    constants::{BPS_DENOMINATOR, MAX_TOTAL_BPS},
    errors::PotGameError,
};

// 1nc1nerator11111111111111111111111111111111
pub fn incinerator_id() -> Pubkey {
    Pubkey::new_from_array([
        0, 51, 144, 114, 141, 52, 17, 96, 121, 189, 201, 17, 191, 255, 0, 219,
        212, 77, 46, 205, 204, 247, 156, 166, 225, 0, 56, 225, 0, 0, 0, 0,
    ])
}

// -----------------
// Seeds
// -----------------
pub const VAULT_SEED: &[u8] = b"vault";

pub fn find_vault_address(game: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, game.as_ref()], program_id)
}

// -------------------------
// Pot split
// -------------------------
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PotSplit {
    pub total: u64,
    pub burn: u64,
    pub fee: u64,
    pub winner: u64,
}

/// floor(amount * bps / 10_000), computed in u128.
pub fn bps_share(amount: u64, bps: u16) -> Result<u64> {
    let share = (amount as u128)
        .checked_mul(bps as u128)
        .ok_or(PotGameError::MathOverflow)?
        / BPS_DENOMINATOR as u128;

    u64::try_from(share).map_err(|_| error!(PotGameError::MathOverflow))
}

/// Splits `total` into burn, fee and winner shares. The winner receives the
/// remainder, so floor rounding never loses a lamport.
pub fn split_pot(total: u64, burn_bps: u16, fee_bps: u16) -> Result<PotSplit> {
    require!(
        (burn_bps as u32) + (fee_bps as u32) <= MAX_TOTAL_BPS as u32,
        PotGameError::InvalidConfig
    );

    let burn = bps_share(total, burn_bps)?;
    let fee = bps_share(total, fee_bps)?;
    let winner = total
        .checked_sub(burn)
        .and_then(|x| x.checked_sub(fee))
        .ok_or(PotGameError::MathOverflow)?;

    Ok(PotSplit {
        total,
        burn,
        fee,
        winner,
    })
}

// -------------------------
// Lamport movement
// -------------------------

/// Signer -> vault through the system program.
pub fn deposit_to_vault<'info>(
    from: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    lamports: u64,
) -> Result<()> {
    let ix = system_instruction::transfer(from.key, vault.key, lamports);

    invoke(
        &ix,
        &[from.clone(), vault.clone(), system_program.clone()],
    )?;

    Ok(())
}

/// Vault -> recipient; the vault PDA signs with its seeds. Zero amounts are skipped.
pub fn pay_from_vault<'info>(
    vault: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    game: &Pubkey,
    vault_bump: u8,
    lamports: u64,
) -> Result<()> {
    if lamports == 0 {
        return Ok(());
    }

    let ix = system_instruction::transfer(vault.key, to.key, lamports);
    let signer_seeds: &[&[u8]] = &[VAULT_SEED, game.as_ref(), &[vault_bump]];

    invoke_signed(
        &ix,
        &[vault.clone(), to.clone(), system_program.clone()],
        &[signer_seeds],
    )?;

    Ok(())
}
