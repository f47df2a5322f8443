use anchor_lang::prelude::*;

use crate::{
    errors::PotGameError,
    events::GameInitialized,
    state::GameParams,
    InitializeGame,
};

pub fn initialize_game(
    ctx: Context<InitializeGame>,
    duration_seconds: i64,
    min_bid_lamports: u64,
    burn_bps: u16,
    fee_bps: u16,
    treasury: Option<Pubkey>,
) -> Result<()> {
    let params = GameParams {
        duration_seconds,
        min_bid_lamports,
        burn_bps,
        fee_bps,
        treasury,
    };

    // the first bid creates the vault, so it must clear the rent-exempt floor
    let vault_rent_floor = Rent::get()?.minimum_balance(0);
    params.validate(vault_rent_floor)?;

    // lamports sent to the PDA ahead of time would break vault == sum of bids
    require!(
        ctx.accounts.vault.to_account_info().lamports() == 0,
        PotGameError::VaultNotEmpty
    );

    let now = Clock::get()?.unix_timestamp;
    let game_key = ctx.accounts.game.key();
    let admin = ctx.accounts.admin.key();
    let vault = ctx.accounts.vault.key();

    let game = &mut ctx.accounts.game;
    game.initialize(admin, vault, ctx.bumps.vault, &params, now)?;

    msg!(
        "Game {} initialized: deadline {}, min bid {}, burn {} bps, fee {} bps",
        game_key,
        game.end_time,
        game.min_bid_lamports,
        game.burn_bps,
        game.fee_bps
    );

    emit!(GameInitialized {
        game: game_key,
        admin,
        vault,
        end_time: game.end_time,
        duration_seconds: game.duration_seconds,
        min_bid_lamports: game.min_bid_lamports,
        burn_bps: game.burn_bps,
        fee_bps: game.fee_bps,
        treasury: game.treasury,
    });

    Ok(())
}
