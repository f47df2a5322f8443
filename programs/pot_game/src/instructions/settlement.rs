use anchor_lang::prelude::*;

use crate::{
    errors::PotGameError,
    events::GameSettled,
    utils::{pay_from_vault, split_pot},
    Settle,
};

pub fn settle(ctx: Context<Settle>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let game = &ctx.accounts.game;
    game.check_settle(now)?;

    // omitted payees resolve to the burn sink so it never has to be passed twice
    let burn_sink = ctx.accounts.burn_sink.to_account_info();
    let winner = ctx
        .accounts
        .winner
        .as_ref()
        .map(|a| a.to_account_info())
        .unwrap_or_else(|| burn_sink.clone());
    let treasury = ctx
        .accounts
        .treasury
        .as_ref()
        .map(|a| a.to_account_info())
        .unwrap_or_else(|| burn_sink.clone());

    // never trust the caller's view of who gets paid
    game.check_payees(winner.key, treasury.key, burn_sink.key)?;

    let vault_info = ctx.accounts.vault.to_account_info();
    let split = split_pot(vault_info.lamports(), game.burn_bps, game.fee_bps)?;

    let game_key = game.key();
    let vault_bump = game.bump;
    let system_program = ctx.accounts.system_program.to_account_info();

    // 1) burn
    pay_from_vault(&vault_info, &burn_sink, &system_program, &game_key, vault_bump, split.burn)?;

    // 2) treasury fee
    pay_from_vault(&vault_info, &treasury, &system_program, &game_key, vault_bump, split.fee)?;

    // 3) winner takes the remainder
    pay_from_vault(&vault_info, &winner, &system_program, &game_key, vault_bump, split.winner)?;

    require!(vault_info.lamports() == 0, PotGameError::VaultBalanceMismatch);

    let winner_key = winner.key();
    let treasury_key = treasury.key();

    let game = &mut ctx.accounts.game;
    game.record_settlement(now)?;

    msg!(
        "Game {} settled: total {}, burn {}, fee {}, winner {} -> {}",
        game_key,
        split.total,
        split.burn,
        split.fee,
        split.winner,
        winner_key
    );

    emit!(GameSettled {
        game: game_key,
        winner: winner_key,
        treasury: treasury_key,
        total: split.total,
        burn_amount: split.burn,
        fee_amount: split.fee,
        winner_amount: split.winner,
        settled_at: now,
    });

    Ok(())
}
