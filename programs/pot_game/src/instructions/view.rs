use anchor_lang::prelude::*;

use crate::{state::GameView, ReadGame};

/// Snapshot of the game and its vault, returned through Anchor return data.
pub fn read_game(ctx: Context<ReadGame>) -> Result<GameView> {
    let now = Clock::get()?.unix_timestamp;
    let vault_balance = ctx.accounts.vault.to_account_info().lamports();

    Ok(ctx.accounts.game.view(vault_balance, now))
}
