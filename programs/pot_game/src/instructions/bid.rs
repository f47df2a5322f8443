use anchor_lang::prelude::*;

use crate::{
    errors::PotGameError,
    events::BidPlaced,
    utils::deposit_to_vault,
    PlaceBid,
};

pub fn place_bid(ctx: Context<PlaceBid>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // all rejections happen before any lamport moves
    ctx.accounts.game.check_bid(amount, now)?;

    let vault_info = ctx.accounts.vault.to_account_info();
    let vault_before = vault_info.lamports();

    deposit_to_vault(
        &ctx.accounts.bidder.to_account_info(),
        &vault_info,
        &ctx.accounts.system_program.to_account_info(),
        amount,
    )?;

    let pot = vault_before
        .checked_add(amount)
        .ok_or(PotGameError::MathOverflow)?;
    require!(vault_info.lamports() == pot, PotGameError::VaultBalanceMismatch);

    let game_key = ctx.accounts.game.key();
    let bidder = ctx.accounts.bidder.key();

    let game = &mut ctx.accounts.game;
    game.record_bid(bidder, amount, now)?;

    emit!(BidPlaced {
        game: game_key,
        bidder,
        amount,
        end_time: game.end_time,
        pot,
        bid_count: game.bid_count,
    });

    Ok(())
}
