// programs/pot_game/src/contexts.rs

use anchor_lang::prelude::*;

use crate::state::Game;

#[derive(Accounts)]
pub struct InitializeGame<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Game::INIT_SPACE,
    )]
    pub game: Account<'info, Game>,

    /// CHECK: system-owned PDA used only as a lamport vault; it comes into existence
    /// with the first bid. Address enforced by seeds/bump.
    #[account(
        seeds = [crate::VAULT_SEED, game.key().as_ref()],
        bump
    )]
    pub vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct PlaceBid<'info> {
    #[account(mut, has_one = vault)]
    pub game: Account<'info, Game>,

    /// CHECK: System-owned PDA vault. Address enforced by seeds/bump.
    #[account(
        mut,
        seeds = [crate::VAULT_SEED, game.key().as_ref()],
        bump = game.bump
    )]
    pub vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub bidder: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Settle<'info> {
    /// Anyone may settle once the deadline has passed.
    pub caller: Signer<'info>,

    #[account(mut, has_one = vault)]
    pub game: Account<'info, Game>,

    /// CHECK: System-owned PDA vault. Address enforced by seeds/bump.
    #[account(
        mut,
        seeds = [crate::VAULT_SEED, game.key().as_ref()],
        bump = game.bump
    )]
    pub vault: UncheckedAccount<'info>,

    /// CHECK: compared against game.last_bidder in the handler.
    /// Omitted => burn_sink, which only matches a game that never had a bid.
    #[account(mut)]
    pub winner: Option<UncheckedAccount<'info>>,

    /// CHECK: compared against game.treasury in the handler.
    /// Omitted => burn_sink, which only matches a game without treasury.
    #[account(mut)]
    pub treasury: Option<UncheckedAccount<'info>>,

    /// CHECK: must be the incinerator; compared in the handler
    #[account(mut)]
    pub burn_sink: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct ReadGame<'info> {
    #[account(has_one = vault)]
    pub game: Account<'info, Game>,

    /// CHECK: System-owned PDA vault, read-only. Address enforced by seeds/bump.
    #[account(
        seeds = [crate::VAULT_SEED, game.key().as_ref()],
        bump = game.bump
    )]
    pub vault: UncheckedAccount<'info>,
}
