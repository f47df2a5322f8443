use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

pub use constants::*;
pub use contexts::*;
pub use errors::*;
pub use events::*;
pub use state::*;
pub use utils::*;

use solana_security_txt::security_txt;

security_txt! {
    // Required fields
    name: "Pot Game",
    project_url: "https://example.com",
    contacts: "email:security@example.com",
    policy: "https://example.com/security",

    // Optional fields
    preferred_languages: "en"
}

declare_id!("PotGameVxcwrWVZweDCtZXhgsC7VLA6btymh3fSVipg");

#[program]
pub mod pot_game {
    use super::*;
    use crate::instructions::{admin, bid, settlement, view};

    pub fn initialize_game(
        ctx: Context<InitializeGame>,
        duration_seconds: i64,
        min_bid_lamports: u64,
        burn_bps: u16,
        fee_bps: u16,
        treasury: Option<Pubkey>,
    ) -> Result<()> {
        admin::initialize_game(
            ctx,
            duration_seconds,
            min_bid_lamports,
            burn_bps,
            fee_bps,
            treasury,
        )
    }

    pub fn place_bid(ctx: Context<PlaceBid>, amount: u64) -> Result<()> {
        bid::place_bid(ctx, amount)
    }

    /// Permissionless once the deadline has passed.
    pub fn settle(ctx: Context<Settle>) -> Result<()> {
        settlement::settle(ctx)
    }

    pub fn read_game(ctx: Context<ReadGame>) -> Result<GameView> {
        view::read_game(ctx)
    }
}
