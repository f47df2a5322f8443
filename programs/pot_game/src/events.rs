use anchor_lang::prelude::*;

#[event]
pub struct GameInitialized {
    pub game: Pubkey,
    pub admin: Pubkey,
    pub vault: Pubkey,
    pub end_time: i64,
    pub duration_seconds: i64,
    pub min_bid_lamports: u64,
    pub burn_bps: u16,
    pub fee_bps: u16,
    pub treasury: Option<Pubkey>,
}

#[event]
pub struct BidPlaced {
    pub game: Pubkey,
    pub bidder: Pubkey,
    pub amount: u64,
    pub end_time: i64,
    pub pot: u64,
    pub bid_count: u64,
}

#[event]
pub struct GameSettled {
    pub game: Pubkey,
    pub winner: Pubkey,
    pub treasury: Pubkey,
    pub total: u64,
    pub burn_amount: u64,
    pub fee_amount: u64,
    pub winner_amount: u64,
    pub settled_at: i64,
}
