use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_TOTAL_BPS, NOT_SETTLED},
    errors::PotGameError,
    utils::incinerator_id,
};

/// Initialization parameters, checked once and then frozen into the `Game`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameParams {
    pub duration_seconds: i64,
    pub min_bid_lamports: u64,
    pub burn_bps: u16,
    pub fee_bps: u16,
    pub treasury: Option<Pubkey>,
}

impl GameParams {
    /// `vault_rent_floor` is the rent-exempt minimum of a zero-data account:
    /// the first bid creates the vault, so a smaller minimum bid could never land.
    pub fn validate(&self, vault_rent_floor: u64) -> Result<()> {
        require!(self.duration_seconds > 0, PotGameError::InvalidConfig);
        require!(self.min_bid_lamports > 0, PotGameError::InvalidConfig);
        require!(
            self.min_bid_lamports >= vault_rent_floor,
            PotGameError::InvalidConfig
        );
        require!(self.burn_bps <= MAX_TOTAL_BPS, PotGameError::InvalidConfig);
        require!(self.fee_bps <= MAX_TOTAL_BPS, PotGameError::InvalidConfig);
        require!(
            (self.burn_bps as u32) + (self.fee_bps as u32) <= MAX_TOTAL_BPS as u32,
            PotGameError::InvalidConfig
        );
        if let Some(treasury) = self.treasury {
            require!(treasury != Pubkey::default(), PotGameError::InvalidConfig);
        }
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// Deadline running, no bid yet.
    Created,
    /// At least one bid, deadline running.
    Open,
    /// Deadline passed, waiting for settlement.
    Closed,
    /// Pot paid out. Terminal.
    Settled,
}

/// Point-in-time snapshot returned by `read_game`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct GameView {
    pub admin: Pubkey,
    pub vault: Pubkey,
    pub last_bidder: Option<Pubkey>,
    pub end_time: i64,
    pub duration_seconds: i64,
    pub min_bid_lamports: u64,
    pub burn_bps: u16,
    pub fee_bps: u16,
    pub treasury: Option<Pubkey>,
    pub is_settled: bool,
    pub bid_count: u64,
    pub total_bid_lamports: u64,
    pub vault_balance: u64,
    pub phase: GamePhase,
    pub seconds_remaining: i64,
}

#[account]
#[derive(InitSpace)]
pub struct Game {
    pub admin: Pubkey,

    // System-owned PDA vault (holds lamports, no data)
    pub vault: Pubkey,

    // Pubkey::default() until the first accepted bid
    pub last_bidder: Pubkey,

    pub end_time: i64,
    pub duration_seconds: i64,
    pub min_bid_lamports: u64,

    pub burn_bps: u16,
    pub fee_bps: u16,

    // None => fee share goes to the incinerator
    pub treasury: Option<Pubkey>,

    pub is_settled: bool,

    // vault PDA bump
    pub bump: u8,

    pub created_at: i64,
    pub bid_count: u64,
    pub total_bid_lamports: u64,
    pub settled_at: i64,
}

impl Game {
    pub fn initialize(
        &mut self,
        admin: Pubkey,
        vault: Pubkey,
        bump: u8,
        params: &GameParams,
        now: i64,
    ) -> Result<()> {
        let end_time = now
            .checked_add(params.duration_seconds)
            .ok_or(PotGameError::MathOverflow)?;

        self.admin = admin;
        self.vault = vault;
        self.last_bidder = Pubkey::default();
        self.end_time = end_time;
        self.duration_seconds = params.duration_seconds;
        self.min_bid_lamports = params.min_bid_lamports;
        self.burn_bps = params.burn_bps;
        self.fee_bps = params.fee_bps;
        self.treasury = params.treasury;
        self.is_settled = false;
        self.bump = bump;

        self.created_at = now;
        self.bid_count = 0;
        self.total_bid_lamports = 0;
        self.settled_at = NOT_SETTLED;

        Ok(())
    }

    pub fn has_bids(&self) -> bool {
        self.bid_count > 0
    }

    pub fn check_bid(&self, amount: u64, now: i64) -> Result<()> {
        require!(!self.is_settled, PotGameError::GameAlreadySettled);
        require!(now < self.end_time, PotGameError::BiddingClosed);
        require!(amount >= self.min_bid_lamports, PotGameError::BidTooLow);
        Ok(())
    }

    /// Applies an accepted bid. Every derived value is computed before the
    /// first field is written, so an overflow leaves the record untouched.
    pub fn record_bid(&mut self, bidder: Pubkey, amount: u64, now: i64) -> Result<()> {
        self.check_bid(amount, now)?;

        let end_time = now
            .checked_add(self.duration_seconds)
            .ok_or(PotGameError::MathOverflow)?;
        let total_bid_lamports = self
            .total_bid_lamports
            .checked_add(amount)
            .ok_or(PotGameError::MathOverflow)?;
        let bid_count = self
            .bid_count
            .checked_add(1)
            .ok_or(PotGameError::MathOverflow)?;

        self.last_bidder = bidder;
        self.end_time = end_time;
        self.total_bid_lamports = total_bid_lamports;
        self.bid_count = bid_count;

        Ok(())
    }

    pub fn check_settle(&self, now: i64) -> Result<()> {
        require!(!self.is_settled, PotGameError::GameAlreadySettled);
        require!(now >= self.end_time, PotGameError::BiddingStillOpen);
        Ok(())
    }

    /// Last bidder, or the incinerator when nobody ever bid.
    pub fn expected_winner(&self) -> Pubkey {
        if self.has_bids() {
            self.last_bidder
        } else {
            incinerator_id()
        }
    }

    pub fn expected_treasury(&self) -> Pubkey {
        self.treasury.unwrap_or_else(incinerator_id)
    }

    pub fn check_payees(&self, winner: &Pubkey, treasury: &Pubkey, burn_sink: &Pubkey) -> Result<()> {
        require_keys_eq!(*burn_sink, incinerator_id(), PotGameError::AccountMismatch);
        require_keys_eq!(*winner, self.expected_winner(), PotGameError::AccountMismatch);
        require_keys_eq!(*treasury, self.expected_treasury(), PotGameError::AccountMismatch);
        Ok(())
    }

    pub fn record_settlement(&mut self, now: i64) -> Result<()> {
        self.check_settle(now)?;
        self.is_settled = true;
        self.settled_at = now;
        Ok(())
    }

    pub fn phase(&self, now: i64) -> GamePhase {
        if self.is_settled {
            GamePhase::Settled
        } else if now >= self.end_time {
            GamePhase::Closed
        } else if self.has_bids() {
            GamePhase::Open
        } else {
            GamePhase::Created
        }
    }

    pub fn view(&self, vault_balance: u64, now: i64) -> GameView {
        let phase = self.phase(now);
        let seconds_remaining = match phase {
            GamePhase::Created | GamePhase::Open => self.end_time.saturating_sub(now),
            GamePhase::Closed | GamePhase::Settled => 0,
        };

        GameView {
            admin: self.admin,
            vault: self.vault,
            last_bidder: self.has_bids().then_some(self.last_bidder),
            end_time: self.end_time,
            duration_seconds: self.duration_seconds,
            min_bid_lamports: self.min_bid_lamports,
            burn_bps: self.burn_bps,
            fee_bps: self.fee_bps,
            treasury: self.treasury,
            is_settled: self.is_settled,
            bid_count: self.bid_count,
            total_bid_lamports: self.total_bid_lamports,
            vault_balance,
            phase,
            seconds_remaining,
        }
    }
}
