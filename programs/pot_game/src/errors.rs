use anchor_lang::prelude::*;

#[error_code]
pub enum PotGameError {
    #[msg("Invalid game configuration")]
    InvalidConfig,
    #[msg("Game already settled")]
    GameAlreadySettled,
    #[msg("Bidding window closed")]
    BiddingClosed,
    #[msg("Bidding window still open")]
    BiddingStillOpen,
    #[msg("Bid below minimum")]
    BidTooLow,
    #[msg("Supplied account does not match game state")]
    AccountMismatch,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Vault must be empty at initialization")]
    VaultNotEmpty,
    #[msg("Vault balance does not match expected pot")]
    VaultBalanceMismatch,
}
