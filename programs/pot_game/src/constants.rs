// Centralized Game Constants

// Basis points
// ============

/// Denominator for every basis-point rate. 10_000 bps = 100%.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Upper bound for `burn_bps + fee_bps`.
pub const MAX_TOTAL_BPS: u16 = 10_000;

// Timer
// =====

/// Sentinel for `Game::settled_at` before settlement.
pub const NOT_SETTLED: i64 = 0;

// Client defaults
// ===============

/// Default bidding window (15 minutes).
pub const DEFAULT_DURATION_SECONDS: i64 = 900;

/// Default minimum bid: 0.01 SOL.
pub const DEFAULT_MIN_BID_LAMPORTS: u64 = 10_000_000;

/// Default burn rate. 200 = 2%.
pub const DEFAULT_BURN_BPS: u16 = 200;

/// Default treasury fee rate.
pub const DEFAULT_FEE_BPS: u16 = 0;
