/// Symbols are plain byte identifiers; class membership comes from config.
pub type Symbol = u8;

/// Fixed-point scale for multipliers and money (1.00 = 10_000).
///
/// Paytable multipliers, per-line multipliers and credit amounts all use this
/// scale so fractional multipliers (0.1x, 1.25x) stay exact under integer
/// arithmetic.
pub const BASE_MULTIPLIER: u64 = 10_000;

/// One credit, in fixed-point units.
pub const CREDIT: u64 = BASE_MULTIPLIER;

/// Minimum consecutive columns for a payline win.
pub const MIN_RUN_LENGTH: usize = 3;

/// Scatter cells anywhere on the grid needed to raise the bonus signal.
pub const SCATTER_TRIGGER_COUNT: usize = 3;

/// Default grid dimensions.
pub const DEFAULT_COLUMNS: usize = 5;
pub const DEFAULT_ROWS: usize = 3;

/// Default bet limits, in fixed-point units.
pub const DEFAULT_MIN_BET: u64 = CREDIT / 10;
pub const DEFAULT_MAX_BET: u64 = 100 * CREDIT;

/// Starting credits for new sessions.
pub const STARTING_CREDITS: u64 = 1_000 * CREDIT;

/// Default symbol ID layout.
///
/// Normals are 1..=9, ordered low-pay to high-pay. IDs need not be
/// contiguous with the special classes.
pub const DEFAULT_NORMAL_SYMBOLS: [Symbol; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Default scatter symbol.
pub const DEFAULT_SCATTER_SYMBOL: Symbol = 10;

/// Default wildcard symbol.
pub const DEFAULT_WILDCARD_SYMBOL: Symbol = 12;
