// Centralized Lottery Constants

// Round Defaults
// ==============

/// Default price of a single ticket in lamports (1 SOL = 1_000_000_000).
pub const DEFAULT_TICKET_COST: u64 = 1_000_000_000;

/// Default number of tickets sold per round.
pub const DEFAULT_MAX_TICKETS: u64 = 5;

// Limits
// ======

/// Upper bound on `max_tickets`. Fixes the size of the `Lottery` account.
pub const MAX_TICKETS: u64 = 64;

/// `MAX_TICKETS` as a length, for `#[max_len]` on `Lottery::players`.
pub const MAX_PLAYERS: usize = MAX_TICKETS as usize;
