use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    // -----------------
    // Purchase
    // -----------------
    #[msg("No tickets available")]
    NoTicketsAvailable,
    #[msg("Invalid number of tickets")]
    InvalidTicketCount,
    #[msg("Insufficient tickets available")]
    InsufficientTicketsAvailable,
    #[msg("Insufficient payment for requested tickets")]
    InsufficientPayment,

    // -----------------
    // Draw
    // -----------------
    #[msg("Round is still on")]
    RoundNotComplete,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Winning ticket has no owner")]
    WinnerLookupFailed,
    #[msg("Winner account does not match the drawn ticket")]
    WinnerAccountMismatch,

    // -----------------
    // Setup
    // -----------------
    #[msg("Invalid ticket cost (must be > 0)")]
    InvalidTicketCost,
    #[msg("Invalid max tickets (must be 1..=MAX_TICKETS)")]
    InvalidMaxTickets,
    #[msg("Full round pot is below the rent-exempt minimum")]
    PotBelowRentMinimum,

    #[msg("Math overflow")]
    MathOverflow,
}
