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

// Placeholder contact data; replace with the deploying team's details before mainnet.
security_txt! {
    // Required fields
    name: "Lottery",
    project_url: "https://example.com/lottery",
    contacts: "email:security@example.com",
    policy: "https://example.com/lottery/SECURITY.md",

    // Optional fields
    preferred_languages: "en"
}

declare_id!("4Fjnw2bnTpgAJyTw7m7sKKGr7MpXBj2kP1jNqB98rsEJ");

#[program]
pub mod lottery {
    use super::*;
    use crate::instructions::{admin, lifecycle, ticket};

    /// Creates the lottery and its prize vault. The signer becomes the operator.
    pub fn initialize_lottery(
        ctx: Context<InitializeLottery>,
        ticket_cost: Option<u64>,
        max_tickets: Option<u64>,
    ) -> Result<()> {
        admin::initialize_lottery(ctx, ticket_cost, max_tickets)
    }

    pub fn buy_ticket(ctx: Context<BuyTicket>, ticket_count: u64, payment: u64) -> Result<()> {
        ticket::buy_ticket(ctx, ticket_count, payment)
    }

    /// Draws `random_seed % max_tickets`, pays the whole pot to that ticket's owner
    /// and starts a new round.
    pub fn end_game(ctx: Context<EndGame>, random_seed: u64) -> Result<()> {
        lifecycle::end_game(ctx, random_seed)
    }
}
