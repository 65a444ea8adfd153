use anchor_lang::prelude::*;

#[event]
pub struct LotteryInitialized {
    pub lottery: Pubkey,
    pub operator: Pubkey,
    pub ticket_cost: u64,
    pub max_tickets: u64,
}

#[event]
pub struct TicketsPurchased {
    pub buyer: Pubkey,
    pub first_ticket: u64,
    pub ticket_count: u64,
    pub cost: u64,
    pub change: u64,
    pub tickets_available: u64,
}

#[event]
pub struct RoundDrawn {
    pub winner: Pubkey,
    pub winning_ticket: u64,
    pub random_seed: u64,
    pub prize: u64,
}
