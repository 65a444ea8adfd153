use anchor_lang::prelude::*;

use crate::{constants::MAX_PLAYERS, errors::LotteryError};

#[account]
#[derive(InitSpace)]
pub struct Lottery {
    pub operator: Pubkey,
    pub bump: u8,

    // System-owned PDA vault (holds ticket payments, no data)
    pub vault_bump: u8,

    pub ticket_cost: u64,
    pub max_tickets: u64,
    pub tickets_available: u64,

    /// Ticket owners in purchase order: `players[i]` owns ticket `i`.
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,
}

/// Result of a successful `Lottery::purchase`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Purchase {
    pub first_ticket: u64,
    pub cost: u64,
    pub change: u64,
}

/// Result of a successful `Lottery::draw`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Draw {
    pub winning_ticket: u64,
    pub winner: Pubkey,
}

impl Lottery {
    pub fn is_open(&self) -> bool {
        self.tickets_available > 0
    }

    pub fn tickets_sold(&self) -> u64 {
        self.players.len() as u64
    }

    /// Assigns `ticket_count` tickets to `buyer` at the next free indices.
    /// All checks run before any mutation, so an error leaves `self` untouched.
    pub fn purchase(&mut self, buyer: Pubkey, ticket_count: u64, payment: u64) -> Result<Purchase> {
        require!(self.is_open(), LotteryError::NoTicketsAvailable);
        require!(ticket_count > 0, LotteryError::InvalidTicketCount);

        let remaining = self
            .tickets_available
            .checked_sub(ticket_count)
            .ok_or(LotteryError::InsufficientTicketsAvailable)?;

        let cost = self
            .ticket_cost
            .checked_mul(ticket_count)
            .ok_or(LotteryError::MathOverflow)?;
        require!(payment >= cost, LotteryError::InsufficientPayment);
        let change = payment.checked_sub(cost).ok_or(LotteryError::MathOverflow)?;

        let first_ticket = self.tickets_sold();
        for _ in 0..ticket_count {
            self.players.push(buyer);
        }
        self.tickets_available = remaining;

        Ok(Purchase {
            first_ticket,
            cost,
            change,
        })
    }

    /// Picks the winning ticket from `random_seed` and checks that `payee` owns it.
    /// Read-only: the caller pays out, then calls `reset_round`.
    pub fn draw(&self, caller: Pubkey, random_seed: u64, payee: Pubkey) -> Result<Draw> {
        require!(!self.is_open(), LotteryError::RoundNotComplete);
        require_keys_eq!(caller, self.operator, LotteryError::Unauthorized);

        let winning_ticket = random_seed
            .checked_rem(self.max_tickets)
            .ok_or(LotteryError::MathOverflow)?;

        // Unreachable while the round invariants hold.
        let winner = self
            .players
            .get(winning_ticket as usize)
            .copied()
            .ok_or(LotteryError::WinnerLookupFailed)?;
        require_keys_eq!(payee, winner, LotteryError::WinnerAccountMismatch);

        Ok(Draw {
            winning_ticket,
            winner,
        })
    }

    pub fn reset_round(&mut self) {
        self.players.clear();
        self.tickets_available = self.max_tickets;
    }
}
