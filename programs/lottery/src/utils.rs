use anchor_lang::prelude::*;
use anchor_lang::solana_program::{program::invoke_signed, system_instruction};

use crate::{
    constants::{DEFAULT_MAX_TICKETS, DEFAULT_TICKET_COST, MAX_TICKETS},
    errors::LotteryError,
};

// -----------------
// Seeds
// -----------------
pub const LOTTERY_SEED: &[u8] = b"lottery_v1";
pub const VAULT_SEED: &[u8] = b"vault_v1";

// -------------------------
// Construction parameters
// -------------------------
/// Fills in defaults and validates `(ticket_cost, max_tickets)`.
/// A full round must pay at least `min_pot`, so the prize can open a fresh winner account.
pub fn resolve_round_params(
    ticket_cost: Option<u64>,
    max_tickets: Option<u64>,
    min_pot: u64,
) -> Result<(u64, u64)> {
    let ticket_cost = ticket_cost.unwrap_or(DEFAULT_TICKET_COST);
    let max_tickets = max_tickets.unwrap_or(DEFAULT_MAX_TICKETS);

    require!(ticket_cost > 0, LotteryError::InvalidTicketCost);
    require!(
        max_tickets > 0 && max_tickets <= MAX_TICKETS,
        LotteryError::InvalidMaxTickets
    );

    let pot = ticket_cost
        .checked_mul(max_tickets)
        .ok_or(LotteryError::MathOverflow)?;
    require!(pot >= min_pot, LotteryError::PotBelowRentMinimum);

    Ok((ticket_cost, max_tickets))
}

// -------------------------
// Vault payouts
// -------------------------
/// Lamports in the vault that belong to the round (everything above the rent reserve).
pub fn prize_amount(vault_lamports: u64, rent_reserve: u64) -> u64 {
    vault_lamports.saturating_sub(rent_reserve)
}

/// Moves `amount` lamports out of the vault PDA. No-op for zero.
pub fn pay_from_vault<'info>(
    vault: AccountInfo<'info>,
    to: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    vault_bump: u8,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let ix = system_instruction::transfer(vault.key, to.key, amount);
    let signer_seeds: &[&[u8]] = &[VAULT_SEED, &[vault_bump]];

    invoke_signed(&ix, &[vault, to, system_program], &[signer_seeds])?;

    Ok(())
}
