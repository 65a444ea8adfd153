use anchor_lang::prelude::*;

use crate::events::LotteryInitialized;
use crate::utils::resolve_round_params;
use crate::InitializeLottery;

pub fn initialize_lottery(
    ctx: Context<InitializeLottery>,
    ticket_cost: Option<u64>,
    max_tickets: Option<u64>,
) -> Result<()> {
    let min_pot = Rent::get()?.minimum_balance(0);
    let (ticket_cost, max_tickets) = resolve_round_params(ticket_cost, max_tickets, min_pot)?;

    let lottery = &mut ctx.accounts.lottery;
    lottery.operator = ctx.accounts.operator.key();
    lottery.bump = ctx.bumps.lottery;
    lottery.vault_bump = ctx.bumps.vault;

    lottery.ticket_cost = ticket_cost;
    lottery.max_tickets = max_tickets;

    // first round opens immediately
    lottery.tickets_available = max_tickets;
    lottery.players = Vec::new();

    msg!(
        "Lottery initialized: ticket_cost={} max_tickets={}",
        ticket_cost,
        max_tickets
    );

    emit!(LotteryInitialized {
        lottery: lottery.key(),
        operator: lottery.operator,
        ticket_cost,
        max_tickets,
    });

    Ok(())
}
