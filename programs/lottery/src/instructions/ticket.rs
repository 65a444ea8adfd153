use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::{events::TicketsPurchased, utils::pay_from_vault, BuyTicket};

pub fn buy_ticket(ctx: Context<BuyTicket>, ticket_count: u64, payment: u64) -> Result<()> {
    let buyer_pk = ctx.accounts.buyer.key();

    // --- state first: every check runs before any lamports move ---
    let lottery = &mut ctx.accounts.lottery;
    let purchase = lottery.purchase(buyer_pk, ticket_count, payment)?;
    let tickets_available = lottery.tickets_available;
    let vault_bump = lottery.vault_bump;

    // --- TRANSFER payment to vault ---
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        payment,
    )?;

    // --- refund overpayment (vault PDA signs) ---
    pay_from_vault(
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.buyer.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        vault_bump,
        purchase.change,
    )?;

    msg!(
        "Tickets {}..{} sold to {} (change {})",
        purchase.first_ticket,
        purchase.first_ticket + ticket_count,
        buyer_pk,
        purchase.change
    );

    emit!(TicketsPurchased {
        buyer: buyer_pk,
        first_ticket: purchase.first_ticket,
        ticket_count,
        cost: purchase.cost,
        change: purchase.change,
        tickets_available,
    });

    Ok(())
}
