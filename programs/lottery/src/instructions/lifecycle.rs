use anchor_lang::prelude::*;

use crate::{
    events::RoundDrawn,
    utils::{pay_from_vault, prize_amount},
    EndGame,
};

pub fn end_game(ctx: Context<EndGame>, random_seed: u64) -> Result<()> {
    let draw = ctx.accounts.lottery.draw(
        ctx.accounts.caller.key(),
        random_seed,
        ctx.accounts.winner.key(),
    )?;

    // Entire round balance; the vault keeps only its rent reserve.
    let rent_reserve = Rent::get()?.minimum_balance(0);
    let prize = prize_amount(ctx.accounts.vault.to_account_info().lamports(), rent_reserve);

    pay_from_vault(
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.winner.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        ctx.accounts.lottery.vault_bump,
        prize,
    )?;

    ctx.accounts.lottery.reset_round();

    msg!("Seed: {}", random_seed);
    msg!("Winning ticket: {}", draw.winning_ticket);
    msg!("Winner: {} prize={}", draw.winner, prize);

    emit!(RoundDrawn {
        winner: draw.winner,
        winning_ticket: draw.winning_ticket,
        random_seed,
        prize,
    });

    Ok(())
}
