// programs/lottery/src/contexts.rs

use anchor_lang::prelude::*;

use crate::state::Lottery;

#[derive(Accounts)]
pub struct InitializeLottery<'info> {
    #[account(
        init,
        payer = operator,
        space = 8 + Lottery::INIT_SPACE,
        seeds = [crate::LOTTERY_SEED],
        bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// Prize vault. Rent reserve paid by the operator here stays in the vault for good.
    /// CHECK: system-owned PDA (owner = system program). Address enforced by seeds/bump.
    #[account(
        init,
        payer = operator,
        space = 0,
        owner = anchor_lang::solana_program::system_program::ID,
        seeds = [crate::VAULT_SEED],
        bump
    )]
    pub vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub operator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct BuyTicket<'info> {
    #[account(
        mut,
        seeds = [crate::LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// CHECK: System-owned PDA used only as a lamport vault. Address is enforced by seeds/bump.
    #[account(
        mut,
        seeds = [crate::VAULT_SEED],
        bump = lottery.vault_bump
    )]
    pub vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct EndGame<'info> {
    #[account(
        mut,
        seeds = [crate::LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// CHECK: System-owned PDA vault. Address enforced by seeds/bump.
    #[account(
        mut,
        seeds = [crate::VAULT_SEED],
        bump = lottery.vault_bump
    )]
    pub vault: UncheckedAccount<'info>,

    /// Checked against `lottery.operator` in the handler, after the round-complete check.
    pub caller: Signer<'info>,

    /// Owner of the drawn ticket; the handler rejects any other account.
    #[account(mut)]
    pub winner: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}
