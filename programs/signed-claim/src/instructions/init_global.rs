use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::{
    constants::*,
    events::GlobalInitialized,
    state::GlobalState,
};

#[derive(Accounts)]
pub struct InitGlobal<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = GlobalState::LEN,
        seeds = [GLOBAL_STATE_SEED],
        bump
    )]
    pub global_state: Account<'info, GlobalState>,

    /// Lamport vault, a data-less system account owned by this program's PDA
    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn init_global(ctx: Context<InitGlobal>, backend_authority: Pubkey) -> Result<()> {
    let vault_reserve = Rent::get()?.minimum_balance(0);
    let shortfall = vault_reserve.saturating_sub(ctx.accounts.vault.lamports());

    // Fund the vault up to its rent-exempt floor; claims are paid from anything above it
    if shortfall > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.payer.to_account_info(),
                    to: ctx.accounts.vault.to_account_info(),
                },
            ),
            shortfall,
        )?;
    }

    let authority = ctx.accounts.payer.key();
    let vault = ctx.accounts.vault.key();
    ctx.accounts.global_state.set_inner(GlobalState::new(
        ctx.bumps.global_state,
        ctx.bumps.vault,
        authority,
        backend_authority,
        vault,
    ));

    msg!("Global state initialized, backend authority {}", backend_authority);

    emit!(GlobalInitialized {
        authority,
        backend_authority,
        vault,
        vault_reserve,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
