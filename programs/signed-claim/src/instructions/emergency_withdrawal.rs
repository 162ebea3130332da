use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::{
    constants::*,
    events::EmergencyWithdrawn,
    state::GlobalState,
    utils::withdrawable_excess,
};

#[derive(Accounts)]
pub struct EmergencyWithdrawal<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED],
        bump = global_state.bump,
        has_one = authority,
        has_one = vault
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = global_state.vault_bump
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn emergency_withdrawal(ctx: Context<EmergencyWithdrawal>) -> Result<()> {
    let vault_reserve = Rent::get()?.minimum_balance(0);
    let amount = withdrawable_excess(ctx.accounts.vault.lamports(), vault_reserve);

    if amount > 0 {
        let vault_bump = [ctx.accounts.global_state.vault_bump];
        let vault_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, &vault_bump]];
        system_program::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.authority.to_account_info(),
                },
                vault_seeds,
            ),
            amount,
        )?;
    }

    msg!("Emergency withdrawal of {} lamports", amount);

    emit!(EmergencyWithdrawn {
        authority: ctx.accounts.authority.key(),
        vault: ctx.accounts.vault.key(),
        amount,
        vault_reserve,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // rent-exempt minimum of a zero-data account at default rent
    const RESERVE: u64 = 890_880;

    #[test]
    fn test_default_rent_reserve() {
        assert_eq!(Rent::default().minimum_balance(0), RESERVE);
    }

    #[test]
    fn test_drains_down_to_reserve() {
        let vault_lamports = RESERVE + 5_000_000_000;
        let amount = withdrawable_excess(vault_lamports, RESERVE);
        assert_eq!(amount, 5_000_000_000);
        assert_eq!(vault_lamports - amount, RESERVE);
    }
}
