use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use solana_program::instruction::Instruction;
use solana_program::sysvar::instructions as sysvar_instructions;

use crate::{
    constants::*,
    ed25519_verification::{load_preceding_instruction, verify_claim_signature},
    errors::ClaimError,
    events::Claimed,
    state::{GlobalState, UserState},
    utils::{day_index, withdrawable_excess},
};

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        space = UserState::LEN,
        seeds = [USER_STATE_SEED, payer.key().as_ref()],
        bump
    )]
    pub user_state: Account<'info, UserState>,

    #[account(
        mut,
        seeds = [GLOBAL_STATE_SEED],
        bump = global_state.bump,
        has_one = vault
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = global_state.vault_bump
    )]
    pub vault: SystemAccount<'info>,

    /// Instructions sysvar, used to read the preceding Ed25519 instruction
    /// CHECK: address constraint
    #[account(address = sysvar_instructions::ID)]
    pub ix_sysvar: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

/// Every value a successful claim writes, computed before anything is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimPlan {
    pub payout: u64,
    pub claimed_total: u64,
    pub user_today: i64,
    pub today_claim_count: u8,
    pub global_today: i64,
    pub today_total: u64,
}

impl ClaimPlan {
    /// `user_bump` is only recorded when the user record is created by this claim.
    pub fn apply(&self, global_state: &mut GlobalState, user_state: &mut UserState, user_bump: u8) {
        if !user_state.is_initialized {
            user_state.bump = user_bump;
            user_state.is_initialized = true;
        }
        user_state.claimed_total = self.claimed_total;
        user_state.today = self.user_today;
        user_state.today_claim_count = self.today_claim_count;

        global_state.today = self.global_today;
        global_state.today_total = self.today_total;
    }
}

/// Runs the per-user and global limit checks for a verified claim of
/// `cumulative_total` on day `today_idx`, without mutating either record.
pub fn plan_claim(
    global_state: &GlobalState,
    user_state: &UserState,
    cumulative_total: u64,
    today_idx: i64,
) -> Result<ClaimPlan> {
    let (user_today, claim_count) = user_state.current_day_count(today_idx);

    if let Some(limit) = global_state.claim_requests_limit {
        require!(
            claim_count as u16 + 1 <= limit as u16,
            ClaimError::ClaimLimit
        );
    }

    let payout = cumulative_total
        .checked_sub(user_state.claimed_total())
        .filter(|payout| *payout > 0)
        .ok_or(ClaimError::NothingToClaim)?;

    let (global_today, day_total) = global_state.current_day_total(today_idx);
    let today_total = day_total
        .checked_add(payout)
        .ok_or(ClaimError::MathOverflow)?;

    if let Some(allowance) = global_state.remaining_daily_allowance(today_idx) {
        require!(payout <= allowance, ClaimError::ExcessLimit);
    }

    Ok(ClaimPlan {
        payout,
        claimed_total: cumulative_total,
        user_today,
        // only bounded by claim_requests_limit when one is set
        today_claim_count: claim_count.saturating_add(1),
        global_today,
        today_total,
    })
}

/// Every check a claim goes through, in order: pause, signature, limits,
/// vault balance. `load_ed25519_ix` is not called while claims are paused.
/// `vault_available` is the vault balance above its rent-exempt reserve.
pub fn process_claim<F>(
    global_state: &GlobalState,
    user_state: &UserState,
    claimant: &Pubkey,
    now: i64,
    vault_available: u64,
    load_ed25519_ix: F,
) -> Result<ClaimPlan>
where
    F: FnOnce() -> Result<Instruction>,
{
    require!(!global_state.pause, ClaimError::ClaimSuspended);

    let ed25519_ix = load_ed25519_ix()?;
    let message = verify_claim_signature(
        &ed25519_ix,
        &global_state.backend_authority,
        claimant,
        now,
    )?;

    let plan = plan_claim(
        global_state,
        user_state,
        message.cumulative_total,
        day_index(now),
    )?;

    if plan.payout > vault_available {
        msg!("Payout {} exceeds vault balance {} above reserve", plan.payout, vault_available);
        return err!(ClaimError::InsufficientVaultBalance);
    }

    Ok(plan)
}

pub fn claim(ctx: Context<Claim>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let claimant = ctx.accounts.payer.key();
    let vault_reserve = Rent::get()?.minimum_balance(0);
    let vault_available = withdrawable_excess(ctx.accounts.vault.lamports(), vault_reserve);

    let plan = process_claim(
        &ctx.accounts.global_state,
        &ctx.accounts.user_state,
        &claimant,
        now,
        vault_available,
        || load_preceding_instruction(&ctx.accounts.ix_sysvar),
    )?;

    let vault_bump = [ctx.accounts.global_state.vault_bump];
    let vault_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, &vault_bump]];
    system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.payer.to_account_info(),
            },
            vault_seeds,
        ),
        plan.payout,
    )?;

    let user_bump = ctx.bumps.user_state;
    let global_state = &mut ctx.accounts.global_state;
    let user_state = &mut ctx.accounts.user_state;
    plan.apply(global_state, user_state, user_bump);

    msg!("Claimed {} lamports, total {}", plan.payout, plan.claimed_total);

    emit!(Claimed {
        claimant,
        payout: plan.payout,
        claimed_total: plan.claimed_total,
        today: plan.user_today,
        today_claim_count: plan.today_claim_count,
        today_total: plan.today_total,
        timestamp: now,
    });

    Ok(())
}
