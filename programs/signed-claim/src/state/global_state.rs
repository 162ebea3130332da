use anchor_lang::prelude::*;

use crate::utils::rollover;

#[account]
#[derive(Default)]
pub struct GlobalState {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Bump seed of the vault PDA
    pub vault_bump: u8,

    /// Claims are rejected while set
    pub pause: bool,

    /// May update this config and drain the vault
    pub authority: Pubkey,

    /// Ed25519 key that must sign every claim message
    pub backend_authority: Pubkey,

    /// Lamport vault claims are paid from
    pub vault: Pubkey,

    /// Optional cap on lamports paid out per day across all users
    pub daily_limit: Option<u64>,

    /// Day index `today_total` refers to
    pub today: i64,

    /// Lamports paid out during `today`
    pub today_total: u64,

    /// Optional cap on claims per user per day
    pub claim_requests_limit: Option<u8>,
}

impl GlobalState {
    pub const LEN: usize = 8 + // discriminator
        1 + // bump
        1 + // vault_bump
        1 + // pause
        32 + // authority
        32 + // backend_authority
        32 + // vault
        1 + 8 + // Option<daily_limit>
        8 + // today
        8 + // today_total
        1 + 1; // Option<claim_requests_limit>

    pub fn new(
        bump: u8,
        vault_bump: u8,
        authority: Pubkey,
        backend_authority: Pubkey,
        vault: Pubkey,
    ) -> Self {
        Self {
            bump,
            vault_bump,
            pause: false,
            authority,
            backend_authority,
            vault,
            daily_limit: None,
            today: 0,
            today_total: 0,
            claim_requests_limit: None,
        }
    }

    /// `(today, today_total)` as seen from `today_idx`, stale totals zeroed.
    pub fn current_day_total(&self, today_idx: i64) -> (i64, u64) {
        rollover(today_idx, self.today, self.today_total)
    }

    /// Lamports still claimable today under `daily_limit`; `None` when uncapped.
    pub fn remaining_daily_allowance(&self, today_idx: i64) -> Option<u64> {
        let (_, today_total) = self.current_day_total(today_idx);
        self.daily_limit
            .map(|limit| limit.saturating_sub(today_total))
    }
}
