use anchor_lang::prelude::*;

#[event]
pub struct GlobalInitialized {
    pub authority: Pubkey,
    pub backend_authority: Pubkey,
    pub vault: Pubkey,
    pub vault_reserve: u64,
    pub timestamp: i64,
}

#[event]
pub struct GlobalUpdated {
    pub authority: Pubkey,
    pub backend_authority: Pubkey,
    pub pause: bool,
    pub daily_limit: Option<u64>,
    pub claim_requests_limit: Option<u8>,
    pub timestamp: i64,
}

#[event]
pub struct Claimed {
    pub claimant: Pubkey,
    pub payout: u64,
    pub claimed_total: u64,
    pub today: i64,
    pub today_claim_count: u8,
    pub today_total: u64,
    pub timestamp: i64,
}

#[event]
pub struct EmergencyWithdrawn {
    pub authority: Pubkey,
    pub vault: Pubkey,
    pub amount: u64,
    pub vault_reserve: u64,
    pub timestamp: i64,
}
