use anchor_lang::prelude::*;

use crate::{
    constants::*,
    events::GlobalUpdated,
    state::GlobalState,
    utils::limit_from_update,
};

/// Partial update of the global config. `None` keeps the stored value;
/// a limit of `Some(0)` removes that cap.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateGlobalConfigArgs {
    pub pause: Option<bool>,
    pub authority: Option<Pubkey>,
    pub backend_authority: Option<Pubkey>,
    pub daily_limit: Option<u64>,
    pub claim_requests_limit: Option<u8>,
}

impl UpdateGlobalConfigArgs {
    pub fn apply_to(&self, global_state: &mut GlobalState) {
        if let Some(pause) = self.pause {
            global_state.pause = pause;
        }
        if let Some(authority) = self.authority {
            global_state.authority = authority;
        }
        if let Some(backend_authority) = self.backend_authority {
            global_state.backend_authority = backend_authority;
        }
        if let Some(daily_limit) = self.daily_limit {
            global_state.daily_limit = limit_from_update(daily_limit);
        }
        if let Some(claim_requests_limit) = self.claim_requests_limit {
            global_state.claim_requests_limit = limit_from_update(claim_requests_limit);
        }
    }
}

#[derive(Accounts)]
pub struct UpdateGlobal<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_STATE_SEED],
        bump = global_state.bump,
        has_one = authority
    )]
    pub global_state: Account<'info, GlobalState>,
}

pub fn update_global(ctx: Context<UpdateGlobal>, args: UpdateGlobalConfigArgs) -> Result<()> {
    let global_state = &mut ctx.accounts.global_state;

    args.apply_to(global_state);

    emit!(GlobalUpdated {
        authority: global_state.authority,
        backend_authority: global_state.backend_authority,
        pause: global_state.pause,
        daily_limit: global_state.daily_limit,
        claim_requests_limit: global_state.claim_requests_limit,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
