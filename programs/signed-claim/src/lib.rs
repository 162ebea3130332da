use anchor_lang::prelude::*;

pub mod constants;
pub mod ed25519_verification;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;


use instructions::*;

declare_id!("7jd5qzcXeDhppUbjycdE9FtZG46E4XQ69mwsns5gjYNW");

#[program]
pub mod signed_claim {
    use super::*;

    /// Create the global config and fund the vault to its rent-exempt floor (once)
    pub fn init_global(ctx: Context<InitGlobal>, backend_authority: Pubkey) -> Result<()> {
        instructions::init_global(ctx, backend_authority)
    }

    /// Patch the global config (authority only)
    pub fn update_global(ctx: Context<UpdateGlobal>, args: UpdateGlobalConfigArgs) -> Result<()> {
        instructions::update_global(ctx, args)
    }

    /// Pay out the difference between a backend-signed cumulative total and
    /// what the caller already received. Must follow an Ed25519 instruction.
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim(ctx)
    }

    /// Drain the vault down to its rent-exempt floor (authority only, ignores pause)
    pub fn emergency_withdrawal(ctx: Context<EmergencyWithdrawal>) -> Result<()> {
        instructions::emergency_withdrawal(ctx)
    }
}
