use anchor_lang::prelude::*;

/// Variant order fixes the on-chain error codes (6000 upward); append only.
#[error_code]
pub enum ClaimError {
    #[msg("Signature verification failed")]
    SigVerificationFailed,

    #[msg("Claim on pause")]
    ClaimSuspended,

    #[msg("The daily claim limit has been exceeded")]
    ExcessLimit,

    #[msg("Your daily claim limit has been exceeded")]
    ClaimLimit,

    // Reserved for a delayed authority rotation; not raised by any instruction yet.
    #[msg("Changing this authority is not possible until the expiration date")]
    SignerChangingDelay,

    #[msg("Signed total does not exceed the amount already claimed")]
    NothingToClaim,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Vault balance above its rent-exempt reserve is below the payout")]
    InsufficientVaultBalance,
}
