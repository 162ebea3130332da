/// PDA seeds
pub const GLOBAL_STATE_SEED: &[u8] = b"global";
pub const USER_STATE_SEED: &[u8] = b"user";
pub const VAULT_SEED: &[u8] = b"vault";

/// Time constants
pub const SECONDS_PER_DAY: i64 = 86400;

/// Claim message layout: claimant || 0xFF || cumulative_total (LE) || 0xFF || deadline (LE)
pub const MESSAGE_SEPARATOR: u8 = 0xFF;
pub const CLAIMANT_OFFSET: usize = 0;
pub const FIRST_SEPARATOR_OFFSET: usize = 32;
pub const CUMULATIVE_TOTAL_OFFSET: usize = 33;
pub const SECOND_SEPARATOR_OFFSET: usize = 41;
pub const DEADLINE_OFFSET: usize = 42;
pub const CLAIM_MESSAGE_LEN: usize = 50;

/// Ed25519 precompile instruction layout
pub const ED25519_PUBKEY_LEN: usize = 32;
pub const ED25519_SIGNATURE_LEN: usize = 64;
pub const ED25519_OFFSETS_START: usize = 2;
/// Instruction index value meaning "this same instruction"
pub const ED25519_CURRENT_INSTRUCTION: u16 = u16::MAX;
