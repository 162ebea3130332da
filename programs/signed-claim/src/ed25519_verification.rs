use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};
use solana_program::ed25519_program;
use solana_program::instruction::Instruction;
use solana_program::sysvar::instructions::{load_current_index_checked, load_instruction_at_checked};

use crate::constants::*;
use crate::errors::ClaimError;

/// Offsets header of an Ed25519 precompile instruction (one per signature).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Ed25519SignatureOffsets {
    pub signature_offset: u16,
    pub signature_instruction_index: u16,
    pub public_key_offset: u16,
    pub public_key_instruction_index: u16,
    pub message_data_offset: u16,
    pub message_data_size: u16,
    pub message_instruction_index: u16,
}

impl Ed25519SignatureOffsets {
    pub const LEN: usize = std::mem::size_of::<Self>();

    /// All three pieces must live inside the precompile instruction itself,
    /// otherwise the verified bytes need not be the ones we read.
    fn is_self_contained(&self) -> bool {
        self.signature_instruction_index == ED25519_CURRENT_INSTRUCTION
            && self.public_key_instruction_index == ED25519_CURRENT_INSTRUCTION
            && self.message_instruction_index == ED25519_CURRENT_INSTRUCTION
    }
}

/// Message the backend authority signs to approve a claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimMessage {
    pub claimant: Pubkey,
    /// Running entitlement of the claimant, not the amount of this claim
    pub cumulative_total: u64,
    /// Unix seconds after which the message is void
    pub deadline: u64,
}

impl ClaimMessage {
    pub fn to_bytes(&self) -> [u8; CLAIM_MESSAGE_LEN] {
        let mut data = [0u8; CLAIM_MESSAGE_LEN];
        data[CLAIMANT_OFFSET..FIRST_SEPARATOR_OFFSET].copy_from_slice(self.claimant.as_ref());
        data[FIRST_SEPARATOR_OFFSET] = MESSAGE_SEPARATOR;
        data[CUMULATIVE_TOTAL_OFFSET..SECOND_SEPARATOR_OFFSET]
            .copy_from_slice(&self.cumulative_total.to_le_bytes());
        data[SECOND_SEPARATOR_OFFSET] = MESSAGE_SEPARATOR;
        data[DEADLINE_OFFSET..CLAIM_MESSAGE_LEN].copy_from_slice(&self.deadline.to_le_bytes());
        data
    }

    pub fn try_from_bytes(data: &[u8]) -> Result<Self> {
        require!(
            data.len() == CLAIM_MESSAGE_LEN,
            ClaimError::SigVerificationFailed
        );
        require!(
            data[FIRST_SEPARATOR_OFFSET] == MESSAGE_SEPARATOR
                && data[SECOND_SEPARATOR_OFFSET] == MESSAGE_SEPARATOR,
            ClaimError::SigVerificationFailed
        );

        let claimant = Pubkey::try_from(&data[CLAIMANT_OFFSET..FIRST_SEPARATOR_OFFSET])
            .map_err(|_| ClaimError::SigVerificationFailed)?;
        let cumulative_total = read_u64_le(&data[CUMULATIVE_TOTAL_OFFSET..SECOND_SEPARATOR_OFFSET])?;
        let deadline = read_u64_le(&data[DEADLINE_OFFSET..CLAIM_MESSAGE_LEN])?;

        Ok(Self {
            claimant,
            cumulative_total,
            deadline,
        })
    }

    pub fn is_expired(&self, now: i64) -> bool {
        // a pre-epoch clock is earlier than every deadline
        match u64::try_from(now) {
            Ok(now) => self.deadline < now,
            Err(_) => false,
        }
    }
}

/// Signer key and message extracted from an Ed25519 precompile instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignedClaim {
    pub signer: Pubkey,
    pub message: ClaimMessage,
}

fn read_u64_le(bytes: &[u8]) -> Result<u64> {
    let raw: [u8; 8] = bytes
        .try_into()
        .map_err(|_| ClaimError::SigVerificationFailed)?;
    Ok(u64::from_le_bytes(raw))
}

fn slice_at(data: &[u8], offset: u16, len: usize) -> Result<&[u8]> {
    let start = offset as usize;
    let end = start
        .checked_add(len)
        .ok_or(ClaimError::SigVerificationFailed)?;
    data.get(start..end)
        .ok_or_else(|| error!(ClaimError::SigVerificationFailed))
}

/// Reads the signer and claim message out of an Ed25519 precompile instruction.
///
/// The precompile has already checked the signature by the time this program
/// runs; what is validated here is that the instruction has the expected
/// single-signature shape and that every offset points into its own data.
pub fn parse_ed25519_instruction(ix: &Instruction) -> Result<SignedClaim> {
    require_keys_eq!(
        ix.program_id,
        ed25519_program::ID,
        ClaimError::SigVerificationFailed
    );
    require!(ix.accounts.is_empty(), ClaimError::SigVerificationFailed);

    let data = &ix.data;
    let header_end = ED25519_OFFSETS_START + Ed25519SignatureOffsets::LEN;
    require!(data.len() >= header_end, ClaimError::SigVerificationFailed);
    // exactly one signature, followed by a padding byte
    require!(data[0] == 1, ClaimError::SigVerificationFailed);

    let offsets: Ed25519SignatureOffsets =
        bytemuck::try_pod_read_unaligned(&data[ED25519_OFFSETS_START..header_end])
            .map_err(|_| ClaimError::SigVerificationFailed)?;
    require!(offsets.is_self_contained(), ClaimError::SigVerificationFailed);

    slice_at(data, offsets.signature_offset, ED25519_SIGNATURE_LEN)?;
    let signer_bytes = slice_at(data, offsets.public_key_offset, ED25519_PUBKEY_LEN)?;
    let message_bytes = slice_at(
        data,
        offsets.message_data_offset,
        offsets.message_data_size as usize,
    )?;

    let signer = Pubkey::try_from(signer_bytes).map_err(|_| ClaimError::SigVerificationFailed)?;
    let message = ClaimMessage::try_from_bytes(message_bytes)?;

    Ok(SignedClaim { signer, message })
}

/// Binds a verified message to this claim: right signer, right claimant, not expired.
pub fn check_claim_binding(
    signed: &SignedClaim,
    backend_authority: &Pubkey,
    claimant: &Pubkey,
    now: i64,
) -> Result<()> {
    if signed.signer != *backend_authority {
        msg!("Claim message signed by {}, expected {}", signed.signer, backend_authority);
        return err!(ClaimError::SigVerificationFailed);
    }
    if signed.message.claimant != *claimant {
        msg!("Claim message addressed to {}, submitted by {}", signed.message.claimant, claimant);
        return err!(ClaimError::SigVerificationFailed);
    }
    if signed.message.is_expired(now) {
        msg!("Claim message expired at {}, now {}", signed.message.deadline, now);
        return err!(ClaimError::SigVerificationFailed);
    }
    Ok(())
}

/// Loads the instruction placed right before the current one from the
/// instructions sysvar.
pub fn load_preceding_instruction(ix_sysvar: &AccountInfo) -> Result<Instruction> {
    let current_index = load_current_index_checked(ix_sysvar)?;
    require!(current_index > 0, ClaimError::SigVerificationFailed);

    load_instruction_at_checked((current_index - 1) as usize, ix_sysvar)
        .map_err(|_| error!(ClaimError::SigVerificationFailed))
}

/// Returns the claim message carried by `ed25519_ix` once bound to `claimant`.
pub fn verify_claim_signature(
    ed25519_ix: &Instruction,
    backend_authority: &Pubkey,
    claimant: &Pubkey,
    now: i64,
) -> Result<ClaimMessage> {
    let signed = parse_ed25519_instruction(ed25519_ix)?;
    check_claim_binding(&signed, backend_authority, claimant, now)?;

    Ok(signed.message)
}
