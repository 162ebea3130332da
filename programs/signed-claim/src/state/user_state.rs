use anchor_lang::prelude::*;

use crate::utils::rollover;

#[account]
#[derive(Default)]
pub struct UserState {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Set on the first claim
    pub is_initialized: bool,

    /// Lamports released to this user so far
    pub claimed_total: u64,

    /// Day index of the last claim
    pub today: i64,

    /// Claims made during `today`
    pub today_claim_count: u8,
}

impl UserState {
    pub const LEN: usize = 8 + // discriminator
        1 + // bump
        1 + // is_initialized
        8 + // claimed_total
        8 + // today
        1; // today_claim_count

    /// `(today, today_claim_count)` as seen from `today_idx`.
    ///
    /// A record that was just allocated starts on `today_idx` with no claims.
    pub fn current_day_count(&self, today_idx: i64) -> (i64, u8) {
        if !self.is_initialized {
            return (today_idx, 0);
        }
        rollover(today_idx, self.today, self.today_claim_count)
    }

    pub fn claimed_total(&self) -> u64 {
        if self.is_initialized {
            self.claimed_total
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_matches_serialized_size() {
        let serialized = UserState::default().try_to_vec().unwrap();
        assert_eq!(serialized.len() + 8, UserState::LEN);
    }

    #[test]
    fn test_uninitialized_record_starts_today() {
        let user = UserState::default();
        assert_eq!(user.current_day_count(19_675), (19_675, 0));
        assert_eq!(user.claimed_total(), 0);
    }

    #[test]
    fn test_count_rolls_over_on_new_day() {
        let user = UserState {
            is_initialized: true,
            claimed_total: 30,
            today: 19_675,
            today_claim_count: 3,
            ..Default::default()
        };
        assert_eq!(user.current_day_count(19_675), (19_675, 3));
        assert_eq!(user.current_day_count(19_680), (19_680, 0));
        assert_eq!(user.claimed_total(), 30);
    }
}
