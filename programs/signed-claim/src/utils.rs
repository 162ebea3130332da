use crate::constants::SECONDS_PER_DAY;

/// Day index used for all daily bookkeeping: floor(unix_seconds / 86400).
pub fn day_index(unix_timestamp: i64) -> i64 {
    unix_timestamp.div_euclid(SECONDS_PER_DAY)
}

/// Resets a per-day counter once the stored day is behind `today`.
///
/// Returns `(stored_day, stored_counter)` untouched while still on the same
/// day, otherwise `(today, 0)`. Must be applied before any limit check that
/// reads the counter.
pub fn rollover<T: Default>(today: i64, stored_day: i64, stored_counter: T) -> (i64, T) {
    if today > stored_day {
        (today, T::default())
    } else {
        (stored_day, stored_counter)
    }
}

/// Maps the "0 means no cap" convention of admin updates onto an optional limit.
pub fn limit_from_update<T: Default + PartialEq>(value: T) -> Option<T> {
    if value == T::default() {
        None
    } else {
        Some(value)
    }
}

/// Lamports that can leave the vault without dropping it below `reserve`.
pub fn withdrawable_excess(vault_lamports: u64, reserve: u64) -> u64 {
    vault_lamports.saturating_sub(reserve)
}
