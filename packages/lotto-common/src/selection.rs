//! Deterministic stake-weighted winner selection.
//!
//! The draw maps a 256-bit seed onto the cumulative-weight interval
//! `[0, total_weight)` by reduction modulo the total weight, then picks the
//! holder of the range containing the ticket. Given the same seed and the
//! same snapshot the outcome is fully reproducible.

use cosmwasm_std::Uint256;

use crate::types::StakeWeight;

/// Reduce a 256-bit seed to a ticket in `[0, total_weight)`.
///
/// Returns `None` when the total weight is zero (an empty draw).
pub fn winning_ticket(seed: &[u8; 32], total_weight: u128) -> Option<u128> {
    if total_weight == 0 {
        return None;
    }
    let ticket = Uint256::from_be_bytes(*seed) % Uint256::from(total_weight);
    // The ticket is strictly below total_weight, so only the low 128 bits
    // can be set.
    let be = ticket.to_be_bytes();
    let mut low = [0u8; 16];
    low.copy_from_slice(&be[16..]);
    Some(u128::from_be_bytes(low))
}

/// Find the entry whose cumulative range `[start, start + weight)` contains
/// `ticket`, walking entries in listing order.
///
/// Returns `None` when the ticket falls past the last range (the caller
/// derived it from a different total) or when a cumulative sum would
/// overflow.
pub fn select_winner(entries: &[StakeWeight], ticket: u128) -> Option<&StakeWeight> {
    let mut cursor: u128 = 0;
    for entry in entries {
        let end = cursor.checked_add(entry.weight.u128())?;
        if ticket >= cursor && ticket < end {
            return Some(entry);
        }
        cursor = end;
    }
    None
}
