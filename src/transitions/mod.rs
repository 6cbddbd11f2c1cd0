use std::cmp::Reverse;

use crate::types::Spin;

/// Successor outcomes returned per query.
pub const DEFAULT_TOP_K: usize = 10;

/// Frequency of the outcomes that historically followed `key`.
///
/// Scans every adjacent pair front-to-back and counts the outcome right
/// after each record equal to `key` (outcome and direction both match).
/// Results are ordered by count descending; equal counts keep the order in
/// which they were first encountered during the scan. Callers depend on that
/// ordering, so the stable sort here is load-bearing.
pub fn successors(history: &[Spin], key: Spin, limit: usize) -> Vec<(u8, u32)> {
    let mut counts: Vec<(u8, u32)> = Vec::new();

    for pair in history.windows(2) {
        if pair[0] != key {
            continue;
        }
        let next = pair[1].outcome();
        match counts.iter_mut().find(|(n, _)| *n == next) {
            Some((_, count)) => *count += 1,
            None => counts.push((next, 1)),
        }
    }

    counts.sort_by_key(|&(_, count)| Reverse(count));
    counts.truncate(limit);
    counts
}
