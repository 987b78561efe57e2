// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reserved id range for daemon-side timer callbacks.
//!
//! Ordinary calls draw ids from the sequential counter starting at 1;
//! timer registrations embed an id from this high range so recurring
//! callback frames can be told apart from direct replies by range
//! membership alone.

use rand::Rng;

/// Lowest id handed out for timer callbacks.
pub const TIMER_ID_MIN: u64 = 100_000;
/// Highest id handed out for timer callbacks.
pub const TIMER_ID_MAX: u64 = 999_999;

/// Draw a callback id uniformly from the reserved range.
pub(crate) fn random_timer_id() -> u64 {
    rand::thread_rng().gen_range(TIMER_ID_MIN..=TIMER_ID_MAX)
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
