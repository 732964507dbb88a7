use chrono::{DateTime, Utc};

use crate::{
    reader::RawSample,
    shared::{DebounceInterval, Level},
};

use super::state::StableState;

#[cfg(test)]
mod tests;

/// A raw value differing from the stable state, held since `since`.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    value: Level,
    since: DateTime<Utc>,
}

/// Debounce state machine for one input line.
///
/// Seeded with the first raw sample, which becomes the initial stable state without emitting a
/// transition. Afterwards [`update`] commits a new stable state only once the raw signal has
/// held a differing value continuously for at least the debounce interval. All timing derives
/// from the samples' own timestamps, never from an ambient clock.
///
/// [`update`]: DebounceFilter::update
#[derive(Debug)]
pub(super) struct DebounceFilter {
    debounce: DebounceInterval,
    active_level: Level,
    stable: StableState,
    candidate: Option<Candidate>,
}

impl DebounceFilter {
    pub fn new(seed: RawSample, debounce: DebounceInterval, active_level: Level) -> Self {
        Self {
            debounce,
            active_level,
            stable: StableState::new(seed.level(), active_level, seed.sampled_at()),
            candidate: None,
        }
    }

    /// Returns the current stable state.
    pub fn stable(&self) -> StableState {
        self.stable
    }

    /// Feeds one raw sample through the filter.
    ///
    /// Returns the new stable state when this sample commits a transition, `None` otherwise.
    /// With a zero debounce interval the candidate is created and committed within the same
    /// call, so the first differing sample transitions immediately.
    pub fn update(&mut self, sample: RawSample) -> Option<StableState> {
        let raw = sample.level();

        if raw == self.stable.level() {
            // Transient excursion ended before the debounce interval elapsed
            self.candidate = None;
            return None;
        }

        let since = match self.candidate {
            Some(candidate) if candidate.value == raw => candidate.since,
            // New candidate; the hold window starts at this sample
            _ => {
                self.candidate = Some(Candidate {
                    value: raw,
                    since: sample.sampled_at(),
                });
                sample.sampled_at()
            }
        };

        if sample.sampled_at() - since >= self.debounce.as_duration() {
            self.stable = StableState::new(raw, self.active_level, sample.sampled_at());
            self.candidate = None;
            return Some(self.stable);
        }

        None
    }
}
