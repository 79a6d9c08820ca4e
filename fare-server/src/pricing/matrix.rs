//! The fare matrix: one priced entry per contiguous window of a journey.

use std::collections::BTreeMap;

use crate::domain::{Cost, StationCode};

/// The fare for one window of a journey.
#[derive(Debug, Clone, PartialEq)]
pub struct FareEntry {
    pub origin: StationCode,
    pub destination: StationCode,
    /// `Cost::UNAVAILABLE` when no qualifying fare exists.
    pub cost: Cost,
}

impl FareEntry {
    pub fn new(origin: StationCode, destination: StationCode, cost: Cost) -> Self {
        Self {
            origin,
            destination,
            cost,
        }
    }
}

/// Fares for every priced window of a journey, keyed by `(start, end)`
/// leg indices (inclusive).
///
/// The urban matrix also carries a separate whole-journey entry, taken
/// as the authority's best answer without the windowed filters. Rail
/// matrices leave it unset, and omit urban-only windows entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FareMatrix {
    whole_journey: Option<FareEntry>,
    entries: BTreeMap<(usize, usize), FareEntry>,
}

impl FareMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the fare for the window `start..=end`, replacing any previous one.
    pub fn insert(&mut self, start: usize, end: usize, entry: FareEntry) {
        self.entries.insert((start, end), entry);
    }

    pub fn set_whole_journey(&mut self, entry: FareEntry) {
        self.whole_journey = Some(entry);
    }

    pub fn whole_journey(&self) -> Option<&FareEntry> {
        self.whole_journey.as_ref()
    }

    pub fn get(&self, start: usize, end: usize) -> Option<&FareEntry> {
        self.entries.get(&(start, end))
    }

    /// The cost for a window, or `None` if the window was not priced.
    pub fn cost(&self, start: usize, end: usize) -> Option<Cost> {
        self.get(start, end).map(|entry| entry.cost)
    }

    /// Number of entries, counting the whole-journey entry if present.
    pub fn len(&self) -> usize {
        self.entries.len() + usize::from(self.whole_journey.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Windowed entries ordered by start, then end.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &FareEntry)> {
        self.entries.iter().map(|(&key, entry)| (key, entry))
    }
}
