//! Sequence numbers that keep list fetches in issue order.
//!
//! Fetches may complete out of order. Each one is tagged with a number when
//! issued and a result is applied only if it is newer than the last applied
//! result.

/// Issues and checks list-fetch sequence numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSequence {
    issued: u64,
    applied: Option<u64>,
}

impl FetchSequence {
    /// Returns the number for a newly issued fetch.
    pub const fn issue(&mut self) -> u64 {
        self.issued = self.issued.saturating_add(1);
        self.issued
    }

    /// Returns the most recently issued number, if any.
    #[must_use]
    pub const fn latest_issued(&self) -> Option<u64> {
        if self.issued == 0 {
            None
        } else {
            Some(self.issued)
        }
    }

    /// Records `seq` as applied when it is newer than the last applied
    /// result.
    ///
    /// Returns `false` for stale results, which must be discarded.
    pub const fn accept(&mut self, seq: u64) -> bool {
        match self.applied {
            Some(applied) if seq <= applied => false,
            _ => {
                self.applied = Some(seq);
                true
            }
        }
    }
}
