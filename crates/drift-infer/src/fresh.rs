//! Fresh unknown-id supply.

use drift_types::Ty;

/// A monotonically increasing counter producing new unknown ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct FreshSupply {
    next: u32,
}

impl FreshSupply {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Increment the counter and return the new id as `Unknown(id)`.
    pub fn fresh(&mut self) -> Ty {
        self.next += 1;
        Ty::Unknown(self.next)
    }

    /// Reset the counter to 0. Used by the test harness between cases so
    /// printed unknowns are deterministic.
    pub fn reset(&mut self) {
        self.next = 0;
    }
}
