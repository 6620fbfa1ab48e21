use std::fmt;

/// Generation counter for a timed session.
///
/// Every start, stop, restart or reshuffle moves a session to a new epoch.
/// Timer callbacks carry the epoch they were scheduled under and are ignored
/// once it no longer matches.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Epoch(u64);

impl Epoch {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Debug for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Epoch({})", self.0)
    }
}
