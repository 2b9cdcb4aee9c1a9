// Rejection banner bookkeeping: which message to show next and whether a
// pending hide is still allowed to run.

/// Identifies one show of the banner. A hide scheduled for an older token is
/// stale and must not hide a newer message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HideToken(u64);

#[derive(Clone, Debug, Default)]
pub struct MessageCycle {
    clicks: u64,
    generation: u64,
}

impl MessageCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rejections recorded so far.
    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    /// Record a rejection and return the index of the message to show along
    /// with the token its hide timer must present. `len` is the message count.
    pub fn advance(&mut self, len: usize) -> (usize, HideToken) {
        self.clicks += 1;
        self.generation += 1;
        let index = if len == 0 {
            0
        } else {
            ((self.clicks - 1) % len as u64) as usize
        };
        (index, HideToken(self.generation))
    }

    /// True when no show has happened since `token` was issued.
    pub fn is_current(&self, token: HideToken) -> bool {
        token.0 == self.generation
    }
}

#[inline]
pub fn message_for<'a>(messages: &[&'a str], index: usize) -> Option<&'a str> {
    messages.get(index).copied()
}
