use crate::channel::ChannelState;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::debug;

/// Owns one `Connecting` period of a channel.
///
/// `begin` claims `Disconnected → Connecting` and stamps the attempt number.
/// `finish` applies the outcome only if this attempt is still the current one,
/// so a disconnect (or a newer connect) racing a slow transport wins. Dropping an
/// unfinished guard reverts to `Disconnected`, which covers callers that drop
/// the connect future.
pub(crate) struct ConnectGuard<'a> {
    state: &'a watch::Sender<ChannelState>,
    attempts: &'a AtomicU64,
    attempt: u64,
    finished: bool,
}

impl<'a> ConnectGuard<'a> {
    /// Returns the current state on rejection.
    pub(crate) fn begin(
        state: &'a watch::Sender<ChannelState>,
        attempts: &'a AtomicU64,
    ) -> Result<Self, ChannelState> {
        let mut attempt = 0;
        let mut rejected = ChannelState::Disconnected;

        // `attempts` is only written inside the watch write lock.
        let began = state.send_if_modified(|current| {
            if *current != ChannelState::Disconnected {
                rejected = *current;
                return false;
            }
            attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
            *current = ChannelState::Connecting;
            true
        });

        if !began {
            return Err(rejected);
        }

        Ok(Self {
            state,
            attempts,
            attempt,
            finished: false,
        })
    }

    /// Move `Connecting → next`. Returns `false` when the attempt was superseded.
    pub(crate) fn finish(mut self, next: ChannelState) -> bool {
        self.finished = true;
        self.transition(next)
    }

    fn transition(&self, next: ChannelState) -> bool {
        self.state.send_if_modified(|current| {
            let current_attempt = self.attempts.load(Ordering::SeqCst) == self.attempt;
            if *current != ChannelState::Connecting || !current_attempt {
                return false;
            }
            *current = next;
            true
        })
    }
}

impl Drop for ConnectGuard<'_> {
    fn drop(&mut self) {
        if !self.finished && self.transition(ChannelState::Disconnected) {
            debug!("Connect attempt {} abandoned", self.attempt);
        }
    }
}
