use crate::policy::motion::ViewportSnapshot;

/// Shared, reference-counted resize tracking.
///
/// Regions that resolve policy from viewport width do not get their own
/// resize listener; they subscribe to one hub so the embedder attaches a
/// single global listener while at least one subscriber exists. This keeps
/// listener count O(1) instead of O(regions).
#[derive(Clone, Debug, Default)]
pub struct ViewportHub {
    snapshot: ViewportSnapshot,
    subscribers: usize,
}

impl ViewportHub {
    /// Build a hub with an initial snapshot.
    pub fn new(snapshot: ViewportSnapshot) -> Self {
        Self {
            snapshot,
            subscribers: 0,
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> ViewportSnapshot {
        self.snapshot
    }

    /// Register one subscriber.
    ///
    /// Returns `true` when this is the first subscriber, i.e. the embedder
    /// should attach the global resize listener now.
    pub fn subscribe(&mut self) -> bool {
        self.subscribers += 1;
        self.subscribers == 1
    }

    /// Release one subscriber.
    ///
    /// Returns `true` when the count reached zero, i.e. the embedder should
    /// detach the global resize listener.
    pub fn unsubscribe(&mut self) -> bool {
        self.subscribers = self.subscribers.saturating_sub(1);
        self.subscribers == 0
    }

    /// Whether the embedder should currently hold a resize listener.
    pub fn listener_wanted(&self) -> bool {
        self.subscribers > 0
    }

    /// Number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
    }

    /// Refresh the viewport width from a resize event.
    ///
    /// Returns `true` when the snapshot actually changed, so callers can skip
    /// re-resolving policy for no-op resizes.
    pub fn set_width(&mut self, width_px: f64) -> bool {
        if self.snapshot.width_px == width_px {
            return false;
        }
        self.snapshot.width_px = width_px;
        true
    }

    /// Refresh the reduced-motion preference from a media-query event.
    pub fn set_prefers_reduced_motion(&mut self, prefers: bool) -> bool {
        if self.snapshot.prefers_reduced_motion == prefers {
            return false;
        }
        self.snapshot.prefers_reduced_motion = prefers;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/policy/viewport.rs"]
mod tests;
