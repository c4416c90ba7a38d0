//! Render-ready notification fan-out.

use crossbeam_channel::{Receiver, Sender, TrySendError};

/// Signal that a new frame is ready to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderReady {
    /// Tick that produced the frame.
    pub tick: u64,
}

/// Subscribers waiting for [`RenderReady`].
///
/// Each subscriber gets a one-slot channel. A signal that finds the slot
/// full is dropped: the pending one already says "redraw". Subscribers
/// whose receiver is gone are forgotten on the next notify.
#[derive(Debug, Default)]
pub(crate) struct Notifier {
    subscribers: Vec<Sender<RenderReady>>,
}

impl Notifier {
    pub fn subscribe(&mut self) -> Receiver<RenderReady> {
        let (tx, rx) = crossbeam_channel::bounded(1);
        self.subscribers.push(tx);
        rx
    }

    pub fn add(&mut self, tx: Sender<RenderReady>) {
        self.subscribers.push(tx);
    }

    pub fn notify(&mut self, signal: RenderReady) {
        self.subscribers
            .retain(|tx| !matches!(tx.try_send(signal), Err(TrySendError::Disconnected(_))));
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coalesces_unread_signals() {
        let mut n = Notifier::default();
        let rx = n.subscribe();
        n.notify(RenderReady { tick: 1 });
        n.notify(RenderReady { tick: 2 });
        assert_eq!(rx.try_recv(), Ok(RenderReady { tick: 1 }));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn drops_disconnected_subscribers() {
        let mut n = Notifier::default();
        let keep = n.subscribe();
        drop(n.subscribe());
        n.notify(RenderReady { tick: 7 });
        assert_eq!(n.len(), 1);
        assert_eq!(keep.try_recv(), Ok(RenderReady { tick: 7 }));
    }
}
