//! Web surface seam.
//!
//! A web surface is one embedded, independently navigable rendering engine
//! instance. The shell never looks inside it: it issues navigation
//! commands and observes the notifications the surface reports back
//! through its [`SurfaceEvents`] handle.
//!
//! Notifications are queued on an unbounded channel. Engines may emit from
//! any thread or task; the owning window drains the queue on the UI thread
//! with [`SurfaceEventQueue::try_next`], so the tab registry is only ever
//! touched from one thread.

use common::TabId;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// An embedded web-content surface.
///
/// Every command is fire-and-forget. Completion is observed later through
/// the surface's notifications, never through a return value.
pub trait WebSurface {
    /// Start loading `url`.
    fn navigate(&mut self, url: &str);

    /// Go back one history entry, if any.
    fn back(&mut self);

    /// Go forward one history entry, if any.
    fn forward(&mut self);

    /// Reload the current page.
    fn reload(&mut self);

    /// The URL the surface currently shows (or is loading).
    fn current_url(&self) -> String;

    /// Release engine resources. Called right before the surface is dropped.
    fn close(&mut self) {}
}

/// Allocates new surfaces for the tab registry.
pub trait SurfaceFactory {
    /// Create a surface that reports through `events`.
    fn create_surface(&mut self, events: SurfaceEvents) -> Box<dyn WebSurface>;
}

/// Notification emitted by a surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceEvent {
    /// Tab owning the emitting surface.
    pub tab: TabId,
    /// What happened.
    pub kind: SurfaceEventKind,
}

/// Surface notification kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEventKind {
    /// The page title changed.
    TitleChanged(String),
    /// A navigation started.
    LoadStarted,
    /// A navigation finished, successfully or not.
    LoadFinished { success: bool },
}

/// Per-surface notification handle.
///
/// Every notification sent through it is tagged with the tab it was minted
/// for, which is how the controller routes it back.
#[derive(Clone, Debug)]
pub struct SurfaceEvents {
    tab: TabId,
    sender: UnboundedSender<SurfaceEvent>,
}

impl SurfaceEvents {
    pub(crate) fn new(tab: TabId, sender: UnboundedSender<SurfaceEvent>) -> Self {
        Self { tab, sender }
    }

    /// Tab this handle reports for.
    pub fn tab(&self) -> TabId {
        self.tab
    }

    pub fn title_changed(&self, title: impl Into<String>) {
        self.emit(SurfaceEventKind::TitleChanged(title.into()));
    }

    pub fn load_started(&self) {
        self.emit(SurfaceEventKind::LoadStarted);
    }

    pub fn load_finished(&self, success: bool) {
        self.emit(SurfaceEventKind::LoadFinished { success });
    }

    fn emit(&self, kind: SurfaceEventKind) {
        let event = SurfaceEvent { tab: self.tab, kind };
        // The queue is gone once its window shut down.
        if self.sender.send(event).is_err() {
            tracing::trace!(tab = %self.tab, "notification dropped, queue closed");
        }
    }
}

/// Receiving end of all surface notifications for one window.
pub struct SurfaceEventQueue {
    sender: UnboundedSender<SurfaceEvent>,
    receiver: UnboundedReceiver<SurfaceEvent>,
}

impl SurfaceEventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Mint a notification handle for `tab`.
    pub fn handle(&self, tab: TabId) -> SurfaceEvents {
        SurfaceEvents::new(tab, self.sender.clone())
    }

    pub(crate) fn sender(&self) -> UnboundedSender<SurfaceEvent> {
        self.sender.clone()
    }

    /// Take the next pending notification without blocking.
    pub fn try_next(&mut self) -> Option<SurfaceEvent> {
        self.receiver.try_recv().ok()
    }

    /// Take every pending notification.
    pub fn drain(&mut self) -> Vec<SurfaceEvent> {
        std::iter::from_fn(|| self.try_next()).collect()
    }
}

impl Default for SurfaceEventQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_are_tagged() {
        let mut queue = SurfaceEventQueue::new();
        let first = queue.handle(TabId(0));
        let second = queue.handle(TabId(1));

        first.load_started();
        second.title_changed("Example");
        first.load_finished(false);

        let events = queue.drain();
        assert_eq!(
            events,
            vec![
                SurfaceEvent { tab: TabId(0), kind: SurfaceEventKind::LoadStarted },
                SurfaceEvent {
                    tab: TabId(1),
                    kind: SurfaceEventKind::TitleChanged("Example".to_string()),
                },
                SurfaceEvent {
                    tab: TabId(0),
                    kind: SurfaceEventKind::LoadFinished { success: false },
                },
            ]
        );
        assert!(queue.try_next().is_none());
    }

    #[test]
    fn test_emit_after_queue_dropped_is_silent() {
        let queue = SurfaceEventQueue::new();
        let events = queue.handle(TabId(4));
        drop(queue);

        events.load_started();
        assert_eq!(events.tab(), TabId(4));
    }

    #[test]
    fn test_emit_from_other_thread() {
        let mut queue = SurfaceEventQueue::new();
        let events = queue.handle(TabId(2));

        std::thread::spawn(move || events.load_finished(true))
            .join()
            .unwrap();

        assert_eq!(
            queue.try_next().map(|e| e.kind),
            Some(SurfaceEventKind::LoadFinished { success: true })
        );
    }
}
