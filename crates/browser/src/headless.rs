//! Headless web engine.
//!
//! Stands in for an embedded rendering engine when no display is
//! available. Pages keep a real back/forward history and report loads
//! asynchronously: every navigation spawns a task on the tokio runtime
//! that waits for the configured latency, then reports the title and the
//! outcome through the page's notification handle.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use ui::{SurfaceEvents, SurfaceFactory, WebSurface};
use url::Url;

/// Maximum back/forward entries kept per page.
const MAX_HISTORY: usize = 50;

/// Factory for headless pages.
#[derive(Clone, Debug)]
pub struct HeadlessEngine {
    runtime: Handle,
    load_delay: Duration,
}

impl HeadlessEngine {
    /// Create an engine that runs page loads on `runtime`.
    pub fn new(runtime: Handle, load_delay: Duration) -> Self {
        Self { runtime, load_delay }
    }
}

impl SurfaceFactory for HeadlessEngine {
    fn create_surface(&mut self, events: SurfaceEvents) -> Box<dyn WebSurface> {
        tracing::debug!(tab = %events.tab(), "creating headless page");
        Box::new(HeadlessPage::new(events, self.runtime.clone(), self.load_delay))
    }
}

/// A page with no rendering.
pub struct HeadlessPage {
    /// Notification handle.
    events: SurfaceEvents,
    /// Navigation history.
    history: NavigationHistory,
    /// Runtime that runs loads.
    runtime: Handle,
    /// Simulated network latency.
    load_delay: Duration,
    /// Load in flight, if any.
    load: Option<JoinHandle<()>>,
}

impl HeadlessPage {
    pub fn new(events: SurfaceEvents, runtime: Handle, load_delay: Duration) -> Self {
        Self {
            events,
            history: NavigationHistory::new(),
            runtime,
            load_delay,
            load: None,
        }
    }

    /// Check if a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.load.as_ref().is_some_and(|load| !load.is_finished())
    }

    /// Load the current history entry, replacing any load in flight.
    fn start_load(&mut self) {
        let Some(url) = self.history.current().map(str::to_string) else {
            return;
        };

        self.cancel_load();
        self.events.load_started();

        let events = self.events.clone();
        let delay = self.load_delay;
        self.load = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            match check_url(&url) {
                Ok(parsed) => {
                    events.title_changed(page_title(&parsed));
                    events.load_finished(true);
                }
                Err(reason) => {
                    tracing::debug!(tab = %events.tab(), %url, %reason, "load failed");
                    events.title_changed(format!("Error: {}", reason));
                    events.load_finished(false);
                }
            }
        }));
    }

    fn cancel_load(&mut self) {
        if let Some(load) = self.load.take() {
            load.abort();
        }
    }
}

impl WebSurface for HeadlessPage {
    fn navigate(&mut self, url: &str) {
        self.history.push(url.to_string());
        self.start_load();
    }

    fn back(&mut self) {
        if self.history.back().is_some() {
            self.start_load();
        }
    }

    fn forward(&mut self) {
        if self.history.forward().is_some() {
            self.start_load();
        }
    }

    fn reload(&mut self) {
        self.start_load();
    }

    fn current_url(&self) -> String {
        self.history.current().unwrap_or("about:blank").to_string()
    }

    fn close(&mut self) {
        self.cancel_load();
    }
}

impl Drop for HeadlessPage {
    fn drop(&mut self) {
        self.cancel_load();
    }
}

/// Accept what a headless engine can "load".
fn check_url(url: &str) -> Result<Url, String> {
    let parsed = Url::parse(url).map_err(|err| err.to_string())?;
    match parsed.scheme() {
        "http" | "https" | "about" => Ok(parsed),
        other => Err(format!("unsupported scheme {}", other)),
    }
}

/// Title reported for a loaded page.
fn page_title(url: &Url) -> String {
    match url.host_str() {
        Some(host) => host.trim_start_matches("www.").to_string(),
        None => url.as_str().to_string(),
    }
}

/// Navigation history.
#[derive(Debug, Default)]
pub struct NavigationHistory {
    /// History entries.
    entries: Vec<String>,
    /// Current position (one past the current entry).
    position: usize,
}

impl NavigationHistory {
    /// Create a new history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a URL to history.
    pub fn push(&mut self, url: String) {
        // Remove forward entries if we're not at the end
        self.entries.truncate(self.position);

        self.entries.push(url);
        if self.entries.len() > MAX_HISTORY {
            self.entries.remove(0);
        }
        self.position = self.entries.len();
    }

    /// Go back.
    pub fn back(&mut self) -> Option<&str> {
        if self.position > 1 {
            self.position -= 1;
            self.current()
        } else {
            None
        }
    }

    /// Go forward.
    pub fn forward(&mut self) -> Option<&str> {
        if self.position < self.entries.len() {
            self.position += 1;
            self.current()
        } else {
            None
        }
    }

    /// Get current entry.
    pub fn current(&self) -> Option<&str> {
        self.position
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
            .map(String::as_str)
    }

    /// Get all entries.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui::{SurfaceEventKind, SurfaceEventQueue, TabId};

    const DELAY: Duration = Duration::from_millis(5);

    async fn settle() {
        tokio::time::sleep(DELAY * 10).await;
    }

    fn kinds(queue: &mut SurfaceEventQueue) -> Vec<SurfaceEventKind> {
        queue.drain().into_iter().map(|e| e.kind).collect()
    }

    #[tokio::test]
    async fn test_load_reports_title_and_success() {
        let mut queue = SurfaceEventQueue::new();
        let mut engine = HeadlessEngine::new(Handle::current(), DELAY);
        let mut page = engine.create_surface(queue.handle(TabId(0)));

        page.navigate("https://www.example.com/path");
        assert_eq!(page.current_url(), "https://www.example.com/path");
        settle().await;

        assert_eq!(
            kinds(&mut queue),
            vec![
                SurfaceEventKind::LoadStarted,
                SurfaceEventKind::TitleChanged("example.com".to_string()),
                SurfaceEventKind::LoadFinished { success: true },
            ]
        );
    }

    #[tokio::test]
    async fn test_bad_url_fails_load() {
        let mut queue = SurfaceEventQueue::new();
        let mut page = HeadlessPage::new(queue.handle(TabId(3)), Handle::current(), DELAY);

        page.navigate("ftp://files.example");
        settle().await;

        let events = kinds(&mut queue);
        assert_eq!(events.last(), Some(&SurfaceEventKind::LoadFinished { success: false }));
        assert!(matches!(&events[1], SurfaceEventKind::TitleChanged(t) if t.starts_with("Error:")));
    }

    #[tokio::test]
    async fn test_new_navigation_supersedes_pending_load() {
        let mut queue = SurfaceEventQueue::new();
        let mut page = HeadlessPage::new(queue.handle(TabId(0)), Handle::current(), DELAY);

        page.navigate("https://first.example/");
        page.navigate("https://second.example/");
        assert!(page.is_loading());
        settle().await;

        let finished: Vec<_> = kinds(&mut queue)
            .into_iter()
            .filter(|k| !matches!(k, SurfaceEventKind::LoadStarted))
            .collect();
        assert_eq!(
            finished,
            vec![
                SurfaceEventKind::TitleChanged("second.example".to_string()),
                SurfaceEventKind::LoadFinished { success: true },
            ]
        );
        assert!(!page.is_loading());
    }

    #[tokio::test]
    async fn test_drop_cancels_load() {
        let mut queue = SurfaceEventQueue::new();
        let mut page = HeadlessPage::new(queue.handle(TabId(0)), Handle::current(), DELAY);

        page.navigate("https://example.com/");
        drop(page);
        settle().await;

        assert_eq!(kinds(&mut queue), vec![SurfaceEventKind::LoadStarted]);
    }

    #[tokio::test]
    async fn test_back_forward_reload() {
        let mut queue = SurfaceEventQueue::new();
        let mut page = HeadlessPage::new(queue.handle(TabId(0)), Handle::current(), DELAY);

        page.navigate("https://a.example/");
        page.navigate("https://b.example/");
        page.back();
        assert_eq!(page.current_url(), "https://a.example/");
        page.forward();
        assert_eq!(page.current_url(), "https://b.example/");
        page.forward();
        assert_eq!(page.current_url(), "https://b.example/");

        queue.drain();
        page.reload();
        settle().await;
        assert_eq!(
            kinds(&mut queue).last(),
            Some(&SurfaceEventKind::LoadFinished { success: true })
        );
    }

    #[test]
    fn test_navigation_history() {
        let mut history = NavigationHistory::new();
        assert_eq!(history.current(), None);

        history.push("https://example.com".to_string());
        history.push("https://example.com/page1".to_string());
        history.push("https://example.com/page2".to_string());

        assert_eq!(history.forward(), None);
        assert_eq!(history.back(), Some("https://example.com/page1"));

        history.push("https://example.com/other".to_string());
        assert_eq!(history.forward(), None);
        assert_eq!(history.entries().len(), 3);

        assert_eq!(history.back(), Some("https://example.com/page1"));
        assert_eq!(history.back(), Some("https://example.com"));
        assert_eq!(history.back(), None);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = NavigationHistory::new();
        for i in 0..MAX_HISTORY + 10 {
            history.push(format!("https://example.com/{}", i));
        }

        assert_eq!(history.entries().len(), MAX_HISTORY);
        assert_eq!(
            history.current(),
            Some(format!("https://example.com/{}", MAX_HISTORY + 9).as_str())
        );
    }
}
