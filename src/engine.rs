//! Engine collaborator boundary.
//!
//! The embedded web engine (the platform webview) owns all networking,
//! rendering and script execution. The shell talks to it through `PageEngine`
//! and receives its asynchronous callbacks as `EngineEvent` values, delivered
//! exactly once on the UI event loop. Nothing behind this boundary is
//! modeled here.

/// Commands the shell issues to an engine view.
///
/// `request_html` is fire-and-request-callback: the engine delivers the
/// rendered HTML later as `EngineEvent::HtmlReady`, or never (e.g. the view
/// was torn down first). No cancellation is modeled.
pub trait PageEngine {
    fn load(&self, url: &str);
    fn back(&self);
    fn forward(&self);
    fn reload(&self);
    fn current_url(&self) -> String;
    fn current_title(&self) -> String;
    fn request_html(&self, purpose: HtmlPurpose);
}

/// Why rendered HTML was requested; echoed back in `EngineEvent::HtmlReady`
/// so the shell can route the reply without extra state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlPurpose {
    ViewSource,
    SavePage,
}

/// Asynchronous callbacks from the engine, dispatched onto the UI loop.
///
/// Download requests are the one exception: the engine demands an immediate
/// accept/cancel answer, so they are negotiated inline at the callback site
/// rather than re-entering the loop.
#[derive(Debug)]
pub enum EngineEvent {
    /// A navigation finished; carries the resulting URL.
    NavigationCompleted(String),
    /// Reply to a `request_html` call.
    HtmlReady(HtmlPurpose, String),
}
