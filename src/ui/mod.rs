//! Orlanda UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The toolbar is rendered as HTML/CSS/JS injected into the WebView;
//! communication between the Rust shell and the JS frontend uses wry IPC.

pub mod webview_app;
