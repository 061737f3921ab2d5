//! LinkPad UI layer.
//!
//! Uses `wry` to render the page in the platform WebView (WebView2 on
//! Windows, WebKitGTK on Linux, WKWebView on macOS). Rust renders the HTML;
//! page events come back over wry IPC.

pub mod webview_app;
