//! WebView shell for LinkPad using `wry` + `tao`.
//!
//! Architecture:
//! - The page is served from the `linkpad://` custom protocol, rendered by
//!   Rust from the current page snapshot.
//! - JS posts `{method, params}` messages through `window.ipc.postMessage()`;
//!   they go through the same `rpc_handler::handle_method` as the RPC binary.
//! - A submit that yields an address loads it in the window; everything else
//!   patches the page in place.

use std::sync::{Arc, Mutex};

use serde_json::Value;
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use tracing::{debug, error, info, warn};
use wry::WebViewBuilder;

use crate::app::App;
use crate::rpc_handler::handle_method;
use crate::services::page_renderer::{render_page, render_patch_script};

const PAGE_URL: &str = "linkpad://localhost/";

#[derive(Debug)]
enum UserEvent {
    LoadUrl(String),
    EvalScript(String),
}

fn handle_ipc(app: &Mutex<App>, message: &str) -> Option<UserEvent> {
    let msg: Value = match serde_json::from_str(message) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "malformed IPC message");
            return None;
        }
    };
    let method = msg.get("method")?.as_str()?;
    let params = msg.get("params").cloned().unwrap_or(Value::Null);

    let result = match handle_method(app, method, &params) {
        Ok(v) => v,
        Err(e) => {
            warn!(method, error = %e, "IPC call failed");
            return None;
        }
    };

    if let Some(url) = result.get("navigate").and_then(Value::as_str) {
        return Some(UserEvent::LoadUrl(url.to_string()));
    }

    let a = app.lock().ok()?;
    Some(UserEvent::EvalScript(render_patch_script(&a.snapshot())))
}

fn page_html(app: &Mutex<App>) -> String {
    match app.lock() {
        Ok(a) => render_page(&a.snapshot(), &a.settings().general.window_title),
        Err(_) => "<!DOCTYPE html><html><body>LinkPad state unavailable</body></html>".to_string(),
    }
}

// ─── Main entry point ───

pub fn run() {
    let app = Arc::new(Mutex::new(App::new(None)));
    let title = app
        .lock()
        .map(|a| a.settings().general.window_title.clone())
        .unwrap_or_else(|_| "LinkPad".to_string());

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = match WindowBuilder::new()
        .with_title(title)
        .with_inner_size(tao::dpi::LogicalSize::new(1024.0, 720.0))
        .build(&event_loop)
    {
        Ok(w) => w,
        Err(e) => {
            error!(error = %e, "failed to create window");
            return;
        }
    };

    let protocol_app = app.clone();
    let ipc_app = app.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("linkpad".into(), move |_wv_id, _request| {
            let html = page_html(&protocol_app);
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(html.into_bytes().into())
                .unwrap_or_default()
        })
        .with_url(PAGE_URL)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            let preview: String = body.chars().take(200).collect();
            debug!(body = %preview, "IPC");
            if let Some(event) = handle_ipc(&ipc_app, body) {
                let _ = proxy.send_event(event);
            }
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let Some(vbox) = window.default_vbox() else {
            error!("failed to get GTK vbox");
            return;
        };
        builder.build_gtk(vbox)
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window);

    let webview = match webview {
        Ok(wv) => wv,
        Err(e) => {
            error!(error = %e, "failed to create WebView");
            return;
        }
    };

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("window closed");
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::LoadUrl(url)) => {
                if let Err(e) = webview.load_url(&url) {
                    warn!(%url, error = %e, "navigation failed");
                }
            }

            Event::UserEvent(UserEvent::EvalScript(js)) => {
                if let Err(e) = webview.evaluate_script(&js) {
                    warn!(error = %e, "page patch failed");
                }
            }

            _ => {}
        }
    });
}
