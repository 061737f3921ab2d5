//! RPC method handler for the LinkPad JSON protocol.
//!
//! Shared by the `linkpad-rpc` binary and the WebView IPC bridge. Each
//! method maps to one [`PageEvent`] (or a read); mutating methods answer
//! with the page snapshot, and `form.submit` also reports where to navigate.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::types::errors::RpcError;
use crate::types::page::PageEvent;

fn str_param<'a>(params: &'a Value, name: &'static str) -> Result<&'a str, RpcError> {
    match params.get(name) {
        None => Err(RpcError::MissingParam(name)),
        Some(v) => v.as_str().ok_or(RpcError::InvalidParam(name)),
    }
}

fn bool_param(params: &Value, name: &'static str) -> Result<bool, RpcError> {
    match params.get(name) {
        None => Err(RpcError::MissingParam(name)),
        Some(v) => v.as_bool().ok_or(RpcError::InvalidParam(name)),
    }
}

fn id_param(params: &Value, name: &'static str) -> Result<i64, RpcError> {
    match params.get(name) {
        None => Err(RpcError::MissingParam(name)),
        Some(v) => v.as_i64().ok_or(RpcError::InvalidParam(name)),
    }
}

/// Translates a method call into the page event it stands for.
///
/// Returns `Ok(None)` for read-only methods.
pub fn parse_event(method: &str, params: &Value) -> Result<Option<PageEvent>, RpcError> {
    let event = match method {
        "form.set_url" => PageEvent::UrlChanged(str_param(params, "value")?.to_string()),
        "form.set_label" => PageEvent::LabelChanged(str_param(params, "value")?.to_string()),
        "form.set_save_bookmark" => PageEvent::SaveBookmarkToggled(bool_param(params, "checked")?),
        "form.submit" => PageEvent::Submit,
        "bookmark.request_delete" => PageEvent::RequestDelete(id_param(params, "id")?),
        "bookmark.confirm_delete" => PageEvent::ConfirmDelete,
        "bookmark.cancel_delete" => PageEvent::CancelDelete,
        "ping" | "page.state" | "bookmark.list" => return Ok(None),
        other => return Err(RpcError::UnknownMethod(other.to_string())),
    };
    Ok(Some(event))
}

fn dispatch(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, RpcError> {
    let event = parse_event(method, params)?;
    let mut a = app.lock().map_err(|_| RpcError::StatePoisoned)?;

    match (method, event) {
        ("ping", _) => Ok(json!({"pong": true})),
        ("bookmark.list", _) => Ok(json!(a.state().bookmarks())),
        (_, None) => Ok(json!(a.snapshot())),
        (_, Some(PageEvent::Submit)) => {
            let navigate = a.dispatch(PageEvent::Submit);
            Ok(json!({"navigate": navigate, "state": a.snapshot()}))
        }
        (_, Some(event)) => {
            a.dispatch(event);
            Ok(json!({"state": a.snapshot()}))
        }
    }
}

/// Dispatch a JSON-RPC method call to the page.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    dispatch(app, method, params).map_err(|e| e.to_string())
}
