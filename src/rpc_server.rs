//! LinkPad RPC Server: JSON-RPC over stdin/stdout for embedding hosts.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"form.set_url", "params":{"value":"example.com"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use linkpad::app::App;
use linkpad::rpc_handler::handle_method;

use serde_json::{json, Value};
use tracing::{info, warn};

const RATE_WINDOW: Duration = Duration::from_secs(1);

/// Sliding-window rate limiter: at most `max_per_second` requests in any
/// one-second span.
struct RateLimiter {
    recent: VecDeque<Instant>,
    max_per_second: usize,
}

impl RateLimiter {
    fn new(max_per_second: usize) -> Self {
        Self { recent: VecDeque::with_capacity(max_per_second), max_per_second }
    }

    /// Returns true if the request is allowed, false if rate-limited.
    fn check(&mut self) -> bool {
        self.check_at(Instant::now())
    }

    fn check_at(&mut self, now: Instant) -> bool {
        while let Some(&oldest) = self.recent.front() {
            if now.duration_since(oldest) < RATE_WINDOW {
                break;
            }
            self.recent.pop_front();
        }
        if self.recent.len() >= self.max_per_second {
            return false;
        }
        self.recent.push_back(now);
        true
    }
}

fn ready_event() -> Value {
    json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")})
}

/// Answers one request line. Blank lines get no response.
fn handle_line(app: &Mutex<App>, limiter: &mut RateLimiter, line: &str) -> Option<Value> {
    if line.trim().is_empty() {
        return None;
    }

    let req: Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => return Some(json!({"id": null, "error": format!("parse error: {}", e)})),
    };

    let id = req.get("id").cloned().unwrap_or(Value::Null);

    if !limiter.check() {
        warn!("rate limit exceeded");
        return Some(json!({"id": id, "error": "rate limit exceeded"}));
    }

    let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
    let params = req.get("params").cloned().unwrap_or(json!({}));

    Some(match handle_method(app, method, &params) {
        Ok(val) => json!({"id": id, "result": val}),
        Err(err) => json!({"id": id, "error": err}),
    })
}

fn emit(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() -> io::Result<()> {
    let app = Mutex::new(App::new(None));
    let mut rate_limiter = RateLimiter::new(200);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    emit(&mut out, &ready_event())?;
    info!("rpc server ready");

    for line in io::stdin().lock().lines() {
        if let Some(response) = handle_line(&app, &mut rate_limiter, &line?) {
            emit(&mut out, &response)?;
        }
    }

    info!("stdin closed, shutting down");
    Ok(())
}
