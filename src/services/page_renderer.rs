//! HTML rendering of the LinkPad page.
//!
//! The whole page is produced from a [`PageSnapshot`]. After the first load
//! the WebView is only patched: the error banner is toggled and the bookmarks
//! table is replaced, so the inputs keep focus while the user types.

use serde_json::json;

use crate::types::page::{PageSnapshot, PageVariant, SCHEME_PREFIX};

const PAGE_CSS: &str = "\
:root{--bg:#f9fafb;--fg:#111827;--muted:#6b7280;--border:#d1d5db;--accent:#4b5563;--accent-hover:#374151;--danger:#dc2626;--font:-apple-system,BlinkMacSystemFont,\"Segoe UI\",Helvetica,Arial,sans-serif}\
*{margin:0;padding:0;box-sizing:border-box}\
body{font-family:var(--font);background:var(--bg);color:var(--fg)}\
.page{max-width:80rem;margin:0 auto;padding:3rem 2rem}\
h2{font-size:2rem;font-weight:700;letter-spacing:-0.02em}\
form{margin-top:2rem;display:flex;gap:.75rem;flex-wrap:wrap}\
.url-group{display:flex;border-radius:.375rem;box-shadow:0 1px 2px rgba(0,0,0,.05)}\
.prefix{display:inline-flex;align-items:center;padding:0 .75rem;border:1px solid var(--border);border-right:0;border-radius:.375rem 0 0 .375rem;color:var(--muted);background:var(--bg)}\
input[type=text]{padding:.5rem .75rem;border:1px solid var(--border);font-size:.9rem;min-width:16rem}\
.url-group input{border-radius:0 .375rem .375rem 0}\
.label-input{border-radius:.375rem}\
button{cursor:pointer;border:1px solid transparent;border-radius:.375rem;padding:.75rem 1.25rem;font-weight:500;background:var(--accent);color:#fff}\
button:hover{background:var(--accent-hover)}\
.check{display:flex;align-items:center;gap:.75rem;margin-top:1.25rem;font-weight:500}\
.check input{width:1.5rem;height:1.5rem}\
.error{margin-top:.75rem;color:var(--danger);font-size:.9rem}\
table{margin-top:2rem;border-collapse:collapse;width:100%}\
th,td{text-align:left;padding:.5rem .75rem;border-bottom:1px solid var(--border)}\
td a{color:var(--fg)}\
.row-actions button{padding:.25rem .75rem;font-size:.85rem}\
.row-actions .danger{background:var(--danger)}";

const PAGE_JS: &str = r#"
function lpSend(method,params){if(window.ipc)window.ipc.postMessage(JSON.stringify({method:method,params:params||{}}))}
window.__lp_patch=function(p){
  var err=document.getElementById('url-error');if(err)err.hidden=!p.show_url_error;
  var tbl=document.getElementById('bookmarks');if(tbl&&typeof p.table==='string')tbl.innerHTML=p.table;
};
var f=document.getElementById('url-form');
f.addEventListener('submit',function(e){e.preventDefault();lpSend('form.submit')});
var u=document.getElementById('url');
if(u)u.addEventListener('input',function(e){lpSend('form.set_url',{value:e.target.value})});
var l=document.getElementById('label');
if(l)l.addEventListener('input',function(e){lpSend('form.set_label',{value:e.target.value})});
var c=document.getElementById('save-bookmark');
if(c)c.addEventListener('change',function(e){lpSend('form.set_save_bookmark',{checked:e.target.checked})});
var t=document.getElementById('bookmarks');
if(t)t.addEventListener('click',function(e){
  var b=e.target.closest('button[data-action]');if(!b)return;
  var a=b.dataset.action;
  if(a==='delete')lpSend('bookmark.request_delete',{id:Number(b.dataset.id)});
  else if(a==='confirm')lpSend('bookmark.confirm_delete');
  else if(a==='cancel')lpSend('bookmark.cancel_delete');
});
if(u)setTimeout(function(){u.focus()},100);
"#;

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Inner HTML of the bookmarks table: header plus one row per bookmark.
///
/// The row whose id is pending deletion shows the Yes/No prompt in place of
/// its delete button.
pub fn render_bookmarks_table(snapshot: &PageSnapshot) -> String {
    let mut html = String::from("<thead><tr><th>Label</th><th>URL</th><th></th></tr></thead><tbody>");
    for bm in &snapshot.bookmarks {
        let actions = if snapshot.pending_delete == Some(bm.id) {
            "Are you sure? <button data-action=\"confirm\" class=\"danger\">Yes</button> \
             <button data-action=\"cancel\">No</button>"
                .to_string()
        } else {
            format!("<button data-action=\"delete\" data-id=\"{}\">Delete</button>", bm.id)
        };
        html.push_str(&format!(
            "<tr data-id=\"{id}\"><td><a href=\"{href}\">{label}</a></td><td>{url}</td><td class=\"row-actions\">{actions}</td></tr>",
            id = bm.id,
            href = escape_html(&bm.href()),
            label = escape_html(&bm.label),
            url = escape_html(&bm.url),
            actions = actions,
        ));
    }
    html.push_str("</tbody>");
    html
}

fn render_form(snapshot: &PageSnapshot) -> String {
    let controlled = snapshot.variant.is_controlled();
    let mut html = String::new();

    html.push_str("<form id=\"url-form\"><div class=\"url-group\">");
    html.push_str(&format!("<span class=\"prefix\">{}</span>", SCHEME_PREFIX));
    html.push_str(&format!(
        "<input type=\"text\" id=\"url\" name=\"url\" placeholder=\"example.com\" value=\"{}\" />",
        escape_html(&snapshot.url)
    ));
    html.push_str("</div>");
    if controlled {
        html.push_str(&format!(
            "<input type=\"text\" id=\"label\" name=\"label\" class=\"label-input\" placeholder=\"Label (optional)\" value=\"{}\" />",
            escape_html(&snapshot.label)
        ));
    }
    html.push_str("<button type=\"submit\">Go</button></form>");

    if controlled {
        html.push_str(&format!(
            "<p id=\"url-error\" class=\"error\"{}>Please enter a valid url</p>",
            if snapshot.show_url_error { "" } else { " hidden" }
        ));
    }

    html.push_str(&format!(
        "<div class=\"check\"><input type=\"checkbox\" id=\"save-bookmark\"{} />\
         <label for=\"save-bookmark\">\"Bookmark\" this url for later use</label></div>",
        if snapshot.save_bookmark { " checked" } else { "" }
    ));
    html
}

/// Complete HTML document for the page in its current state.
pub fn render_page(snapshot: &PageSnapshot, title: &str) -> String {
    let mut html = String::with_capacity(PAGE_CSS.len() + PAGE_JS.len() + 2048);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>");
    html.push_str(&escape_html(title));
    html.push_str("</title><style>");
    html.push_str(PAGE_CSS);
    html.push_str("</style></head><body><div class=\"page\"><h2>Enter your url</h2>");
    html.push_str(&render_form(snapshot));
    if snapshot.variant != PageVariant::Basic {
        html.push_str("<table id=\"bookmarks\">");
        html.push_str(&render_bookmarks_table(snapshot));
        html.push_str("</table>");
    }
    html.push_str("</div><script>");
    html.push_str(PAGE_JS);
    html.push_str("</script></body></html>");
    html
}

/// Script that brings an already loaded page in line with `snapshot`.
pub fn render_patch_script(snapshot: &PageSnapshot) -> String {
    let patch = json!({
        "show_url_error": snapshot.show_url_error,
        "table": render_bookmarks_table(snapshot),
    });
    format!("if(window.__lp_patch)__lp_patch({})", patch)
}
