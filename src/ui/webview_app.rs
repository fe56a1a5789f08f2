//! WebView-based browser shell using `wry` + `tao`.
//!
//! Architecture:
//! - One window, one WebView; the tab container tracks which URL each tab
//!   shows and the WebView is re-pointed on tab switches.
//! - `with_initialization_script(TOOLBAR_JS)` injects the toolbar on every
//!   page. Internal pages (bookmark list, history list, source view) are
//!   served via the `ob://` custom protocol.
//! - IPC from JS -> Rust via `window.ipc.postMessage()`; engine callbacks
//!   (page-load finished, rendered-HTML replies) re-enter the UI loop as
//!   `UserEvent`s through the event-loop proxy, so every state mutation
//!   happens on the UI thread exactly once. Download requests are the
//!   exception: the webview demands an immediate accept/cancel answer, so
//!   they are settled inline in the download callback.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::App;
use crate::engine::{EngineEvent, HtmlPurpose, PageEngine};
use crate::managers::download_manager::DownloadManagerTrait;
use crate::managers::tab_manager::TabManagerTrait;
use crate::resolver;
use crate::types::download::{DownloadDecision, DownloadRequest};
use crate::types::tab::TabKind;
use crate::views;

#[derive(Debug)]
enum NavAction {
    Back,
    Forward,
    Reload,
    Navigate(String),
}

#[derive(Debug)]
enum UserEvent {
    LoadUrl(String),
    EvalScript(String),
    /// Toolbar navigation, delegated to the active engine view.
    Nav(NavAction),
    /// Bookmarks the page shown in the active engine view.
    AddBookmark,
    /// Asks the engine for the rendered HTML of the current page.
    RequestHtml(HtmlPurpose),
    /// An engine callback re-entering the UI loop.
    Engine(EngineEvent),
}

struct BrowserState {
    app: App,
    /// Title of the page currently shown, as reported by the engine.
    page_title: String,
    /// Row models behind the currently served auxiliary pages.
    bookmark_rows: Vec<views::Row>,
    history_rows: Vec<views::Row>,
    /// Captured page for the open source view; one at a time.
    source_html: String,
    source_url: String,
    /// Destination chosen in the save dialog, awaiting the HTML reply.
    pending_save: Option<PathBuf>,
}

const TOOLBAR_JS: &str = r#"
(function(){
  if (window.__ob_loaded) return;
  window.__ob_loaded = true;
  window.__ob_ipc = function(cmd, args){
    var m = args || {}; m.cmd = cmd;
    if (window.ipc) window.ipc.postMessage(JSON.stringify(m));
  };
  function build(){
    var bar = document.createElement('div');
    bar.id = '__ob_toolbar';
    bar.style.cssText = 'position:fixed;top:0;left:0;right:0;z-index:2147483647;display:flex;align-items:center;gap:4px;padding:4px 6px;background:#f3f3f3;border-bottom:1px solid #ccc;font:13px sans-serif';
    function btn(label, cmd, title){
      var b = document.createElement('button');
      b.textContent = label; b.title = title;
      b.style.cssText = 'border:1px solid #bbb;background:#fff;border-radius:4px;padding:2px 7px;cursor:pointer';
      b.addEventListener('click', function(){ __ob_ipc(cmd, {}); });
      return b;
    }
    bar.appendChild(btn('←','back','Back'));
    bar.appendChild(btn('→','forward','Forward'));
    bar.appendChild(btn('⟳','reload','Reload'));
    var addr = document.createElement('input');
    addr.id = '__ob_addr';
    addr.style.cssText = 'flex:1;border:1px solid #bbb;border-radius:4px;padding:2px 6px';
    addr.addEventListener('keydown', function(e){
      if (e.key === 'Enter') __ob_ipc('navigate', {input: addr.value});
    });
    bar.appendChild(addr);
    bar.appendChild(btn('+','new_tab','New tab'));
    bar.appendChild(btn('✕','close_active_tab','Close tab'));
    bar.appendChild(btn('📂','open_file','Open file'));
    bar.appendChild(btn('★','add_bookmark','Bookmark this page'));
    bar.appendChild(btn('📚','show_bookmarks','Bookmarks'));
    bar.appendChild(btn('🕒','show_history','History'));
    bar.appendChild(btn('</>','view_source','View source'));
    bar.appendChild(btn('💾','save_page','Save page'));
    var tabs = document.createElement('div');
    tabs.id = '__ob_tabs';
    tabs.style.cssText = 'position:fixed;top:30px;left:0;right:0;z-index:2147483647;display:flex;gap:2px;padding:2px 6px;background:#e9e9e9;border-bottom:1px solid #ccc;font:12px sans-serif';
    document.documentElement.appendChild(bar);
    document.documentElement.appendChild(tabs);
    if (document.body) document.body.style.marginTop = '56px';
    window.__ob_updateTabs = function(data){
      tabs.innerHTML = '';
      data.tabs.forEach(function(t, i){
        var el = document.createElement('span');
        el.textContent = t.title || t.url || 'New tab';
        el.style.cssText = 'max-width:160px;overflow:hidden;white-space:nowrap;text-overflow:ellipsis;padding:1px 8px;border-radius:4px 4px 0 0;cursor:pointer;background:' + (i === data.active ? '#fff' : '#ddd');
        el.addEventListener('click', function(){ __ob_ipc('switch_tab', {index: i}); });
        el.addEventListener('auxclick', function(){ __ob_ipc('close_tab', {index: i}); });
        tabs.appendChild(el);
      });
    };
    window.__ob_setAddress = function(url){ addr.value = url; };
    window.__ob_showToast = function(msg){
      var t = document.createElement('div');
      t.textContent = msg;
      t.style.cssText = 'position:fixed;bottom:16px;right:16px;z-index:2147483647;background:#333;color:#fff;padding:8px 14px;border-radius:6px;font:13px sans-serif';
      document.documentElement.appendChild(t);
      setTimeout(function(){ t.remove(); }, 2500);
    };
    __ob_ipc('ui_ready', {});
    __ob_ipc('page_info', {url: location.href, title: document.title});
  }
  if (document.readyState === 'loading')
    document.addEventListener('DOMContentLoaded', build);
  else build();
})();
"#;

/// Engine view backed by the shared WebView. The back/forward stack lives
/// inside the webview, so navigation is delegated as script calls.
struct WebviewEngine<'a> {
    webview: &'a wry::WebView,
    title: String,
}

impl PageEngine for WebviewEngine<'_> {
    fn load(&self, url: &str) {
        let _ = self.webview.load_url(url);
    }

    fn back(&self) {
        let _ = self.webview.evaluate_script("history.back()");
    }

    fn forward(&self) {
        let _ = self.webview.evaluate_script("history.forward()");
    }

    fn reload(&self) {
        let _ = self.webview.evaluate_script("location.reload()");
    }

    fn current_url(&self) -> String {
        self.webview.url().map(|u| u.to_string()).unwrap_or_default()
    }

    fn current_title(&self) -> String {
        self.title.clone()
    }

    fn request_html(&self, purpose: HtmlPurpose) {
        let tag = match purpose {
            HtmlPurpose::ViewSource => "source",
            HtmlPurpose::SavePage => "save",
        };
        let js = format!(
            "window.ipc.postMessage(JSON.stringify({{cmd:'html_ready',purpose:'{}',\
             html:'<!DOCTYPE html>'+document.documentElement.outerHTML}}))",
            tag
        );
        let _ = self.webview.evaluate_script(&js);
    }
}

// ─── Internal pages ───

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn list_page_html(heading: &str, rows: &[views::Row]) -> String {
    let mut html = String::with_capacity(rows.len() * 128 + 1024);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>");
    html.push_str("body{font:14px sans-serif;margin:0;padding:8px}h2{margin:8px 4px}");
    html.push_str(".row{padding:6px 8px;border-bottom:1px solid #eee;cursor:pointer;user-select:none}");
    html.push_str(".row:hover{background:#f0f6ff}");
    html.push_str("</style></head><body><h2>");
    html.push_str(&escape_html(heading));
    html.push_str("</h2>");
    for row in rows {
        html.push_str("<div class=\"row\" data-url=\"");
        html.push_str(&escape_html(&row.url));
        html.push_str("\">");
        html.push_str(&escape_html(&row.label));
        html.push_str("</div>");
    }
    html.push_str(
        "<script>document.querySelectorAll('.row').forEach(function(r){\
         r.addEventListener('dblclick',function(){\
         if(window.__ob_ipc)__ob_ipc('open_row',{url:r.dataset.url});});});</script>",
    );
    html.push_str("</body></html>");
    html
}

fn source_page_html(url: &str, html: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>\
         body{{font:12px monospace;margin:0;padding:8px}}\
         pre{{white-space:pre-wrap;word-break:break-all}}</style></head>\
         <body><h3>{}</h3><pre>{}</pre></body></html>",
        escape_html(&views::source_view_label(url)),
        escape_html(html)
    )
}

/// URL for the internal page backing an auxiliary tab.
fn aux_url(kind: &TabKind) -> &'static str {
    match kind {
        TabKind::Bookmarks => "ob://localhost/bookmarks",
        TabKind::History => "ob://localhost/history",
        TabKind::Source => "ob://localhost/source",
        TabKind::Page => "about:blank",
    }
}

// ─── IPC handler ───

fn handle_ipc(state: &mut BrowserState, message: &str) -> Vec<UserEvent> {
    let msg: serde_json::Value = match serde_json::from_str(message) {
        Ok(v) => v,
        Err(_) => return Vec::new(),
    };
    let cmd = match msg.get("cmd").and_then(|v| v.as_str()) {
        Some(c) => c,
        None => return Vec::new(),
    };

    match cmd {
        "ui_ready" => vec![UserEvent::EvalScript(build_tabs_update(state))],

        "page_info" => {
            if let Some(title) = msg.get("title").and_then(|v| v.as_str()) {
                state.page_title = title.to_string();
            }
            Vec::new()
        }

        "navigate" => {
            let input = msg.get("input").and_then(|v| v.as_str()).unwrap_or("");
            vec![UserEvent::Nav(NavAction::Navigate(input.to_string()))]
        }

        "back" => vec![UserEvent::Nav(NavAction::Back)],
        "forward" => vec![UserEvent::Nav(NavAction::Forward)],
        "reload" => vec![UserEvent::Nav(NavAction::Reload)],

        "new_tab" => {
            let index = state.app.open_page(crate::app::HOME_URL);
            eprintln!("[TAB] opened {}", index);
            vec![UserEvent::LoadUrl(crate::app::HOME_URL.to_string())]
        }

        "close_tab" => {
            if let Some(index) = msg.get("index").and_then(|v| v.as_u64()) {
                let _ = state.app.tab_manager.close_tab(index as usize);
            }
            navigate_to_active(state)
        }

        "close_active_tab" => {
            if let Some(index) = state.app.tab_manager.active_index() {
                let _ = state.app.tab_manager.close_tab(index);
            }
            navigate_to_active(state)
        }

        "switch_tab" => {
            if let Some(index) = msg.get("index").and_then(|v| v.as_u64()) {
                let _ = state.app.tab_manager.switch_tab(index as usize);
            }
            navigate_to_active(state)
        }

        "open_file" => {
            let picked = rfd::FileDialog::new()
                .add_filter("Web & PDF", &["html", "htm", "pdf"])
                .pick_file();
            match picked {
                Some(path) => match state.app.open_local_file(&path) {
                    Some(_) => {
                        let url = resolver::local_file_url(&path).unwrap_or_default();
                        vec![UserEvent::LoadUrl(url)]
                    }
                    None => Vec::new(),
                },
                // Cancelled dialog: silent no-op
                None => Vec::new(),
            }
        }

        "add_bookmark" => {
            if state.app.tab_manager.active_page().is_some() {
                vec![UserEvent::AddBookmark]
            } else {
                Vec::new()
            }
        }

        "show_bookmarks" => match state.app.open_bookmarks_view() {
            Some((_, rows)) => {
                state.bookmark_rows = rows;
                vec![UserEvent::LoadUrl("ob://localhost/bookmarks".into())]
            }
            None => vec![UserEvent::EvalScript(
                "if(window.__ob_showToast)__ob_showToast('No bookmarks yet')".into(),
            )],
        },

        "show_history" => match state.app.open_history_view() {
            Some((_, rows)) => {
                state.history_rows = rows;
                vec![UserEvent::LoadUrl("ob://localhost/history".into())]
            }
            None => vec![UserEvent::EvalScript(
                "if(window.__ob_showToast)__ob_showToast('History is empty')".into(),
            )],
        },

        "open_row" => {
            if let Some(url) = msg.get("url").and_then(|v| v.as_str()) {
                state.app.open_page(url);
                vec![UserEvent::LoadUrl(url.to_string())]
            } else {
                Vec::new()
            }
        }

        "view_source" => {
            if let Some(tab) = state.app.tab_manager.active_page() {
                state.source_url = tab.url.clone();
                vec![UserEvent::RequestHtml(HtmlPurpose::ViewSource)]
            } else {
                Vec::new()
            }
        }

        "save_page" => {
            if state.app.tab_manager.active_page().is_none() {
                return Vec::new();
            }
            let chosen = rfd::FileDialog::new()
                .add_filter("HTML Files", &["html"])
                .set_file_name("page.html")
                .save_file();
            match chosen {
                Some(path) => {
                    state.pending_save = Some(path);
                    vec![UserEvent::RequestHtml(HtmlPurpose::SavePage)]
                }
                // Cancelled dialog: silent no-op
                None => Vec::new(),
            }
        }

        "html_ready" => {
            let purpose = match msg.get("purpose").and_then(|v| v.as_str()) {
                Some("source") => HtmlPurpose::ViewSource,
                Some("save") => HtmlPurpose::SavePage,
                _ => return Vec::new(),
            };
            let html = msg
                .get("html")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string();
            vec![UserEvent::Engine(EngineEvent::HtmlReady(purpose, html))]
        }

        _ => Vec::new(),
    }
}

fn navigate_to_active(state: &mut BrowserState) -> Vec<UserEvent> {
    let url = match state.app.tab_manager.active_tab() {
        Some(tab) if tab.kind == TabKind::Page => tab.url.clone(),
        Some(tab) => aux_url(&tab.kind).to_string(),
        None => return Vec::new(),
    };
    vec![UserEvent::LoadUrl(url)]
}

fn build_tabs_update(state: &BrowserState) -> String {
    let tabs: Vec<serde_json::Value> = (0..state.app.tab_manager.tab_count())
        .filter_map(|i| state.app.tab_manager.get_tab(i))
        .map(|t| serde_json::json!({"title": t.title, "url": t.url}))
        .collect();
    let active = state.app.tab_manager.active_index().unwrap_or(0);
    format!(
        "if(window.__ob_updateTabs)__ob_updateTabs({})",
        serde_json::json!({"tabs": tabs, "active": active})
    )
}

fn handle_html_ready(
    state: &mut BrowserState,
    purpose: HtmlPurpose,
    html: String,
) -> Vec<UserEvent> {
    match purpose {
        HtmlPurpose::ViewSource => {
            let url = state.source_url.clone();
            state.source_html = html;
            state.app.open_source_view(&url);
            vec![UserEvent::LoadUrl("ob://localhost/source".into())]
        }
        HtmlPurpose::SavePage => {
            let path = match state.pending_save.take() {
                Some(p) => p,
                None => return Vec::new(),
            };
            match state.app.save_page(path, &html) {
                Ok(saved) => vec![UserEvent::EvalScript(format!(
                    "if(window.__ob_showToast)__ob_showToast('Saved: {}')",
                    saved.display().to_string().replace('\'', "")
                ))],
                Err(e) => vec![UserEvent::EvalScript(format!(
                    "if(window.__ob_showToast)__ob_showToast('{}')",
                    e.to_string().replace('\'', "")
                ))],
            }
        }
    }
}

// ─── Main entry point ───

pub fn run() {
    let app = App::new(None).expect("Failed to initialize Orlanda");
    let state = Arc::new(Mutex::new(BrowserState {
        app,
        page_title: String::new(),
        bookmark_rows: Vec::new(),
        history_rows: Vec::new(),
        source_html: String::new(),
        source_url: String::new(),
        pending_save: None,
    }));

    {
        let mut s = state.lock().unwrap();
        s.app.startup();
    }

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("Orlanda Browse")
        .with_inner_size(tao::dpi::LogicalSize::new(1200.0, 800.0))
        .build(&event_loop)
        .expect("Failed to create window");

    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();
    let load_proxy = proxy.clone();
    let proto_state = state.clone();
    let dl_state = state.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("ob".into(), move |_wv_id, request| {
            let s = proto_state.lock().unwrap();
            let html = match request.uri().path() {
                "/bookmarks" => list_page_html("Bookmarks", &s.bookmark_rows),
                "/history" => list_page_html("History", &s.history_rows),
                "/source" => source_page_html(&s.source_url, &s.source_html),
                _ => list_page_html("History", &s.history_rows),
            };
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(html.into_bytes().into())
                .unwrap()
        })
        .with_initialization_script(TOOLBAR_JS)
        .with_url(crate::app::HOME_URL)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            eprintln!("[IPC] {}", &body[..body.len().min(200)]);
            let mut s = ipc_state.lock().unwrap();
            for event in handle_ipc(&mut s, body) {
                let _ = ipc_proxy.send_event(event);
            }
        })
        .with_on_page_load_handler(move |event, url| {
            if let wry::PageLoadEvent::Finished = event {
                let _ =
                    load_proxy.send_event(UserEvent::Engine(EngineEvent::NavigationCompleted(url)));
            }
        })
        .with_download_started_handler(move |uri, default_path| {
            let mut s = dl_state.lock().unwrap();
            let suggested = default_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| uri.rsplit('/').next().unwrap_or("download").to_string());
            let request = DownloadRequest {
                suggested_name: suggested,
            };
            let initial = s.app.downloads.default_destination(&request);
            let chosen = rfd::FileDialog::new()
                .set_directory(initial.parent().unwrap_or(&initial))
                .set_file_name(&request.suggested_name)
                .save_file();
            match s.app.settle_download(&request, chosen) {
                DownloadDecision::Accepted(path) => {
                    eprintln!("[DL] accepted {}", path.display());
                    *default_path = path;
                    true
                }
                DownloadDecision::Cancelled => {
                    eprintln!("[DL] cancelled {}", uri);
                    false
                }
            }
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::LoadUrl(url) => {
                    eprintln!("[LOAD] {}", url);
                    let _ = webview.load_url(&url);
                }
                UserEvent::EvalScript(js) => {
                    let _ = webview.evaluate_script(&js);
                }
                UserEvent::Nav(action) => {
                    let mut s = state.lock().unwrap();
                    let engine = WebviewEngine {
                        webview: &webview,
                        title: s.page_title.clone(),
                    };
                    // No-op unless a page tab (an engine view) is focused
                    let view: Option<&dyn PageEngine> = if s.app.tab_manager.active_page().is_some()
                    {
                        Some(&engine)
                    } else {
                        None
                    };
                    match action {
                        NavAction::Back => s.app.navigation.back(view),
                        NavAction::Forward => s.app.navigation.forward(view),
                        NavAction::Reload => s.app.navigation.reload(view),
                        NavAction::Navigate(input) => {
                            if let Some(url) = s.app.navigation.navigate(view, &input) {
                                eprintln!("[NAV] resolved {}", url);
                                s.app.tab_manager.update_active_url(&url);
                            }
                        }
                    }
                }
                UserEvent::AddBookmark => {
                    let mut s = state.lock().unwrap();
                    if s.app.tab_manager.active_page().is_none() {
                        return;
                    }
                    let engine = WebviewEngine {
                        webview: &webview,
                        title: s.page_title.clone(),
                    };
                    // The engine view knows its own URL; empty title falls
                    // back to the URL inside the manager
                    let url = engine.current_url();
                    let title = engine.current_title();
                    if s.app.add_bookmark(&url, &title) {
                        let _ = webview.evaluate_script(
                            "if(window.__ob_showToast)__ob_showToast('Bookmark added')",
                        );
                    }
                }
                UserEvent::RequestHtml(purpose) => {
                    let s = state.lock().unwrap();
                    let engine = WebviewEngine {
                        webview: &webview,
                        title: s.page_title.clone(),
                    };
                    engine.request_html(purpose);
                }
                UserEvent::Engine(EngineEvent::NavigationCompleted(url)) => {
                    // Internal pages never enter history or the address bar
                    if url.starts_with("ob://") {
                        return;
                    }
                    eprintln!("[NAV] {}", url);
                    let mut s = state.lock().unwrap();
                    s.app.on_navigation_completed(&url);
                    let addr = format!(
                        "if(window.__ob_setAddress)__ob_setAddress({})",
                        serde_json::json!(url)
                    );
                    let _ = webview.evaluate_script(&addr);
                    let _ = webview.evaluate_script(&build_tabs_update(&s));
                }
                UserEvent::Engine(EngineEvent::HtmlReady(purpose, html)) => {
                    let mut s = state.lock().unwrap();
                    for ev in handle_html_ready(&mut s, purpose, html) {
                        match ev {
                            UserEvent::LoadUrl(url) => {
                                let _ = webview.load_url(&url);
                            }
                            UserEvent::EvalScript(js) => {
                                let _ = webview.evaluate_script(&js);
                            }
                            _ => {}
                        }
                    }
                }
            },

            _ => {}
        }
    });
}
