//! Scripted headless run of the full stack: a window manager with a bridge
//! on one side, a hosted-context RPC client on the other, wired over
//! in-memory channels, followed by a simulated drag reorder.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::{info, warn};

use tabhost_protocol::{channel_pair, ContentRef, MessageSender, RpcClient};
use tabhost_wm::drag::{ContainerLayout, DragSurface};
use tabhost_wm::{bridge, DragReorderController, NoopSurface, OpenWindowOpts, WindowManager};

use crate::config::AppConfig;

pub async fn run(config: AppConfig) {
    let mut manager = WindowManager::new(Box::new(NoopSurface::new()));
    let bridge = bridge();

    manager.open_window(
        "/home",
        OpenWindowOpts {
            id: Some("home".into()),
            title: Some("Home".into()),
            fixed: true,
            ..Default::default()
        },
    );
    let page1 = manager.open_window("/page1", OpenWindowOpts::default());
    manager.open_window(
        "/page2",
        OpenWindowOpts {
            in_background: true,
            ..Default::default()
        },
    );
    info!(windows = ?manager.list_windows(), active = ?manager.active_id(), "windows opened");

    // The hosted context behind page1 talks to us over an in-memory channel.
    let (host_tx, mut host_rx) = mpsc::unbounded_channel();
    let Some(content) = manager.registry().get(&page1).map(|w| w.content) else {
        warn!("demo window vanished before wiring");
        return;
    };
    let pair = channel_pair(content, &host_tx);
    let mut replies: HashMap<ContentRef, Box<dyn MessageSender>> = HashMap::new();
    replies.insert(content, Box::new(pair.reply));

    manager.content_loaded(content);

    let client = Arc::new(RpcClient::new(Box::new(pair.to_host), &config.rpc));
    tokio::spawn(Arc::clone(&client).run(pair.from_host));

    let mut scenario = tokio::spawn(async move {
        client.connect().await;
        match client.list_windows().await {
            Ok(windows) => info!(?windows, "hosted context sees windows"),
            Err(e) => warn!(error = %e, "list windows failed"),
        }
        if let Err(e) = client.call("XXX", None).await {
            info!(error = %e, "invalid command rejected as expected");
        }
        client.close_window().await;
    });

    // Host loop: dispatch inbound commands until the scripted context is done.
    loop {
        tokio::select! {
            _ = &mut scenario => break,
            Some((source, raw)) = host_rx.recv() => {
                let Some(reply) = bridge.handle_message(&mut manager, source, &raw) else {
                    continue;
                };
                let Some(sender) = replies.get(&source) else {
                    warn!(source = %source, "no reply channel for source");
                    continue;
                };
                match serde_json::to_value(&reply) {
                    Ok(payload) => {
                        if sender.send(payload).is_err() {
                            warn!(source = %source, "reply dropped: context gone");
                        }
                    }
                    Err(e) => warn!(error = %e, "reply encode failed"),
                }
            }
        }
    }

    info!(windows = ?manager.list_windows(), active = ?manager.active_id(), "hosted context closed itself");

    reorder_demo(&mut manager, &config);
    info!(windows = ?manager.list_windows(), "final order");
}

/// Drag surface with no visuals: fixed uniform layout, recorded commits.
struct HeadlessTabs {
    layout: ContainerLayout,
    commits: Vec<(usize, usize)>,
}

impl DragSurface for HeadlessTabs {
    fn sample_layout(&self) -> ContainerLayout {
        self.layout.clone()
    }
    fn lift(&mut self, _index: usize) {}
    fn render_dragged(&mut self, _offset: f64) {}
    fn render_sibling(&mut self, _index: usize, _offset: f64) {}
    fn settle(&mut self, _from: usize, _to: usize) {}
    fn click(&mut self, _index: usize) {}
    fn on_end(&mut self, from: usize, to: usize) {
        self.commits.push((from, to));
    }
}

/// Simulate dragging the first tab to the end of the strip.
fn reorder_demo(manager: &mut WindowManager, config: &AppConfig) {
    let tab_extent = 120.0;
    let mut tabs = HeadlessTabs {
        layout: ContainerLayout::uniform(0.0, tab_extent, manager.registry().len()),
        commits: Vec::new(),
    };
    let mut controller = DragReorderController::new(config.drag.clone());

    let strip_end = tabs.layout.extent;
    let pressed = Instant::now();
    controller.on_press(0, tab_extent / 2.0, pressed);
    let mut now = pressed + config.drag.arm_delay() + Duration::from_millis(10);
    controller.on_tick(&mut tabs, now);
    controller.on_move(&mut tabs, strip_end, now);
    controller.on_release(&mut tabs);

    // Commit on release; the visual drain follows.
    for (from, to) in std::mem::take(&mut tabs.commits) {
        info!(from, to, "drag committed");
        if let Err(e) = manager.move_window(from, to) {
            warn!(error = %e, "reorder commit failed");
        }
    }
    for _ in 0..10_000 {
        if controller.is_idle() {
            return;
        }
        now += Duration::from_millis(16);
        controller.on_tick(&mut tabs, now);
    }
    warn!("drag animation never drained");
}
