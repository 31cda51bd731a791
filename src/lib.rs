#![cfg(target_arch = "wasm32")]
use crate::core::nav::{HighlightPolicy, LinkHighlighter, NoopHighlighter};
use crate::core::{SiteConfig, SyncLoop};
use crate::playback::PlaybackManager;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod frame;
mod nav;
mod playback;
mod render;
mod storage;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn set_button_label(document: &web::Document, label: &str) {
    if let Some(btn) = document.get_element_by_id(constants::PLAY_BUTTON_ID) {
        btn.set_text_content(Some(label));
    }
}

fn wire_media_events(document: &web::Document, playback: &Rc<RefCell<PlaybackManager>>) {
    let element: web::EventTarget = playback.borrow().element().clone().into();

    let pb = playback.clone();
    dom::add_listener(&element, "ended", move || PlaybackManager::on_ended(&pb));
    let pb = playback.clone();
    dom::add_listener(&element, "loadedmetadata", move || {
        PlaybackManager::on_metadata(&pb)
    });

    let doc = document.clone();
    dom::add_listener(&element, "play", move || {
        set_button_label(&doc, constants::PAUSE_LABEL)
    });
    let doc = document.clone();
    dom::add_listener(&element, "pause", move || {
        set_button_label(&doc, constants::PLAY_LABEL)
    });
}

fn wire_play_button(
    document: &web::Document,
    playback: &Rc<RefCell<PlaybackManager>>,
    sync: &Rc<RefCell<SyncLoop>>,
    restart_rotation: bool,
) {
    let pb = playback.clone();
    let sync = sync.clone();
    dom::add_click_listener(document, constants::PLAY_BUTTON_ID, move || {
        let started = PlaybackManager::toggle(&pb);
        if started && restart_rotation {
            sync.borrow_mut().restart_rotation(instant::now());
        }
    });

    // Autoplay is usually refused until the first gesture; retry once then.
    // Gestures on the button itself end in a toggle instead.
    for event in ["pointerdown", "keydown"] {
        let pb = playback.clone();
        let doc = document.clone();
        dom::add_event_listener(document, event, move |e| {
            let on_button = dom::event_within(&doc, &e, constants::PLAY_BUTTON_ID);
            PlaybackManager::retry_after_gesture(&pb, on_button)
        });
    }
}

fn start_playback_timer(playback: &Rc<RefCell<PlaybackManager>>) {
    let pb = playback.clone();
    let closure = Closure::wrap(Box::new(move || {
        PlaybackManager::tick(&pb);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            core::constants::PLAYBACK_TICK_MS,
        ) {
            log::error!("playback timer error: {:?}", e);
        }
    }
    closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cube-site starting");

    spawn_local(async move {
        if let Err(e) = init(SiteConfig::default()).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init(config: SiteConfig) -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let highlighter: Box<dyn LinkHighlighter> = {
        let links = nav::DomNavLinks::install(&document, config.links.clone());
        match config.highlight {
            HighlightPolicy::Static => Box::new(NoopHighlighter),
            _ => Box::new(links),
        }
    };

    let graph = audio::build_audio_graph(config.volume)?;
    let store = config.persist_session.then(storage::open_session_store);
    let playback = Rc::new(RefCell::new(PlaybackManager::new(
        &config,
        graph.element.clone(),
        graph.ctx.clone(),
        store,
    )?));
    let sync = Rc::new(RefCell::new(SyncLoop::new(&config, instant::now())?));

    wire_media_events(&document, &playback);
    wire_play_button(&document, &playback, &sync, config.restart_rotation_on_play);
    playback.borrow_mut().restore();
    start_playback_timer(&playback);

    let gpu = frame::init_gpu(&canvas).await;
    let snapshot = audio::snapshot_buffer(graph.analyser.as_ref());
    log::info!(
        "[init] gpu={} bins={} tracks={}",
        gpu.is_some(),
        snapshot.len(),
        config.playlist.len()
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sync,
        playback,
        highlighter,
        canvas,
        analyser: graph.analyser,
        snapshot,
        gpu,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
