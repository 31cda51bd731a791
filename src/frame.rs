use crate::core::nav::LinkHighlighter;
use crate::core::SyncLoop;
use crate::playback::PlaybackManager;
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub sync: Rc<RefCell<SyncLoop>>,
    pub playback: Rc<RefCell<PlaybackManager>>,
    pub highlighter: Box<dyn LinkHighlighter>,

    pub canvas: web::HtmlCanvasElement,
    pub analyser: Option<web::AnalyserNode>,
    pub snapshot: Vec<u8>,

    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now_ms = instant::now();
        let playing = self.playback.borrow().is_playing();

        if let Some(a) = &self.analyser {
            a.get_byte_frequency_data(&mut self.snapshot);
        }
        let out = self.sync.borrow_mut().tick(now_ms, &self.snapshot, playing);
        self.highlighter.highlight(out.highlight);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            match g.render(&out) {
                Ok(()) => {}
                // Reconfigured on the next resize; skip this frame
                Err(wgpu::SurfaceError::Outdated) | Err(wgpu::SurfaceError::Lost) => {
                    log::debug!("surface outdated, skipping frame");
                }
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
