#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use valentine_core::params::name_param;
use valentine_core::{SceneConfig, Session};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

use render::GpuRenderer;

pub(crate) type WebSession = Session<GpuRenderer>;

thread_local! {
    // Running animation loop, kept so the page (or a test harness) can stop it.
    static ACTIVE_LOOP: RefCell<Option<frame::WebLoop>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("valentine-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stops the animation loop; the last drawn frame stays on the canvas.
#[wasm_bindgen]
pub fn stop_animation() {
    ACTIVE_LOOP.with(|l| {
        if let Some(lp) = l.borrow_mut().take() {
            lp.stop();
            log::info!("[frame] stopped after {} frames", lp.handle().frames());
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let name = dom::location_href(&window).and_then(|href| name_param(&href));
    log::info!("[params] name={:?}", name);

    let canvas = dom::query_canvas(&window, constants::CANVAS_SELECTOR)?;
    let viewport = dom::window_viewport(&window);
    let config = SceneConfig::default();
    let asset_paths = config.assets.clone();

    let renderer = GpuRenderer::new(canvas.clone(), &viewport).await?;
    let session: Rc<RefCell<WebSession>> =
        Rc::new(RefCell::new(Session::new(renderer, viewport, config)));

    events::wire_resize(session.clone());
    events::wire_orbit_controls(&canvas, session.clone());

    // The loop renders an empty scene until both assets have arrived.
    let lp = frame::start_loop(session.clone());
    ACTIVE_LOOP.with(|l| *l.borrow_mut() = Some(lp));

    spawn_local(async move {
        match assets::load_assets(&asset_paths).await {
            Ok(assets) => {
                let mut rng = StdRng::from_entropy();
                if let Err(e) = session
                    .borrow_mut()
                    .populate(&assets, name.as_deref(), &mut rng)
                {
                    log::error!("[scene] build failed: {}", e);
                }
            }
            // No retry: the greeting just never shows up.
            Err(e) => log::warn!("[assets] load failed: {:?}", e),
        }
    });
    Ok(())
}
