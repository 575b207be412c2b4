#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod app;
mod audio;
mod constants;
mod dom;
mod events;
mod markup;
mod render;
mod scheduler;
mod storage;
mod theme;

use app::App;
use scheduler::IntervalScheduler;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("timer-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let renderer = render::Renderer::new(&document)?;
    let theme = storage::load_theme();

    // tick tasks call back into the app, so they hold it weakly
    let app = Rc::new_cyclic(|weak| {
        RefCell::new(App::new(
            IntervalScheduler::new(weak.clone()),
            renderer,
            theme,
        ))
    });
    app.borrow_mut().render_all();

    events::wire_controls(&document, &app)?;
    events::wire_drag(&document, &app)?;
    log::info!("[board] ready with {} teams", app.borrow().board().len());
    Ok(())
}
