use crate::app::App;
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Weak;
use std::time::Duration;
use timer_core::{Scheduler, TimerId};
use wasm_bindgen_futures::spawn_local;

/// `setInterval`-backed tick source. Each task calls back into the app it was
/// built for; the app is held weakly so tasks never keep it alive.
pub struct IntervalScheduler {
    app: Weak<RefCell<App>>,
}

impl IntervalScheduler {
    pub fn new(app: Weak<RefCell<App>>) -> Self {
        Self { app }
    }
}

impl Scheduler for IntervalScheduler {
    type Task = IntervalTask;

    fn schedule(&mut self, id: TimerId, period: Duration) -> IntervalTask {
        let app = self.app.clone();
        let interval = Interval::new(period.as_millis() as u32, move || {
            let Some(app) = app.upgrade() else {
                return;
            };
            match app.try_borrow_mut() {
                Ok(mut app) => app.on_tick(id),
                Err(_) => log::warn!("[board] tick for {} skipped, app busy", id),
            };
        });
        IntervalTask {
            interval: Some(interval),
        }
    }
}

pub struct IntervalTask {
    interval: Option<Interval>,
}

impl Drop for IntervalTask {
    fn drop(&mut self) {
        if let Some(interval) = self.interval.take() {
            // clearInterval now; the closure may be the one running this drop
            // (natural expiry), so free it after the current callback returns
            let closure = interval.cancel();
            spawn_local(async move {
                drop(closure);
            });
        }
    }
}
