//! HTML5 drag-and-drop wiring for reordering and drag-to-delete.
//!
//! Every `dragover` on another card commits a reorder straight away, so the
//! grid reshuffles under the pointer instead of on drop.

use crate::app::App;
use crate::constants::{DELETE_ZONE_ID, DRAG_MIME, GRID_ID};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_drag(document: &web::Document, app: &Rc<RefCell<App>>) -> anyhow::Result<()> {
    let grid = dom::element_by_id(document, GRID_ID)?;
    wire_grid(&grid, app);
    match document.get_element_by_id(DELETE_ZONE_ID) {
        Some(zone) => wire_delete_zone(&zone, app),
        None => log::warn!("[drag] no #{}, drag-to-delete disabled", DELETE_ZONE_ID),
    }
    Ok(())
}

fn wire_grid(grid: &web::Element, app: &Rc<RefCell<App>>) {
    let app_start = app.clone();
    dom::listen(grid, "dragstart", move |ev: web::DragEvent| {
        let Some((_, id)) = dom::event_card(&ev) else {
            return;
        };
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
            _ = dt.set_data(DRAG_MIME, &id.to_string());
        }
        log::debug!("[drag] start {}", id);
        app_start.borrow_mut().drag_start(id);
    });

    let app_over = app.clone();
    dom::listen(grid, "dragover", move |ev: web::DragEvent| {
        if !app_over.borrow().board().drag().is_active() {
            return;
        }
        ev.prevent_default();
        if let Some((_, target)) = dom::event_card(&ev) {
            app_over.borrow_mut().drag_over(target);
        }
    });

    let app_end = app.clone();
    dom::listen(grid, "dragend", move |_: web::DragEvent| {
        app_end.borrow_mut().drag_end();
    });
}

fn wire_delete_zone(zone: &web::Element, app: &Rc<RefCell<App>>) {
    let app_over = app.clone();
    dom::listen(zone, "dragover", move |ev: web::DragEvent| {
        if !app_over.borrow().board().drag().is_active() {
            return;
        }
        // accepting the drop requires cancelling dragover
        ev.prevent_default();
        if !app_over.borrow().board().drag().is_over_delete_zone() {
            app_over.borrow_mut().enter_delete_zone();
        }
    });

    let app_leave = app.clone();
    dom::listen(zone, "dragleave", move |_: web::DragEvent| {
        app_leave.borrow_mut().leave_delete_zone();
    });

    let app_drop = app.clone();
    dom::listen(zone, "drop", move |ev: web::DragEvent| {
        ev.prevent_default();
        app_drop.borrow_mut().drop_on_delete_zone();
    });
}
