//! Keyed DOM reconciliation for the timer grid.
//!
//! Cards are created once per timer and then only moved (`append_child` on an
//! existing node) or patched. A card being dragged must stay the same node,
//! otherwise the browser aborts the drag.

use crate::constants::{
    ACTION_ATTR, DELETE_ZONE_ID, FIELD_ATTR, GRID_ID, THEME_ATTR, THEME_TOGGLE_ID, TIMER_ID_ATTR,
};
use crate::dom;
use crate::markup::{
    card_class, card_dom_id, card_inner_html, card_patch, CardAction, CardPatch, CARD_BODY_CLASS,
    GET_READY_CLASS, LABEL_FIELD, TIME_DISPLAY_CLASS,
};
use crate::theme::Theme;
use fnv::FnvHashMap;
use timer_core::{DragSession, TimerId, TimerView};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Renderer {
    document: web::Document,
    grid: web::Element,
    delete_zone: Option<web::Element>,
    rendered: FnvHashMap<TimerId, TimerView>,
}

impl Renderer {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let grid = dom::element_by_id(document, GRID_ID)?;
        let delete_zone = document.get_element_by_id(DELETE_ZONE_ID);
        if delete_zone.is_none() {
            log::warn!("[render] no #{}, drag-to-delete disabled", DELETE_ZONE_ID);
        }
        Ok(Self {
            document: document.clone(),
            grid,
            delete_zone,
            rendered: FnvHashMap::default(),
        })
    }

    fn card(&self, id: TimerId) -> Option<web::Element> {
        self.document.get_element_by_id(&card_dom_id(id))
    }

    fn create_card(&self, id: TimerId) -> Option<web::Element> {
        let card = match self.document.create_element("div") {
            Ok(el) => el,
            Err(e) => {
                log::error!("[render] card {} create error: {:?}", id, e);
                return None;
            }
        };
        card.set_id(&card_dom_id(id));
        _ = card.set_attribute(TIMER_ID_ATTR, &id.to_string());
        _ = card.set_attribute("draggable", "true");
        Some(card)
    }

    /// Paint a card from scratch the first time, then patch only what changed
    /// so focused inputs and typed values survive ticks.
    pub fn update(&mut self, view: &TimerView) {
        let Some(card) = self.card(view.id) else {
            return;
        };
        match self.rendered.get(&view.id) {
            Some(prev) if prev == view => return,
            Some(prev) => {
                let patch = card_patch(prev, view);
                self.apply_patch(&card, &patch);
            }
            None => {
                let dragging = card.class_list().contains("dragging");
                card.set_class_name(&card_class(view));
                dom::set_class(&card, "dragging", dragging);
                card.set_inner_html(&card_inner_html(view));
            }
        }
        self.rendered.insert(view.id, view.clone());
    }

    fn apply_patch(&self, card: &web::Element, patch: &CardPatch) {
        if let Some(class) = &patch.class {
            let dragging = card.class_list().contains("dragging");
            card.set_class_name(class);
            dom::set_class(card, "dragging", dragging);
        }
        if let Some(label) = &patch.label {
            self.patch_label(card, label);
        }
        if let Some(caption) = patch.mute_caption {
            set_text(card, &action_selector(CardAction::Mute), caption);
        }
        if let Some(body) = &patch.body {
            if let Some(el) = dom::query(card, &format!(".{CARD_BODY_CLASS}")) {
                el.set_inner_html(body);
            }
        }
        if let Some(text) = &patch.time_text {
            set_text(card, &format!(".{TIME_DISPLAY_CLASS}"), text);
        }
        if let Some(caption) = patch.toggle_caption {
            set_text(card, &action_selector(CardAction::Toggle), caption);
        }
        if let Some(text) = patch.get_ready_text {
            set_text(card, &format!(".{GET_READY_CLASS}"), text);
        }
    }

    // Leave the input alone while the user is editing it.
    fn patch_label(&self, card: &web::Element, label: &str) {
        let Some(el) = dom::query(card, &format!("[{FIELD_ATTR}=\"{LABEL_FIELD}\"]")) else {
            return;
        };
        if self.document.active_element().as_ref() == Some(&el) {
            return;
        }
        if let Ok(input) = el.dyn_into::<web::HtmlInputElement>() {
            if input.value() != label {
                input.set_value(label);
            }
        }
    }

    /// Bring the grid in line with `views`: drop stale cards, create missing
    /// ones, refill changed ones, and order them.
    pub fn render_all(&mut self, views: &[TimerView], drag: &DragSession) {
        let stale: Vec<TimerId> = self
            .rendered
            .keys()
            .filter(|id| !views.iter().any(|v| v.id == **id))
            .copied()
            .collect();
        for id in stale {
            self.remove(id);
        }
        for view in views {
            if self.card(view.id).is_none() {
                let Some(card) = self.create_card(view.id) else {
                    continue;
                };
                _ = self.grid.append_child(&card);
                self.rendered.remove(&view.id);
            }
            self.update(view);
        }
        self.reorder(&views.iter().map(|v| v.id).collect::<Vec<_>>());
        self.sync_drag(drag);
    }

    /// Move existing cards into `order`. Appending a node already in the
    /// grid moves it rather than cloning it.
    pub fn reorder(&self, order: &[TimerId]) {
        for id in order {
            if let Some(card) = self.card(*id) {
                _ = self.grid.append_child(&card);
            }
        }
    }

    pub fn remove(&mut self, id: TimerId) {
        if let Some(card) = self.card(id) {
            card.remove();
        }
        self.rendered.remove(&id);
    }

    pub fn sync_drag(&self, drag: &DragSession) {
        for id in self.rendered.keys() {
            if let Some(card) = self.card(*id) {
                dom::set_class(&card, "dragging", drag.dragged() == Some(*id));
            }
        }
        if let Some(zone) = &self.delete_zone {
            dom::set_class(zone, "visible", drag.is_active());
            dom::set_class(zone, "hover", drag.is_over_delete_zone());
        }
    }

    pub fn apply_theme(&self, theme: Theme) {
        if let Some(body) = self.document.body() {
            _ = body.set_attribute(THEME_ATTR, theme.as_str());
        }
        if let Some(toggle) = self.document.get_element_by_id(THEME_TOGGLE_ID) {
            toggle.set_text_content(Some(theme.label()));
        }
    }
}

fn action_selector(action: CardAction) -> String {
    format!("[{ACTION_ATTR}=\"{}\"]", action.as_str())
}

fn set_text(scope: &web::Element, selector: &str, text: &str) {
    if let Some(el) = dom::query(scope, selector) {
        el.set_text_content(Some(text));
    }
}
