//! HTML for one timer card.
//!
//! Pure string building so it can be exercised on the host. Buttons carry a
//! `data-action` attribute and inputs a `data-field` attribute; the event
//! wiring dispatches on those instead of per-element listeners.

use crate::constants::{ACTION_ATTR, CARD_ID_PREFIX, FIELD_ATTR};
use std::fmt::Write;
use timer_core::{
    Board, Phase, Scheduler, TimerId, TimerView, ToneSink, Urgency, ADD_TIME_SECS,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    QuickStart,
    SetTime,
    Toggle,
    AddTime,
    Reset,
    Mute,
}

impl CardAction {
    pub fn as_str(self) -> &'static str {
        match self {
            CardAction::QuickStart => "quick-start",
            CardAction::SetTime => "set-time",
            CardAction::Toggle => "toggle",
            CardAction::AddTime => "add-time",
            CardAction::Reset => "reset",
            CardAction::Mute => "mute",
        }
    }

    pub fn parse(value: &str) -> Option<CardAction> {
        Some(match value {
            "quick-start" => CardAction::QuickStart,
            "set-time" => CardAction::SetTime,
            "toggle" => CardAction::Toggle,
            "add-time" => CardAction::AddTime,
            "reset" => CardAction::Reset,
            "mute" => CardAction::Mute,
            _ => return None,
        })
    }

    /// Run the action against `id`. `typed_seconds` reads the card's time
    /// fields and is only called for `SetTime`.
    pub fn apply<S: Scheduler, T: ToneSink>(
        self,
        board: &mut Board<S, T>,
        id: TimerId,
        typed_seconds: impl FnOnce() -> u32,
    ) {
        match self {
            CardAction::QuickStart => board.quick_start(id),
            CardAction::SetTime => {
                let seconds = typed_seconds();
                log::info!("[ui] team {} set to {}s", id, seconds);
                board.set_duration(id, seconds);
            }
            CardAction::Toggle => board.toggle(id),
            CardAction::AddTime => board.add_time(id, ADD_TIME_SECS),
            CardAction::Reset => board.reset(id),
            CardAction::Mute => board.toggle_mute(id),
        }
    }
}

/// Hour, minute and second inputs shown on an idle card.
pub const TIME_FIELDS: [(&str, &str); 3] = [("hours", "H"), ("minutes", "M"), ("seconds", "S")];
pub const LABEL_FIELD: &str = "label";

#[inline]
pub fn card_dom_id(id: TimerId) -> String {
    format!("{CARD_ID_PREFIX}{id}")
}

pub fn card_class(view: &TimerView) -> String {
    let phase = match view.phase {
        Phase::Idle => "idle",
        Phase::Running => "running",
        Phase::Paused => "paused",
    };
    let urgency = match view.urgency {
        Urgency::Calm => "calm",
        Urgency::Warning => "warning",
        Urgency::Urgent => "urgent",
    };
    let mut class = format!("timer-card phase-{phase} urgency-{urgency}");
    if view.is_muted {
        class.push_str(" muted");
    }
    class
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

fn button(html: &mut String, action: CardAction, class: &str, text: &str) {
    _ = write!(
        html,
        "<button type=\"button\" class=\"{class}\" {ACTION_ATTR}=\"{}\">{text}</button>",
        action.as_str()
    );
}

/// Which set of controls a card shows. Only a layout change rebuilds the
/// card body; everything else is patched in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardLayout {
    /// Time entry fields plus "Set time" and "Start 5:00".
    Entry,
    /// Running or paused: time display, pause/resume, +5m and reset.
    Countdown,
}

impl CardLayout {
    pub fn of(view: &TimerView) -> CardLayout {
        match view.phase {
            Phase::Idle => CardLayout::Entry,
            Phase::Running | Phase::Paused => CardLayout::Countdown,
        }
    }
}

pub const CARD_BODY_CLASS: &str = "card-body";
pub const TIME_DISPLAY_CLASS: &str = "time-display";
pub const GET_READY_CLASS: &str = "get-ready";
pub const GET_READY_TEXT: &str = "Get ready!";

pub fn mute_caption(view: &TimerView) -> &'static str {
    if view.is_muted {
        "Unmute"
    } else {
        "Mute"
    }
}

pub fn toggle_caption(view: &TimerView) -> &'static str {
    if view.is_running {
        "Pause"
    } else {
        "Resume"
    }
}

pub fn get_ready_text(view: &TimerView) -> &'static str {
    if view.urgency == Urgency::Calm {
        ""
    } else {
        GET_READY_TEXT
    }
}

/// Inner HTML of the `card-body` element for the view's layout.
pub fn card_body_html(view: &TimerView) -> String {
    let mut html = String::with_capacity(512);
    match CardLayout::of(view) {
        CardLayout::Entry => {
            html.push_str("<div class=\"time-fields\">");
            for (field, caption) in TIME_FIELDS {
                _ = write!(
                    html,
                    "<label>{caption}<input type=\"number\" min=\"0\" {FIELD_ATTR}=\"{field}\" value=\"0\"></label>"
                );
            }
            html.push_str("</div><div class=\"card-actions\">");
            button(&mut html, CardAction::SetTime, "primary", "Set time");
            button(&mut html, CardAction::QuickStart, "secondary", "Start 5:00");
            html.push_str("</div>");
        }
        CardLayout::Countdown => {
            _ = write!(
                html,
                "<div class=\"{TIME_DISPLAY_CLASS}\">{}</div>",
                view.display()
            );
            html.push_str("<div class=\"card-actions\">");
            button(&mut html, CardAction::Toggle, "primary", toggle_caption(view));
            button(&mut html, CardAction::AddTime, "secondary", "+5m");
            button(&mut html, CardAction::Reset, "reset", "Reset");
            html.push_str("</div>");
        }
    }
    html
}

/// Full card content, written once when the card is created.
pub fn card_inner_html(view: &TimerView) -> String {
    let mut html = String::with_capacity(1024);

    _ = write!(
        html,
        "<div class=\"card-header\"><span class=\"team-badge\">{}</span>\
         <input class=\"team-label\" type=\"text\" {FIELD_ATTR}=\"{LABEL_FIELD}\" value=\"{}\" placeholder=\"Team name\">",
        view.id,
        escape_html(&view.label)
    );
    button(&mut html, CardAction::Mute, "mute", mute_caption(view));
    html.push_str("</div>");

    _ = write!(
        html,
        "<div class=\"{CARD_BODY_CLASS}\">{}</div>",
        card_body_html(view)
    );
    _ = write!(
        html,
        "<div class=\"{GET_READY_CLASS}\">{}</div>",
        get_ready_text(view)
    );
    html
}

/// In-place edits that bring a card painted from `prev` up to `next`.
/// `None` fields are left untouched, so inputs the user is typing into
/// survive ticks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardPatch {
    pub class: Option<String>,
    pub label: Option<String>,
    pub mute_caption: Option<&'static str>,
    /// Replacement `card-body` content after a layout change.
    pub body: Option<String>,
    pub time_text: Option<String>,
    pub toggle_caption: Option<&'static str>,
    pub get_ready_text: Option<&'static str>,
}

impl CardPatch {
    pub fn is_empty(&self) -> bool {
        *self == CardPatch::default()
    }
}

pub fn card_patch(prev: &TimerView, next: &TimerView) -> CardPatch {
    let mut patch = CardPatch::default();

    let class = card_class(next);
    if class != card_class(prev) {
        patch.class = Some(class);
    }
    if next.label != prev.label {
        patch.label = Some(next.label.clone());
    }
    if next.is_muted != prev.is_muted {
        patch.mute_caption = Some(mute_caption(next));
    }
    if CardLayout::of(next) != CardLayout::of(prev) {
        patch.body = Some(card_body_html(next));
    } else if CardLayout::of(next) == CardLayout::Countdown {
        if next.remaining_seconds != prev.remaining_seconds {
            patch.time_text = Some(next.display());
        }
        if next.is_running != prev.is_running {
            patch.toggle_caption = Some(toggle_caption(next));
        }
    }
    if get_ready_text(next) != get_ready_text(prev) {
        patch.get_ready_text = Some(get_ready_text(next));
    }
    patch
}
