//! The dashboard: every team timer, their display order, the drag gesture and
//! the tick task of each running countdown.

use crate::collection::{DragSession, TimerId, TimerOrder};
use crate::constants::{default_team_label, TICK_INTERVAL};
use crate::countdown::{format_hms, Countdown, Phase, Urgency};
use crate::cue::{Cue, CueSchedule};
use crate::scheduler::Scheduler;
use crate::tone::{sound_cue, ToneSink};
use fnv::FnvHashMap;

#[derive(Clone, Debug)]
pub struct Timer {
    pub id: TimerId,
    pub label: String,
    pub countdown: Countdown,
}

/// Snapshot handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerView {
    pub id: TimerId,
    pub label: String,
    pub remaining_seconds: u32,
    pub is_running: bool,
    pub is_muted: bool,
    pub phase: Phase,
    pub urgency: Urgency,
}

impl TimerView {
    pub fn display(&self) -> String {
        format_hms(self.remaining_seconds)
    }
}

impl From<&Timer> for TimerView {
    fn from(t: &Timer) -> Self {
        Self {
            id: t.id,
            label: t.label.clone(),
            remaining_seconds: t.countdown.remaining_seconds(),
            is_running: t.countdown.is_running(),
            is_muted: t.countdown.is_muted(),
            phase: t.countdown.phase(),
            urgency: t.countdown.urgency(),
        }
    }
}

struct Slot<Task> {
    timer: Timer,
    task: Option<Task>,
}

pub struct Board<S: Scheduler, T: ToneSink> {
    order: TimerOrder,
    timers: FnvHashMap<TimerId, Slot<S::Task>>,
    drag: DragSession,
    schedule: CueSchedule,
    scheduler: S,
    tones: T,
}

impl<S: Scheduler, T: ToneSink> Board<S, T> {
    pub fn new(scheduler: S, tones: T) -> Self {
        Self {
            order: TimerOrder::new(),
            timers: FnvHashMap::default(),
            drag: DragSession::default(),
            schedule: CueSchedule::default(),
            scheduler,
            tones,
        }
    }

    pub fn with_teams(count: usize, scheduler: S, tones: T) -> Self {
        let mut board = Self::new(scheduler, tones);
        for _ in 0..count {
            board.add_team();
        }
        board
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn tones(&self) -> &T {
        &self.tones
    }

    pub fn schedule(&self) -> CueSchedule {
        self.schedule
    }

    /// Switch every timer, and those added later, to another cue schedule.
    pub fn set_schedule(&mut self, schedule: CueSchedule) {
        self.schedule = schedule;
        for slot in self.timers.values_mut() {
            slot.timer.countdown.set_schedule(schedule);
        }
    }

    pub fn add_team(&mut self) -> TimerId {
        let id = self.order.add();
        let timer = Timer {
            id,
            label: default_team_label(id.0),
            countdown: Countdown::new(self.schedule),
        };
        self.timers.insert(id, Slot { timer, task: None });
        log::info!("[board] added team {}", id);
        id
    }

    /// Cancels the timer's tick task before the timer leaves the board.
    pub fn remove_team(&mut self, id: TimerId) -> bool {
        let Some(slot) = self.timers.get_mut(&id) else {
            return false;
        };
        drop(slot.task.take());
        self.timers.remove(&id);
        self.order.remove(id);
        if self.drag.dragged() == Some(id) {
            self.drag.end();
        }
        log::info!("[board] removed team {}", id);
        true
    }

    pub fn rename(&mut self, id: TimerId, label: &str) {
        if let Some(slot) = self.timers.get_mut(&id) {
            slot.timer.label = label.to_string();
        }
    }

    pub fn quick_start(&mut self, id: TimerId) {
        self.update(id, Countdown::quick_start);
    }

    pub fn set_duration(&mut self, id: TimerId, seconds: u32) {
        self.update(id, |c| c.set_duration(seconds));
    }

    pub fn toggle(&mut self, id: TimerId) {
        self.update(id, Countdown::toggle);
    }

    pub fn add_time(&mut self, id: TimerId, delta_seconds: i64) {
        self.update(id, |c| c.add_time(delta_seconds));
    }

    pub fn reset(&mut self, id: TimerId) {
        self.update(id, Countdown::reset);
    }

    pub fn set_muted(&mut self, id: TimerId, muted: bool) {
        self.update(id, |c| c.set_muted(muted));
    }

    pub fn toggle_mute(&mut self, id: TimerId) {
        self.update(id, Countdown::toggle_mute);
    }

    /// Body of the repeating one-second callback. Ticks for removed or
    /// stopped timers are ignored.
    pub fn tick(&mut self, id: TimerId) -> Option<Cue> {
        let slot = self.timers.get_mut(&id)?;
        let cue = slot.timer.countdown.tick();
        if let Some(cue) = cue {
            log::info!("[board] team {} cue {}", id, cue);
            sound_cue(&self.tones, cue);
        }
        if !slot.timer.countdown.is_running() && slot.task.is_some() {
            log::info!("[board] team {} finished", id);
        }
        self.sync_task(id);
        cue
    }

    pub fn timer(&self, id: TimerId) -> Option<&Timer> {
        self.timers.get(&id).map(|slot| &slot.timer)
    }

    pub fn view(&self, id: TimerId) -> Option<TimerView> {
        self.timer(id).map(TimerView::from)
    }

    /// Views in display order.
    pub fn views(&self) -> Vec<TimerView> {
        self.order
            .ids()
            .iter()
            .filter_map(|id| self.view(*id))
            .collect()
    }

    pub fn order(&self) -> &[TimerId] {
        self.order.ids()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn has_task(&self, id: TimerId) -> bool {
        self.timers
            .get(&id)
            .map(|slot| slot.task.is_some())
            .unwrap_or(false)
    }

    // ---------------- Drag protocol ----------------

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    pub fn drag_start(&mut self, id: TimerId) {
        if self.order.contains(id) {
            log::debug!("[drag] start {}", id);
            self.drag.start(id);
        }
    }

    /// Returns true when the order changed.
    pub fn drag_over(&mut self, target: TimerId) -> bool {
        self.drag.over(target, &mut self.order)
    }

    pub fn enter_delete_zone(&mut self) {
        self.drag.enter_delete_zone();
    }

    pub fn leave_delete_zone(&mut self) {
        self.drag.leave_delete_zone();
    }

    pub fn drop_on_delete_zone(&mut self) -> Option<TimerId> {
        let id = self.drag.drop_on_delete_zone()?;
        self.remove_team(id).then_some(id)
    }

    pub fn drag_end(&mut self) {
        self.drag.end();
    }

    fn update(&mut self, id: TimerId, f: impl FnOnce(&mut Countdown)) {
        if let Some(slot) = self.timers.get_mut(&id) {
            f(&mut slot.timer.countdown);
            self.sync_task(id);
        }
    }

    // Keep "has a task" equal to "is running".
    fn sync_task(&mut self, id: TimerId) {
        let Some(slot) = self.timers.get_mut(&id) else {
            return;
        };
        match (slot.timer.countdown.is_running(), slot.task.is_some()) {
            (true, false) => {
                slot.task = Some(self.scheduler.schedule(id, TICK_INTERVAL));
                log::debug!("[board] team {} task scheduled", id);
            }
            (false, true) => {
                slot.task = None;
                log::debug!("[board] team {} task cancelled", id);
            }
            _ => {}
        }
    }
}
