use crate::audio::WebTones;
use crate::markup::CardAction;
use crate::render::Renderer;
use crate::scheduler::IntervalScheduler;
use crate::storage;
use crate::theme::Theme;
use timer_core::{Board, TimerId, DEFAULT_TEAM_COUNT};

pub type WebBoard = Board<IntervalScheduler, WebTones>;

/// Everything the page mutates: the board, its on-screen cards and the theme.
/// Shared as `Rc<RefCell<App>>` between event listeners and tick callbacks.
pub struct App {
    board: WebBoard,
    renderer: Renderer,
    theme: Theme,
}

impl App {
    pub fn new(scheduler: IntervalScheduler, renderer: Renderer, theme: Theme) -> Self {
        Self {
            board: Board::with_teams(DEFAULT_TEAM_COUNT, scheduler, WebTones::default()),
            renderer,
            theme,
        }
    }

    pub fn board(&self) -> &WebBoard {
        &self.board
    }

    pub fn render_all(&mut self) {
        let views = self.board.views();
        self.renderer.render_all(&views, self.board.drag());
        self.renderer.apply_theme(self.theme);
    }

    fn refresh(&mut self, id: TimerId) {
        if let Some(view) = self.board.view(id) {
            self.renderer.update(&view);
        }
    }

    pub fn on_tick(&mut self, id: TimerId) {
        self.board.tick(id);
        self.refresh(id);
    }

    pub fn card_action(
        &mut self,
        id: TimerId,
        action: CardAction,
        typed_seconds: impl FnOnce() -> u32,
    ) {
        action.apply(&mut self.board, id, typed_seconds);
        log::debug!("[ui] {} on team {}", action.as_str(), id);
        self.refresh(id);
    }

    pub fn rename(&mut self, id: TimerId, label: &str) {
        self.board.rename(id, label);
        self.refresh(id);
    }

    pub fn add_team(&mut self) {
        self.board.add_team();
        self.render_all();
    }

    pub fn unlock_audio(&self) {
        self.board.tones().unlock();
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        storage::save_theme(self.theme);
        self.renderer.apply_theme(self.theme);
        log::info!("[theme] switched to {}", self.theme.as_str());
    }

    // ---------------- Drag protocol ----------------

    pub fn drag_start(&mut self, id: TimerId) {
        self.board.drag_start(id);
        self.renderer.sync_drag(self.board.drag());
    }

    pub fn drag_over(&mut self, target: TimerId) {
        if self.board.drag_over(target) {
            self.renderer.reorder(self.board.order());
        }
    }

    pub fn enter_delete_zone(&mut self) {
        self.board.enter_delete_zone();
        self.renderer.sync_drag(self.board.drag());
    }

    pub fn leave_delete_zone(&mut self) {
        self.board.leave_delete_zone();
        self.renderer.sync_drag(self.board.drag());
    }

    pub fn drop_on_delete_zone(&mut self) {
        if let Some(id) = self.board.drop_on_delete_zone() {
            log::info!("[drag] deleted team {}", id);
        }
        self.render_all();
    }

    pub fn drag_end(&mut self) {
        self.board.drag_end();
        self.renderer.sync_drag(self.board.drag());
    }
}
