use log::{debug, info};
use rand::Rng;

use crate::engine::boundary::{self, SettingsStore};
use crate::engine::cascade::CascadeStep;
use crate::engine::scheduler::{Clock, SystemClock, TaskSlot};
use crate::engine::timing::TimingProfile;
use crate::game::{BoardLayout, SwitchbackGame, MIN_SUIT_COUNT};

/// Pointer position and press bookkeeping. Mutated only by the pointer
/// handlers; read by the drag view and the click/drag discrimination.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CursorState {
    pub x: f64,
    pub y: f64,
    pub pressed: bool,
    pub press_x: f64,
    pub press_y: f64,
    pub pressed_at: u64,
    /// Pointer minus the pressed card's rendered origin, so the card
    /// follows the pointer without snapping to it.
    pub offset_x: f64,
    pub offset_y: f64,
}

/// The single owner of all mutable game state: the card collection, the
/// selection and cursor, the session counters, and the three deferred-task
/// slots. Commands mutate it in place; everything illegal is a silent no-op
/// (the public surface returns no errors).
pub struct GameSession {
    pub(crate) game: SwitchbackGame,
    pub(crate) seed: u64,
    pub(crate) timing: TimingProfile,
    pub(crate) clock: Box<dyn Clock>,
    pub(crate) settings: Box<dyn SettingsStore>,

    pub(crate) active_card: Option<usize>,
    pub(crate) cursor: CursorState,
    pub(crate) last_press: Option<(usize, u64)>,
    pub(crate) suppress_release_until: u64,

    pub(crate) move_count: u32,
    pub(crate) shuffle_index: i32,
    pub(crate) win_started_at: Option<u64>,
    pub(crate) win_anim_progress: f64,

    pub(crate) cascade_slot: TaskSlot<CascadeStep>,
    pub(crate) shuffle_slot: TaskSlot<()>,
    pub(crate) win_slot: TaskSlot<()>,
}

impl GameSession {
    /// Build a session on the wall clock, restoring the persisted difficulty
    /// (or the minimum) and dealing a first game.
    pub fn new(settings: Box<dyn SettingsStore>) -> Self {
        Self::with_clock(settings, Box::new(SystemClock::new()))
    }

    pub fn with_clock(settings: Box<dyn SettingsStore>, clock: Box<dyn Clock>) -> Self {
        let suit_count = boundary::load_suit_count(settings.as_ref()).unwrap_or(MIN_SUIT_COUNT);
        let mut session = Self {
            game: SwitchbackGame::deal(suit_count, 0),
            seed: 0,
            timing: TimingProfile::default(),
            clock,
            settings,
            active_card: None,
            cursor: CursorState::default(),
            last_press: None,
            suppress_release_until: 0,
            move_count: 0,
            shuffle_index: -1,
            win_started_at: None,
            win_anim_progress: 0.0,
            cascade_slot: TaskSlot::new(),
            shuffle_slot: TaskSlot::new(),
            win_slot: TaskSlot::new(),
        };
        session.new_game();
        session
    }

    pub fn set_timing(&mut self, timing: TimingProfile) {
        self.timing = timing;
    }

    pub fn timing(&self) -> TimingProfile {
        self.timing
    }

    pub fn game(&self) -> &SwitchbackGame {
        &self.game
    }

    pub fn layout(&self) -> BoardLayout {
        self.game.layout()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn suit_count(&self) -> u8 {
        self.game.layout().suit_count()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn active_card(&self) -> Option<usize> {
        self.active_card
    }

    pub fn shuffle_index(&self) -> i32 {
        self.shuffle_index
    }

    pub fn win_started_at(&self) -> Option<u64> {
        self.win_started_at
    }

    pub fn win_anim_progress(&self) -> f64 {
        self.win_anim_progress
    }

    /// Deal a fresh game at the current difficulty with a random seed.
    pub fn new_game(&mut self) {
        let seed = rand::thread_rng().gen();
        self.new_game_with_seed(seed);
    }

    /// Deal a reproducible game. Cancels every pending timer of the previous
    /// session before its own reveal starts.
    pub fn new_game_with_seed(&mut self, seed: u64) {
        let suit_count = self.suit_count();
        self.start_new_deal(suit_count, seed);
    }

    /// Change difficulty: persists the value and starts a new game. Values
    /// outside 4..=8 are clamped.
    pub fn set_suit_count(&mut self, count: u8) {
        let seed = rand::thread_rng().gen();
        self.start_new_deal(count, seed);
        let suit_count = self.suit_count();
        boundary::store_suit_count(self.settings.as_mut(), suit_count);
    }

    /// Test/demo command: force every card into its finished foundation
    /// slot, bypassing validation, and let win detection run.
    pub fn auto_complete_game(&mut self) {
        self.cascade_slot.cancel();
        self.active_card = None;
        self.game.force_complete();
        self.check_win();
    }

    /// Run whatever deferred work is due. The host calls this from its frame
    /// loop; each slot fires at most once per call, so cascade steps stay
    /// strictly sequential.
    pub fn tick(&mut self) {
        let now = self.clock.now_ms();
        if self.shuffle_slot.take_due(now).is_some() {
            self.run_shuffle_step(now);
        }
        if let Some(step) = self.cascade_slot.take_due(now) {
            self.run_cascade_step(step, now);
        }
        if self.win_slot.take_due(now).is_some() {
            self.run_win_tick(now);
        }
    }

    pub(crate) fn start_new_deal(&mut self, suit_count: u8, seed: u64) {
        self.cascade_slot.cancel();
        self.shuffle_slot.cancel();
        self.win_slot.cancel();

        self.game = SwitchbackGame::deal(suit_count, seed);
        self.seed = seed;
        self.active_card = None;
        self.cursor = CursorState::default();
        self.last_press = None;
        self.suppress_release_until = 0;
        self.move_count = 0;
        self.win_started_at = None;
        self.win_anim_progress = 0.0;

        self.start_shuffle_reveal();
        debug!(
            "dealt {} cards across {} piles (seed {seed})",
            self.game.cards().len(),
            self.game.layout().pile_count(),
        );
    }

    /// The one place a player-visible move happens: validate, apply, count,
    /// then hand the source/target pair to the cascade resolver and the win
    /// detector. Returns false (leaving the board untouched) on an illegal
    /// move.
    pub(crate) fn move_card(&mut self, card_id: usize, target_pile: usize) -> bool {
        let Some(card) = self.game.card(card_id) else {
            return false;
        };
        let source_pile = card.pile_index;
        if !self.game.apply_move(card_id, target_pile) {
            return false;
        }
        self.move_count += 1;
        debug!(
            "moved {} from pile {source_pile} to pile {target_pile} (move {})",
            card.label(),
            self.move_count,
        );
        self.schedule_cascade(source_pile, target_pile);
        self.check_win();
        true
    }

    /// Attempt a move of the active card and clear the selection no matter
    /// what: an invalid target reads as "selection cleared, board unchanged".
    pub(crate) fn attempt_move_and_deselect(
        &mut self,
        card_id: usize,
        target_pile: Option<usize>,
    ) -> bool {
        self.active_card = None;
        match target_pile {
            Some(pile) => self.move_card(card_id, pile),
            None => false,
        }
    }

    /// Flip the won flag exactly once, then arm the win animation loop.
    pub(crate) fn check_win(&mut self) {
        if self.win_started_at.is_some() || !self.game.is_won() {
            return;
        }
        let now = self.clock.now_ms();
        self.win_started_at = Some(now);
        info!("game won after {} moves", self.move_count);
        self.start_win_animation(now);
    }
}
