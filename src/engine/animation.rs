use crate::engine::session::GameSession;

/// The two timer-driven sequences: the shuffle-in reveal after a deal and
/// the looping rearrangement after a win. Both live on their own task slot,
/// so whatever schedules a new run implicitly cancels the previous one.
impl GameSession {
    pub(crate) fn start_shuffle_reveal(&mut self) {
        self.shuffle_index = -1;
        let due = self.clock.now_ms() + self.timing.shuffle_step_ms;
        self.shuffle_slot.schedule(due, ());
    }

    pub(crate) fn run_shuffle_step(&mut self, now: u64) {
        let card_count = self.game.layout().card_count() as i32;
        if self.shuffle_index < card_count {
            self.shuffle_index += 1;
        }
        if self.shuffle_index < card_count {
            self.shuffle_slot
                .schedule(now + self.timing.shuffle_step_ms, ());
        }
    }

    /// When a card's slice of the win animation starts, relative to
    /// `win_started_at`. The win layout is a grid keyed by identity —
    /// row per suit, column per rank — and the stagger walks it row-major.
    pub fn win_delay_ms(&self, card_id: usize) -> Option<u64> {
        let card = self.game.card(card_id)?;
        Some(
            u64::from(card.suit) * self.timing.win_row_stagger_ms
                + u64::from(card.rank) * self.timing.win_card_stagger_ms,
        )
    }

    /// Arm the looping progress timer to start once the last card's stagger
    /// has elapsed.
    pub(crate) fn start_win_animation(&mut self, now: u64) {
        let last_stagger = self
            .game
            .cards()
            .iter()
            .filter_map(|card| self.win_delay_ms(card.id))
            .max()
            .unwrap_or(0);
        self.win_slot
            .schedule(now + last_stagger + self.timing.win_loop_tick_ms, ());
    }

    pub(crate) fn run_win_tick(&mut self, now: u64) {
        self.win_anim_progress = (self.win_anim_progress + self.timing.win_loop_step).fract();
        self.win_slot
            .schedule(now + self.timing.win_loop_tick_ms, ());
    }
}
