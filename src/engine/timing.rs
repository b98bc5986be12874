/// Every interaction threshold and animation cadence the engine uses, in one
/// place so hosts (and tests on a simulated clock) can tune them instead of
/// chasing magic numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingProfile {
    /// Second press on the same card within this window is a double-click.
    pub double_click_ms: u64,
    /// A press held longer than this counts as a drag on release.
    pub press_drag_ms: u64,
    /// A pointer travel beyond this counts as a drag on release.
    pub drag_distance_px: f64,
    /// Release logic is skipped for this long after a double-click auto-move.
    pub post_auto_move_suppress_ms: u64,
    /// Delay between cascade follow-up moves, tuned to the visual move
    /// transition so each step is seen landing before the next starts.
    pub cascade_step_ms: u64,
    /// Interval between shuffle-in reveal increments after a deal.
    pub shuffle_step_ms: u64,
    /// Win-grid stagger per suit row and per rank column.
    pub win_row_stagger_ms: u64,
    pub win_card_stagger_ms: u64,
    /// Win-loop repeat interval and the progress advanced per repeat.
    pub win_loop_tick_ms: u64,
    pub win_loop_step: f64,
}

pub const DEFAULT_TIMING_PROFILE: TimingProfile = TimingProfile {
    double_click_ms: 500,
    press_drag_ms: 300,
    drag_distance_px: 5.0,
    post_auto_move_suppress_ms: 300,
    cascade_step_ms: 300,
    shuffle_step_ms: 50,
    win_row_stagger_ms: 100,
    win_card_stagger_ms: 40,
    win_loop_tick_ms: 50,
    win_loop_step: 0.02,
};

impl Default for TimingProfile {
    fn default() -> Self {
        DEFAULT_TIMING_PROFILE
    }
}
