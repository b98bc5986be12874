use log::debug;

use crate::engine::session::GameSession;

/// One pending follow-up move: the source/target pile pair of the move that
/// exposed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeStep {
    pub source: usize,
    pub target: usize,
}

/// After a move leaves a continuable run exposed — the source's new top is
/// same-suit rank-adjacent to the target's new top — the run is transferred
/// automatically, one deferred step at a time so the presentation layer can
/// animate each card landing. Every applied move re-arms the check, and the
/// chain self-terminates when the adjacency breaks.
impl GameSession {
    pub(crate) fn schedule_cascade(&mut self, source: usize, target: usize) {
        if !self.cascade_continues(source, target) {
            return;
        }
        let due = self.clock.now_ms() + self.timing.cascade_step_ms;
        self.cascade_slot.schedule(due, CascadeStep { source, target });
        debug!("cascade armed: pile {source} -> pile {target}");
    }

    fn cascade_continues(&self, source: usize, target: usize) -> bool {
        if source == target {
            return false;
        }
        let (Some(source_top), Some(target_top)) =
            (self.game.top_card(source), self.game.top_card(target))
        else {
            return false;
        };
        source_top.suit == target_top.suit && source_top.rank.abs_diff(target_top.rank) == 1
    }

    /// Run one due step through the normal validated move path. A successful
    /// move re-arms the slot from `move_card`, keeping steps strictly
    /// sequential; a move the validator rejects (adjacent rank but wrong run
    /// direction on a foundation) ends the chain instead.
    pub(crate) fn run_cascade_step(&mut self, step: CascadeStep, _now: u64) {
        if !self.cascade_continues(step.source, step.target) {
            return;
        }
        let Some(top) = self.game.top_card(step.source) else {
            return;
        };
        if !self.move_card(top.id, step.target) {
            debug!(
                "cascade stopped: {} cannot land on pile {}",
                top.label(),
                step.target
            );
        }
    }
}
