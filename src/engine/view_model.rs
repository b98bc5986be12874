use crate::engine::session::GameSession;
use crate::game::{BoardLayout, Card};

/// Plain-state projection of a session for a presentation layer: enough to
/// draw one frame, with no engine internals leaking through.
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    pub layout: BoardLayout,
    pub cards: Vec<Card>,
    pub active_card: Option<usize>,
    /// Where the dragged card should be drawn while the pointer is held:
    /// the pointer position minus the press offset.
    pub drag_position: Option<(f64, f64)>,
    /// -1 until the deal reveal starts, then counts up to the card count.
    pub shuffle_index: i32,
    pub won: bool,
    pub win_anim_progress: f64,
    pub move_count: u32,
    pub seed: u64,
}

impl GameSession {
    pub fn snapshot(&self) -> BoardSnapshot {
        let drag_position = if self.cursor.pressed && self.active_card.is_some() {
            Some((
                self.cursor.x - self.cursor.offset_x,
                self.cursor.y - self.cursor.offset_y,
            ))
        } else {
            None
        };
        BoardSnapshot {
            layout: self.game.layout(),
            cards: self.game.cards().to_vec(),
            active_card: self.active_card,
            drag_position,
            shuffle_index: self.shuffle_index,
            won: self.win_started_at.is_some(),
            win_anim_progress: self.win_anim_progress,
            move_count: self.move_count,
            seed: self.seed,
        }
    }
}
