use log::trace;

use crate::engine::boundary::BoardAdapter;
use crate::engine::session::GameSession;

/// Pointer-driven selection. A single pointer stream has to express three
/// gestures — click-to-select, drag-to-drop, and double-click auto-move — so
/// presses are disambiguated by distance and hold time against the timing
/// profile, and a double-click is a fast path that skips dragging entirely.
impl GameSession {
    pub fn on_pointer_down(&mut self, x: f64, y: f64, board: &dyn BoardAdapter) {
        let now = self.clock.now_ms();
        self.cursor.x = x;
        self.cursor.y = y;
        self.cursor.pressed = true;
        self.cursor.press_x = x;
        self.cursor.press_y = y;
        self.cursor.pressed_at = now;

        let hit = board.card_at(x, y).and_then(|id| self.game.card(id));

        if let Some(card) = hit {
            let is_double_click = self
                .last_press
                .map(|(id, at)| {
                    id == card.id && now.saturating_sub(at) <= self.timing.double_click_ms
                })
                .unwrap_or(false);
            self.last_press = Some((card.id, now));

            if is_double_click {
                trace!("double-click on {}", card.label());
                if self.auto_move_to_foundation(card.id) {
                    // A release follows immediately; keep it from re-moving.
                    self.suppress_release_until = now + self.timing.post_auto_move_suppress_ms;
                    self.active_card = None;
                    return;
                }
            }
        } else {
            self.last_press = None;
        }

        if let Some(active) = self.active_card {
            if hit.map(|card| card.id) == Some(active) {
                // Re-press of the selected card: refresh the drag offset.
                let (origin_x, origin_y) = board.card_origin(active);
                self.cursor.offset_x = x - origin_x;
                self.cursor.offset_y = y - origin_y;
                return;
            }
            let target = board.pile_at(x, y);
            self.attempt_move_and_deselect(active, target);
            return;
        }

        let Some(card) = hit else {
            return;
        };
        if self.game.top_card(card.pile_index).map(|top| top.id) != Some(card.id) {
            return;
        }
        if self.game.is_pile_complete(card.pile_index) {
            return;
        }
        self.active_card = Some(card.id);
        let (origin_x, origin_y) = board.card_origin(card.id);
        self.cursor.offset_x = x - origin_x;
        self.cursor.offset_y = y - origin_y;
        trace!("selected {}", card.label());
    }

    /// Only the cursor moves; placement is untouched until release.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor.x = x;
        self.cursor.y = y;
    }

    pub fn on_pointer_up(&mut self, x: f64, y: f64, board: &dyn BoardAdapter) {
        let now = self.clock.now_ms();
        let was_pressed = self.cursor.pressed;
        self.cursor.pressed = false;
        self.cursor.x = x;
        self.cursor.y = y;
        if !was_pressed {
            return;
        }
        if now < self.suppress_release_until {
            return;
        }
        let Some(active) = self.active_card else {
            return;
        };

        let travel_x = x - self.cursor.press_x;
        let travel_y = y - self.cursor.press_y;
        let travelled = (travel_x * travel_x + travel_y * travel_y).sqrt();
        let dragged = travelled > self.timing.drag_distance_px
            || now.saturating_sub(self.cursor.pressed_at) > self.timing.press_drag_ms;
        if !dragged {
            // A tap just selects; the card stays active for a follow-up press.
            return;
        }

        // Drop where the card's midpoint is, not where the finger is.
        let (card_width, card_height) = board.card_size();
        let drop_x = x - self.cursor.offset_x + card_width / 2.0;
        let drop_y = y - self.cursor.offset_y + card_height / 2.0;
        let target = board.pile_at(drop_x, drop_y);
        self.attempt_move_and_deselect(active, target);
    }

    /// Best-fit foundation move for a double-clicked card: first an occupied
    /// foundation the card legally continues, then (for end-rank cards) the
    /// first empty one. Both run through `can_move`, so locked piles and
    /// wrong-direction runs are skipped.
    pub(crate) fn auto_move_to_foundation(&mut self, card_id: usize) -> bool {
        let Some(card) = self.game.card(card_id) else {
            return false;
        };
        if self.game.top_card(card.pile_index).map(|top| top.id) != Some(card_id) {
            return false;
        }
        let layout = self.game.layout();
        let target = layout
            .foundation_piles()
            .find(|&pile| self.game.pile_len(pile) > 0 && self.game.can_move(card_id, pile))
            .or_else(|| {
                layout
                    .foundation_piles()
                    .find(|&pile| self.game.pile_len(pile) == 0 && self.game.can_move(card_id, pile))
            });
        match target {
            Some(pile) => self.move_card(card_id, pile),
            None => false,
        }
    }
}
