use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Number of tableau (build) piles. Foundations follow immediately after in
/// the pile index space, one per suit in play.
pub const PILE_COUNT: usize = 6;
pub const RANKS_PER_SUIT: u8 = 10;
pub const MIN_SUIT_COUNT: u8 = 4;
pub const MAX_SUIT_COUNT: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PileKind {
    Tableau,
    Foundation,
}

/// The engine-owned pile index space: tableau piles at `0..PILE_COUNT`,
/// then one foundation pile per suit in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    suit_count: u8,
}

impl BoardLayout {
    pub fn new(suit_count: u8) -> Self {
        Self {
            suit_count: suit_count.clamp(MIN_SUIT_COUNT, MAX_SUIT_COUNT),
        }
    }

    pub fn suit_count(self) -> u8 {
        self.suit_count
    }

    pub fn card_count(self) -> usize {
        usize::from(self.suit_count) * usize::from(RANKS_PER_SUIT)
    }

    pub fn pile_count(self) -> usize {
        PILE_COUNT + usize::from(self.suit_count)
    }

    pub fn tableau_piles(self) -> std::ops::Range<usize> {
        0..PILE_COUNT
    }

    pub fn foundation_piles(self) -> std::ops::Range<usize> {
        PILE_COUNT..self.pile_count()
    }

    pub fn pile_kind(self, pile: usize) -> Option<PileKind> {
        if pile < PILE_COUNT {
            Some(PileKind::Tableau)
        } else if pile < self.pile_count() {
            Some(PileKind::Foundation)
        } else {
            None
        }
    }

    /// The foundation pile a suit ends up on when the game is completed.
    pub fn foundation_for_suit(self, suit: u8) -> usize {
        PILE_COUNT + usize::from(suit.min(self.suit_count.saturating_sub(1)))
    }
}

/// A card with its current placement. Identity (`id`, `suit`, `rank`) never
/// changes after the deal; a move rewrites only `pile_index` and
/// `card_pile_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub id: usize,
    pub suit: u8,
    pub rank: u8,
    pub pile_index: usize,
    pub card_pile_index: usize,
}

impl Card {
    pub fn label(&self) -> String {
        format!("{}{}", suit_short(self.suit), self.rank)
    }
}

/// The authoritative card collection plus the pile layout. Piles are derived
/// views over the collection; no pile is stored as its own object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchbackGame {
    layout: BoardLayout,
    cards: Vec<Card>,
}

impl SwitchbackGame {
    /// Deal a fresh game: `suit_count * 10` cards, uniformly shuffled, split
    /// into nearly-equal contiguous chunks across the tableau piles. The
    /// first `n % PILE_COUNT` piles take the extra card.
    pub fn deal(suit_count: u8, seed: u64) -> Self {
        let layout = BoardLayout::new(suit_count);
        let mut deck: Vec<(u8, u8)> = Vec::with_capacity(layout.card_count());
        for suit in 0..layout.suit_count() {
            for rank in 0..RANKS_PER_SUIT {
                deck.push((suit, rank));
            }
        }

        let mut order: Vec<usize> = (0..deck.len()).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        order.shuffle(&mut rng);

        let mut cards: Vec<Card> = deck
            .iter()
            .enumerate()
            .map(|(id, &(suit, rank))| Card {
                id,
                suit,
                rank,
                pile_index: 0,
                card_pile_index: 0,
            })
            .collect();

        let base = order.len() / PILE_COUNT;
        let extra = order.len() % PILE_COUNT;
        let mut cursor = 0_usize;
        for pile in 0..PILE_COUNT {
            let len = base + usize::from(pile < extra);
            for position in 0..len {
                let id = order[cursor];
                cursor += 1;
                cards[id].pile_index = pile;
                cards[id].card_pile_index = position;
            }
        }

        Self { layout, cards }
    }

    pub fn layout(&self) -> BoardLayout {
        self.layout
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: usize) -> Option<Card> {
        self.cards.iter().find(|card| card.id == id).copied()
    }

    fn card_slot(&mut self, id: usize) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id == id)
    }

    pub fn cards_in_pile(&self, pile: usize) -> Vec<Card> {
        let mut members: Vec<Card> = self
            .cards
            .iter()
            .filter(|card| card.pile_index == pile)
            .copied()
            .collect();
        members.sort_by_key(|card| card.card_pile_index);
        members
    }

    pub fn pile_len(&self, pile: usize) -> usize {
        self.cards
            .iter()
            .filter(|card| card.pile_index == pile)
            .count()
    }

    pub fn top_card(&self, pile: usize) -> Option<Card> {
        self.cards
            .iter()
            .filter(|card| card.pile_index == pile)
            .max_by_key(|card| card.card_pile_index)
            .copied()
    }

    /// A foundation pile holding its full, correctly ordered ten-card run.
    pub fn is_pile_complete(&self, pile: usize) -> bool {
        if self.layout.pile_kind(pile) != Some(PileKind::Foundation) {
            return false;
        }
        let members = self.cards_in_pile(pile);
        if members.len() != usize::from(RANKS_PER_SUIT) {
            return false;
        }
        let suit = members[0].suit;
        if members.iter().any(|card| card.suit != suit) {
            return false;
        }
        let ascending = members
            .iter()
            .enumerate()
            .all(|(idx, card)| usize::from(card.rank) == idx);
        let descending = members
            .iter()
            .enumerate()
            .all(|(idx, card)| usize::from(card.rank) == usize::from(RANKS_PER_SUIT) - 1 - idx);
        ascending || descending
    }

    /// A foundation whose bottom card breaks the start-from-0-or-9 rule
    /// (a deliberate cheat placement) accepts nothing until emptied.
    pub fn is_foundation_locked(&self, pile: usize) -> bool {
        if self.layout.pile_kind(pile) != Some(PileKind::Foundation) {
            return false;
        }
        self.cards
            .iter()
            .find(|card| card.pile_index == pile && card.card_pile_index == 0)
            .map(|bottom| bottom.rank != 0 && bottom.rank != RANKS_PER_SUIT - 1)
            .unwrap_or(false)
    }

    /// Target-side legality of landing `id` on `target_pile`. Judges only the
    /// target; whether the card may leave its own pile is the caller's
    /// concern (selection only ever offers pile tops).
    pub fn can_move(&self, id: usize, target_pile: usize) -> bool {
        let Some(card) = self.card(id) else {
            return false;
        };
        match self.layout.pile_kind(target_pile) {
            Some(PileKind::Tableau) => can_stack_tableau(self.top_card(target_pile), card),
            Some(PileKind::Foundation) => {
                if self.is_foundation_locked(target_pile) {
                    return false;
                }
                can_stack_foundation(&self.cards_in_pile(target_pile), card)
            }
            None => false,
        }
    }

    /// Validate and apply a single-card move. Invalid moves are a no-op
    /// returning false; on success only the moved card's placement changes.
    pub fn apply_move(&mut self, id: usize, target_pile: usize) -> bool {
        let Some(card) = self.card(id) else {
            return false;
        };
        if self.top_card(card.pile_index).map(|top| top.id) != Some(id) {
            return false;
        }
        if !self.can_move(id, target_pile) {
            return false;
        }
        let next_position = self
            .top_card(target_pile)
            .map(|top| top.card_pile_index + 1)
            .unwrap_or(0);
        let Some(slot) = self.card_slot(id) else {
            return false;
        };
        slot.pile_index = target_pile;
        slot.card_pile_index = next_position;
        true
    }

    /// Place a card without validation. Used for cheat placements onto empty
    /// foundations; the resulting pile may lock itself (see
    /// [`Self::is_foundation_locked`]).
    pub fn force_place(&mut self, id: usize, target_pile: usize) -> bool {
        if self.card(id).is_none() || self.layout.pile_kind(target_pile).is_none() {
            return false;
        }
        let next_position = self
            .top_card(target_pile)
            .map(|top| top.card_pile_index + 1)
            .unwrap_or(0);
        let Some(slot) = self.card_slot(id) else {
            return false;
        };
        slot.pile_index = target_pile;
        slot.card_pile_index = next_position;
        true
    }

    /// Rewrite every placement to the finished position: one ordered
    /// ascending run per suit on that suit's foundation pile.
    pub fn force_complete(&mut self) {
        let layout = self.layout;
        for card in &mut self.cards {
            card.pile_index = layout.foundation_for_suit(card.suit);
            card.card_pile_index = usize::from(card.rank);
        }
    }

    /// Board builder for state-machine tests elsewhere in the crate.
    #[cfg(test)]
    pub(crate) fn from_parts(suit_count: u8, cards: Vec<Card>) -> Self {
        Self {
            layout: BoardLayout::new(suit_count),
            cards,
        }
    }

    /// Strict victory: every foundation pile holds its complete, correctly
    /// ordered run. Implies the tableau is empty.
    pub fn is_won(&self) -> bool {
        self.layout
            .foundation_piles()
            .all(|pile| self.is_pile_complete(pile))
    }
}

fn rank_adjacent(a: u8, b: u8) -> bool {
    a.abs_diff(b) == 1
}

fn can_stack_tableau(top: Option<Card>, card: Card) -> bool {
    match top {
        None => true,
        Some(top_card) => top_card.suit == card.suit && rank_adjacent(top_card.rank, card.rank),
    }
}

fn can_stack_foundation(pile: &[Card], card: Card) -> bool {
    match pile {
        [] => card.rank == 0 || card.rank == RANKS_PER_SUIT - 1,
        [only] => only.suit == card.suit && rank_adjacent(only.rank, card.rank),
        [first, second, ..] => {
            // Direction locked in by the first two cards of the run.
            let direction = i16::from(second.rank) - i16::from(first.rank);
            let top = pile[pile.len() - 1];
            top.suit == card.suit && i16::from(card.rank) == i16::from(top.rank) + direction
        }
    }
}

pub fn suit_short(suit: u8) -> &'static str {
    match suit {
        0 => "R",
        1 => "K",
        2 => "G",
        3 => "B",
        4 => "Y",
        5 => "P",
        6 => "T",
        7 => "O",
        _ => "?",
    }
}
