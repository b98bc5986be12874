//! Switchback is a single-card solitaire variant: tableau piles build in
//! same-suit adjacent-rank runs in either direction, foundations build a full
//! ten-card suit run starting from rank 0 or rank 9. This crate is the game
//! engine only — deck dealing, move validation, pointer-driven selection,
//! cascading auto-moves, win detection and the deal/win animation sequencers.
//! Rendering, styling and raw input plumbing belong to a host presentation
//! layer, reached through the traits in [`engine::boundary`].

pub mod engine;
pub mod game;

pub use engine::boundary::{BoardAdapter, MemorySettings, SettingsStore};
pub use engine::session::GameSession;
pub use engine::timing::TimingProfile;
pub use engine::view_model::BoardSnapshot;
pub use game::{BoardLayout, Card, PileKind, SwitchbackGame, PILE_COUNT, RANKS_PER_SUIT};
