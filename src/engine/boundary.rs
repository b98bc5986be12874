//! The engine's view of the presentation layer.
//!
//! The session never touches widgets or screen layout directly; it asks the
//! host which card or pile sits under a point and where a card is drawn, and
//! it persists the difficulty through a small key-value store. Hosts
//! implement these traits; tests script them.

use std::collections::HashMap;

use crate::game::{MAX_SUIT_COUNT, MIN_SUIT_COUNT};

/// Hit testing and geometry supplied by the presentation layer. Geometry is
/// used only for drag offsets and drop points, never for rule decisions.
pub trait BoardAdapter {
    /// The card occupying a screen point, if any.
    fn card_at(&self, x: f64, y: f64) -> Option<usize>;
    /// The pile occupying a screen point, if any.
    fn pile_at(&self, x: f64, y: f64) -> Option<usize>;
    /// A card's rendered top-left corner.
    fn card_origin(&self, card_id: usize) -> (f64, f64);
    /// Rendered card dimensions.
    fn card_size(&self) -> (f64, f64);
}

pub const SETTINGS_KEY_SUIT_COUNT: &str = "suit-count";

/// External key-value store for the settings that outlive a session.
/// Only the difficulty is persisted; everything else is rebuilt by a deal.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

pub fn load_suit_count(store: &dyn SettingsStore) -> Option<u8> {
    let raw = store.get(SETTINGS_KEY_SUIT_COUNT)?;
    let count = raw.trim().parse::<u8>().ok()?;
    (MIN_SUIT_COUNT..=MAX_SUIT_COUNT)
        .contains(&count)
        .then_some(count)
}

pub fn store_suit_count(store: &mut dyn SettingsStore, count: u8) {
    store.set(SETTINGS_KEY_SUIT_COUNT, &count.to_string());
}

/// In-process store for tests, demos, and hosts without persistent settings.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: HashMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
