//! Persisted player progress (coins / level / streak) and the key-value port it
//! is stored through.
//!
//! Each counter lives under its own string key as a decimal integer. Reads never
//! fail: an absent or unparsable value falls back to that field's default from
//! [`FIELDS`]. Writes only touch keys whose value actually changed.

use std::collections::BTreeMap;

use crate::GameError;

pub const COINS_KEY: &str = "progress.coins";
pub const LEVEL_KEY: &str = "progress.level";
pub const STREAK_KEY: &str = "progress.streak";

/// Minimal string key-value store (browser `localStorage` or an in-memory map).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError>;
}

/// In-memory store. Used by tests and when the browser denies `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressState {
    pub coins: u32,
    pub level: u32,
    pub streak: u32,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            coins: 0,
            level: 1,
            streak: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Coins,
    Level,
    Streak,
}

/// Storage key, fallback value and lower bound for each persisted counter.
struct FieldEntry {
    field: Field,
    key: &'static str,
    default: u32,
    min: u32,
}

const FIELDS: [FieldEntry; 3] = [
    FieldEntry { field: Field::Coins, key: COINS_KEY, default: 0, min: 0 },
    FieldEntry { field: Field::Level, key: LEVEL_KEY, default: 1, min: 1 },
    FieldEntry { field: Field::Streak, key: STREAK_KEY, default: 0, min: 0 },
];

impl ProgressState {
    fn get(&self, field: Field) -> u32 {
        match field {
            Field::Coins => self.coins,
            Field::Level => self.level,
            Field::Streak => self.streak,
        }
    }

    fn slot(&mut self, field: Field) -> &mut u32 {
        match field {
            Field::Coins => &mut self.coins,
            Field::Level => &mut self.level,
            Field::Streak => &mut self.streak,
        }
    }

    /// Read all counters from `store`. Pure with respect to the store: two loads
    /// without an intervening write return equal states.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let mut state = Self::default();
        for entry in &FIELDS {
            let value = match store.get(entry.key).as_deref().and_then(parse_counter) {
                Some(v) => v.max(entry.min),
                None => entry.default,
            };
            *state.slot(entry.field) = value;
        }
        state
    }

    /// Write back every counter that differs between `previous` and `self`.
    /// Every changed key is attempted; the first failure is returned.
    pub fn save_changes<S: KeyValueStore + ?Sized>(
        &self,
        previous: &ProgressState,
        store: &mut S,
    ) -> Result<usize, GameError> {
        let mut written = 0;
        let mut first_err = None;
        for entry in &FIELDS {
            let value = self.get(entry.field);
            if value == previous.get(entry.field) {
                continue;
            }
            match store.set(entry.key, &value.to_string()) {
                Ok(()) => written += 1,
                Err(err) => {
                    first_err.get_or_insert(err);
                }
            }
        }
        match first_err {
            Some(err) => Err(err),
            None => Ok(written),
        }
    }

    /// Unconditionally write all three counters.
    pub fn save_all<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), GameError> {
        for entry in &FIELDS {
            store.set(entry.key, &self.get(entry.field).to_string())?;
        }
        Ok(())
    }
}

/// Decimal integer, tolerating surrounding whitespace and a fractional part
/// (`"3.0"`, `"12.7"` floor). Negative, non-finite or non-numeric input yields `None`.
fn parse_counter(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(v) = raw.parse::<u32>() {
        return Some(v);
    }
    let f = raw.parse::<f64>().ok()?;
    if !f.is_finite() || f < 0.0 || f > u32::MAX as f64 {
        return None;
    }
    Some(f.floor() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_uses_field_defaults() {
        let store = MemoryStore::new();
        let state = ProgressState::load(&store);
        assert_eq!(state, ProgressState { coins: 0, level: 1, streak: 0 });
    }

    #[test]
    fn stored_values_are_read_back() {
        let store = MemoryStore::with_entries([
            (COINS_KEY, "45"),
            (LEVEL_KEY, "3"),
            (STREAK_KEY, " 6 "),
        ]);
        assert_eq!(
            ProgressState::load(&store),
            ProgressState { coins: 45, level: 3, streak: 6 }
        );
    }

    #[test]
    fn garbage_falls_back_per_field() {
        let store = MemoryStore::with_entries([
            (COINS_KEY, "lots"),
            (LEVEL_KEY, "NaN"),
            (STREAK_KEY, "-4"),
        ]);
        assert_eq!(ProgressState::load(&store), ProgressState::default());
    }

    #[test]
    fn level_zero_is_clamped_to_one() {
        let store = MemoryStore::with_entries([(LEVEL_KEY, "0")]);
        assert_eq!(ProgressState::load(&store).level, 1);
    }

    #[test]
    fn parse_counter_floors_fractions() {
        assert_eq!(parse_counter("3.0"), Some(3));
        assert_eq!(parse_counter("12.7"), Some(12));
        assert_eq!(parse_counter("1e2"), Some(100));
        assert_eq!(parse_counter(""), None);
        assert_eq!(parse_counter("inf"), None);
        assert_eq!(parse_counter("-0.5"), None);
    }

    #[test]
    fn save_changes_only_writes_changed_keys() {
        let mut store = MemoryStore::new();
        let before = ProgressState { coins: 10, level: 2, streak: 3 };
        let after = ProgressState { coins: 15, level: 2, streak: 4 };
        let written = after.save_changes(&before, &mut store).unwrap();
        assert_eq!(written, 2);
        assert_eq!(store.get(COINS_KEY).as_deref(), Some("15"));
        assert_eq!(store.get(STREAK_KEY).as_deref(), Some("4"));
        assert_eq!(store.get(LEVEL_KEY), None);
    }

    /// Rejects writes to one key, like a quota error hitting a single `setItem`.
    struct RejectingStore {
        inner: MemoryStore,
        reject: &'static str,
    }

    impl KeyValueStore for RejectingStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), GameError> {
            if key == self.reject {
                return Err(GameError::Storage("quota exceeded".to_string()));
            }
            self.inner.set(key, value)
        }
    }

    #[test]
    fn failed_write_does_not_skip_later_keys() {
        let mut store = RejectingStore { inner: MemoryStore::new(), reject: COINS_KEY };
        let before = ProgressState { coins: 10, level: 2, streak: 7 };
        let after = ProgressState { coins: 15, level: 3, streak: 8 };
        let err = after.save_changes(&before, &mut store).unwrap_err();
        assert!(matches!(err, GameError::Storage(_)));
        assert_eq!(store.inner.get(COINS_KEY), None);
        assert_eq!(store.inner.get(LEVEL_KEY).as_deref(), Some("3"));
        assert_eq!(store.inner.get(STREAK_KEY).as_deref(), Some("8"));
    }

    #[test]
    fn save_all_then_load_round_trips() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        let state = ProgressState { coins: 7, level: 4, streak: 1 };
        state.save_all(&mut store).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(ProgressState::load(&store), state);
    }
}
