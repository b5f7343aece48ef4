// src/memory/mod.rs

pub mod prefs;
pub mod store;

pub use prefs::PreferencesStore;
pub use store::{ExecutionRecord, HistoryStore};
