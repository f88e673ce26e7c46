//! Settings screen: toggles and static navigation rows.
//!
//! # Invariants
//! - Only toggles mutate state; navigation rows are static.
//! - Setting a toggle to its current value is not a mutation.

use crate::model::settings::{SettingKey, Settings};
use crate::notify::ChangeNotifier;
use log::debug;
use serde::Serialize;

/// Non-toggle row on the settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: String,
}

/// Render input for the settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsView {
    pub settings: Settings,
    pub navigation: Vec<NavigationEntry>,
    pub revision: u64,
}

#[derive(Debug, Default)]
pub struct SettingsScreen {
    settings: Settings,
    changes: ChangeNotifier<SettingKey>,
}

impl SettingsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Sets one toggle; returns whether the value changed.
    pub fn set(&mut self, key: SettingKey, value: bool) -> bool {
        if !self.settings.set(key, value) {
            return false;
        }
        debug!(
            "event=setting_change module=settings status=ok key={} value={}",
            key.as_str(),
            value
        );
        self.changes.notify(key);
        true
    }

    /// Flips one toggle and returns its new value.
    pub fn toggle(&mut self, key: SettingKey) -> bool {
        let value = !self.settings.get(key);
        self.set(key, value);
        value
    }

    pub fn revision(&self) -> u64 {
        self.changes.revision()
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&SettingKey) + Send + 'static) {
        self.changes.subscribe(observer);
    }

    pub fn navigation() -> Vec<NavigationEntry> {
        vec![
            NavigationEntry {
                id: "privacy",
                title: "Privacy & Security",
                subtitle: "Protect your love messages".to_string(),
            },
            NavigationEntry {
                id: "about",
                title: "About",
                subtitle: format!("Version {}", crate::core_version()),
            },
        ]
    }

    pub fn view(&self) -> SettingsView {
        SettingsView {
            settings: self.settings,
            navigation: Self::navigation(),
            revision: self.revision(),
        }
    }
}
