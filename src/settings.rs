//! Player preferences
//!
//! Persisted in LocalStorage. Only the device profile choice lives here;
//! scores are never stored.

use serde::{Deserialize, Serialize};

use crate::tuning::DeviceProfile;

/// Which tuning profile to play with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProfilePreference {
    /// Detect from the user agent
    #[default]
    Auto,
    Desktop,
    Mobile,
}

impl ProfilePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfilePreference::Auto => "Auto",
            ProfilePreference::Desktop => "Desktop",
            ProfilePreference::Mobile => "Mobile",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("auto") {
            return Some(ProfilePreference::Auto);
        }
        DeviceProfile::from_str(s).map(|profile| match profile {
            DeviceProfile::Desktop => ProfilePreference::Desktop,
            DeviceProfile::Mobile => ProfilePreference::Mobile,
        })
    }

    /// Settle on a concrete profile
    pub fn resolve(&self, user_agent: &str) -> DeviceProfile {
        match self {
            ProfilePreference::Auto => DeviceProfile::detect(user_agent),
            ProfilePreference::Desktop => DeviceProfile::Desktop,
            ProfilePreference::Mobile => DeviceProfile::Mobile,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub profile: ProfilePreference,
    /// Start with the autopilot playing
    #[serde(default)]
    pub idle_mode: bool,
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "hurdle_run_settings";

    pub fn to_json(&self) -> String {
        // Plain enums and bools always serialize
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse stored settings, falling back to defaults on garbage
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring stored settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, &self.to_json());
            log::info!("Settings saved");
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            profile: ProfilePreference::Mobile,
            idle_mode: true,
        };
        assert_eq!(Settings::from_json(&settings.to_json()), settings);
    }

    #[test]
    fn test_missing_fields_default() {
        assert_eq!(Settings::from_json("{}"), Settings::default());
        assert_eq!(Settings::from_json("not json"), Settings::default());
    }

    #[test]
    fn test_preference_resolution() {
        let android = "Mozilla/5.0 (Linux; Android 14) Mobile Safari/537.36";
        assert_eq!(ProfilePreference::Auto.resolve(android), DeviceProfile::Mobile);
        assert_eq!(ProfilePreference::Desktop.resolve(android), DeviceProfile::Desktop);
        assert_eq!(ProfilePreference::Mobile.resolve(""), DeviceProfile::Mobile);
        assert_eq!(ProfilePreference::from_str("AUTO"), Some(ProfilePreference::Auto));
        assert_eq!(ProfilePreference::from_str("phone"), Some(ProfilePreference::Mobile));
        assert_eq!(ProfilePreference::from_str("tv"), None);
    }
}
