//! Process-wide accessibility preferences. One provider component owns the
//! settings; everything under it reads an immutable snapshot through context
//! and re-renders when the owner publishes a change.

use log::info;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

const STORAGE_KEY: &str = "memory-companion-accessibility";

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilitySettings {
    pub reduced_motion: bool,
    pub large_text: bool,
    pub high_contrast: bool,
}

fn parse_stored(raw: &str) -> Option<AccessibilitySettings> {
    serde_json::from_str(raw).ok()
}

/// Settings implied by the browser/OS when the user has never chosen any.
fn system_defaults() -> AccessibilitySettings {
    let reduced_motion = web_sys::window()
        .and_then(|window| {
            window
                .match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|query| query.matches())
        .unwrap_or(false);
    AccessibilitySettings {
        reduced_motion,
        ..AccessibilitySettings::default()
    }
}

fn load_settings() -> AccessibilitySettings {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .and_then(|raw| parse_stored(&raw))
        .unwrap_or_else(system_defaults)
}

fn store_settings(settings: &AccessibilitySettings) {
    if let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    {
        if let Ok(raw) = serde_json::to_string(settings) {
            let _ = storage.set_item(STORAGE_KEY, &raw);
        }
    }
}

/// Read-only snapshot plus the single mutation path back to the owner.
#[derive(Clone, PartialEq)]
pub struct AccessibilityHandle {
    pub settings: AccessibilitySettings,
    pub on_change: Callback<AccessibilitySettings>,
}

#[derive(Properties, PartialEq)]
pub struct AccessibilityProviderProps {
    pub children: Children,
}

#[function_component(AccessibilityProvider)]
pub fn accessibility_provider(props: &AccessibilityProviderProps) -> Html {
    let settings = use_state(load_settings);

    let on_change = {
        let settings = settings.clone();
        Callback::from(move |next: AccessibilitySettings| {
            info!("Accessibility settings updated: {:?}", next);
            store_settings(&next);
            settings.set(next);
        })
    };

    let handle = AccessibilityHandle {
        settings: *settings,
        on_change,
    };

    html! {
        <ContextProvider<AccessibilityHandle> context={handle}>
            { for props.children.iter() }
        </ContextProvider<AccessibilityHandle>>
    }
}

/// Current settings snapshot. Outside a provider (tests, detached mounts)
/// this falls back to defaults with an inert change callback.
#[hook]
pub fn use_accessibility() -> AccessibilityHandle {
    use_context::<AccessibilityHandle>().unwrap_or_else(|| AccessibilityHandle {
        settings: AccessibilitySettings::default(),
        on_change: Callback::noop(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_settings_round_trip() {
        let settings = AccessibilitySettings {
            reduced_motion: true,
            large_text: false,
            high_contrast: true,
        };
        let raw = serde_json::to_string(&settings).unwrap();
        assert_eq!(parse_stored(&raw), Some(settings));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed = parse_stored(r#"{"reduced_motion":true}"#).unwrap();
        assert!(parsed.reduced_motion);
        assert!(!parsed.large_text);
        assert!(!parsed.high_contrast);
    }

    #[test]
    fn malformed_storage_is_rejected() {
        assert_eq!(parse_stored("not json"), None);
        assert_eq!(parse_stored(""), None);
    }
}
