//! Display and locale preferences.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

/// User preferences for the Pokédex views.
///
/// Favorites and teams live in their own slices; this covers the display
/// and locale knobs only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    theme: Theme,
    language: String,
    animated_sprites: bool,
    shiny_sprites: bool,
    sound_enabled: bool,
    reduced_motion: bool,
    compact_view: bool,
    default_generation: u8,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Auto,
            language: "en".to_string(),
            animated_sprites: true,
            shiny_sprites: false,
            sound_enabled: true,
            reduced_motion: false,
            compact_view: false,
            default_generation: 1,
        }
    }
}

impl Preferences {
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn animated_sprites(&self) -> bool {
        self.animated_sprites
    }

    pub fn shiny_sprites(&self) -> bool {
        self.shiny_sprites
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn compact_view(&self) -> bool {
        self.compact_view
    }

    pub fn default_generation(&self) -> u8 {
        self.default_generation
    }

    /// Returns whether the theme changed.
    pub fn set_theme(&mut self, theme: Theme) -> bool {
        let changed = self.theme != theme;
        self.theme = theme;
        changed
    }

    /// Returns whether the language changed.
    pub fn set_language(&mut self, language: impl Into<String>) -> bool {
        let language = language.into();
        let changed = self.language != language;
        self.language = language;
        changed
    }

    /// Returns whether the generation changed.
    pub fn set_default_generation(&mut self, generation: u8) -> bool {
        let changed = self.default_generation != generation;
        self.default_generation = generation;
        changed
    }

    /// Returns the new value.
    pub fn toggle_animated_sprites(&mut self) -> bool {
        self.animated_sprites = !self.animated_sprites;
        self.animated_sprites
    }

    /// Returns the new value.
    pub fn toggle_shiny_sprites(&mut self) -> bool {
        self.shiny_sprites = !self.shiny_sprites;
        self.shiny_sprites
    }

    /// Returns the new value.
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    /// Returns the new value.
    pub fn toggle_reduced_motion(&mut self) -> bool {
        self.reduced_motion = !self.reduced_motion;
        self.reduced_motion
    }

    /// Returns the new value.
    pub fn toggle_compact_view(&mut self) -> bool {
        self.compact_view = !self.compact_view;
        self.compact_view
    }

    /// Restore the defaults. Returns whether anything changed.
    pub fn reset(&mut self) -> bool {
        let defaults = Self::default();
        let changed = *self != defaults;
        *self = defaults;
        changed
    }
}
