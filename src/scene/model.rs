use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level scene description file, `{ "scene": { ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFile {
    /// The single scene in the file.
    pub scene: Scene,
}

/// One scene: background, cast and the ordered dialogue list.
///
/// The planning core reads only `background.end` and the dialogue fields;
/// everything else is carried for the orchestration layer (image generation,
/// voice synthesis) and round-trips untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Background description and nominal time range.
    pub background: Background,
    /// Characters appearing in the scene.
    #[serde(default)]
    pub characters: Vec<Character>,
    /// Ordered dialogue lines.
    #[serde(default)]
    pub dialogues: Vec<Dialogue>,
}

/// Scene background entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Background {
    /// Prompt-style description, consumed by the image-generation stage.
    #[serde(default)]
    pub description: String,
    /// Nominal start timestamp.
    #[serde(default)]
    pub start: Option<String>,
    /// Nominal end timestamp.
    #[serde(default)]
    pub end: Option<String>,
}

/// Cast entry, consumed by the image/voice stages only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Character name, the key dialogues refer to.
    pub name: String,
    /// Visual description for image generation.
    #[serde(default)]
    pub appearance: String,
    /// Voice-selection hint for speech synthesis.
    #[serde(default)]
    pub gender: Option<String>,
}

/// One dialogue record. Immutable input; timestamps stay as strings until the
/// timeline builder converts them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dialogue {
    /// Speaking character's name.
    pub character: String,
    /// Start timestamp (`HH:MM:SS`, `MM:SS` or `SS[.fff]`).
    pub start: String,
    /// End timestamp, expected (not guaranteed) to be after `start`.
    pub end: String,
    /// Spoken line.
    pub line: String,
}

/// Horizontal anchor for a character's bubbles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Flush against the left margin.
    #[default]
    Left,
    /// Flush against the right margin.
    Right,
    /// Horizontally centered.
    Center,
}

/// Vertical anchor for a character's bubbles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Vertical {
    /// Below the top margin.
    Top,
    /// Above the bottom margin.
    #[default]
    Bottom,
}

/// Which side the speech-bubble tail protrudes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TailSide {
    /// Tail on the bubble's left edge.
    Left,
    /// Tail on the bubble's right edge.
    Right,
}

/// Per-character layout preference.
///
/// Every field has a documented default, so a partial (or entirely missing)
/// entry is always usable: `{side: left, vertical: bottom, max_width: 400,
/// tail_side: side}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharacterLayout {
    /// Horizontal anchor.
    #[serde(default)]
    pub side: Side,
    /// Vertical anchor.
    #[serde(default)]
    pub vertical: Vertical,
    /// Maximum text width in pixels before wrapping.
    #[serde(default = "default_max_width")]
    pub max_width: u32,
    /// Tail side; `None` follows `side` (center falls back to left).
    #[serde(default)]
    pub tail_side: Option<TailSide>,
}

fn default_max_width() -> u32 {
    400
}

impl Default for CharacterLayout {
    fn default() -> Self {
        Self {
            side: Side::Left,
            vertical: Vertical::Bottom,
            max_width: default_max_width(),
            tail_side: None,
        }
    }
}

impl CharacterLayout {
    /// Effective tail side after applying the `side` fallback.
    pub fn resolved_tail_side(&self) -> TailSide {
        match self.tail_side {
            Some(t) => t,
            None => match self.side {
                Side::Right => TailSide::Right,
                Side::Left | Side::Center => TailSide::Left,
            },
        }
    }
}

/// Character-name → layout preference map.
///
/// Lookup never fails: an unrecognized character resolves to
/// [`CharacterLayout::default`] with a debug event. A missing
/// preference entry must never drop a dialogue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterPrefs(pub BTreeMap<String, CharacterLayout>);

impl CharacterPrefs {
    /// Resolve the layout for `character`, falling back to the default.
    pub fn layout_for(&self, character: &str) -> CharacterLayout {
        match self.0.get(character) {
            Some(layout) => *layout,
            None => {
                tracing::debug!(character, "no layout preference, using default");
                CharacterLayout::default()
            }
        }
    }

    /// Insert or replace the preference for `character`.
    pub fn set(&mut self, character: impl Into<String>, layout: CharacterLayout) {
        self.0.insert(character.into(), layout);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
