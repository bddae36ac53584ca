//! Per-level look: a CSS class hook and a mascot for each level.

/// Visual theme keyed by level. The class lands on the page root and the
/// stylesheet keys colors off it; the mascot is rendered inline as an emoji
/// so no image needs fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelTheme {
    pub css_class: &'static str,
    pub mascot: &'static str,
    pub mascot_emoji: &'static str,
}

const THEMES: [LevelTheme; 5] = [
    LevelTheme {
        css_class: "level-blue",
        mascot: "panda",
        mascot_emoji: "🐼",
    },
    LevelTheme {
        css_class: "level-green",
        mascot: "koala",
        mascot_emoji: "🐨",
    },
    LevelTheme {
        css_class: "level-purple",
        mascot: "sloth",
        mascot_emoji: "🦥",
    },
    LevelTheme {
        css_class: "level-pink",
        mascot: "bear",
        mascot_emoji: "🐻",
    },
    LevelTheme {
        css_class: "level-orange",
        mascot: "lion",
        mascot_emoji: "🦁",
    },
];

impl LevelTheme {
    /// The theme for a level; unknown levels get the level-1 theme.
    #[must_use]
    pub fn for_level(level: u32) -> &'static LevelTheme {
        match level {
            1..=5 => &THEMES[(level - 1) as usize],
            _ => &THEMES[0],
        }
    }
}
