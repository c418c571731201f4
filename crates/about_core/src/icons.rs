use std::collections::HashMap;

/// Glyph a highlight card shows. Rendering is left to the icon library;
/// the handle only names which glyph to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconHandle {
    PalmTree,
    Waves,
    Users,
    Heart,
    Sun,
    Utensils,
    Wifi,
    Car,
    Plane,
}

impl IconHandle {
    /// Glyph name in the icon library's kebab-case catalog.
    pub fn glyph_name(self) -> &'static str {
        match self {
            IconHandle::PalmTree => "palmtree",
            IconHandle::Waves => "waves",
            IconHandle::Users => "users",
            IconHandle::Heart => "heart",
            IconHandle::Sun => "sun",
            IconHandle::Utensils => "utensils",
            IconHandle::Wifi => "wifi",
            IconHandle::Car => "car",
            IconHandle::Plane => "plane",
        }
    }
}

const STANDARD_ICONS: [(&str, IconHandle); 10] = [
    ("palmtree", IconHandle::PalmTree),
    ("waves", IconHandle::Waves),
    ("users", IconHandle::Users),
    ("heart", IconHandle::Heart),
    ("pool", IconHandle::Waves),
    ("sun", IconHandle::Sun),
    ("utensils", IconHandle::Utensils),
    ("wifi", IconHandle::Wifi),
    ("car", IconHandle::Car),
    ("plane", IconHandle::Plane),
];

/// Immutable lookup from content-authored icon keys to glyphs.
///
/// Build it once at startup and hand out references. Keys are matched
/// exactly; anything unknown resolves to the fallback glyph.
#[derive(Debug, Clone)]
pub struct IconRegistry {
    icons: HashMap<&'static str, IconHandle>,
    fallback: IconHandle,
}

impl IconRegistry {
    pub fn standard() -> Self {
        Self {
            icons: STANDARD_ICONS.into_iter().collect(),
            fallback: IconHandle::Heart,
        }
    }

    pub fn resolve(&self, key: &str) -> IconHandle {
        self.icons.get(key).copied().unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> IconHandle {
        self.fallback
    }
}

impl Default for IconRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[path = "tests/icons_tests.rs"]
mod tests;
