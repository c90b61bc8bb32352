use regex_lite::Regex;

use crate::foundation::error::{CollageError, CollageResult};

/// Default album filename pattern: `<ordering prefix>[yyyy(-mm)(-dd)] <album name>`.
///
/// The prefix is lazy so the first bracketed date wins when a name contains several.
pub const DEFAULT_ALBUM_NAME_PATTERN: &str =
    r"^(?P<prefix>.*?)\[(?P<year>\d{4})(?:-(?P<month>\d{2}))?(?:-(?P<day>\d{2}))?\] (?P<name>.*)";

/// Default label template. `{name}` and `{year}` are substituted from the match.
pub const DEFAULT_ALBUM_LABEL_FORMAT: &str = "{name} ({year})";

/// Turns cover filename stems into display labels.
#[derive(Clone, Debug)]
pub struct AlbumLabeler {
    pattern: Regex,
    format: String,
}

impl Default for AlbumLabeler {
    fn default() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_ALBUM_NAME_PATTERN).expect("built-in album pattern"),
            format: DEFAULT_ALBUM_LABEL_FORMAT.to_string(),
        }
    }
}

impl AlbumLabeler {
    /// Compile a labeler from a pattern and a label template.
    ///
    /// The pattern must declare the named groups `name` and `year`.
    pub fn new(pattern: &str, format: impl Into<String>) -> CollageResult<Self> {
        let pattern = Regex::new(pattern).map_err(|e| {
            CollageError::validation(format!("invalid album name pattern: {e}"))
        })?;
        for group in ["name", "year"] {
            if !pattern.capture_names().flatten().any(|n| n == group) {
                return Err(CollageError::validation(format!(
                    "album name pattern must declare a '{group}' group"
                )));
            }
        }
        Ok(Self {
            pattern,
            format: format.into(),
        })
    }

    /// Label for `stem` (a file name without extension).
    ///
    /// Stems that do not match at position 0 are returned unchanged.
    pub fn label(&self, stem: &str) -> String {
        let Some(caps) = self.pattern.captures(stem) else {
            return stem.to_string();
        };
        if caps.get(0).is_none_or(|m| m.start() != 0) {
            return stem.to_string();
        }
        let name = caps.name("name").map_or("", |m| m.as_str());
        let year = caps.name("year").map_or("", |m| m.as_str());
        self.format.replace("{year}", year).replace("{name}", name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/naming/label.rs"]
mod tests;
