//! Roster of puzzle names.
//!
//! # Format
//! ```text
//! # comment lines are skipped
//! Cesar
//! Diego
//!
//! Charly
//! ```
//!
//! One name per line. Order is display order.

use crate::error::{GameError, Result};
use crate::types::{GameSettings, Puzzle};
use std::collections::HashSet;

/// Names shipped with the game.
pub const DEFAULT_NAMES: &[&str] = &[
    "Cesar", "Diego", "Charly", "Elinore", "Gustave", "June", "Victoire", "Isaure", "Matteo",
    "Alexandra", "Albane", "Elliot",
];

/// Built-in roster.
pub fn default_roster() -> Vec<Puzzle> {
    DEFAULT_NAMES.iter().copied().map(Puzzle::new).collect()
}

/// Parse a roster file.
pub fn parse_roster(content: &str) -> Result<Vec<Puzzle>> {
    let mut puzzles = Vec::new();
    let mut seen = HashSet::new();

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        match parse_line(line) {
            LineType::Name(name) => {
                validate_name(name, line_num)?;
                if !seen.insert(name.to_lowercase()) {
                    tracing::warn!(name, line = line_num, "duplicate name in roster");
                }
                puzzles.push(Puzzle::new(name));
            }
            LineType::Comment | LineType::Empty => {}
        }
    }

    if puzzles.is_empty() {
        return Err(GameError::EmptyRoster);
    }
    Ok(puzzles)
}

/// Image location for a name: `<images_dir>/<name>.<ext>`.
pub fn image_path(settings: &GameSettings, name: &str) -> String {
    format!("{}/{}.{}", settings.images_dir, name, settings.image_ext)
}

enum LineType<'a> {
    Name(&'a str),
    Comment,
    Empty,
}

fn parse_line(line: &str) -> LineType<'_> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        LineType::Empty
    } else if trimmed.starts_with('#') {
        LineType::Comment
    } else {
        LineType::Name(trimmed)
    }
}

// Names become file names, so anything that escapes the images directory is out.
fn validate_name(name: &str, line: usize) -> Result<()> {
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(GameError::InvalidName {
            line,
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(puzzles: &[Puzzle]) -> Vec<&str> {
        puzzles.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn default_roster_keeps_order() {
        let roster = default_roster();
        assert_eq!(roster.len(), 12);
        assert_eq!(roster[0].name, "Cesar");
        assert_eq!(roster[4].name, "Gustave");
        assert_eq!(roster[11].name, "Elliot");
    }

    #[test]
    fn parse_names_comments_and_blanks() {
        let input = "# family\nCesar\n\n  Diego  \n#Charly\nJune\n";
        let roster = parse_roster(input).unwrap();
        assert_eq!(names(&roster), vec!["Cesar", "Diego", "June"]);
    }

    #[test]
    fn parse_keeps_duplicates() {
        let roster = parse_roster("June\njune\n").unwrap();
        assert_eq!(names(&roster), vec!["June", "june"]);
    }

    #[test]
    fn parse_keeps_inner_spaces() {
        let roster = parse_roster("Jean Paul\n").unwrap();
        assert_eq!(roster[0].name, "Jean Paul");
    }

    #[test]
    fn reject_empty_roster() {
        assert!(matches!(parse_roster(""), Err(GameError::EmptyRoster)));
        assert!(matches!(parse_roster("# only\n\n"), Err(GameError::EmptyRoster)));
    }

    #[test]
    fn reject_path_like_names() {
        let result = parse_roster("Cesar\n../etc/passwd\n");
        assert!(matches!(result, Err(GameError::InvalidName { line: 2, .. })));
        assert!(matches!(parse_roster(".."), Err(GameError::InvalidName { line: 1, .. })));
        assert!(matches!(parse_roster("a\\b"), Err(GameError::InvalidName { .. })));
    }

    #[test]
    fn image_path_uses_settings() {
        let settings = GameSettings::default();
        assert_eq!(image_path(&settings, "Albane"), "pictures/Albane.jpeg");

        let settings = GameSettings {
            images_dir: "img".to_string(),
            image_ext: "png".to_string(),
            ..GameSettings::default()
        };
        assert_eq!(image_path(&settings, "Albane"), "img/Albane.png");
    }
}
