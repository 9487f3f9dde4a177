//! Human-readable rendering of notes.
//!
//! Everything here is a pure function of its inputs: no I/O, no mutation.
//! Color is a capability passed in through [`Style`], never process state.

use crate::domain::{Note, Tag};

/// Characters of content shown in list and search previews.
pub const PREVIEW_CHARS: usize = 150;

const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[0;32m";
const YELLOW: &str = "\x1b[1;33m";
const CYAN: &str = "\x1b[0;36m";
const RESET: &str = "\x1b[0m";

/// Whether rendered text carries ANSI color sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    color: bool,
}

impl Style {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// A style that never emits escape sequences.
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    pub fn heading(&self, text: &str) -> String {
        if self.color {
            format!("{BOLD}{CYAN}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    pub fn label(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }
}

/// Joins tags as `a, b, c`.
pub fn tag_list(note: &Note) -> String {
    note.tags()
        .iter()
        .map(Tag::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Truncates to `max_chars` characters, appending `...` when shortened.
pub fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}...", &s[..cut]),
    }
}

/// `[id] Title (tags)` with the creation time on a second line.
pub fn summary(note: &Note, style: Style) -> String {
    let tags = if note.tags().is_empty() {
        String::new()
    } else {
        format!(" {}", style.warning(&format!("({})", tag_list(note))))
    };
    format!(
        "[{}] {}{}\n  {} {}",
        note.id(),
        style.bold(note.title()),
        tags,
        style.label("Created:"),
        note.created_at_display()
    )
}

/// Summary followed by a preview of the content.
pub fn preview(note: &Note, style: Style) -> String {
    format!(
        "{}\n  {}",
        summary(note, style),
        truncate(note.content(), PREVIEW_CHARS).replace('\n', "\n  ")
    )
}

/// Every field, with the content shown in full.
pub fn full(note: &Note, style: Style) -> String {
    let mut out = summary(note, style);
    out.push_str("\n\n");
    out.push_str(&style.bold("--- Content ---"));
    out.push('\n');
    out.push_str(note.content());
    out.push('\n');
    out.push_str(&"-".repeat(20));
    out
}

/// Header above a list of notes.
pub fn list_header(count: usize, tag: Option<&Tag>, style: Style) -> String {
    let filter = tag
        .map(|t| format!(" (Tag Filter: {})", t))
        .unwrap_or_default();
    style.heading(&format!("--- Notes Found ({}){} ---", count, filter))
}

/// Message for an empty listing, distinguishing an empty store from an
/// empty filter result.
pub fn empty_list_message(tag: Option<&Tag>) -> String {
    match tag {
        Some(tag) => format!("No notes found with tag '{}'.", tag),
        None => "No notes found.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewNote, NoteId};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn note(content: &str, tags: &[&str]) -> Note {
        let tags: Vec<String> = tags.iter().map(|s| s.to_string()).collect();
        let created = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        Note::new(
            NoteId::FIRST,
            NewNote::new("Shopping List", content, &tags).unwrap(),
            created,
        )
    }

    #[test]
    fn plain_style_has_no_escapes() {
        let style = Style::plain();
        assert_eq!(style.bold("x"), "x");
        assert_eq!(style.heading("x"), "x");
    }

    #[test]
    fn color_style_wraps_text() {
        let style = Style::new(true);
        assert_eq!(style.success("ok"), "\x1b[0;32mok\x1b[0m");
    }

    #[test]
    fn truncate_short_text_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn truncate_long_text_adds_marker() {
        assert_eq!(truncate("hello world", 5), "hello...");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("héllo wörld", 4), "héll...");
    }

    #[test]
    fn summary_without_tags() {
        let text = summary(&note("milk", &[]), Style::plain());
        assert_eq!(text, "[1] Shopping List\n  Created: 2024-01-15 10:30:00");
    }

    #[test]
    fn summary_with_sorted_tags() {
        let text = summary(&note("milk", &["work", "Home"]), Style::plain());
        assert!(text.starts_with("[1] Shopping List (home, work)\n"));
    }

    #[test]
    fn preview_truncates_content() {
        let long = "x".repeat(PREVIEW_CHARS + 20);
        let text = preview(&note(&long, &[]), Style::plain());
        assert!(text.ends_with(&format!("{}...", "x".repeat(PREVIEW_CHARS))));
    }

    #[test]
    fn full_shows_entire_content() {
        let long = "y".repeat(PREVIEW_CHARS + 20);
        let text = full(&note(&long, &[]), Style::plain());
        assert!(text.contains(&long));
        assert!(!text.contains("..."));
    }

    #[test]
    fn list_header_mentions_filter() {
        let tag = Tag::new("work").unwrap();
        assert_eq!(
            list_header(2, Some(&tag), Style::plain()),
            "--- Notes Found (2) (Tag Filter: work) ---"
        );
        assert_eq!(list_header(3, None, Style::plain()), "--- Notes Found (3) ---");
    }

    #[test]
    fn empty_messages_differ() {
        let tag = Tag::new("home").unwrap();
        assert_eq!(empty_list_message(None), "No notes found.");
        assert_eq!(
            empty_list_message(Some(&tag)),
            "No notes found with tag 'home'."
        );
    }

    #[test]
    fn rendering_does_not_mutate() {
        let n = note("milk", &["a"]);
        let before = n.clone();
        let _ = full(&n, Style::new(true));
        let _ = preview(&n, Style::new(true));
        assert_eq!(n, before);
    }
}
