//! Output formatter: pure constructors turning profile fragments into lines.
//!
//! Nothing here has side effects; every function is deterministic in its
//! arguments.

use folio_profile::Profile;

use crate::line::{ColorTag, Line, LineKind, Span, SpecialRender};

/// Number of cells in a level bar.
pub const METER_CELLS: usize = 20;
/// Column the description starts at in `help` entries.
pub const HELP_COLUMN: usize = 14;

const FILLED: char = '\u{2588}';
const EMPTY: char = '\u{2591}';

pub fn plain(text: impl Into<String>, color: Option<ColorTag>) -> Line {
    Line {
        color,
        ..Line::new(LineKind::Output, text)
    }
}

pub fn blank() -> Line {
    Line::new(LineKind::Output, "")
}

pub fn section_header(text: impl Into<String>) -> Line {
    Line::new(LineKind::System, text).with_color(ColorTag::Accent)
}

pub fn success(text: impl Into<String>) -> Line {
    plain(text, Some(ColorTag::Success))
}

pub fn error_line(text: impl Into<String>) -> Line {
    Line::new(LineKind::Error, text).with_color(ColorTag::Error)
}

pub fn warning(text: impl Into<String>) -> Line {
    plain(text, Some(ColorTag::Warning))
}

pub fn muted(text: impl Into<String>) -> Line {
    plain(text, Some(ColorTag::Muted))
}

/// Input echo for the scrollback.
pub fn input_echo(text: impl Into<String>) -> Line {
    Line::new(LineKind::Input, text)
}

/// The 20-cell bar alone: `round(percentage / 5)` filled cells, half-up.
pub fn meter(percentage: u8) -> String {
    let filled = ((usize::from(percentage) + 2) / 5).min(METER_CELLS);
    let mut bar = String::with_capacity(METER_CELLS * 3);
    bar.extend(std::iter::repeat_n(FILLED, filled));
    bar.extend(std::iter::repeat_n(EMPTY, METER_CELLS - filled));
    bar
}

/// A level bar prefixed by its label.
pub fn level_bar(label: &str, percentage: u8) -> String {
    format!("{label}{}", meter(percentage))
}

/// A clickable span that re-submits `command`.
pub fn command_link(command: &str) -> Span {
    Span::action(command)
}

/// One `help` row: the command padded to [`HELP_COLUMN`], then its description.
pub fn help_entry(command: &str, description: &str) -> Line {
    let pad = " ".repeat(HELP_COLUMN.saturating_sub(command.chars().count()).max(1));
    Line::inline(
        LineKind::Output,
        vec![
            Span::text("  "),
            command_link(command),
            Span::text(format!("{pad}{description}")),
        ],
    )
}

/// Greedy word wrap. Words are never split; a word longer than `max_width`
/// gets a line of its own.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Top border of an ASCII box: `┌─ TITLE ─────`, `width` cells after the corner.
pub fn box_top(title: &str, width: usize) -> Line {
    let bar = format!("\u{2500} {title} ");
    let fill = width.saturating_sub(bar.chars().count());
    section_header(format!("  \u{250c}{bar}{}", "\u{2500}".repeat(fill)))
}

/// Bottom border of an ASCII box.
pub fn box_bottom(width: usize) -> Line {
    section_header(format!("  \u{2514}{}", "\u{2500}".repeat(width)))
}

/// Empty left edge of an ASCII box.
pub fn box_edge() -> Line {
    section_header("  \u{2502}")
}

/// Greeting shown when a session starts and after every clear.
pub fn welcome(profile: &Profile) -> Vec<Line> {
    vec![
        blank(),
        Line::special(
            SpecialRender::WelcomeBanner,
            format!(
                "  PORTFOLIO TERMINAL v1.0 | {} | {}",
                profile.name, profile.title
            ),
        ),
        blank(),
        Line::inline(
            LineKind::Output,
            vec![
                Span::colored("  Bienvenue ! Tapez ", ColorTag::Success),
                command_link("help"),
                Span::colored(" pour la liste des commandes.", ColorTag::Success),
            ],
        )
        .with_color(ColorTag::Success),
        Line::inline(
            LineKind::Output,
            vec![
                Span::colored("  Essayez aussi : ", ColorTag::Muted),
                command_link("whoami"),
                Span::colored(", ", ColorTag::Muted),
                command_link("projects"),
                Span::colored(", ", ColorTag::Muted),
                command_link("skills"),
                Span::colored(", ", ColorTag::Muted),
                command_link("cv"),
            ],
        )
        .with_color(ColorTag::Muted),
        blank(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Markup;
    use proptest::prelude::*;

    fn count(s: &str, c: char) -> usize {
        s.chars().filter(|&x| x == c).count()
    }

    #[test]
    fn meter_multiples_of_five() {
        let bar = meter(45);
        assert_eq!(count(&bar, FILLED), 9);
        assert_eq!(count(&bar, EMPTY), 11);
        let full = meter(100);
        assert_eq!(count(&full, FILLED), 20);
        assert_eq!(count(&full, EMPTY), 0);
        assert_eq!(count(&meter(0), EMPTY), 20);
    }

    #[test]
    fn meter_rounds_half_up() {
        assert_eq!(count(&meter(12), FILLED), 2);
        assert_eq!(count(&meter(13), FILLED), 3);
        assert_eq!(count(&meter(97), FILLED), 19);
        assert_eq!(count(&meter(98), FILLED), 20);
    }

    #[test]
    fn meter_clamps_above_hundred() {
        assert_eq!(count(&meter(255), FILLED), 20);
        assert_eq!(meter(255).chars().count(), METER_CELLS);
    }

    #[test]
    fn level_bar_prefixed_by_label() {
        let bar = level_bar("X", 45);
        assert!(bar.starts_with('X'));
        assert_eq!(count(&bar, FILLED), 9);
        assert_eq!(count(&bar, EMPTY), 11);
    }

    #[test]
    fn help_entry_pads_to_column() {
        let line = help_entry("cv", "Telecharger mon CV (PDF)");
        assert_eq!(line.text, format!("  cv{}Telecharger mon CV (PDF)", " ".repeat(12)));
        assert_eq!(line.actions(), ["cv"]);
    }

    #[test]
    fn help_entry_long_command_keeps_one_space() {
        let line = help_entry("averyverylongcmd", "desc");
        assert_eq!(line.text, "  averyverylongcmd desc");
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(lines, ["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
    }

    #[test]
    fn wrap_never_splits_long_words() {
        let lines = wrap("a supercalifragilistic b", 5);
        assert_eq!(lines, ["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn wrap_empty_text() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn box_top_fills_to_width() {
        let line = box_top("CONTACT", 51);
        let dashes = count(&line.text, '\u{2500}');
        assert_eq!(dashes, 42);
        assert!(line.text.starts_with("  \u{250c}\u{2500} CONTACT "));
        assert_eq!(line.kind, LineKind::System);
    }

    #[test]
    fn box_bottom_width() {
        assert_eq!(count(&box_bottom(50).text, '\u{2500}'), 50);
    }

    #[test]
    fn welcome_sequence_shape() {
        let profile = Profile::builtin().unwrap();
        let lines = welcome(&profile);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1].markup, Some(Markup::Special(SpecialRender::WelcomeBanner)));
        assert!(lines[1].text.contains("Maxime LAUNOY"));
        assert_eq!(lines[3].actions(), ["help"]);
        assert_eq!(lines[4].actions(), ["whoami", "projects", "skills", "cv"]);
        assert_eq!(
            lines[3].text,
            "  Bienvenue ! Tapez help pour la liste des commandes."
        );
    }

    #[test]
    fn constructors_tag_kind_and_color() {
        assert_eq!(error_line("x").kind, LineKind::Error);
        assert_eq!(error_line("x").color, Some(ColorTag::Error));
        assert_eq!(section_header("x").color, Some(ColorTag::Accent));
        assert_eq!(success("x").color, Some(ColorTag::Success));
        assert_eq!(warning("x").color, Some(ColorTag::Warning));
        assert_eq!(muted("x").color, Some(ColorTag::Muted));
        assert_eq!(plain("x", None).color, None);
        assert!(blank().is_blank());
        assert_eq!(input_echo("ls").kind, LineKind::Input);
    }

    proptest! {
        #[test]
        fn meter_is_always_twenty_cells(p: u8) {
            prop_assert_eq!(meter(p).chars().count(), METER_CELLS);
        }

        #[test]
        fn wrapped_lines_fit_or_hold_one_word(
            words in proptest::collection::vec("[a-z]{1,12}", 0..30),
            width in 1usize..40,
        ) {
            let text = words.join(" ");
            let lines = wrap(&text, width);
            for l in &lines {
                prop_assert!(l.chars().count() <= width || !l.contains(' '));
            }
            let rejoined = lines.join(" ");
            prop_assert_eq!(rejoined, text);
        }
    }
}
