use crate::common::output::{OutputStyle, PlainStyle, Tone};
use crate::domain::value_objects::change_kind::ChangeKind;
use colored::{Color, Colorize};
use console::Term;

/// Terminal colours for every [`Tone`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ColoredStyle;

impl ColoredStyle {
    fn color_of(tone: Tone) -> Color {
        match tone {
            Tone::Repository => Color::Blue,
            Tone::Revision => Color::Yellow,
            Tone::Branch | Tone::Highlight => Color::Green,
            Tone::Date => Color::Magenta,
            Tone::Author => Color::Red,
            Tone::Warning => Color::Yellow,
            Tone::Failure => Color::Red,
            Tone::Change(kind) => match kind {
                ChangeKind::Added => Color::Green,
                ChangeKind::Deleted => Color::Red,
                ChangeKind::Modified => Color::Yellow,
                ChangeKind::Replaced => Color::Blue,
                ChangeKind::Merged => Color::Cyan,
                ChangeKind::Conflicted => Color::Magenta,
                _ => Color::White,
            },
        }
    }
}

impl OutputStyle for ColoredStyle {
    fn paint(&self, text: &str, tone: Tone) -> String {
        let painted = text.color(Self::color_of(tone));
        if tone == Tone::Failure {
            painted.bold().to_string()
        } else {
            painted.to_string()
        }
    }
}

/// Picks the style for one output stream: colours only on a terminal and only
/// when not disabled
pub fn select_style(no_color: bool, term: &Term) -> Box<dyn OutputStyle> {
    if !no_color && term.is_term() {
        Box::new(ColoredStyle)
    } else {
        Box::new(PlainStyle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_colors() {
        assert_eq!(ColoredStyle::color_of(Tone::Repository), Color::Blue);
        assert_eq!(ColoredStyle::color_of(Tone::Change(ChangeKind::Added)), Color::Green);
        assert_eq!(ColoredStyle::color_of(Tone::Change(ChangeKind::Conflicted)), Color::Magenta);
        assert_eq!(ColoredStyle::color_of(Tone::Change(ChangeKind::Missing)), Color::White);
    }

    #[test]
    fn test_paint_keeps_text() {
        let painted = ColoredStyle.paint("#    10", Tone::Revision);
        assert!(painted.contains("#    10"));
    }

    #[test]
    fn test_disabled_color_is_plain() {
        let style = select_style(true, &Term::stdout());
        assert_eq!(style.paint("Lib", Tone::Repository), "Lib");
    }
}
