//! Line rendering: semantic tags to palette colors, spans to ANSI.
//!
//! A rendered line may span several physical rows (special renders). Rows
//! carry no line terminator; the shell adds `\r\n` in raw mode.

use crossterm::style::{Color, Stylize, style};
use folio_profile::Profile;
use folio_terminal::{ColorTag, Effects, Line, LineKind, Markup, Palette, Span, SpecialRender};
use folio_types::color::Rgb;
use folio_types::config::ColorOverrides;

use crate::hitmap::ActionRegion;

const ERROR: Color = Color::Rgb { r: 0xef, g: 0x44, b: 0x44 };
const WARNING: Color = Color::Rgb { r: 0xea, g: 0xb3, b: 0x08 };
const MUTED: Color = Color::Rgb { r: 0x6b, g: 0x72, b: 0x80 };

fn rgb(c: Rgb) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

fn paint(text: &str, color: Option<Color>) -> String {
    match color {
        Some(c) => style(text).with(c).to_string(),
        None => text.to_string(),
    }
}

/// OSC 8 hyperlink around an already styled label.
fn hyperlink(label: &str, url: &str) -> String {
    format!("\x1b]8;;{url}\x1b\\{label}\x1b]8;;\x1b\\")
}

/// Plain-text form used in script mode: input echoes get a `$ ` prefix.
pub fn plain_line(line: &Line) -> String {
    match line.kind {
        LineKind::Input => format!("$ {}", line.text),
        _ => line.text.clone(),
    }
}

fn width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

pub struct Renderer {
    palette: Palette,
    /// Configured colors, in force until a theme switch.
    colors: ColorOverrides,
    prompt: String,
    name: String,
    photo: String,
}

impl Renderer {
    pub fn new(
        palette: Palette,
        colors: ColorOverrides,
        prompt: impl Into<String>,
        profile: &Profile,
    ) -> Self {
        Self {
            palette,
            colors,
            prompt: prompt.into(),
            name: profile.name.clone(),
            photo: profile.photo.clone(),
        }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn set_palette(&mut self, palette: Palette) {
        log::info!("Palette applied: {}", palette.name());
        self.palette = palette;
        self.colors = ColorOverrides::default();
    }

    fn green(&self) -> Color {
        rgb(self.colors.terminal_green.unwrap_or(self.palette.terminal_green()))
    }

    fn accent(&self) -> Color {
        rgb(self.colors.accent_primary.unwrap_or(self.palette.accent_primary()))
    }

    fn secondary(&self) -> Color {
        rgb(self.colors.accent_secondary.unwrap_or(self.palette.accent_secondary()))
    }

    fn tag_color(&self, tag: ColorTag) -> Option<Color> {
        match tag {
            ColorTag::Default => None,
            ColorTag::Success => Some(self.green()),
            ColorTag::Accent => Some(self.accent()),
            ColorTag::Error => Some(ERROR),
            ColorTag::Warning => Some(WARNING),
            ColorTag::Muted => Some(MUTED),
        }
    }

    fn line_color(&self, line: &Line) -> Option<Color> {
        line.color
            .and_then(|tag| self.tag_color(tag))
            .or_else(|| match line.kind {
                LineKind::System => Some(self.accent()),
                LineKind::Error => Some(ERROR),
                LineKind::Input | LineKind::Output => None,
            })
    }

    /// Render one scrollback line to styled rows.
    pub fn render(&self, line: &Line) -> Vec<String> {
        if line.kind == LineKind::Input {
            let prompt = paint(&self.prompt, Some(self.green()));
            return vec![format!("{prompt} {}", line.text)];
        }
        match &line.markup {
            Some(Markup::Special(render)) => self.special(*render, line),
            Some(Markup::Inline(spans)) => vec![self.inline(line, spans)],
            None => vec![paint(&line.text, self.line_color(line))],
        }
    }

    /// Clickable column ranges of an inline line's actions. Only inline
    /// lines carry actions, and they render to a single row.
    pub fn action_regions(&self, line: &Line) -> Vec<ActionRegion> {
        let Some(Markup::Inline(spans)) = &line.markup else {
            return Vec::new();
        };
        let mut col = 0u16;
        let mut regions = Vec::new();
        for span in spans {
            let end = col.saturating_add(width(span.label()));
            if let Span::Action { command, .. } = span {
                regions.push(ActionRegion {
                    start: col,
                    end,
                    command: command.clone(),
                });
            }
            col = end;
        }
        regions
    }

    fn inline(&self, line: &Line, spans: &[Span]) -> String {
        let base = self.line_color(line);
        spans
            .iter()
            .map(|span| match span {
                Span::Text { text, color } => {
                    paint(text, color.and_then(|t| self.tag_color(t)).or(base))
                },
                Span::Action { label, .. } => {
                    let color = self.green();
                    style(label.as_str()).with(color).underlined().to_string()
                },
                Span::Link { label, url } => {
                    let color = self.secondary();
                    hyperlink(&style(label.as_str()).with(color).underlined().to_string(), url)
                },
            })
            .collect()
    }

    fn special(&self, render: SpecialRender, line: &Line) -> Vec<String> {
        let accent = Some(self.accent());
        match render {
            SpecialRender::WelcomeBanner => {
                let width = line.text.trim().chars().count() + 2;
                let bar = "=".repeat(width);
                vec![
                    paint(&format!("  +{bar}+"), accent),
                    paint(&format!("  | {} |", line.text.trim()), accent),
                    paint(&format!("  +{bar}+"), accent),
                ]
            },
            SpecialRender::ProfilePhoto => {
                let initials: String = self
                    .name
                    .split_whitespace()
                    .filter_map(|w| w.chars().next())
                    .flat_map(char::to_uppercase)
                    .collect();
                let green = Some(self.green());
                vec![
                    paint("  +--------+", accent),
                    paint(&format!("  |  {initials:<4}  |"), green),
                    paint("  |  \\__/  |", green),
                    paint("  +--------+", accent),
                    paint(&format!("  {}", self.photo), Some(MUTED)),
                ]
            },
        }
    }

    /// Prompt row with the pending input. Boost adds a `[matrix]` tag, and
    /// glitch renders the prompt reversed.
    pub fn prompt(&self, pending: &str, effects: &Effects) -> String {
        let text = if effects.matrix_boost() {
            format!("[matrix] {}", self.prompt)
        } else {
            self.prompt.clone()
        };
        let styled = style(text).with(self.green());
        let styled = if effects.glitch_active() {
            styled.reverse()
        } else {
            styled
        };
        format!("{styled} {pending}")
    }
}
