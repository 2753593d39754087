//! Renderable units of terminal output.
//!
//! Every [`Line`] carries a plain-text form. When rich [`Markup`] is present it
//! is what the shell draws, but `text` stays the faithful plain equivalent
//! used for copy, accessibility, and tests.

/// Role of a line in the scrollback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Echo of a submitted input.
    Input,
    /// Regular command output.
    Output,
    Error,
    /// Headers and banners.
    System,
}

/// Semantic color classifier; the shell maps it through the active palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Default,
    Success,
    Error,
    Warning,
    Muted,
    Accent,
}

/// Named blocks the shell renders specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialRender {
    WelcomeBanner,
    ProfilePhoto,
}

/// A fragment of inline markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text {
        text: String,
        color: Option<ColorTag>,
    },
    /// Clickable text that re-submits `command` as if typed.
    Action { label: String, command: String },
    /// External hyperlink, opened in a new context.
    Link { label: String, url: String },
}

impl Span {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: ColorTag) -> Self {
        Self::Text {
            text: text.into(),
            color: Some(color),
        }
    }

    pub fn action(command: impl Into<String>) -> Self {
        let command = command.into();
        Self::Action {
            label: command.clone(),
            command,
        }
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            url: url.into(),
        }
    }

    /// The visible characters of this span.
    pub fn label(&self) -> &str {
        match self {
            Self::Text { text, .. } => text,
            Self::Action { label, .. } | Self::Link { label, .. } => label,
        }
    }
}

/// Rich alternative to a line's plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    Special(SpecialRender),
    Inline(Vec<Span>),
}

/// One unit of terminal output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
    pub color: Option<ColorTag>,
    pub markup: Option<Markup>,
}

impl Line {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            color: None,
            markup: None,
        }
    }

    pub fn with_color(mut self, color: ColorTag) -> Self {
        self.color = Some(color);
        self
    }

    /// Build a line from inline spans; `text` is the concatenation of labels.
    pub fn inline(kind: LineKind, spans: Vec<Span>) -> Self {
        let text: String = spans.iter().map(Span::label).collect();
        Self {
            kind,
            text,
            color: None,
            markup: Some(Markup::Inline(spans)),
        }
    }

    pub fn special(render: SpecialRender, text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Output,
            text: text.into(),
            color: None,
            markup: Some(Markup::Special(render)),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty() && self.markup.is_none()
    }

    /// Actionable commands embedded in this line, in order.
    pub fn actions(&self) -> Vec<&str> {
        match &self.markup {
            Some(Markup::Inline(spans)) => spans
                .iter()
                .filter_map(|s| match s {
                    Span::Action { command, .. } => Some(command.as_str()),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Hyperlink targets embedded in this line, in order.
    pub fn links(&self) -> Vec<&str> {
        match &self.markup {
            Some(Markup::Inline(spans)) => spans
                .iter()
                .filter_map(|s| match s {
                    Span::Link { url, .. } => Some(url.as_str()),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Session-assigned, monotonically increasing line identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineId(pub u64);

/// A line stored in the scrollback with its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollbackEntry {
    pub id: LineId,
    pub line: Line,
}
