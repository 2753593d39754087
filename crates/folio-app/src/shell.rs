//! Presentation shell: interactive raw-mode loop and line-by-line script mode.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{cursor, execute, queue};
use folio_terminal::{LineId, Session, SideEffect};
use folio_types::config::DownloadConfig;
use folio_types::input::InputEvent;

use crate::hitmap::HitMap;
use crate::render::{Renderer, plain_line};
use crate::{download, input};

/// Poll interval while no effect is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Screen height assumed until the terminal reports its size.
const DEFAULT_HEIGHT: u16 = 24;

/// Raw mode plus mouse capture. Restores cooked mode on drop, including on
/// early return.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), DisableMouseCapture) {
            log::warn!("Failed to release mouse capture: {e}");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("Failed to restore terminal mode: {e}");
        }
    }
}

/// Run the shell-owned half of a side effect. Timers and clears are already
/// handled by the session.
pub fn apply_effect(effect: SideEffect, renderer: &mut Renderer, download: &DownloadConfig) {
    match effect {
        SideEffect::ApplyPalette(palette) => renderer.set_palette(palette),
        SideEffect::TriggerFileDownload => download::run(download),
        SideEffect::None
        | SideEffect::ClearScreen
        | SideEffect::BoostVisualEffect
        | SideEffect::TriggerGlitchEffect => {},
    }
}

/// Interactive front-end over one session.
pub struct Shell<W: Write> {
    session: Session,
    renderer: Renderer,
    download: DownloadConfig,
    out: W,
    /// Newest entry already on screen.
    last_printed: Option<LineId>,
    /// Action spans of every row printed since the last full redraw.
    hits: HitMap,
    height: u16,
}

impl<W: Write> Shell<W> {
    pub fn new(session: Session, renderer: Renderer, download: DownloadConfig, out: W) -> Self {
        Self {
            session,
            renderer,
            download,
            out,
            last_printed: None,
            hits: HitMap::default(),
            height: DEFAULT_HEIGHT,
        }
    }

    /// Feed one gesture. Returns false once the session is done.
    pub fn handle(&mut self, event: InputEvent, now: Instant) -> bool {
        if event == InputEvent::Quit {
            self.session.dispose();
            return false;
        }
        let effect = self.session.handle_input(event, now);
        apply_effect(effect, &mut self.renderer, &self.download);
        true
    }

    /// Print entries not yet on screen, then the prompt. A clear (the first
    /// entry is newer than anything printed) redraws from the top.
    pub fn draw(&mut self) -> Result<()> {
        let entries = self.session.scrollback();
        let cleared = match (entries.first(), self.last_printed) {
            (Some(first), Some(last)) => first.id > last,
            _ => false,
        };

        if cleared || self.last_printed.is_none() {
            queue!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
            self.hits.clear();
        } else {
            queue!(self.out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        }

        let start = match self.last_printed {
            Some(last) if !cleared => entries.partition_point(|e| e.id <= last),
            _ => 0,
        };
        for entry in &entries[start..] {
            let mut regions = self.renderer.action_regions(&entry.line);
            for row in self.renderer.render(&entry.line) {
                write!(self.out, "{row}\r\n")?;
                self.hits.push_row(std::mem::take(&mut regions));
            }
        }
        if let Some(last) = entries.last() {
            self.last_printed = Some(last.id);
        }

        let prompt = self
            .renderer
            .prompt(self.session.pending_input(), self.session.effects());
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Redraw only the prompt row.
    fn redraw_prompt(&mut self) -> Result<()> {
        queue!(self.out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        let prompt = self
            .renderer
            .prompt(self.session.pending_input(), self.session.effects());
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Gesture for a mouse event: a left click on an action span.
    fn click(&self, mouse: &event::MouseEvent) -> Option<InputEvent> {
        let (col, row) = input::left_click(mouse)?;
        self.hits
            .command_at(col, row, self.height)
            .map(|command| InputEvent::Activate(command.to_string()))
    }

    /// Poll keys and clicks until quit. Poll timeouts track the next effect
    /// expiry.
    pub fn run(mut self) -> Result<()> {
        let _raw = RawModeGuard::enable()?;
        self.height = terminal::size().map_or(DEFAULT_HEIGHT, |(_, h)| h);
        log::info!("Interactive shell started");
        self.draw()?;

        loop {
            let timeout = self
                .session
                .next_deadline()
                .map_or(IDLE_POLL, |d| d.saturating_duration_since(Instant::now()));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if let Some(gesture) = input::map_key(&key) {
                            if !self.handle(gesture, Instant::now()) {
                                break;
                            }
                            self.draw()?;
                        }
                    },
                    Event::Mouse(mouse) => {
                        if let Some(gesture) = self.click(&mouse) {
                            log::debug!("Clicked action: {gesture:?}");
                            if !self.handle(gesture, Instant::now()) {
                                break;
                            }
                            self.draw()?;
                        }
                    },
                    Event::Resize(_, height) => {
                        self.height = height;
                        self.last_printed = None;
                        self.draw()?;
                    },
                    _ => {},
                }
            }

            if self.session.tick(Instant::now()) {
                self.redraw_prompt()?;
            }
        }

        write!(self.out, "\r\n")?;
        self.out.flush()?;
        log::info!("Interactive shell closed");
        Ok(())
    }
}

/// Submit every input line in order, then print the plain scrollback.
/// Invalid UTF-8 is replaced, not fatal.
pub fn run_script(
    session: &mut Session,
    renderer: &mut Renderer,
    download: &DownloadConfig,
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    let mut buf = Vec::new();
    let mut lineno = 0usize;
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lineno += 1;
        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = String::from_utf8_lossy(raw);
        if matches!(line, std::borrow::Cow::Owned(_)) {
            log::warn!("Input line {lineno} is not valid UTF-8; invalid bytes replaced");
        }
        let effect = session.submit(&line, Instant::now());
        apply_effect(effect, renderer, download);
    }
    for entry in session.scrollback() {
        writeln!(out, "{}", plain_line(&entry.line))?;
    }
    out.flush()?;
    session.dispose();
    Ok(())
}

/// Whether stdin is attached to a terminal.
pub fn stdin_is_tty() -> bool {
    use std::io::IsTerminal;
    io::stdin().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_profile::Profile;
    use folio_terminal::{CommandRegistry, Palette};
    use folio_types::config::TerminalConfig;

    fn parts() -> (Session, Renderer, DownloadConfig) {
        let profile = Profile::builtin().unwrap();
        let config = TerminalConfig::default();
        let renderer = Renderer::new(
            Palette::Green,
            config.colors,
            config.prompt.clone(),
            &profile,
        );
        let session = Session::new(CommandRegistry::new(profile), &config);
        let download = DownloadConfig {
            source: std::env::temp_dir().join("folio-no-such-resume.pdf"),
            ..DownloadConfig::default()
        };
        (session, renderer, download)
    }

    fn script(input: &str) -> (String, Renderer) {
        let (mut session, mut renderer, download) = parts();
        let mut out = Vec::new();
        run_script(&mut session, &mut renderer, &download, input.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), renderer)
    }

    #[test]
    fn script_echoes_inputs_with_dollar() {
        let (text, _) = script("gm\nls\n");
        assert!(text.contains("$ gm\n"));
        assert!(text.contains("gm anon. WAGMI."));
        assert!(text.contains("$ ls\n"));
        assert!(text.contains("PORTFOLIO TERMINAL v1.0"));
    }

    #[test]
    fn script_clear_drops_earlier_output() {
        let (text, _) = script("gm\nclear\nping\n");
        assert!(!text.contains("WAGMI"));
        assert!(text.contains("$ ping"));
        assert_eq!(text.matches("PORTFOLIO TERMINAL").count(), 1);
    }

    #[test]
    fn script_survives_invalid_utf8() {
        let (mut session, mut renderer, download) = parts();
        let mut out = Vec::new();
        let input: &[u8] = b"gm\n\xffzz\r\nping\n";
        run_script(&mut session, &mut renderer, &download, input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("WAGMI"));
        assert!(text.contains("$ \u{fffd}zz\n"));
        assert!(text.contains("$ ping\n"));
    }

    #[test]
    fn script_without_trailing_newline() {
        let (text, _) = script("gm\nping");
        assert!(text.contains("$ ping"));
        assert!(text.contains("WAGMI"));
    }

    #[test]
    fn script_theme_applies_palette() {
        let (_, renderer) = script("theme amber\n");
        assert_eq!(renderer.palette(), Palette::Amber);
    }

    #[test]
    fn script_download_failure_is_not_fatal() {
        let (text, _) = script("cv\n");
        assert!(text.contains("Telechargement du CV en cours..."));
    }

    #[test]
    fn shell_draw_is_incremental() {
        let (session, renderer, download) = parts();
        let mut shell = Shell::new(session, renderer, download, Vec::new());
        shell.draw().unwrap();
        let first = shell.out.len();
        assert!(String::from_utf8_lossy(&shell.out).contains("PORTFOLIO TERMINAL"));

        let now = Instant::now();
        for c in "gm".chars() {
            assert!(shell.handle(InputEvent::TextInput(c), now));
        }
        assert!(shell.handle(InputEvent::Submit, now));
        shell.out.clear();
        shell.draw().unwrap();
        let second = String::from_utf8_lossy(&shell.out).into_owned();
        assert!(second.contains("WAGMI"));
        assert!(!second.contains("PORTFOLIO TERMINAL"));
        assert!(first > 0);
    }

    #[test]
    fn shell_redraws_after_clear() {
        let (session, renderer, download) = parts();
        let mut shell = Shell::new(session, renderer, download, Vec::new());
        shell.draw().unwrap();
        let now = Instant::now();
        shell.handle(InputEvent::Activate("gm".to_string()), now);
        shell.handle(InputEvent::ClearScreen, now);
        shell.out.clear();
        shell.draw().unwrap();
        let text = String::from_utf8_lossy(&shell.out).into_owned();
        assert!(text.contains("PORTFOLIO TERMINAL"));
        assert!(!text.contains("WAGMI"));
    }

    fn left_down(column: u16, row: u16) -> event::MouseEvent {
        event::MouseEvent {
            kind: event::MouseEventKind::Down(event::MouseButton::Left),
            column,
            row,
            modifiers: event::KeyModifiers::NONE,
        }
    }

    #[test]
    fn clicking_welcome_help_activates_it() {
        let (session, renderer, download) = parts();
        let mut shell = Shell::new(session, renderer, download, Vec::new());
        shell.draw().unwrap();
        // Blank, three banner rows, blank, then the greeting with `help` at
        // columns 20..24.
        let gesture = shell.click(&left_down(21, 5));
        assert_eq!(gesture, Some(InputEvent::Activate("help".to_string())));
        assert_eq!(shell.click(&left_down(10, 5)), None);

        assert!(shell.handle(gesture.unwrap(), Instant::now()));
        assert_eq!(shell.session.history().first().map(String::as_str), Some("help"));
    }

    #[test]
    fn clicks_follow_clear_and_scroll() {
        let (session, renderer, download) = parts();
        let mut shell = Shell::new(session, renderer, download, Vec::new());
        shell.draw().unwrap();
        shell.handle(InputEvent::Activate("gm".to_string()), Instant::now());
        shell.draw().unwrap();
        shell.handle(InputEvent::ClearScreen, Instant::now());
        shell.draw().unwrap();
        assert_eq!(
            shell.click(&left_down(21, 5)),
            Some(InputEvent::Activate("help".to_string()))
        );

        // Two rows scrolled off the top.
        shell.height = u16::try_from(shell.hits.len() - 1).unwrap();
        assert_eq!(
            shell.click(&left_down(21, 3)),
            Some(InputEvent::Activate("help".to_string()))
        );
        assert_eq!(shell.click(&left_down(21, 5)), None);
    }

    #[test]
    fn non_left_clicks_are_ignored() {
        let (session, renderer, download) = parts();
        let mut shell = Shell::new(session, renderer, download, Vec::new());
        shell.draw().unwrap();
        let mut up = left_down(21, 5);
        up.kind = event::MouseEventKind::Up(event::MouseButton::Left);
        assert_eq!(shell.click(&up), None);
        let mut right = left_down(21, 5);
        right.kind = event::MouseEventKind::Down(event::MouseButton::Right);
        assert_eq!(shell.click(&right), None);
    }

    #[test]
    fn quit_disposes_session() {
        let (session, renderer, download) = parts();
        let mut shell = Shell::new(session, renderer, download, Vec::new());
        shell.handle(InputEvent::Activate("matrix".to_string()), Instant::now());
        assert!(!shell.handle(InputEvent::Quit, Instant::now()));
        assert!(shell.session.is_disposed());
        assert_eq!(shell.session.next_deadline(), None);
    }
}
