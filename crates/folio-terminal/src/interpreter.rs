//! Command registry, dispatch, and side-effect signals.
//!
//! Dispatch is total: every input string maps to a defined output. Command
//! failures are [`CommandError`]s, rendered as error lines instead of being
//! propagated.

use folio_profile::Profile;

use crate::command::{Command, KEYWORDS, parse_input};
use crate::format::{blank, error_line, muted, plain, section_header, success};
use crate::line::Line;
use crate::palette::Palette;
use crate::{fun_commands, profile_commands};

/// Default summary wrap width for `whoami`.
const DEFAULT_WRAP_WIDTH: usize = 72;

/// Instruction for the host session or shell, returned alongside the lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SideEffect {
    #[default]
    None,
    /// Replace the scrollback with a fresh welcome sequence.
    ClearScreen,
    /// Boost the ambient animation for a while.
    BoostVisualEffect,
    /// Run the glitch filter for a while.
    TriggerGlitchEffect,
    /// Save the fixed resume resource on the client.
    TriggerFileDownload,
    /// Apply a named palette to the presentation layer.
    ApplyPalette(Palette),
}

/// Output produced by one dispatched input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    pub lines: Vec<Line>,
    pub effect: SideEffect,
}

impl CommandOutput {
    pub fn lines(lines: Vec<Line>) -> Self {
        Self {
            lines,
            effect: SideEffect::None,
        }
    }

    pub fn with_effect(lines: Vec<Line>, effect: SideEffect) -> Self {
        Self { lines, effect }
    }
}

/// Broad classification of command errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Keyword not in the registry.
    UnknownCommand,
    /// Known keyword, argument not accepted.
    UnrecognizedArgument,
}

/// A user-facing command failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Commande inconnue : '{0}'. Tapez 'help' pour la liste des commandes.")]
    UnknownCommand(String),

    #[error("cat: {0}: No such file or directory")]
    NoSuchFile(String),

    #[error("Theme inconnu : '{0}'.")]
    UnknownTheme(String),
}

impl CommandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownCommand(_) => ErrorKind::UnknownCommand,
            Self::NoSuchFile(_) | Self::UnknownTheme(_) => ErrorKind::UnrecognizedArgument,
        }
    }

    /// Render the error as scrollback lines.
    pub fn to_lines(&self) -> Vec<Line> {
        match self {
            Self::UnknownCommand(_) | Self::NoSuchFile(_) => vec![error_line(format!("  {self}"))],
            Self::UnknownTheme(_) => vec![
                blank(),
                error_line(format!("  {self}")),
                muted(format!("  Themes disponibles : {}", Palette::names())),
                blank(),
            ],
        }
    }
}

/// Registry of the fixed command set, bound to a read-only profile.
pub struct CommandRegistry {
    profile: Profile,
    wrap_width: usize,
}

impl CommandRegistry {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }

    /// Override the `whoami` summary wrap width.
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width.max(1);
        self
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Fresh welcome sequence.
    pub fn welcome(&self) -> Vec<Line> {
        crate::format::welcome(&self.profile)
    }

    /// Parse and dispatch one raw input line.
    ///
    /// Blank input yields no lines and no effect.
    pub fn execute(&self, line: &str) -> CommandOutput {
        let parsed = parse_input(line);
        if parsed.keyword.is_empty() {
            return CommandOutput::default();
        }

        let result = match Command::lookup(&parsed.keyword) {
            Some(cmd) => {
                log::debug!("dispatch {:?} arg={:?}", cmd, parsed.argument);
                if cmd.is_easter_egg() {
                    log::info!("Easter egg found: {}", cmd.keyword());
                }
                self.run(cmd, line, &parsed.argument)
            },
            None => Err(CommandError::UnknownCommand(parsed.keyword)),
        };

        result.unwrap_or_else(|e| {
            log::debug!("command error ({:?}): {e}", e.kind());
            CommandOutput::lines(e.to_lines())
        })
    }

    fn run(
        &self,
        cmd: Command,
        raw: &str,
        argument: &str,
    ) -> Result<CommandOutput, CommandError> {
        let p = &self.profile;
        let out = match cmd {
            Command::Help => CommandOutput::lines(profile_commands::help(&self.list_commands())),
            Command::Whoami => CommandOutput::lines(profile_commands::whoami(p, self.wrap_width)),
            Command::Skills => CommandOutput::lines(profile_commands::skills(p)),
            Command::Experience => CommandOutput::lines(profile_commands::experience(p)),
            Command::Projects => CommandOutput::lines(profile_commands::projects(p)),
            Command::Education => CommandOutput::lines(profile_commands::education(p)),
            Command::Contact => CommandOutput::lines(profile_commands::contact(p)),
            Command::Interests => CommandOutput::lines(profile_commands::interests(p)),
            Command::Stack => CommandOutput::lines(profile_commands::stack(p)),
            Command::Languages => CommandOutput::lines(profile_commands::languages(p)),
            Command::Status => CommandOutput::lines(profile_commands::status(p)),
            Command::Theme => theme(argument)?,
            Command::Cv => CommandOutput::with_effect(
                fun_commands::download(),
                SideEffect::TriggerFileDownload,
            ),
            Command::Clear => CommandOutput::with_effect(Vec::new(), SideEffect::ClearScreen),
            Command::Sudo => CommandOutput::lines(fun_commands::sudo()),
            Command::Rm => {
                if !argument.starts_with("-rf") {
                    return Err(CommandError::UnknownCommand(raw.trim().to_string()));
                }
                CommandOutput::lines(fun_commands::rm_rf())
            },
            Command::Gm => CommandOutput::lines(fun_commands::gm()),
            Command::Hire => CommandOutput::lines(fun_commands::hire(p)),
            Command::Solana => CommandOutput::lines(fun_commands::solana()),
            Command::Cat => match argument {
                "/etc/passwd" => CommandOutput::lines(fun_commands::cat_passwd()),
                fun_commands::RESUME_FILE => CommandOutput::with_effect(
                    fun_commands::download(),
                    SideEffect::TriggerFileDownload,
                ),
                "" => return Err(CommandError::NoSuchFile("?".to_string())),
                other => return Err(CommandError::NoSuchFile(other.to_string())),
            },
            Command::Ping => CommandOutput::lines(fun_commands::ping()),
            Command::Neofetch => CommandOutput::lines(fun_commands::neofetch()),
            Command::Ls => CommandOutput::lines(fun_commands::ls()),
            Command::Cd => CommandOutput::lines(fun_commands::cd(p)),
            Command::Crypto => CommandOutput::lines(fun_commands::crypto()),
            Command::Matrix => CommandOutput::with_effect(
                vec![blank(), success("  Entering the Matrix..."), blank()],
                SideEffect::BoostVisualEffect,
            ),
            Command::Hack => CommandOutput::with_effect(
                vec![
                    blank(),
                    crate::format::warning("  Initiating penetration test... just kidding."),
                    blank(),
                ],
                SideEffect::TriggerGlitchEffect,
            ),
        };
        Ok(out)
    }

    /// Documented commands as (keyword, description), in `help` order.
    pub fn list_commands(&self) -> Vec<(&'static str, &'static str)> {
        profile_commands::HELP_ENTRIES.to_vec()
    }

    /// Every keyword starting with the normalized `partial`.
    pub fn completions(&self, partial: &str) -> Vec<&'static str> {
        let lower = partial.trim().to_lowercase();
        KEYWORDS
            .iter()
            .map(|(k, _)| *k)
            .filter(|k| k.starts_with(&lower))
            .collect()
    }
}

/// `theme [name]`: list palettes, reject unknown names, or select one.
fn theme(argument: &str) -> Result<CommandOutput, CommandError> {
    if argument.is_empty() {
        let mut lines = vec![blank(), section_header("  THEMES DISPONIBLES"), blank()];
        for p in Palette::ALL {
            lines.push(plain(format!("  {:<8}{}", p.name(), p.description()), None));
        }
        lines.extend([blank(), muted("  Usage : theme <name>"), blank()]);
        return Ok(CommandOutput::lines(lines));
    }

    let palette = Palette::from_name(argument)
        .ok_or_else(|| CommandError::UnknownTheme(argument.to_string()))?;
    log::info!("Palette selected: {}", palette.name());
    Ok(CommandOutput::with_effect(
        vec![blank(), success(format!("  Theme '{}' active.", palette.name())), blank()],
        SideEffect::ApplyPalette(palette),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::LineKind;

    fn registry() -> CommandRegistry {
        CommandRegistry::new(Profile::builtin().unwrap())
    }

    fn texts(out: &CommandOutput) -> Vec<&str> {
        out.lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn every_keyword_yields_deterministic_output() {
        let reg = registry();
        for (k, cmd) in KEYWORDS {
            let first = reg.execute(k);
            let second = reg.execute(k);
            assert_eq!(first, second, "{k} is not deterministic");
            if *cmd != Command::Clear {
                assert!(!first.lines.is_empty(), "{k} produced no lines");
            }
        }
    }

    #[test]
    fn empty_input() {
        let reg = registry();
        assert_eq!(reg.execute(""), CommandOutput::default());
        assert_eq!(reg.execute("   \t "), CommandOutput::default());
    }

    #[test]
    fn unknown_command_single_error_line() {
        let reg = registry();
        let out = reg.execute("zzz");
        assert_eq!(out.lines.len(), 1);
        assert_eq!(out.lines[0].kind, LineKind::Error);
        assert!(out.lines[0].text.contains("zzz"));
        assert!(out.lines[0].text.contains("help"));
        assert_eq!(out.effect, SideEffect::None);
    }

    #[test]
    fn unknown_command_echoes_lowercased_keyword() {
        let out = registry().execute("  FooBar baz");
        assert!(out.lines[0].text.contains("'foobar'"));
        assert!(!out.lines[0].text.contains("baz"));
    }

    #[test]
    fn case_insensitive_dispatch() {
        let reg = registry();
        let upper = reg.execute("CaT resume.pdf");
        let lower = reg.execute("cat resume.pdf");
        assert_eq!(upper, lower);
        assert_eq!(upper.effect, SideEffect::TriggerFileDownload);
        assert_eq!(reg.execute("HELP"), reg.execute("help"));
    }

    #[test]
    fn cv_downloads() {
        let out = registry().execute("cv");
        assert_eq!(out.effect, SideEffect::TriggerFileDownload);
        assert!(texts(&out).iter().any(|t| t.contains("Telechargement")));
    }

    #[test]
    fn rm_rf_easter_egg() {
        let reg = registry();
        let out = reg.execute("rm -rf /");
        assert!(texts(&out).iter().any(|t| t.contains("not a pentest")));
        assert_eq!(reg.execute("rm -rfv"), out);
    }

    #[test]
    fn rm_without_flag_echoes_full_raw_input() {
        let reg = registry();
        let out = reg.execute("rm");
        assert_eq!(out.lines.len(), 1);
        assert!(out.lines[0].text.contains("'rm'"));

        let out = reg.execute("  RM Fichier.txt ");
        assert!(out.lines[0].text.contains("'RM Fichier.txt'"));
    }

    #[test]
    fn cat_arguments() {
        let reg = registry();
        let passwd = reg.execute("cat /etc/passwd");
        assert!(texts(&passwd).iter().any(|t| t.contains("Access denied")));
        assert_eq!(passwd.effect, SideEffect::None);

        let missing = reg.execute("cat notes.txt");
        assert_eq!(missing.lines.len(), 1);
        assert_eq!(
            missing.lines[0].text,
            "  cat: notes.txt: No such file or directory"
        );

        let bare = reg.execute("cat");
        assert_eq!(bare.lines[0].text, "  cat: ?: No such file or directory");
    }

    #[test]
    fn theme_listing() {
        let out = registry().execute("theme");
        let all = texts(&out).join("\n");
        for p in Palette::ALL {
            assert!(all.contains(p.name()));
        }
        assert_eq!(out.effect, SideEffect::None);
    }

    #[test]
    fn theme_unknown_name() {
        let out = registry().execute("theme neon");
        assert_eq!(out.effect, SideEffect::None);
        let all = texts(&out).join("\n");
        assert!(all.contains("'neon'"));
        assert!(all.contains("green, purple, blue, amber, solana"));
        assert!(out.lines.iter().any(|l| l.kind == LineKind::Error));
    }

    #[test]
    fn theme_valid_name_applies_palette() {
        let out = registry().execute("theme SOLANA");
        assert_eq!(out.effect, SideEffect::ApplyPalette(Palette::Solana));
        assert!(texts(&out).iter().any(|t| t.contains("Theme 'solana' active.")));
    }

    #[test]
    fn clear_signals_clear_screen() {
        let out = registry().execute("clear");
        assert!(out.lines.is_empty());
        assert_eq!(out.effect, SideEffect::ClearScreen);
    }

    #[test]
    fn matrix_and_hack_effects() {
        let reg = registry();
        assert_eq!(reg.execute("matrix").effect, SideEffect::BoostVisualEffect);
        assert_eq!(reg.execute("hack").effect, SideEffect::TriggerGlitchEffect);
    }

    #[test]
    fn sol_and_solana_are_same_output() {
        let reg = registry();
        assert_eq!(reg.execute("sol"), reg.execute("solana"));
    }

    #[test]
    fn error_kinds() {
        assert_eq!(
            CommandError::UnknownCommand("x".into()).kind(),
            ErrorKind::UnknownCommand
        );
        assert_eq!(
            CommandError::NoSuchFile("x".into()).kind(),
            ErrorKind::UnrecognizedArgument
        );
        assert_eq!(
            CommandError::UnknownTheme("x".into()).kind(),
            ErrorKind::UnrecognizedArgument
        );
    }

    #[test]
    fn completions_by_prefix() {
        let reg = registry();
        let h = reg.completions("h");
        assert!(h.contains(&"help"));
        assert!(h.contains(&"hire"));
        assert!(h.contains(&"hack"));
        assert_eq!(reg.completions("he"), ["help"]);
        assert_eq!(reg.completions("  HE "), ["help"]);
        assert!(reg.completions("zzz").is_empty());
    }

    #[test]
    fn list_commands_documented_only() {
        let reg = registry();
        let names: Vec<&str> = reg.list_commands().iter().map(|(n, _)| *n).collect();
        assert!(names.contains(&"whoami"));
        assert!(names.contains(&"help"));
        assert!(!names.contains(&"sudo"));
    }

    #[test]
    fn help_lists_exactly_the_documented_commands() {
        let reg = registry();
        let out = reg.execute("help");
        let actions: Vec<&str> = out.lines.iter().flat_map(|l| l.actions()).collect();
        let names: Vec<&str> = reg.list_commands().iter().map(|(n, _)| *n).collect();
        assert_eq!(actions, names);
    }

    #[test]
    fn wrap_width_is_clamped() {
        let reg = registry().with_wrap_width(0);
        let out = reg.execute("whoami");
        assert!(!out.lines.is_empty());
    }
}
