//! The fixed command set and input normalization.

/// Every command the terminal understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    Whoami,
    Cv,
    Skills,
    Experience,
    Projects,
    Education,
    Contact,
    Interests,
    Stack,
    Languages,
    Status,
    Clear,
    Theme,
    // Easter eggs.
    Sudo,
    Rm,
    Gm,
    Hire,
    Solana,
    Cat,
    Ping,
    Neofetch,
    Ls,
    Cd,
    Crypto,
    Matrix,
    Hack,
}

/// Keyword table, in `help` order for the documented commands.
///
/// `sol` and `solana` are both accepted for [`Command::Solana`].
pub const KEYWORDS: &[(&str, Command)] = &[
    ("help", Command::Help),
    ("whoami", Command::Whoami),
    ("cv", Command::Cv),
    ("skills", Command::Skills),
    ("experience", Command::Experience),
    ("projects", Command::Projects),
    ("education", Command::Education),
    ("contact", Command::Contact),
    ("interests", Command::Interests),
    ("stack", Command::Stack),
    ("languages", Command::Languages),
    ("status", Command::Status),
    ("clear", Command::Clear),
    ("theme", Command::Theme),
    ("sudo", Command::Sudo),
    ("rm", Command::Rm),
    ("gm", Command::Gm),
    ("hire", Command::Hire),
    ("sol", Command::Solana),
    ("solana", Command::Solana),
    ("cat", Command::Cat),
    ("ping", Command::Ping),
    ("neofetch", Command::Neofetch),
    ("ls", Command::Ls),
    ("cd", Command::Cd),
    ("crypto", Command::Crypto),
    ("matrix", Command::Matrix),
    ("hack", Command::Hack),
];

impl Command {
    /// Resolve an already-normalized keyword.
    pub fn lookup(keyword: &str) -> Option<Self> {
        KEYWORDS
            .iter()
            .find(|(k, _)| *k == keyword)
            .map(|(_, cmd)| *cmd)
    }

    /// Canonical keyword (the first table entry for this command).
    pub fn keyword(self) -> &'static str {
        KEYWORDS
            .iter()
            .find(|(_, cmd)| *cmd == self)
            .map(|(k, _)| *k)
            .unwrap_or_default()
    }

    /// Hidden commands, not listed by `help`.
    pub fn is_easter_egg(self) -> bool {
        !matches!(
            self,
            Self::Help
                | Self::Whoami
                | Self::Cv
                | Self::Skills
                | Self::Experience
                | Self::Projects
                | Self::Education
                | Self::Contact
                | Self::Interests
                | Self::Stack
                | Self::Languages
                | Self::Status
                | Self::Clear
                | Self::Theme
        )
    }
}

/// A normalized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Lower-cased first word (empty for blank input).
    pub keyword: String,
    /// Remaining words, lower-cased and joined with single spaces.
    pub argument: String,
}

/// Trim, lower-case, and split into keyword + argument.
///
/// The whole line is lower-cased, including the argument.
pub fn parse_input(raw: &str) -> ParsedInput {
    let lowered = raw.trim().to_lowercase();
    let mut words = lowered.split_whitespace();
    let keyword = words.next().unwrap_or_default().to_string();
    let argument = words.collect::<Vec<_>>().join(" ");
    ParsedInput { keyword, argument }
}
