//! Easter eggs: sudo, rm -rf, gm, hire, sol, cat, ping, neofetch, ls, cd, crypto.
//!
//! Plus the shared download confirmation used by `cv` and `cat resume.pdf`.

use folio_profile::Profile;

use crate::format::{blank, error_line, muted, plain, section_header, success, warning};
use crate::line::Line;

/// The one file `cat` can "download".
pub(crate) const RESUME_FILE: &str = "resume.pdf";

pub(crate) fn download() -> Vec<Line> {
    vec![
        blank(),
        success("  Telechargement du CV en cours..."),
        muted(format!("  -> {RESUME_FILE}")),
        blank(),
    ]
}

pub(crate) fn sudo() -> Vec<Line> {
    vec![
        blank(),
        error_line("  Nice try. Root access denied. But I appreciate the initiative."),
        blank(),
    ]
}

pub(crate) fn rm_rf() -> Vec<Line> {
    vec![
        blank(),
        error_line("  Whoa there. This is a portfolio, not a pentest."),
        blank(),
    ]
}

pub(crate) fn gm() -> Vec<Line> {
    vec![blank(), success("  gm anon. WAGMI."), blank()]
}

pub(crate) fn hire(p: &Profile) -> Vec<Line> {
    vec![
        blank(),
        section_header("  Smart move. Let's talk."),
        blank(),
        plain(format!("  Email     {}", p.email), None),
        plain(format!("  Tel       {}", p.phone), None),
        plain(format!("  LinkedIn  {}", p.linkedin), None),
        plain(format!("  GitHub    {}", p.github), None),
        blank(),
        success("  I'm available and ready to start."),
        blank(),
    ]
}

pub(crate) fn solana() -> Vec<Line> {
    let logo = [
        "       @@@@",
        "     @@    @@",
        "    @@  @@  @@",
        "   @@ @@  @@ @@",
        "    @@  @@  @@",
        "     @@    @@",
        "       @@@@",
    ];
    let mut lines = vec![blank()];
    lines.extend(logo.into_iter().map(section_header));
    lines.extend([
        blank(),
        success("  Solana \u{2014} mass adopted since day 1"),
        plain("  TPS: yes  |  Fees: ~$0.00  |  Status: UP", None),
        muted("  Not financial advice. DYOR."),
        blank(),
    ]);
    lines
}

pub(crate) fn cat_passwd() -> Vec<Line> {
    vec![
        blank(),
        error_line("  Access denied. But points for trying a classic."),
        blank(),
    ]
}

pub(crate) fn ping() -> Vec<Line> {
    let mut lines = vec![
        blank(),
        plain("  PING google.com (142.250.74.206): 56 data bytes", None),
    ];
    for (seq, time) in ["12.4", "11.8", "13.1", "12.0"].into_iter().enumerate() {
        lines.push(plain(
            format!("  64 bytes from 142.250.74.206: icmp_seq={seq} ttl=118 time={time} ms"),
            None,
        ));
    }
    lines.extend([
        blank(),
        plain("  --- google.com ping statistics ---", None),
        plain("  4 packets transmitted, 4 received, 0% packet loss", None),
        plain("  round-trip min/avg/max = 11.8/12.3/13.1 ms", None),
        blank(),
    ]);
    lines
}

pub(crate) fn neofetch() -> Vec<Line> {
    let art = [
        "         .---.          ",
        "        /     \\         maxime@portfolio",
        "       |  O O  |        -----------------",
        "       |  \\_/  |        OS: Portfolio Terminal v1.0",
        "        \\_____/         Host: Rust 2024 + crossterm",
        "       /|     |\\        Kernel: folio-terminal",
        "      / |     | \\       Shell: folio",
        "         |   |          DE: raw-mode TTY",
        "         |   |          WM: none",
        "        _|   |_         Theme: Matrix Green",
        "       |_______|        Terminal: JetBrains Mono",
    ];
    let mut lines = vec![blank()];
    lines.extend(art.into_iter().map(section_header));
    lines.extend([
        blank(),
        plain("  CPU: Cybersec Engineer @ Full Capacity", None),
        plain("  GPU: Fullstack Developer (hardware-accelerated)", None),
        plain("  Memory: 1 year SOC + 1 SaaS marketplace loaded", None),
        plain("  Uptime: Since 2024 (INSA-certified)", None),
        blank(),
    ]);
    lines
}

pub(crate) fn ls() -> Vec<Line> {
    let mut lines = vec![blank()];
    lines.extend(
        [
            "whoami.txt",
            "skills.dat",
            "projects/",
            "experience.log",
            "contact.cfg",
            RESUME_FILE,
        ]
        .into_iter()
        .map(|f| success(format!("  {f}"))),
    );
    lines.push(blank());
    lines
}

pub(crate) fn cd(p: &Profile) -> Vec<Line> {
    vec![
        blank(),
        error_line(format!("  Permission denied. Visit {} instead.", p.website)),
        blank(),
    ]
}

pub(crate) fn crypto() -> Vec<Line> {
    vec![
        blank(),
        section_header("  CRYPTO TICKER (not real-time, obviously)"),
        blank(),
        success("  SOL   $187.42   +5.2%  "),
        warning("  BTC   $97,831   +1.8%  "),
        plain("  ETH   $3,412    -0.4%  ", None),
        blank(),
        muted("  Not financial advice. But SOL is the way."),
        blank(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::LineKind;

    fn has(lines: &[Line], needle: &str) -> bool {
        lines.iter().any(|l| l.text.contains(needle))
    }

    #[test]
    fn download_names_resume() {
        assert!(has(&download(), "-> resume.pdf"));
    }

    #[test]
    fn refusals_are_error_lines() {
        for lines in [sudo(), rm_rf(), cat_passwd()] {
            assert!(lines.iter().any(|l| l.kind == LineKind::Error));
        }
    }

    #[test]
    fn cd_points_at_website() {
        let p = Profile::builtin().unwrap();
        assert!(has(&cd(&p), "Visit trouverunprof.com instead."));
    }

    #[test]
    fn hire_lists_contact() {
        let p = Profile::builtin().unwrap();
        let lines = hire(&p);
        assert!(has(&lines, "launoym@gmail.com"));
        assert!(has(&lines, "linkedin.com/in/maxime-launoy"));
    }

    #[test]
    fn ping_four_replies() {
        let lines = ping();
        let replies = lines.iter().filter(|l| l.text.contains("64 bytes from")).count();
        assert_eq!(replies, 4);
        assert!(has(&lines, "icmp_seq=3 ttl=118 time=12.0 ms"));
    }

    #[test]
    fn ls_lists_resume() {
        assert!(has(&ls(), "  resume.pdf"));
        assert!(has(&ls(), "  projects/"));
    }

    #[test]
    fn solana_logo_is_header() {
        let lines = solana();
        assert_eq!(lines[1].kind, LineKind::System);
        assert!(has(&lines, "DYOR"));
    }

    #[test]
    fn neofetch_and_crypto_non_empty() {
        assert!(has(&neofetch(), "maxime@portfolio"));
        assert!(has(&crypto(), "SOL   $187.42"));
        assert!(has(&gm(), "WAGMI"));
    }
}
