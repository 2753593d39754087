//! Documented commands: views over the profile.

use folio_profile::Profile;

use crate::format::{
    blank, box_bottom, box_edge, box_top, help_entry, level_bar, meter, muted, plain,
    section_header, success, warning, wrap,
};
use crate::line::{ColorTag, Line, LineKind, Span, SpecialRender};
use crate::palette::Palette;

/// `help` rows as (keyword, description). `theme` is rendered separately.
pub(crate) const HELP_ENTRIES: &[(&str, &str)] = &[
    ("whoami", "Qui suis-je ? Profil et identite"),
    ("cv", "Telecharger mon CV (PDF)"),
    ("skills", "Competences techniques avec barres visuelles"),
    ("experience", "Parcours professionnel complet"),
    ("projects", "Projets et realisations"),
    ("education", "Formation et diplomes"),
    ("contact", "Me contacter"),
    ("interests", "Centres d'interet et passions"),
    ("stack", "Stack technique detaillee"),
    ("languages", "Langues parlees"),
    ("status", "Situation actuelle et disponibilite"),
    ("clear", "Effacer le terminal"),
    ("help", "Afficher cette aide"),
];

const WHOAMI_WIDTH: usize = 61;
/// The WHOAMI title bar runs wider than its bottom border.
const WHOAMI_TOP_WIDTH: usize = 67;
const CONTACT_WIDTH: usize = 51;
const PROJECT_WIDTH: usize = 50;

pub(crate) fn help(entries: &[(&str, &str)]) -> Vec<Line> {
    let mut lines = vec![blank(), section_header("  COMMANDES DISPONIBLES"), blank()];
    for (cmd, desc) in entries {
        // theme takes an argument, so it is listed as plain text before clear.
        if *cmd == "clear" {
            lines.push(plain(
                format!("  theme <name>  Changer le theme ({})", Palette::names()),
                None,
            ));
        }
        lines.push(help_entry(cmd, desc));
    }
    lines.extend([
        blank(),
        muted("  Tip: cliquez sur une commande ou utilisez le clavier"),
        blank(),
    ]);
    lines
}

pub(crate) fn whoami(p: &Profile, wrap_width: usize) -> Vec<Line> {
    let mut lines = vec![
        blank(),
        Line::special(SpecialRender::ProfilePhoto, format!("  [{}]", p.name)),
        blank(),
        box_top("WHOAMI", WHOAMI_TOP_WIDTH),
        box_edge(),
        plain(format!("  \u{2502}  {}", p.name), None),
        success(format!("  \u{2502}  {}", p.title)),
        box_edge(),
    ];
    for row in wrap(&p.summary, wrap_width) {
        lines.push(plain(format!("  \u{2502}  {row}"), None));
    }
    lines.extend([
        box_edge(),
        muted(format!("  \u{2502}  Location : {}", p.location)),
        box_edge(),
        warning(format!("  \u{2502}  \"{}\"", p.tagline)),
        box_edge(),
        box_bottom(WHOAMI_WIDTH),
        blank(),
    ]);
    lines
}

pub(crate) fn skills(p: &Profile) -> Vec<Line> {
    let mut lines = vec![blank(), section_header("  COMPETENCES TECHNIQUES"), blank()];
    for category in &p.skills {
        lines.push(success(format!("  {}", category.name.to_uppercase())));
        for skill in &category.skills {
            lines.push(plain(format!("  {}  {}", meter(skill.level), skill.name), None));
        }
        lines.push(blank());
    }
    lines
}

pub(crate) fn experience(p: &Profile) -> Vec<Line> {
    let mut lines = vec![blank(), section_header("  PARCOURS PROFESSIONNEL"), blank()];
    for (i, exp) in p.experiences.iter().enumerate() {
        lines.push(success(format!("  [{}] ({})", exp.period, exp.duration)));
        lines.push(section_header(format!("  {}", exp.title)));
        if let Some(context) = &exp.context {
            lines.push(muted(format!("  {context}")));
        }
        lines.push(blank());
        for detail in &exp.details {
            lines.push(plain(format!("    > {detail}"), None));
        }
        if i + 1 < p.experiences.len() {
            lines.extend([blank(), muted("  ---"), blank()]);
        }
    }
    lines.push(blank());
    lines
}

pub(crate) fn projects(p: &Profile) -> Vec<Line> {
    let mut lines = vec![blank(), section_header("  PROJETS & REALISATIONS"), blank()];
    for project in &p.projects {
        lines.push(box_top(&project.name, PROJECT_WIDTH));
        lines.push(plain(format!("  \u{2502}  {}", project.description), None));
        lines.push(plain("  \u{2502}", None));
        lines.push(success(format!("  \u{2502}  Tech : {}", project.tech)));
        if let Some(stats) = &project.stats {
            lines.push(plain(format!("  \u{2502}  Stats: {stats}"), None));
        }
        lines.push(warning(format!("  \u{2502}  Status: {}", project.status)));
        lines.push(
            Line::inline(
                LineKind::Output,
                vec![
                    Span::colored("  \u{2502}  URL  : ", ColorTag::Muted),
                    Span::link(&project.url, project.full_url()),
                ],
            )
            .with_color(ColorTag::Muted),
        );
        lines.push(box_bottom(PROJECT_WIDTH));
        lines.push(blank());
    }
    lines
}

pub(crate) fn education(p: &Profile) -> Vec<Line> {
    let mut lines = vec![blank(), section_header("  FORMATION & DIPLOMES"), blank()];
    for edu in &p.education {
        lines.push(success(format!("  {:<6} {}", edu.year, edu.title)));
        lines.push(muted(format!("         {}", edu.school)));
        lines.push(blank());
    }
    lines
}

fn contact_link(label: &str, value: &str, url: String) -> Line {
    Line::inline(
        LineKind::Output,
        vec![
            Span::text(format!("  \u{2502}  {label}")),
            Span::link(value, url),
        ],
    )
}

pub(crate) fn contact(p: &Profile) -> Vec<Line> {
    vec![
        blank(),
        box_top("CONTACT", CONTACT_WIDTH),
        box_edge(),
        contact_link("Email     ", &p.email, p.mailto()),
        plain(format!("  \u{2502}  Tel       {}", p.phone), None),
        contact_link("GitHub    ", &p.github, p.github_url()),
        contact_link("LinkedIn  ", &p.linkedin, p.linkedin_url()),
        contact_link("Web       ", &p.website, p.website_url()),
        plain(format!("  \u{2502}  Location  {}", p.location), None),
        box_edge(),
        box_bottom(CONTACT_WIDTH),
        blank(),
    ]
}

pub(crate) fn interests(p: &Profile) -> Vec<Line> {
    let mut lines = vec![blank(), section_header("  CENTRES D'INTERET"), blank()];
    lines.extend(p.interests.iter().map(|i| plain(format!("  [*] {i}"), None)));
    lines.push(blank());
    lines
}

pub(crate) fn stack(p: &Profile) -> Vec<Line> {
    let mut lines = vec![blank(), section_header("  STACK TECHNIQUE"), blank()];
    for group in &p.stack {
        lines.push(success(format!("  {:<13}", group.label)));
        lines.push(plain(format!("{:15}{}", "", group.items), None));
    }
    lines.push(blank());
    lines
}

pub(crate) fn languages(p: &Profile) -> Vec<Line> {
    let mut lines = vec![blank(), section_header("  LANGUES"), blank()];
    for lang in &p.languages {
        let bar = level_bar(&format!("  {:<12}", lang.name), lang.level);
        lines.push(plain(format!("{bar} {}", lang.label), None));
    }
    lines.push(blank());
    lines
}

pub(crate) fn status(p: &Profile) -> Vec<Line> {
    let mut lines = vec![blank(), section_header("  SITUATION ACTUELLE"), blank()];
    for row in &p.availability {
        lines.push(plain(format!("  {:<14}: {}", row.label, row.value), None));
    }
    lines.push(blank());
    lines
}
