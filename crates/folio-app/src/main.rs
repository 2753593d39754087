//! Portfolio terminal entry point.
//!
//! Interactive raw-mode shell when stdin is a TTY; otherwise (or with
//! `--plain`) each stdin line is submitted in order and the final scrollback
//! is printed as plain text.

mod args;
mod download;
mod hitmap;
mod input;
mod render;
mod shell;

use anyhow::{Context, Result};
use clap::Parser;

use args::Args;
use folio_profile::resolve_profile;
use folio_terminal::{CommandRegistry, Palette, Session};
use folio_types::config::TerminalConfig;
use render::Renderer;

fn main() -> Result<()> {
    // stderr only, so the raw-mode screen stays clean.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => TerminalConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TerminalConfig::default(),
    };

    let profile = resolve_profile(args.profile.as_deref())?;
    log::info!("Serving profile '{}'", profile.name);

    let palette = Palette::from_name(&config.palette.to_lowercase()).unwrap_or_else(|| {
        log::warn!("Unknown palette '{}' -- using green", config.palette);
        Palette::default()
    });

    let registry = CommandRegistry::new(profile).with_wrap_width(config.wrap_width);
    let mut session = Session::new(registry, &config);
    let mut renderer = Renderer::new(
        palette,
        config.colors,
        config.prompt.clone(),
        session.registry().profile(),
    );

    if args.plain || !shell::stdin_is_tty() {
        let stdin = std::io::stdin();
        shell::run_script(
            &mut session,
            &mut renderer,
            &config.download,
            stdin.lock(),
            std::io::stdout().lock(),
        )?;
    } else {
        shell::Shell::new(session, renderer, config.download.clone(), std::io::stdout()).run()?;
    }

    Ok(())
}
