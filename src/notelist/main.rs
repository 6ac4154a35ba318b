use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use log::debug;
use notelist::config::NotelistConfig;
use notelist::error::Result;
use notelist::logging::{init_logging, DEFAULT_LOG_LEVEL};
use notelist::model::{Note, NoteRowState};
use notelist::{NoteListView, NotesAdapter};
use rowkit::{AdaptiveTheme, Inflater, RecyclePool};
use std::fs;
use std::path::Path;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL))?;

    let config = load_config(&cli)?;
    let notes = load_notes(&cli.notes)?;
    if notes.is_empty() {
        println!("No notes found.");
        return Ok(());
    }

    let mut adapter = NotesAdapter::new(notes)
        .with_formatter(config.formatter()?)
        .with_row_template(&config.row_template);
    for &position in &cli.select {
        adapter.set_selected(position, true)?;
    }

    let theme = AdaptiveTheme::default().resolve(config.theme);
    let use_color = !cli.no_color && Term::stdout().features().colors_supported();
    let mut inflater = Inflater::with_color(theme, use_color);
    for template in config.row_templates() {
        inflater.register(template)?;
    }

    let mut view = NoteListView::with_pool(
        cli.rows,
        Some(config.row_width),
        RecyclePool::with_capacity(config.max_scrap),
    );
    view.scroll_to(cli.offset);
    view.layout(&adapter, &inflater)?;

    for line in view.frame(&inflater)? {
        println!("{}", line);
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<NotelistConfig> {
    let mut config = match &cli.config_dir {
        Some(dir) => NotelistConfig::load(dir)?,
        None => match ProjectDirs::from("com", "notelist", "notelist") {
            Some(dirs) => NotelistConfig::load(dirs.config_dir())?,
            None => NotelistConfig::default(),
        },
    };

    if let Some(width) = cli.width {
        config.row_width = width;
    }
    if let Some(locale) = &cli.locale {
        config.locale = Some(locale.clone());
    }
    if let Some(offset) = cli.utc_offset {
        config.utc_offset_minutes = Some(offset);
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    Ok(config)
}

fn load_notes(path: &Path) -> Result<Vec<NoteRowState>> {
    let content = fs::read_to_string(path)?;
    let notes: Vec<Note> = serde_json::from_str(&content)?;
    debug!(
        "event=notes_loaded module=main count={} path={}",
        notes.len(),
        path.display()
    );
    Ok(notes.into_iter().map(NoteRowState::new).collect())
}
