mod render;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use onomato_config::Config;
use onomato_engine::{Catalog, CatalogEntry, FsImageStore, Resolver};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use render::{LineKind, RenderedLine, render_fields};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
    sync::Arc,
};

const PRINT_FLAG: &str = "--print";

struct App {
    catalog: Arc<Catalog>,
    resolver: Resolver,
    images: FsImageStore,
    entry_list_state: ListState,
    current_content: Vec<RenderedLine>,
}

impl App {
    fn new(config: &Config) -> Result<Self> {
        let catalog = Arc::new(Catalog::load(&config.catalog_path)?);
        let resolver = Resolver::new(catalog.clone());
        let images = FsImageStore::new(config.assets_dir());

        let mut app = Self {
            catalog,
            resolver,
            images,
            entry_list_state: ListState::default(),
            current_content: Vec::new(),
        };

        // Select first entry if available
        if !app.catalog.is_empty() {
            app.entry_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_entry(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        let i = match self.entry_list_state.selected() {
            Some(i) => (i + 1) % self.catalog.len(),
            None => 0,
        };
        self.entry_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_entry(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        let i = match self.entry_list_state.selected() {
            Some(0) | None => self.catalog.len() - 1,
            Some(i) => i - 1,
        };
        self.entry_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        if let Some(index) = self.entry_list_state.selected()
            && let Some(entry) = self.catalog.entries().get(index)
        {
            self.current_content = self.render_entry(entry);
        }
    }

    fn render_entry(&self, entry: &CatalogEntry) -> Vec<RenderedLine> {
        let fields = self.resolver.resolve(&entry.fields());
        render_fields(&fields, &self.images)
    }

    /// Writes every entry to stdout, one after another.
    fn print_all(&self) {
        for entry in self.catalog.entries() {
            println!("#{} {}", entry.id, entry.text);
            for line in self.render_entry(entry) {
                match line.kind {
                    LineKind::Heading => println!("  {}:", line.text),
                    LineKind::Plain => println!("    {}", line.text),
                    LineKind::Jumped => println!("    ↳ {}", line.text),
                }
            }
            println!();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let print = args.iter().skip(1).any(|a| a == PRINT_FLAG);
    let positional: Vec<&String> = args.iter().skip(1).filter(|a| *a != PRINT_FLAG).collect();
    let config_path = Config::config_path();

    let config;
    let from_config;

    if positional.len() == 1 {
        // CLI argument provided - use it
        config = Config::new(PathBuf::from(positional[0]));
        from_config = false;
    } else if positional.is_empty() {
        // No CLI argument - try config file
        match Config::load() {
            Ok(Some(loaded)) => {
                config = loaded;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No catalog path provided and no config file found");
                eprintln!("Usage: {} <catalog.toml> [{PRINT_FLAG}]", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <catalog.toml> [{PRINT_FLAG}]", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [catalog.toml] [{PRINT_FLAG}]", args[0]);
        process::exit(1);
    };

    let app = match App::new(&config) {
        Ok(app) => app,
        Err(e) => {
            let source = if from_config {
                format!(" from config file '{}'", config_path.display())
            } else {
                String::new()
            };
            eprintln!(
                "Error: Catalog '{}'{} could not be loaded: {e}",
                config.catalog_path.display(),
                source
            );
            process::exit(1);
        }
    };

    if print {
        app.print_all();
        return Ok(());
    }
    run_terminal(app)
}

fn run_terminal(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res.context("terminal session failed")
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_entry(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_entry(),
                _ => {}
            }
        }
    }
}

fn content_line(line: &RenderedLine) -> Line<'_> {
    match line.kind {
        LineKind::Heading => Line::from(Span::styled(
            line.text.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        LineKind::Plain => Line::from(vec![Span::raw("  "), Span::raw(line.text.as_str())]),
        LineKind::Jumped => Line::from(vec![
            Span::raw("  ↳ "),
            Span::styled(
                line.text.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]),
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(f.area());

    // Entry list panel
    let entry_items: Vec<ListItem> = app
        .catalog
        .entries()
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("#{} ", entry.id), Style::default().fg(Color::DarkGray)),
                Span::raw(entry.text.as_str()),
            ]))
        })
        .collect();

    let entries_list = List::new(entry_items)
        .block(Block::default().borders(Borders::ALL).title("Entries"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(entries_list, chunks[0], &mut app.entry_list_state);

    // Content panel
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("Nothing to show for this entry")]
    } else {
        app.current_content.iter().map(content_line).collect()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Fields"))
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(content, chunks[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q/Esc: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next"),
    ]);

    let help = Paragraph::new(vec![help_text]).block(Block::default());

    // Place help at bottom
    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}
