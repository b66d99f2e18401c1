mod render;

use anyhow::{Context, Result, bail};
use chatmark_config::Config;
use chatmark_engine::{ParseOptions, parse_document_with, snapshot};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

struct Args {
    file: PathBuf,
    config: Option<PathBuf>,
    dump: bool,
}

impl Args {
    fn parse(args: &[String]) -> Result<Self> {
        let mut file = None;
        let mut config = None;
        let mut dump = false;

        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--dump" => dump = true,
                "--config" => {
                    let path = iter.next().context("--config needs a path")?;
                    config = Some(PathBuf::from(path));
                }
                flag if flag.starts_with("--") => bail!("unknown option {flag}"),
                path if file.is_none() => file = Some(PathBuf::from(path)),
                extra => bail!("unexpected argument {extra}"),
            }
        }

        Ok(Self {
            file: file.context("no markdown file given")?,
            config,
            dump,
        })
    }
}

struct App {
    title: String,
    lines: Vec<Line<'static>>,
    scroll: u16,
}

impl App {
    fn max_scroll(&self) -> u16 {
        u16::try_from(self.lines.len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    fn scroll_down(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_add(by).min(self.max_scroll());
    }

    fn scroll_up(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_sub(by);
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Some(
            Config::load_from_path(path)?
                .with_context(|| format!("config file '{}' not found", path.display()))?,
        ),
        None => Config::load()?,
    };
    if loaded.is_none() {
        log::info!(
            "no config at {}, using defaults",
            Config::config_path().display()
        );
    }
    Ok(loaded.unwrap_or_default())
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let args = match Args::parse(&args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: chatmark-cli <file.md> [--config <path>] [--dump]");
            process::exit(1);
        }
    };

    let config = load_config(args.config.as_ref())?;
    let options = ParseOptions {
        strict_tables: config.parser.strict_tables,
        strict_fences: config.parser.strict_fences,
    };

    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read '{}'", args.file.display()))?;
    let doc = parse_document_with(&text, options);
    log::info!("{} blocks in {}", doc.len(), args.file.display());

    if args.dump {
        print!("{}", snapshot::normalize(doc.blocks()));
        return Ok(());
    }

    let mut app = App {
        title: args.file.display().to_string(),
        lines: render::render_document(&doc, &config.theme),
        scroll: 0,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(20),
                KeyCode::PageUp => app.scroll_up(20),
                KeyCode::Home | KeyCode::Char('g') => app.scroll = 0,
                KeyCode::End | KeyCode::Char('G') => app.scroll = app.max_scroll(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let content = Paragraph::new(app.lines.clone())
        .block(Block::default().borders(Borders::ALL).title(app.title.as_str()))
        .scroll((app.scroll, 0));
    f.render_widget(content, chunks[0]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Scroll | "),
        Span::raw("PgUp/PgDn: Page | "),
        Span::raw("g/G: Top/Bottom"),
    ]));
    f.render_widget(help, chunks[1]);
}
