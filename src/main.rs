mod app;
mod cli;
mod color;
mod config;
mod error;
mod gradient;
mod input;
mod logging;
mod raster;
mod readout;
mod state;
mod ui;

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use app::{App, BIG_STEP, STEP};
use cli::{Cli, Commands, ConfigAction};
use input::PointerKind;
use ui::PickerLayout;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None => run_tui(&cli),
        Some(ref cmd) => dispatch_command(&cli, cmd),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch_command(cli: &Cli, cmd: &Commands) -> error::Result<()> {
    // Only `config show` needs a readable settings file; everything else
    // falls back to defaults so a broken file can still be located and fixed.
    let strict = matches!(
        cmd,
        Commands::Config {
            action: ConfigAction::Show
        }
    );
    let mut settings = match config::settings_path() {
        Some(path) if strict => config::load_settings_from(&path)?,
        Some(path) => {
            let (settings, err) = config::load_settings_or_default_from(&path);
            if let Some(e) = err {
                eprintln!("Warning: ignoring {}: {}", path.display(), e);
            }
            settings
        }
        None => config::Settings::default(),
    };
    cli.apply(&mut settings);
    if let Err(e) = logging::init_stderr(settings.log_level) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match cmd {
        Commands::Convert {
            hue,
            saturation,
            lightness,
            alpha,
        } => {
            for line in readout::convert(*hue, *saturation, *lightness, *alpha)? {
                println!("{}", line);
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                println!("{}", serde_json::to_string_pretty(&settings)?);
            }
            ConfigAction::Path => {
                let path = config::settings_path().ok_or(error::Error::NoConfigDir)?;
                println!("{}", path.display());
            }
            ConfigAction::Init => {
                let path = config::init_settings()?;
                println!("Wrote default settings to {}", path.display());
            }
        },
    }
    Ok(())
}

fn run_tui(cli: &Cli) -> error::Result<()> {
    let mut settings = config::load_settings()?;
    cli.apply(&mut settings);

    match settings.log_path() {
        Some(path) => {
            if let Err(e) = logging::init_file(settings.log_level, &path) {
                eprintln!("Warning: logging disabled: {}", e);
            }
        }
        None => eprintln!("Warning: no log location available, logging disabled"),
    }
    log::info!(
        "starting at {} with {} samples per unit",
        settings.initial_state().hex(),
        settings.samples_per_unit
    );

    let mut app = App::new(settings.initial_state(), settings.renderer());
    if let Some(channel) = cli.focus {
        app.focus = channel;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Cleanup
    let restored = disable_raw_mode().and_then(|_| {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
    });
    terminal.show_cursor()?;

    result?;
    restored?;
    println!("{}", app.state.hex());
    log::info!("exiting with {}", app.state.hex());
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), io::Error> {
    loop {
        let size = terminal.size()?;
        let layout = ui::get_layout_rects(Rect::new(0, 0, size.width, size.height));
        app.sync_strips(&layout.strip_sizes());

        terminal.draw(|f| {
            ui::render_picker(f, app, &layout);
            if app.show_help {
                ui::render_help(f);
            }
        })?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    app.status_message = None;
                    handle_key_input(app, key);
                }
                Event::Mouse(mouse) => handle_mouse_input(app, &layout, mouse),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key_input(app: &mut App, key: KeyEvent) {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.show_help {
        app.show_help = false;
        return;
    }

    let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
        BIG_STEP
    } else {
        STEP
    };

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => app.focus_prev(),
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => app.focus_next(),
        KeyCode::Char('h') | KeyCode::Left => {
            app.nudge_focused(-step);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.nudge_focused(step);
        }
        KeyCode::Char('H') => {
            app.nudge_focused(-BIG_STEP);
        }
        KeyCode::Char('L') => {
            app.nudge_focused(BIG_STEP);
        }
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }
}

fn handle_mouse_input(app: &mut App, layout: &PickerLayout, mouse: MouseEvent) {
    // A click anywhere closes help without reaching the strips below it.
    if app.show_help {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            app.show_help = false;
        }
        return;
    }
    let kind = match mouse.kind {
        MouseEventKind::Moved => PointerKind::Move,
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            PointerKind::Click
        }
        _ => return,
    };
    app.route_pointer(layout.hit(mouse.column, mouse.row, kind));
}
