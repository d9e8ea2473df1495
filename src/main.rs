mod app;
mod ui;

use app::App;
use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use river::config::{Command, Config, LoreConfig, USAGE};
use river::core::constants::{MAX_FRAME_DT_MS, TICK_INTERVAL_MS};
use river::fishing::catalog;
use river::lore::{GeminiClient, LoreDispatcher};
use river::utils::init_logging;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let config = match Config::from_args() {
        Ok(Command::Play(config)) => config,
        Ok(Command::Version) => {
            println!("river {}", env!("CARGO_PKG_VERSION"));
            std::process::exit(0);
        }
        Ok(Command::Help) => {
            println!("{}", USAGE);
            std::process::exit(0);
        }
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Run 'river --help' for usage.");
            std::process::exit(1);
        }
    };

    if let Err(err) = catalog::validate() {
        eprintln!("Invalid fish catalog: {}", err);
        std::process::exit(1);
    }

    init_logging();
    let lore_config = LoreConfig::from_env();
    tracing::info!(
        seed = ?config.seed,
        lore = lore_config.is_configured(),
        "starting river"
    );

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let lore = LoreDispatcher::new(Arc::new(GeminiClient::new(lore_config)));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let key_releases = supports_keyboard_enhancement().unwrap_or(false);
    if key_releases {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(lore, rng, key_releases);
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    if key_releases {
        terminal.backend_mut().execute(PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(
        money = app.state.player.money,
        fish = app.state.player.inventory.len(),
        "session ended"
    );
    result
}

/// Fixed-step game loop: input, simulation ticks, draw.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    let tick = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_frame = Instant::now();
    let mut accumulated_ms: u64 = 0;

    while !app.quit {
        terminal.draw(|frame| ui::draw_ui(frame, app))?;

        // Drain input until the next tick is due
        let deadline = last_frame + tick;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                ui::keymap::handle_key(app, key);
            }
            if app.quit {
                return Ok(());
            }
        }

        let now = Instant::now();
        let dt_ms = (now - last_frame).as_millis() as u64;
        last_frame = now;
        accumulated_ms += dt_ms.min(MAX_FRAME_DT_MS);

        while accumulated_ms >= TICK_INTERVAL_MS {
            app.tick();
            accumulated_ms -= TICK_INTERVAL_MS;
        }
        app.poll_lore();
    }
    Ok(())
}
