// crates/ticker-client/src/main.rs

use std::{fs::File, io, path::PathBuf, sync::Mutex, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use ticker_core::{Market, PriceFeed, Tick};
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ticker_client::app::App;
use ticker_client::config::ClientConfig;
use ticker_client::feed::MarketFeed;
use ticker_client::ui;

#[derive(Parser)]
#[clap(name = "ticker")]
#[clap(about = "Live quotes and pending limit orders in the terminal")]
struct Cli {
    /// TOML config file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Market feed period in milliseconds (overrides config)
    #[clap(short, long)]
    tick_ms: Option<u64>,

    /// Start without the simulated market feed
    #[clap(long)]
    no_feed: bool,

    /// Write logs to this file
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging (to ticker.log unless --log-file is given)
    #[clap(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging. The terminal belongs to the UI, so logs go to a file.
    if cli.debug || cli.log_file.is_some() {
        init_logging(&cli)?;
    }

    let mut config = ClientConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.tick_ms, cli.no_feed);
    config.validate()?;
    info!(quotes = config.quotes.len(), tick_ms = config.tick_interval_ms, "starting ticker");

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let app = App::new(Market::new(config.quote_list(), config.max_trades));
    let res = run_app(&mut terminal, app, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("ticker stopped: {err:?}");
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn init_logging(cli: &Cli) -> Result<()> {
    let path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| PathBuf::from("ticker.log"));
    let file = File::create(&path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    let default_filter = if cli.debug {
        "ticker_client=debug,ticker_core=debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    config: &ClientConfig,
) -> Result<()> {
    // Channel from the market feed to the UI loop
    let (tx_ticks, mut rx_ticks) = mpsc::unbounded_channel::<Tick>();

    let feed_handle = if config.feed_enabled {
        let symbols = app.market.quotes().symbols().map(String::from).collect();
        let feed = MarketFeed::new(
            PriceFeed::from_os_rng(symbols, config.volatility),
            Duration::from_millis(config.tick_interval_ms),
            tx_ticks,
        );
        Some(tokio::spawn(feed.run()))
    } else {
        drop(tx_ticks);
        app.feed_paused = true;
        None
    };

    loop {
        // Draw UI
        terminal.draw(|f| ui::draw(f, &app))?;

        // Handle events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        // Apply market ticks
        while let Ok(tick) = rx_ticks.try_recv() {
            app.handle_tick(tick);
        }

        // Check if should quit
        if app.should_quit {
            break;
        }
    }

    // Cleanup
    if let Some(handle) = feed_handle {
        handle.abort();
    }
    Ok(())
}
