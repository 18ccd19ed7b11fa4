use std::{io, time::Duration};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use bestbet_lib::api::ResponsesClient;
use bestbet_lib::app::{App, AsyncAction, UiRequest};
use bestbet_lib::chat::{self, ChatRoute};
use bestbet_lib::config::{self, AppConfig};
use bestbet_lib::errors::FetchStage;
use bestbet_lib::predictions;
use bestbet_lib::sports::League;
use bestbet_lib::ui;

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print picks for one league to stdout and exit (nfl, nba, mlb)
    #[arg(short, long)]
    league: Option<String>,

    /// Override the configured games-per-league count for this run
    #[arg(short, long)]
    count: Option<usize>,

    /// Verify the credential and model reachability, then exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    use clap::Parser;
    let args = Args::parse();

    // Resolve the credential before touching the terminal so a missing key
    // prints a plain message instead of garbling the screen.
    let api_key = match config::api_credential() {
        Ok(key) => key,
        Err(err) => {
            eprintln!("{}", err.diagnostics());
            std::process::exit(1);
        }
    };

    let mut config = AppConfig::load().unwrap_or_default();
    if let Some(count) = args.count {
        config.games_per_league = count.clamp(1, 10);
    }

    let client = ResponsesClient::new(api_key, config.model);

    // -- CLI MODE --
    if args.check {
        println!("Checking gateway with {}...", config.model.display_name());
        let reply = client
            .generate("Reply with the single word READY.", false)
            .await?;
        println!("Gateway answered: {}", reply.trim());
        return Ok(());
    }

    if let Some(league_arg) = args.league {
        let league: League = league_arg.parse().map_err(anyhow::Error::msg)?;
        let card = predictions::fetch_league(&client, league, config.games_per_league, |stage| {
            eprintln!("{}...", stage.display_name());
        })
        .await?;
        print!("{}", predictions::console_summary(&card));
        return Ok(());
    }

    // -- TUI MODE (Default) --
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    if let Some(count) = args.count {
        app.config.games_per_league = count.clamp(1, 10);
    }

    let res = run_app(&mut terminal, &mut app, client).await;

    // Restore Terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    client: ResponsesClient,
) -> io::Result<()> {
    let (tx, mut rx) = mpsc::channel::<AsyncAction>(32);
    let mut client = client;

    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        // 1. Drain finished gateway work (non-blocking)
        while let Ok(action) = rx.try_recv() {
            app.apply_action(action);
        }

        app.on_tick();

        // 2. Poll inputs
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events, not release (Windows sends both)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if let Some(request) = app.handle_key_event(key) {
                    // A model change in settings applies from the next call on.
                    if client.model() != app.config.model {
                        client = client.with_model(app.config.model);
                    }
                    spawn_request(request, &client, &tx, app.config.games_per_league);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Run one gateway request on its own task, reporting back over the channel.
fn spawn_request(
    request: UiRequest,
    client: &ResponsesClient,
    tx: &mpsc::Sender<AsyncAction>,
    games_per_league: usize,
) {
    let client = client.clone();
    let tx = tx.clone();

    tokio::spawn(async move {
        // Stage updates are cosmetic, fine to drop when the channel is full.
        let notify = |stage: FetchStage| {
            let _ = tx.try_send(AsyncAction::LoadingMessage(stage.display_name()));
        };

        let action = match request {
            UiRequest::FetchAll => {
                match predictions::fetch_all_leagues(&client, games_per_league, notify).await {
                    Ok(cards) => AsyncAction::AllLeaguesLoaded(cards),
                    Err(err) => AsyncAction::Error(err),
                }
            }
            UiRequest::FetchLeague(league) => {
                match predictions::fetch_league(&client, league, games_per_league, notify).await {
                    Ok(card) => AsyncAction::LeagueLoaded(card),
                    Err(err) => AsyncAction::Error(err),
                }
            }
            UiRequest::Chat(text) => match chat::route_message(&text) {
                ChatRoute::League(league) => {
                    match predictions::fetch_league(&client, league, games_per_league, notify)
                        .await
                    {
                        Ok(card) => AsyncAction::ChatPicks(card),
                        Err(err) => AsyncAction::Error(err),
                    }
                }
                ChatRoute::FreeForm => match client.generate(&text, false).await {
                    Ok(reply) => AsyncAction::ChatAnswer(reply),
                    Err(err) => AsyncAction::Error(err),
                },
            },
        };

        let _ = tx.send(action).await;
    });
}
