//! src/main.rs
//! Catalog browser TUI: fetch once, then search / filter / sort / reveal.

use std::io::{self, Stdout};
use std::panic::PanicHookInfo;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{Event as TerminalEvent, EventStream, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tokio::{
    signal,
    sync::{Notify, mpsc},
};
use tracing::{info, warn};

use vitrine_core::{
    Logger,
    config::Config,
    controller::{
        actions::Action, dispatcher, pagination::PaginationController,
    },
    model::{app_state::AppState, catalog::Pricing, query_state::SortMode, ui_state::Focus},
    operators::fetch_task::{TaskResult, spawn_catalog_fetch},
    util::debounce::Debouncer,
    view::ui::UIRenderer,
};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(about = "Terminal storefront catalog browser", long_about = None)]
#[command(version)]
struct Cli {
    /// Launch address query string, e.g. "?filter=0&filter=2&search=logo".
    /// Seeds search text and active filters once at startup.
    address: Option<String>,

    /// Override the catalog endpoint from the config file.
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_panic_handler();

    let app = App::new(cli).await.context("Failed to initialize application")?;
    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

struct App {
    terminal: AppTerminal,
    state: AppState,
    ui_renderer: UIRenderer,

    debouncer: Debouncer<String>,
    debounce_rx: mpsc::UnboundedReceiver<String>,

    pagination: PaginationController,
    settle_rx: mpsc::UnboundedReceiver<()>,

    task_rx: mpsc::UnboundedReceiver<TaskResult>,

    shutdown: Arc<Notify>,
}

impl App {
    async fn new(cli: Cli) -> Result<Self> {
        Logger::init_tracing();
        info!("Starting catalog browser TUI");

        let mut config = Config::load().await.unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {e}");
            Config::default()
        });
        if let Some(endpoint) = cli.endpoint {
            config.endpoint = endpoint;
        }

        let terminal = setup_terminal().context("Failed to initialize terminal")?;

        let (debouncer, debounce_rx) = Debouncer::new(config.debounce_delay);
        let (pagination, settle_rx) = PaginationController::new(config.settle_delay);
        let (task_tx, task_rx) = mpsc::unbounded_channel::<TaskResult>();

        let endpoint = config.endpoint.clone();
        let mut state = AppState::new(config);

        let size = terminal.size().context("Failed to read terminal size")?;
        dispatcher::handle(&mut state, Action::Resize(size.width, size.height));

        // Inbound address read: exactly once, before anything the user can
        // see is computed. Later share-link writes never loop back here.
        if let Some(address) = cli.address.as_deref() {
            state.seed_from_address(address);
        }

        // The only external await of the session; the UI renders its
        // loading state until this lands (forever, if it fails).
        spawn_catalog_fetch(endpoint, task_tx);

        let shutdown = Arc::new(Notify::new());

        info!("Application initialized");

        Ok(Self {
            terminal,
            state,
            ui_renderer: UIRenderer::new(),
            debouncer,
            debounce_rx,
            pagination,
            settle_rx,
            task_rx,
            shutdown,
        })
    }

    async fn run(mut self) -> Result<()> {
        self.setup_shutdown_handler();
        info!("Starting event loop");

        let mut event_stream = EventStream::new();

        loop {
            self.render()?;
            self.sync_pagination();

            let proceed = tokio::select! {
                _ = self.shutdown.notified() => {
                    info!("Shutdown signal received");
                    false
                }

                // Terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(terminal_event)) => {
                            match self.map_terminal_event(&terminal_event) {
                                Some(action) => self.apply(action),
                                None => true,
                            }
                        }
                        Some(Err(e)) => {
                            warn!("Terminal event error: {e}");
                            true
                        }
                        None => false,
                    }
                }

                // Debounced search commits
                Some(text) = self.debounce_rx.recv() => {
                    self.apply(Action::CommitSearch(text))
                }

                // Pagination settle ticks
                Some(()) = self.settle_rx.recv() => {
                    self.pagination.acknowledge();
                    // the viewport may have moved away during the settle
                    // window; only grow when the sentinel is still in view
                    if self.state.sentinel_visible() {
                        self.apply(Action::GrowWindow)
                    } else {
                        true
                    }
                }

                // Background task results
                Some(task_result) = self.task_rx.recv() => {
                    let action = match task_result {
                        TaskResult::CatalogLoaded(items) => Action::CatalogLoaded(items),
                        TaskResult::CatalogFailed(err) => Action::CatalogFailed(err.to_string()),
                    };
                    self.apply(action)
                }
            };

            if !proceed {
                break;
            }
        }

        info!("Event loop terminated cleanly");
        Ok(())
    }

    /// Route one action: feed the debouncer on raw search edits, then run
    /// the reducer.
    fn apply(&mut self, action: Action) -> bool {
        if let Action::SearchInput(buffer) = &action {
            self.debouncer.submit(buffer.clone());
        }

        dispatcher::handle(&mut self.state, action)
    }

    /// Arm or tear down sentinel observation to match what the last render
    /// put on screen.
    fn sync_pagination(&mut self) {
        if self.state.sentinel_visible() {
            self.pagination.observe();
        } else {
            self.pagination.suspend();
        }
    }

    /// Translate a terminal event into an action, honoring panel focus.
    fn map_terminal_event(&self, event: &TerminalEvent) -> Option<Action> {
        let key_event = match event {
            TerminalEvent::Key(key_event) => key_event,
            TerminalEvent::Resize(width, height) => {
                return Some(Action::Resize(*width, *height));
            }
            _ => return None,
        };

        // global bindings first
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Some(Action::Quit),
            (KeyCode::Tab, _) => return Some(Action::FocusNext),
            (KeyCode::BackTab, _) => return Some(Action::FocusPrev),
            _ => {}
        }

        let focus = self.state.ui.focus;

        if focus == Focus::Search {
            return self.map_search_key(key_event.code);
        }

        // browse-mode bindings shared by the non-typing panels
        match (key_event.code, focus) {
            (KeyCode::Char('q'), _) => Some(Action::Quit),
            (KeyCode::Char('r'), _) => Some(Action::Reset),
            (KeyCode::Up, Focus::Filters) => Some(Action::FilterCursorUp),
            (KeyCode::Down, Focus::Filters) => Some(Action::FilterCursorDown),
            (KeyCode::Char(' ') | KeyCode::Enter, Focus::Filters) => {
                Some(Action::ToggleFilter(Pricing::ALL[self.state.ui.filter_cursor]))
            }
            (KeyCode::Left, Focus::Slider) => Some(Action::NudgeCeiling(-1)),
            (KeyCode::Right, Focus::Slider) => Some(Action::NudgeCeiling(1)),
            (KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter, Focus::Sort) => {
                Some(Action::CycleSort)
            }
            (KeyCode::Char('1'), Focus::Sort) => Some(Action::SetSort(SortMode::Relevance)),
            (KeyCode::Char('2'), Focus::Sort) => Some(Action::SetSort(SortMode::HighToLow)),
            (KeyCode::Char('3'), Focus::Sort) => Some(Action::SetSort(SortMode::LowToHigh)),
            (KeyCode::Up, Focus::Results) => Some(Action::MoveSelectionUp),
            (KeyCode::Down, Focus::Results) => Some(Action::MoveSelectionDown),
            (KeyCode::PageUp, Focus::Results) => Some(Action::PageUp),
            (KeyCode::PageDown, Focus::Results) => Some(Action::PageDown),
            (KeyCode::Home, Focus::Results) => Some(Action::SelectFirst),
            (KeyCode::End, Focus::Results) => Some(Action::SelectLast),
            _ => None,
        }
    }

    /// Keys while the search bar owns input: edit the live buffer. Every
    /// edit restarts the debounce window; only the value standing after
    /// 300 ms of quiet is committed into query state.
    fn map_search_key(&self, code: KeyCode) -> Option<Action> {
        match code {
            KeyCode::Char(c) => {
                let mut buffer = self.state.ui.search_input.clone();
                buffer.push(c);
                Some(Action::SearchInput(buffer))
            }
            KeyCode::Backspace => {
                let mut buffer = self.state.ui.search_input.clone();
                buffer.pop()?;
                Some(Action::SearchInput(buffer))
            }
            KeyCode::Esc | KeyCode::Enter => Some(Action::FocusNext),
            _ => None,
        }
    }

    fn render(&mut self) -> Result<()> {
        if self.state.ui.needs_redraw {
            self.terminal
                .draw(|frame: &mut Frame<'_>| {
                    self.ui_renderer.render(frame, &self.state);
                })
                .context("Failed to draw terminal")?;

            self.state.ui.clear_redraw();
        }

        Ok(())
    }

    fn setup_shutdown_handler(&self) {
        let shutdown = Arc::clone(&self.shutdown);

        tokio::spawn(async move {
            if let Err(e) = signal::ctrl_c().await {
                warn!("Failed to listen for Ctrl+C: {e}");
                return;
            }
            info!("Received Ctrl+C");
            shutdown.notify_one();
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // explicit teardown: the pending settle timer and debounce sleeper
        // abort in their own Drop impls
        self.debouncer.cancel();
        self.pagination.suspend();

        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            warn!("Failed to cleanup terminal: {e}");
        }
    }
}

fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    info!("Terminal setup complete");
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    info!("Terminal cleanup complete");
    Ok(())
}

fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        original_hook(panic_info);
    }));
}
