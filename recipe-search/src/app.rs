use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::background::{catalog_loader::CatalogLoader, BackgroundTaskManager};
use crate::commands::{executor, handlers, AppCommand};
use crate::input::{KeyEvent, MouseClick};
use crate::log_buffer::LogBuffer;
use crate::logging::init_logging_with_buffer;
use crate::settings::Settings;
use crate::state::AppState;
use crate::ui::screens::Screen;

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn run(&self) -> Result<()> {
        // Create log buffer before initializing logging
        let log_buffer = LogBuffer::new(self.settings.log_buffer_size);
        let log_path = init_logging_with_buffer(log_buffer.clone())?;

        tracing::info!("recipe-search starting, logging to {}", log_path.display());
        tracing::debug!("Settings: {:?}", self.settings);

        let mut terminal = self.init()?;

        let (data_tx, mut data_rx) = tokio::sync::mpsc::unbounded_channel();

        let mut ui_state = AppState::with_options(self.settings.search_options());
        let mut task_manager = BackgroundTaskManager::new();
        let catalog_loader = CatalogLoader::new(&self.settings.catalog_path, data_tx);

        let mut event_stream = EventStream::new();

        executor::execute_command(
            AppCommand::LoadCatalog,
            &mut ui_state,
            &mut task_manager,
            &catalog_loader,
        );

        tracing::info!("Entering main event loop");

        let mut interval = tokio::time::interval(std::time::Duration::from_millis(100));
        loop {
            // Update total_entries for logs screen if active
            if let Screen::Logs(logs_state) = ui_state.current_screen_mut() {
                logs_state.total_entries = log_buffer.len();
            }

            terminal.draw(|f| {
                crate::ui::render_app(f, &ui_state, &log_buffer);
            })?;

            tokio::select! {
                _ = interval.tick() => {
                    if let Some(throbber_state) = ui_state.loading_state() {
                        throbber_state.calc_next();
                    }
                }
                Some(Ok(event)) = event_stream.next() => {
                    // Don't log when on logs screen to avoid feedback loop
                    let on_logs_screen = matches!(ui_state.current_screen(), Screen::Logs(_));

                    let command = match event {
                        Event::Key(key) if matches!(key.kind, KeyEventKind::Press) => {
                            if !on_logs_screen {
                                tracing::debug!("Key press: {:?}", key);
                            }
                            handlers::handle_key_input(KeyEvent::from(key), &ui_state)
                        }
                        Event::Mouse(mouse) => MouseClick::from_event(mouse)
                            .and_then(|click| handlers::handle_mouse_click(click, &ui_state)),
                        _ => None,
                    };

                    if let Some(command) = command {
                        if !on_logs_screen {
                            tracing::debug!("Executing command: {:?}", command);
                        }
                        executor::execute_command(
                            command,
                            &mut ui_state,
                            &mut task_manager,
                            &catalog_loader,
                        );
                    }
                }
                Some(data_event) = data_rx.recv() => {
                    tracing::debug!("Received data event: {:?}", data_event);
                    crate::state::reducer::reduce_data_event(&mut ui_state, data_event);
                }
            }

            // Check if we should quit
            if ui_state.should_quit {
                tracing::info!("Quit requested, exiting event loop");
                break;
            }
        }

        tracing::info!("Cleaning up application");

        task_manager.cancel_all();

        self.exit(terminal)?;

        Ok(())
    }

    fn init(&self) -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(
        &self,
        mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}
