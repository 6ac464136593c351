use stride::app::{App, AppMessage};
use stride::cli::{parse_args, run_cli_command, USAGE};
use stride::input::CommandRegistry;
use stride::startup::{build_service, StrideConfig};
use stride::terminal::{setup_panic_hook, TerminalManager};
use stride::{logging, ui};

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;

/// Frame tick for spinners.
const TICK: Duration = Duration::from_millis(16);

/// How long to wait on exit for likes and deletes that were already sent.
const MUTATION_GRACE: Duration = Duration::from_secs(3);

fn main() -> Result<()> {
    // Print-and-exit commands run before anything touches the terminal
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("stride: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };
    let Some(options) = run_cli_command(command) else {
        return Ok(());
    };

    color_eyre::install()?;
    setup_panic_hook();

    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let config = StrideConfig::load(&options)?;
    tracing::info!(
        demo = config.demo,
        page_size = config.page_size,
        "configuration loaded"
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}

async fn run(config: StrideConfig) -> Result<()> {
    let service = build_service(&config);
    let mut app = App::new(service).with_page_size(config.page_size);

    let mut manager = TerminalManager::new()?;
    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore()?;

    app.shutdown();
    app.settle_mutations(MUTATION_GRACE).await;
    tracing::info!("stride exiting");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();
    let mut event_stream = EventStream::new();

    // Take the receiver so select! can own it
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    app.on_appear();

    loop {
        if app.should_quit {
            return Ok(());
        }

        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
            // The last card may have just scrolled into view
            app.notify_viewport();
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        let context = app.build_input_context();
                        if let Some(cmd) = registry.dispatch(key, &context) {
                            app.execute_command(cmd);
                        }
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("terminal event error: {}", e);
                        return Err(e.into());
                    }
                    None => return Ok(()),
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }
    }
}
