use std::io;
use std::sync::Arc;

use crate::config::Config;
use crate::transport::{SimulatedTransport, Transport};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the UI loop until quit.
///
/// The tokio runtime owns every timer and the in-flight delivery; all of
/// them report back through the event channel tagged with the generation
/// they were scheduled under, and die with the runtime on teardown.
pub fn run(config: Config, fail_submissions: bool) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.animation.tick();
    let submit_delay = config.submission.submit_delay();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()?;

    let transport: Arc<dyn Transport> = if fail_submissions {
        Arc::new(SimulatedTransport::failing(submit_delay))
    } else {
        Arc::new(SimulatedTransport::new(submit_delay))
    };

    let mut app = App::new(config);
    let events = EventHandler::new(tick_rate);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => match handle_key(&mut app, key) {
                InputAction::Submit => {
                    if let Some(draft) = app.begin_submission() {
                        let tx = events.sender();
                        let transport = Arc::clone(&transport);
                        runtime.spawn(async move {
                            let result = transport.deliver(draft).await;
                            let _ = tx.send(AppEvent::DeliveryDone { result });
                        });
                    }
                }
                InputAction::CopyEmail => {
                    if let Some(generation) = app.copy_email() {
                        let tx = events.sender();
                        let delay = app.config().submission.copied_reset();
                        runtime.spawn(async move {
                            tokio::time::sleep(delay).await;
                            let _ = tx.send(AppEvent::CopiedTimer { generation });
                        });
                    }
                }
                InputAction::None => {}
            },
            Ok(AppEvent::DeliveryDone { result }) => {
                if let Some(generation) = app.finish_submission(result) {
                    let tx = events.sender();
                    let delay = app.config().submission.status_reset();
                    runtime.spawn(async move {
                        tokio::time::sleep(delay).await;
                        let _ = tx.send(AppEvent::StatusTimer { generation });
                    });
                }
            }
            Ok(AppEvent::StatusTimer { generation }) => app.on_status_timer(generation),
            Ok(AppEvent::CopiedTimer { generation }) => app.on_copied_timer(generation),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Pending timers die with the runtime; nothing outlives the loop.
    runtime.shutdown_background();
    drop(guard);
    Ok(())
}
