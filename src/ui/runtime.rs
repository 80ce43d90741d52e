use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Whether the event loop keeps going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

/// Run the UI until the user quits. Returns the final display text.
///
/// A terminal failure is an error, never a normal exit, so callers that
/// print the result cannot mistake it for a confirmed edit.
pub fn run(config: &Config) -> io::Result<String> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.defaults.tick_rate_ms);
    let mut app = App::new(config.defaults.text.clone());
    let events = EventHandler::new(tick_rate);
    tracing::info!(tick_rate_ms = config.defaults.tick_rate_ms, "ui started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        if handle_event(&mut app, events.next(tick_rate))? == LoopControl::Exit {
            break;
        }
    }

    drop(guard);
    tracing::info!("ui stopped");
    Ok(app.root().display_text.clone())
}

/// Apply one poll result to `app`.
///
/// Resize and tick need no state change: the next `draw` picks up the new
/// terminal size.
fn handle_event(
    app: &mut App,
    event: Result<AppEvent, RecvTimeoutError>,
) -> io::Result<LoopControl> {
    match event {
        Ok(AppEvent::Key(key)) => handle_key(app, key),
        Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
        Ok(AppEvent::Error(err)) => return Err(err),
        Err(RecvTimeoutError::Timeout) => {}
        Err(RecvTimeoutError::Disconnected) => {
            if app.should_quit() {
                return Ok(LoopControl::Exit);
            }
            return Err(io::Error::other("terminal event source closed"));
        }
    }
    Ok(LoopControl::Continue)
}
