use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// The terminal could not be read. The poller stops after sending this.
    Error(io::Error),
}

/// Polls the terminal on a background thread and forwards events.
///
/// The thread stops on its own once the receiving side is dropped, or after
/// forwarding a terminal read failure as [`AppEvent::Error`].
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());

                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                            Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                            Ok(_) => None,
                            Err(err) => {
                                tracing::error!(error = %err, "terminal read failed");
                                let _ = tx.send(AppEvent::Error(err));
                                break;
                            }
                        };
                        if let Some(app_event) = forwarded {
                            if tx.send(app_event).is_err() {
                                break;
                            }
                        }
                    }
                    Ok(false) => {
                        // Timeout — no event
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "terminal poll failed");
                        let _ = tx.send(AppEvent::Error(err));
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
            tracing::debug!("event poller stopped");
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
