use crossterm::event::{self, Event as CEvent, KeyEvent};
use std::time::Duration;
use tokio::sync::mpsc;

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Bridges crossterm's blocking event poll onto an async channel.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    pub fn new(poll_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        std::thread::spawn(move || loop {
            if event::poll(poll_rate).unwrap_or(false) {
                let app_event = match event::read() {
                    Ok(CEvent::Key(key)) => Some(AppEvent::Key(key)),
                    Ok(CEvent::Resize(w, h)) => Some(AppEvent::Resize(w, h)),
                    _ => None,
                };
                if let Some(evt) = app_event {
                    if tx.send(evt).is_err() {
                        break;
                    }
                }
            }
        });
        Self { rx }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}
