use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;

use super::handler::InputHandler;
use crate::game::{Intent, IntentSource};

/// Terminal keyboard as an [`IntentSource`]
///
/// A background task reads the crossterm event stream and queues intents;
/// polling only drains the queue, so a tick never waits on the keyboard.
pub struct KeyboardInput {
    receiver: UnboundedReceiver<Intent>,
    reader: Option<JoinHandle<()>>,
}

impl KeyboardInput {
    /// Start reading key events; must be called inside a tokio runtime
    pub fn spawn() -> Self {
        let (sender, receiver) = unbounded_channel();
        let reader = tokio::spawn(forward_key_events(sender));
        Self {
            receiver,
            reader: Some(reader),
        }
    }

    /// Drain an existing channel instead of the terminal
    pub fn from_receiver(receiver: UnboundedReceiver<Intent>) -> Self {
        Self {
            receiver,
            reader: None,
        }
    }
}

impl IntentSource for KeyboardInput {
    fn poll_intents(&mut self) -> Vec<Intent> {
        let mut intents = Vec::new();
        while let Ok(intent) = self.receiver.try_recv() {
            intents.push(intent);
        }
        intents
    }
}

impl Drop for KeyboardInput {
    fn drop(&mut self) {
        if let Some(reader) = self.reader.take() {
            reader.abort();
        }
    }
}

async fn forward_key_events(sender: UnboundedSender<Intent>) {
    let handler = InputHandler::new();
    let mut events = EventStream::new();

    while let Some(event) = events.next().await {
        match event {
            // Only process key press events, not release
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                let Some(intent) = handler.handle_key_event(key) else {
                    continue;
                };
                if sender.send(intent).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(error = %err, "terminal event stream failed");
                break;
            }
        }
    }
}
