//! Runs lore requests on background threads and hands results back over a channel.

use super::{chat_text, lore_text, LoreRequest, LoreService};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use uuid::Uuid;

/// A finished request, already resolved to display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoreUpdate {
    FishLore { fish_id: Uuid, text: String },
    ShopReply { text: String },
}

/// Anything that can take a lore request for a caught fish.
pub trait LoreRequester {
    fn request_lore(&self, request: LoreRequest);
}

pub struct LoreDispatcher {
    service: Arc<dyn LoreService>,
    tx: Sender<LoreUpdate>,
    rx: Receiver<LoreUpdate>,
}

impl LoreDispatcher {
    pub fn new(service: Arc<dyn LoreService>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { service, tx, rx }
    }

    /// Asks for fish lore. The reply arrives later through [`poll`](Self::poll).
    pub fn spawn_lore(&self, request: LoreRequest) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let text = lore_text(service.describe(&request));
            // Receiver gone means the game is shutting down.
            let _ = tx.send(LoreUpdate::FishLore {
                fish_id: request.fish_id,
                text,
            });
        })
    }

    /// Asks the shopkeeper for a reply to the chat so far.
    pub fn spawn_reply(&self, history: Vec<String>) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let text = chat_text(service.reply(&history));
            let _ = tx.send(LoreUpdate::ShopReply { text });
        })
    }

    /// Drains every finished request without blocking.
    pub fn poll(&self) -> Vec<LoreUpdate> {
        self.rx.try_iter().collect()
    }

    /// Waits for the next finished request.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<LoreUpdate> {
        match self.rx.recv_timeout(timeout) {
            Ok(update) => Some(update),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

impl LoreRequester for LoreDispatcher {
    fn request_lore(&self, request: LoreRequest) {
        tracing::debug!(fish = %request.fish_id, species = request.species, "requesting lore");
        self.spawn_lore(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{CHAT_FAILED_TEXT, LORE_UNCONFIGURED_TEXT};
    use crate::fishing::Rarity;
    use crate::lore::LoreError;
    use std::sync::Mutex;

    const WAIT: Duration = Duration::from_secs(5);

    struct ScriptedService {
        lore: Result<String, LoreError>,
        reply: Result<String, LoreError>,
        seen_history: Mutex<Vec<Vec<String>>>,
    }

    impl LoreService for ScriptedService {
        fn describe(&self, _request: &LoreRequest) -> Result<String, LoreError> {
            self.lore.clone()
        }

        fn reply(&self, history: &[String]) -> Result<String, LoreError> {
            if let Ok(mut seen) = self.seen_history.lock() {
                seen.push(history.to_vec());
            }
            self.reply.clone()
        }
    }

    fn dispatcher(
        lore: Result<String, LoreError>,
        reply: Result<String, LoreError>,
    ) -> (LoreDispatcher, Arc<ScriptedService>) {
        let service = Arc::new(ScriptedService {
            lore,
            reply,
            seen_history: Mutex::new(Vec::new()),
        });
        (LoreDispatcher::new(service.clone()), service)
    }

    fn request() -> LoreRequest {
        LoreRequest {
            fish_id: Uuid::new_v4(),
            species: "Golden Koi",
            rarity: Rarity::Premium,
            weight: 3.0,
        }
    }

    #[test]
    fn test_lore_arrives_tagged_with_fish() {
        let (dispatcher, _) = dispatcher(Ok("Gleams.".into()), Ok(String::new()));
        let req = request();
        let fish_id = req.fish_id;
        dispatcher.request_lore(req);
        assert_eq!(
            dispatcher.recv_timeout(WAIT),
            Some(LoreUpdate::FishLore {
                fish_id,
                text: "Gleams.".into()
            })
        );
    }

    #[test]
    fn test_unconfigured_lore_uses_placeholder() {
        let (dispatcher, _) = dispatcher(Err(LoreError::NotConfigured), Ok(String::new()));
        dispatcher.spawn_lore(request()).join().expect("worker");
        let updates = dispatcher.poll();
        assert_eq!(updates.len(), 1);
        assert!(matches!(
            &updates[0],
            LoreUpdate::FishLore { text, .. } if text == LORE_UNCONFIGURED_TEXT
        ));
    }

    #[test]
    fn test_failed_reply_uses_fallback() {
        let (dispatcher, service) =
            dispatcher(Ok(String::new()), Err(LoreError::Http("503".into())));
        let history = vec!["You: got any worms?".to_string()];
        dispatcher.spawn_reply(history.clone()).join().expect("worker");
        assert_eq!(
            dispatcher.poll(),
            vec![LoreUpdate::ShopReply {
                text: CHAT_FAILED_TEXT.into()
            }]
        );
        let seen = service.seen_history.lock().expect("lock");
        assert_eq!(*seen, vec![history]);
    }

    #[test]
    fn test_poll_is_empty_without_requests() {
        let (dispatcher, _) = dispatcher(Ok(String::new()), Ok(String::new()));
        assert!(dispatcher.poll().is_empty());
        assert_eq!(dispatcher.recv_timeout(Duration::from_millis(10)), None);
    }
}
