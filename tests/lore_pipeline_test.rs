//! Lore pipeline integration tests
//!
//! Catches and chat lines flow through the background dispatcher and back
//! into the game state. No test here touches the network.

use river::config::LoreConfig;
use river::core::{apply_lore_update, handle_catch, sell_fish, GameState, LORE_PENDING_TEXT};
use river::core::{CHAT_FAILED_TEXT, LORE_FAILED_TEXT, LORE_UNCONFIGURED_TEXT};
use river::fishing::{catalog, Fish, SpeciesId};
use river::lore::{
    ChatLog, GeminiClient, LoreDispatcher, LoreError, LoreRequest, LoreService, LoreUpdate,
};
use std::sync::Arc;
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(5);

/// Echoes the species back as lore and the history length as chat.
struct EchoService;

impl LoreService for EchoService {
    fn describe(&self, request: &LoreRequest) -> Result<String, LoreError> {
        Ok(format!("  The {} remembers.  ", request.species))
    }

    fn reply(&self, history: &[String]) -> Result<String, LoreError> {
        Ok(format!("That's {} things you've said.", history.len()))
    }
}

/// Fails every call the way a dead network would.
struct DownService;

impl LoreService for DownService {
    fn describe(&self, _request: &LoreRequest) -> Result<String, LoreError> {
        Err(LoreError::Http("connection refused".into()))
    }

    fn reply(&self, _history: &[String]) -> Result<String, LoreError> {
        Err(LoreError::Http("connection refused".into()))
    }
}

fn fish_of(id: SpeciesId, weight: f64) -> Fish {
    Fish::new(catalog::species(id), weight, 0)
}

/// Waits for one update and applies it. Returns any chat reply.
fn deliver(state: &mut GameState, dispatcher: &LoreDispatcher) -> Option<String> {
    let update = dispatcher.recv_timeout(WAIT).expect("update within timeout");
    apply_lore_update(state, update)
}

// ============================================================================
// Fish Lore
// ============================================================================

#[test]
fn test_rare_catch_gets_lore_for_that_fish() {
    let dispatcher = LoreDispatcher::new(Arc::new(EchoService));
    let mut state = GameState::new();
    let eel = fish_of(SpeciesId::ElectricEel, 6.0);

    let record = handle_catch(&mut state, eel.clone(), &dispatcher);
    assert!(record.lore_requested);
    assert_eq!(state.lore.text_or_pending(eel.id), LORE_PENDING_TEXT);

    assert_eq!(deliver(&mut state, &dispatcher), None);
    assert_eq!(state.lore.get(eel.id), Some("The Electric Eel remembers."));
}

#[test]
fn test_common_catch_requests_nothing() {
    let dispatcher = LoreDispatcher::new(Arc::new(EchoService));
    let mut state = GameState::new();
    let minnow = fish_of(SpeciesId::Minnow, 0.3);

    let record = handle_catch(&mut state, minnow.clone(), &dispatcher);
    assert!(!record.lore_requested);
    assert_eq!(dispatcher.recv_timeout(Duration::from_millis(100)), None);
    assert!(state.lore.is_empty());
    assert_eq!(state.player.inventory, vec![minnow]);
}

#[test]
fn test_lore_for_several_catches_lands_on_the_right_fish() {
    let dispatcher = LoreDispatcher::new(Arc::new(EchoService));
    let mut state = GameState::new();
    let koi = fish_of(SpeciesId::GoldenKoi, 3.0);
    let spirit = fish_of(SpeciesId::RiverSpirit, 70.0);

    handle_catch(&mut state, koi.clone(), &dispatcher);
    handle_catch(&mut state, spirit.clone(), &dispatcher);
    // Replies may come back in either order
    deliver(&mut state, &dispatcher);
    deliver(&mut state, &dispatcher);

    assert_eq!(state.lore.len(), 2);
    assert_eq!(state.lore.get(koi.id), Some("The Golden Koi remembers."));
    assert_eq!(state.lore.get(spirit.id), Some("The River Spirit remembers."));
}

#[test]
fn test_fish_sold_before_reply_keeps_no_lore() {
    let dispatcher = LoreDispatcher::new(Arc::new(EchoService));
    let mut state = GameState::new();
    let eel = fish_of(SpeciesId::ElectricEel, 6.0);

    handle_catch(&mut state, eel.clone(), &dispatcher);
    sell_fish(&mut state, eel.id).expect("in inventory");
    assert_eq!(deliver(&mut state, &dispatcher), None);
    assert!(state.lore.is_empty());
}

#[test]
fn test_failed_service_still_fills_lore() {
    let dispatcher = LoreDispatcher::new(Arc::new(DownService));
    let mut state = GameState::new();
    let salmon = fish_of(SpeciesId::KingSalmon, 8.0);

    handle_catch(&mut state, salmon.clone(), &dispatcher);
    deliver(&mut state, &dispatcher);
    assert_eq!(state.lore.get(salmon.id), Some(LORE_FAILED_TEXT));
}

#[test]
fn test_unconfigured_client_answers_offline() {
    let client = GeminiClient::new(LoreConfig::default());
    assert!(!client.is_configured());
    let dispatcher = LoreDispatcher::new(Arc::new(client));
    let mut state = GameState::new();
    let catfish = fish_of(SpeciesId::GiantCatfish, 20.0);

    handle_catch(&mut state, catfish.clone(), &dispatcher);
    deliver(&mut state, &dispatcher);
    assert_eq!(state.lore.get(catfish.id), Some(LORE_UNCONFIGURED_TEXT));
}

#[test]
fn test_poll_drains_finished_requests() {
    let dispatcher = LoreDispatcher::new(Arc::new(EchoService));
    let koi = fish_of(SpeciesId::GoldenKoi, 3.0);
    dispatcher
        .spawn_lore(LoreRequest::for_fish(&koi))
        .join()
        .expect("worker finished");

    let updates = dispatcher.poll();
    assert_eq!(
        updates,
        vec![LoreUpdate::FishLore {
            fish_id: koi.id,
            text: "The Golden Koi remembers.".into()
        }]
    );
    assert!(dispatcher.poll().is_empty());
}

// ============================================================================
// Shopkeeper Chat
// ============================================================================

#[test]
fn test_chat_round_trip() {
    let dispatcher = LoreDispatcher::new(Arc::new(EchoService));
    let mut state = GameState::new();
    let mut chat = ChatLog::new();

    let history = chat.say("Anything new?").expect("accepted");
    // A second line waits for the reply
    assert_eq!(chat.say("Hello?"), None);
    dispatcher.spawn_reply(history);

    let reply = deliver(&mut state, &dispatcher).expect("chat reply");
    chat.receive(&reply);
    assert_eq!(
        chat.lines(),
        ["You: Anything new?", "Keep: That's 1 things you've said."]
    );
    assert!(!chat.is_awaiting_reply());

    let history = chat.say("Nice rods.").expect("accepted");
    assert_eq!(history.len(), 3);
}

#[test]
fn test_chat_failure_uses_fallback_line() {
    let dispatcher = LoreDispatcher::new(Arc::new(DownService));
    let mut state = GameState::new();
    let mut chat = ChatLog::new();

    dispatcher.spawn_reply(chat.say("Hi").expect("accepted"));
    let reply = deliver(&mut state, &dispatcher).expect("chat reply");
    assert_eq!(reply, CHAT_FAILED_TEXT);
}
