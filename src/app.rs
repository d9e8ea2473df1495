//! Front-end session state: the game plus overlays, input plumbing and lore.

use rand::rngs::StdRng;
use river::core::{
    apply_lore_update, game_tick, handle_catch, sell_fish, CatchRecord, GameState, TickEvent,
    TRIGGER_HOLD_TICKS,
};
use river::input::{Action, HeldKeys, InputState};
use river::lore::{ChatLog, LoreDispatcher};
use river::shop::{self, SHOP_CATALOG};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopTab {
    Gear,
    Sell,
    Chat,
}

impl ShopTab {
    pub fn next(self) -> Self {
        match self {
            ShopTab::Gear => ShopTab::Sell,
            ShopTab::Sell => ShopTab::Chat,
            ShopTab::Chat => ShopTab::Gear,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShopView {
    pub tab: ShopTab,
    pub selected: usize,
    pub chat_input: String,
    /// Result of the last purchase or sale.
    pub message: Option<String>,
}

impl ShopView {
    fn new() -> Self {
        Self {
            tab: ShopTab::Gear,
            selected: 0,
            chat_input: String::new(),
            message: None,
        }
    }
}

/// What covers the river, if anything. The simulation is paused while covered.
#[derive(Debug, Clone)]
pub enum Overlay {
    None,
    Catch(CatchRecord),
    Shop(ShopView),
}

pub struct App {
    pub state: GameState,
    pub overlay: Overlay,
    pub chat: ChatLog,
    /// One-line message shown in the status bar.
    pub status: String,
    pub quit: bool,
    input: InputState,
    held: HeldKeys,
    /// True when the terminal reports key releases.
    key_releases: bool,
    /// Ticks during which a trigger press on the catch card counts as key
    /// repeat from the reel, not a new press.
    trigger_guard: u32,
    lore: LoreDispatcher,
    rng: StdRng,
}

impl App {
    pub fn new(lore: LoreDispatcher, rng: StdRng, key_releases: bool) -> Self {
        Self {
            state: GameState::new(),
            overlay: Overlay::None,
            chat: ChatLog::new(),
            status: String::new(),
            quit: false,
            input: InputState::new(),
            held: HeldKeys::new(),
            key_releases,
            trigger_guard: 0,
            lore,
            rng,
        }
    }

    pub fn is_paused(&self) -> bool {
        !matches!(self.overlay, Overlay::None)
    }

    pub fn press(&mut self, action: Action) {
        if self.key_releases {
            self.input.press(action);
        } else {
            self.held.press(action);
        }
    }

    pub fn release(&mut self, action: Action) {
        self.input.release(action);
    }

    fn reset_input(&mut self) {
        self.input.release_all();
        self.held.clear();
    }

    /// Applies finished lore and chat requests.
    pub fn poll_lore(&mut self) {
        for update in self.lore.poll() {
            if let Some(reply) = apply_lore_update(&mut self.state, update) {
                self.chat.receive(&reply);
            }
        }
    }

    /// One fixed simulation step. Does nothing while an overlay is shown.
    pub fn tick(&mut self) {
        if self.is_paused() {
            self.trigger_guard = self.trigger_guard.saturating_sub(1);
            return;
        }
        if !self.key_releases {
            self.held.apply(&mut self.input);
        }

        let result = game_tick(&mut self.state, &self.input, &mut self.rng);
        for event in result.events {
            match event {
                TickEvent::FishCaught { fish } => {
                    let record = handle_catch(&mut self.state, fish, &self.lore);
                    self.status.clear();
                    self.show_catch(record);
                }
                TickEvent::ShopRequested => {
                    self.status.clear();
                    self.overlay = Overlay::Shop(ShopView::new());
                    self.reset_input();
                }
                TickEvent::ReeledTooEarly => self.status = "Too early! Nothing on the line.".into(),
                TickEvent::FishEscaped => self.status = "It got away...".into(),
                TickEvent::CastStarted => self.status.clear(),
                _ => {}
            }
        }
    }

    fn show_catch(&mut self, record: CatchRecord) {
        self.overlay = Overlay::Catch(record);
        self.reset_input();
        if !self.key_releases {
            self.trigger_guard = TRIGGER_HOLD_TICKS;
        }
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
        self.reset_input();
    }

    /// Trigger pressed on the catch card. Closes the card unless the press is
    /// still the reel key repeating; the key then stays held so it cannot cast.
    pub fn catch_card_trigger(&mut self) {
        if self.trigger_guard > 0 {
            self.trigger_guard = TRIGGER_HOLD_TICKS;
            return;
        }
        self.close_overlay();
        self.press(Action::CastReel);
        self.state.cast_latch.consume();
    }

    /// Number of rows in the current shop tab.
    fn shop_len(&self, tab: ShopTab) -> usize {
        match tab {
            ShopTab::Gear => SHOP_CATALOG.len(),
            ShopTab::Sell => self.state.player.inventory.len(),
            ShopTab::Chat => 0,
        }
    }

    pub fn shop_move(&mut self, delta: i32) {
        let Overlay::Shop(view) = &self.overlay else {
            return;
        };
        let len = self.shop_len(view.tab);
        if let Overlay::Shop(view) = &mut self.overlay {
            if len == 0 {
                view.selected = 0;
                return;
            }
            let next = (view.selected as i32 + delta).rem_euclid(len as i32);
            view.selected = next as usize;
        }
    }

    pub fn shop_next_tab(&mut self) {
        if let Overlay::Shop(view) = &mut self.overlay {
            view.tab = view.tab.next();
            view.selected = 0;
        }
    }

    /// Buys or sells the selected row, or sends the typed chat line.
    pub fn shop_confirm(&mut self) {
        let Overlay::Shop(view) = &mut self.overlay else {
            return;
        };
        match view.tab {
            ShopTab::Gear => {
                let Some(item) = SHOP_CATALOG.get(view.selected) else {
                    return;
                };
                view.message = Some(match shop::buy(&mut self.state.player, item.id) {
                    Ok(_) => format!("Bought {}.", item.name),
                    Err(err) => format!("Can't buy {}: {}", item.name, err),
                });
            }
            ShopTab::Sell => {
                let Some(fish_id) = self.state.player.inventory.get(view.selected).map(|f| f.id)
                else {
                    return;
                };
                view.message = Some(match sell_fish(&mut self.state, fish_id) {
                    Ok(earned) => format!("Sold for {} gold.", earned),
                    Err(err) => err.to_string(),
                });
                let len = self.state.player.inventory.len();
                view.selected = view.selected.min(len.saturating_sub(1));
            }
            ShopTab::Chat => {
                let line = std::mem::take(&mut view.chat_input);
                if let Some(history) = self.chat.say(&line) {
                    self.lore.spawn_reply(history);
                }
            }
        }
    }

    pub fn chat_type(&mut self, ch: char) {
        if let Overlay::Shop(view) = &mut self.overlay {
            if view.tab == ShopTab::Chat && view.chat_input.chars().count() < 60 {
                view.chat_input.push(ch);
            }
        }
    }

    pub fn chat_backspace(&mut self) {
        if let Overlay::Shop(view) = &mut self.overlay {
            view.chat_input.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use river::config::LoreConfig;
    use river::fishing::{catalog, Fish, SpeciesId};
    use river::lore::GeminiClient;
    use std::sync::Arc;

    fn create_app(key_releases: bool) -> App {
        let lore = LoreDispatcher::new(Arc::new(GeminiClient::new(LoreConfig::default())));
        App::new(lore, StdRng::seed_from_u64(12345), key_releases)
    }

    fn minnow_record() -> CatchRecord {
        CatchRecord {
            fish: Fish::new(catalog::species(SpeciesId::Minnow), 0.3, 0),
            lore_requested: false,
        }
    }

    // ============================================================================
    // Catch Card
    // ============================================================================

    #[test]
    fn test_reel_key_repeat_keeps_card_open() {
        let mut app = create_app(false);
        app.show_catch(minnow_record());
        for tick in 0..120 {
            if tick % 2 == 0 {
                app.catch_card_trigger();
            }
            app.tick();
        }
        assert!(matches!(app.overlay, Overlay::Catch(_)));
    }

    #[test]
    fn test_closing_card_with_trigger_does_not_cast() {
        let mut app = create_app(false);
        app.show_catch(minnow_record());
        for _ in 0..TRIGGER_HOLD_TICKS {
            app.tick();
        }
        app.catch_card_trigger();
        assert!(!app.is_paused());

        // The closing press keeps repeating on the river
        for tick in 0..120 {
            if tick % 2 == 0 {
                app.press(Action::CastReel);
            }
            app.tick();
        }
        assert!(!app.state.sim.phase.line_out());

        // Released, then a fresh press casts
        for _ in 0..=TRIGGER_HOLD_TICKS {
            app.tick();
        }
        app.press(Action::CastReel);
        app.tick();
        assert!(app.state.sim.phase.line_out());
    }

    #[test]
    fn test_card_closes_at_once_with_key_releases() {
        let mut app = create_app(true);
        app.show_catch(minnow_record());
        app.catch_card_trigger();
        assert!(!app.is_paused());

        for _ in 0..30 {
            app.tick();
        }
        assert!(!app.state.sim.phase.line_out());

        app.release(Action::CastReel);
        app.tick();
        app.press(Action::CastReel);
        app.tick();
        assert!(app.state.sim.phase.line_out());
    }
}
