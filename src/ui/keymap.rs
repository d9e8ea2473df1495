//! Key bindings: crossterm key events to game actions.

use crate::app::{App, Overlay, ShopTab};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use river::input::Action;

/// River controls. Arrow keys and WASD-style letters both work.
pub fn action_for(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::MoveRight),
        KeyCode::Char(' ') => Some(Action::CastReel),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::OpenShop),
        _ => None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit = true;
        return;
    }

    match &app.overlay {
        Overlay::None => handle_river_key(app, key),
        Overlay::Catch(_) => {
            if key.kind != KeyEventKind::Press {
                return;
            }
            match key.code {
                KeyCode::Char(' ') => app.catch_card_trigger(),
                KeyCode::Enter | KeyCode::Esc => app.close_overlay(),
                _ => {}
            }
        }
        Overlay::Shop(view) => {
            let chatting = view.tab == ShopTab::Chat;
            if key.kind != KeyEventKind::Release {
                handle_shop_key(app, key, chatting);
            }
        }
    }
}

fn handle_river_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Press && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.quit = true;
        return;
    }
    let Some(action) = action_for(key.code) else {
        return;
    };
    match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => app.press(action),
        KeyEventKind::Release => app.release(action),
    }
}

fn handle_shop_key(app: &mut App, key: KeyEvent, chatting: bool) {
    match key.code {
        KeyCode::Esc => app.close_overlay(),
        KeyCode::Tab => app.shop_next_tab(),
        KeyCode::Enter => app.shop_confirm(),
        KeyCode::Up => app.shop_move(-1),
        KeyCode::Down => app.shop_move(1),
        KeyCode::Backspace if chatting => app.chat_backspace(),
        KeyCode::Char(c) if chatting => app.chat_type(c),
        KeyCode::Char('q') => app.close_overlay(),
        KeyCode::Char('k') => app.shop_move(-1),
        KeyCode::Char('j') => app.shop_move(1),
        _ => {}
    }
}
