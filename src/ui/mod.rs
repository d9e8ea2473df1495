pub mod catch_scene;
pub mod common;
pub mod keymap;
pub mod river_scene;
pub mod shop_scene;

use crate::app::{App, Overlay};
use ratatui::Frame;

/// Main UI drawing function. Overlays draw on top of the river.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let size = frame.size();
    river_scene::render_river_scene(frame, size, &app.state, &app.status);

    match &app.overlay {
        Overlay::None => {}
        Overlay::Catch(record) => {
            catch_scene::render_catch_card(frame, size, record, &app.state.lore);
        }
        Overlay::Shop(view) => {
            shop_scene::render_shop(frame, size, view, &app.state, &app.chat);
        }
    }
}
