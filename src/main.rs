mod catalog;
mod explorer;
mod input;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

use explorer::{prefs, render, ExplorerApp};
use input::{ClickState, InputEvent};

fn key_code_to_event(code: KeyCode) -> Option<InputEvent> {
    match code {
        KeyCode::Char(ch) => Some(InputEvent::Char(ch)),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Enter => Some(InputEvent::Enter),
        KeyCode::Esc => Some(InputEvent::Escape),
        KeyCode::Up => Some(InputEvent::Up),
        KeyCode::Down => Some(InputEvent::Down),
        _ => None,
    }
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let app = Rc::new(RefCell::new(ExplorerApp::new()));
    {
        // The single startup suspension point: nothing renders as an
        // interactive view until this resolves (see render's phase match).
        let mut app = app.borrow_mut();
        app.finish_load(catalog::load_embedded(), prefs::has_consented());
        app.state.dark_mode = prefs::dark_mode();
    }

    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    // Mouse/touch handler
    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.kind != MouseEventKind::ButtonDown(MouseButton::Left) {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }
            let action = cs.hit_test(mouse_event.col, mouse_event.row);
            drop(cs);

            if let Some(action_id) = action {
                app.borrow_mut().handle_input(&InputEvent::Click(action_id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let app = app.clone();
        move |key_event| {
            if let Some(event) = key_code_to_event(key_event.code) {
                app.borrow_mut().handle_input(&event);
            }
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let size = f.area();
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }
            render::render(&app.borrow(), f, size, &click_state);
        }
    });

    Ok(())
}
