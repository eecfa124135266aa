use super::actions::*;
use super::*;
use crate::keyboard::Key;

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use futures::StreamExt;
use tokio::sync::mpsc;

impl App {
    pub fn handle_events(
        &self,
        tx: mpsc::UnboundedSender<Option<Action>>,
    ) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut events = EventStream::new();
            loop {
                let action = match events.next().await {
                    Some(Ok(Event::Key(key))) => handle_key_event(key),
                    Some(Ok(Event::Mouse(mouse))) => handle_mouse_event(mouse),
                    // Other events (resize in particular) still wake
                    // the main loop for a redraw
                    Some(Ok(_)) => None,
                    Some(Err(_)) | None => break,
                };
                if tx.send(action).is_err() {
                    break;
                }
            }
        })
    }
}

fn handle_key_event(key: KeyEvent) -> Option<Action> {
    // crossterm also emits key release and repeat events on Windows
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let action = match key.code {
        KeyCode::Esc => Action::Exit,
        KeyCode::Enter => Action::Press(Key::Enter),
        KeyCode::Backspace => Action::Press(Key::Backspace),
        KeyCode::Char(letter) if letter.is_alphabetic() => Action::Press(Key::Letter(letter)),
        _ => return None,
    };
    Some(action)
}

fn handle_mouse_event(mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::Click(mouse.column, mouse.row)),
        _ => None,
    }
}
