// frontend/src/update.rs
//
use crate::messages::{Command, Message, Notice};
use crate::state::AppState;

/// Root reducer. Offers the message to each domain reducer, then handles the
/// cross-cutting failure messages. Never touches the DOM.
pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    if crate::reducers::slots::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::reviews::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::reservations::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::staff::update(state, &msg, &mut commands) {
        return commands;
    }

    match msg {
        Message::RequestFailed(message) => {
            commands.push(Command::Notify(Notice::error(&message)));
        }
        Message::LoginRequired { login_url } => {
            commands.push(Command::Redirect(login_url));
        }
        _other => {
            crate::debug_log!("Unhandled message: {:?}", _other);
        }
    }

    commands
}
