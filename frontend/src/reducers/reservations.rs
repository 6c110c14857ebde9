//! "My reservations" reducer: list + cancel.

use crate::constants::MY_RESERVATIONS_CONTAINER_ID;
use crate::messages::{Command, Message};
use crate::state::AppState;
use crate::views;

/// Handles reservation-list messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::LoadMyReservations => {
            commands.push(Command::FetchMyReservations);
            true
        }
        Message::MyReservationsLoaded(reservations) => {
            state.my_reservations = reservations.clone();
            state.cancel_clicks.arm();
            commands.push(Command::RenderHtml {
                target: MY_RESERVATIONS_CONTAINER_ID,
                html: views::render_reservations(&state.my_reservations),
            });
            true
        }
        Message::CancelClicked(reservation_id) => {
            if state.cancel_clicks.take(state.listener_policy) {
                commands.push(Command::ConfirmCancel(*reservation_id));
            }
            true
        }
        Message::CancelAnswered { reservation_id, confirmed } => {
            if *confirmed {
                commands.push(Command::DeleteReservation(*reservation_id));
            }
            true
        }
        Message::ReservationCancelled => {
            commands.push(Command::FetchMyReservations);
            true
        }
        _ => false,
    }
}
