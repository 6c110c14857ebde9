//! Slot search & booking reducer.

use crate::constants::{BOOKED_NOTICE, SLOTS_CONTAINER_ID};
use crate::messages::{Command, Message, Notice};
use crate::models::NewReservation;
use crate::state::AppState;
use crate::views;

/// Handles slot-search messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::LoadSlots => {
            commands.push(Command::FetchSlots);
            true
        }
        Message::SlotsLoaded(slots) => {
            state.slots = slots.clone();
            state.slot_clicks.arm();
            commands.push(Command::RenderHtml {
                target: SLOTS_CONTAINER_ID,
                html: views::render_slots(&state.slots),
            });
            true
        }
        Message::BookClicked(slot_id) => {
            if state.slot_clicks.take(state.listener_policy) {
                commands.push(Command::PromptPartySize(*slot_id));
            }
            true
        }
        Message::PartySizeAnswered { slot_id, answer } => {
            // Dismissed or left empty: nothing to book.
            if let Some(size) = answer.as_deref().filter(|s| !s.is_empty()) {
                commands.push(Command::CreateReservation(NewReservation::from_input(
                    *slot_id, size,
                )));
            }
            true
        }
        Message::ReservationCreated => {
            commands.push(Command::Notify(Notice::success(BOOKED_NOTICE)));
            commands.push(Command::FetchSlots);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::messages::{Command, Message, Notice, NoticeKind};
    use crate::models::{NewReservation, Slot};
    use crate::state::{AppState, ListenerPolicy};
    use crate::update::update;
    use serde_json::json;

    fn slot(id: u32) -> Slot {
        Slot {
            id,
            date_time: "2025-03-01T19:30:00".into(),
            area: Some("indoor".into()),
            capacity: 4,
            price_per_person: Some(350.0),
            features: None,
            is_booked: false,
        }
    }

    fn rendered(state: &mut AppState, slots: Vec<Slot>) {
        let cmds = update(state, Message::SlotsLoaded(slots));
        assert!(matches!(cmds.as_slice(), [Command::RenderHtml { target: "slots", .. }]));
    }

    #[test]
    fn load_issues_one_search() {
        let mut state = AppState::new();
        assert_eq!(update(&mut state, Message::LoadSlots), vec![Command::FetchSlots]);
    }

    #[test]
    fn empty_result_renders_placeholder_only() {
        let mut state = AppState::new();
        let cmds = update(&mut state, Message::SlotsLoaded(vec![]));
        assert_eq!(
            cmds,
            vec![Command::RenderHtml {
                target: "slots",
                html: r#"<div class="muted">No matching slots.</div>"#.into(),
            }]
        );
    }

    #[test]
    fn cancelled_prompt_issues_no_request() {
        let mut state = AppState::new();
        rendered(&mut state, vec![slot(7)]);

        assert_eq!(update(&mut state, Message::BookClicked(7)), vec![Command::PromptPartySize(7)]);
        for answer in [None, Some(String::new())] {
            let cmds = update(&mut state, Message::PartySizeAnswered { slot_id: 7, answer });
            assert!(cmds.iter().all(|c| !c.is_request()));
            assert!(cmds.is_empty());
        }
    }

    #[test]
    fn booking_creates_one_reservation_then_reloads_once() {
        let mut state = AppState::new();
        rendered(&mut state, vec![slot(7), slot(8)]);
        update(&mut state, Message::BookClicked(7));

        let cmds = update(
            &mut state,
            Message::PartySizeAnswered { slot_id: 7, answer: Some("3".into()) },
        );
        assert_eq!(cmds.len(), 1);
        let Command::CreateReservation(payload) = &cmds[0] else {
            panic!("expected a reservation request, got {:?}", cmds);
        };
        assert_eq!(payload, &NewReservation::from_input(7, "3"));
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({"table_slot_id": 7, "party_size": 3})
        );

        let cmds = update(&mut state, Message::ReservationCreated);
        assert_eq!(
            cmds,
            vec![Command::Notify(Notice::success("Booked!")), Command::FetchSlots]
        );
        assert_eq!(cmds.iter().filter(|c| c.is_request()).count(), 1);
    }

    #[test]
    fn failed_booking_surfaces_message_without_reload() {
        let mut state = AppState::new();
        rendered(&mut state, vec![slot(7)]);
        update(&mut state, Message::BookClicked(7));
        update(&mut state, Message::PartySizeAnswered { slot_id: 7, answer: Some("9".into()) });

        let cmds = update(&mut state, Message::RequestFailed("Slot full".into()));
        assert_eq!(cmds.len(), 1);
        match &cmds[0] {
            Command::Notify(notice) => {
                assert_eq!(notice.kind, NoticeKind::Error);
                assert_eq!(notice.text, "Slot full");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn single_use_listener_ignores_second_click_until_rerender() {
        let mut state = AppState::new();
        rendered(&mut state, vec![slot(1), slot(2)]);

        assert_eq!(update(&mut state, Message::BookClicked(1)), vec![Command::PromptPartySize(1)]);
        assert!(update(&mut state, Message::BookClicked(2)).is_empty());

        rendered(&mut state, vec![slot(1), slot(2)]);
        assert_eq!(update(&mut state, Message::BookClicked(2)), vec![Command::PromptPartySize(2)]);
    }

    #[test]
    fn persistent_listener_handles_every_click() {
        let mut state = AppState::with_policy(ListenerPolicy::Persistent);
        rendered(&mut state, vec![slot(1), slot(2)]);

        assert_eq!(update(&mut state, Message::BookClicked(1)), vec![Command::PromptPartySize(1)]);
        assert_eq!(update(&mut state, Message::BookClicked(2)), vec![Command::PromptPartySize(2)]);
    }

    #[test]
    fn click_before_any_render_is_ignored() {
        let mut state = AppState::new();
        assert!(update(&mut state, Message::BookClicked(1)).is_empty());
    }
}
