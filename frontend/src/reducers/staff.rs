//! Staff dashboard reducer: slot creation, overview and reports.

use crate::constants::{ALL_SLOTS_CONTAINER_ID, REPORT_OUTPUT_ID, SLOT_ADDED_NOTICE};
use crate::messages::{Command, Message, Notice};
use crate::models::NewSlot;
use crate::state::AppState;
use crate::views;

/// Handles staff messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::SubmitSlot(form) => {
            commands.push(Command::CreateSlot(NewSlot::from(form.clone())));
            true
        }
        Message::SlotCreated => {
            commands.push(Command::Notify(Notice::success(SLOT_ADDED_NOTICE)));
            commands.push(Command::FetchAllSlots);
            true
        }
        Message::LoadAllSlots => {
            commands.push(Command::FetchAllSlots);
            true
        }
        Message::AllSlotsLoaded(slots) => {
            state.all_slots = slots.clone();
            commands.push(Command::RenderHtml {
                target: ALL_SLOTS_CONTAINER_ID,
                html: views::render_staff_slots(&state.all_slots),
            });
            true
        }
        Message::RequestDailyReport { date } => {
            let date = date.clone().filter(|d| !d.is_empty());
            commands.push(Command::FetchDailyReport(date));
            true
        }
        Message::DailyReportLoaded(report) => {
            render_report(state, commands, views::daily_report_text(report));
            true
        }
        Message::RequestWeeklyReport => {
            commands.push(Command::FetchWeeklyReport);
            true
        }
        Message::WeeklyReportLoaded(report) => {
            render_report(state, commands, views::weekly_report_text(report));
            true
        }
        _ => false,
    }
}

fn render_report(state: &mut AppState, commands: &mut Vec<Command>, text: String) {
    state.report_text = Some(text.clone());
    commands.push(Command::RenderText { target: REPORT_OUTPUT_ID, text });
}

#[cfg(test)]
mod tests {
    use crate::messages::{Command, Message, Notice};
    use crate::models::{DailyReport, Slot, SlotForm, WeeklyReport};
    use crate::state::AppState;
    use crate::update::update;
    use serde_json::json;

    #[test]
    fn new_slot_payload_coerces_numbers() {
        let mut state = AppState::new();
        let form = SlotForm {
            date_time: "2025-03-08T20:00".into(),
            capacity: "8".into(),
            area: "garden".into(),
            price_per_person: "".into(),
            features: "heater".into(),
        };
        let cmds = update(&mut state, Message::SubmitSlot(form));
        let [Command::CreateSlot(slot)] = cmds.as_slice() else {
            panic!("expected slot creation, got {:?}", cmds);
        };
        assert_eq!(
            serde_json::to_value(slot).unwrap(),
            json!({
                "date_time": "2025-03-08T20:00",
                "capacity": 8,
                "area": "garden",
                "price_per_person": 0,
                "features": "heater"
            })
        );
    }

    #[test]
    fn created_slot_refreshes_overview() {
        let mut state = AppState::new();
        assert_eq!(
            update(&mut state, Message::SlotCreated),
            vec![Command::Notify(Notice::success("Slot added.")), Command::FetchAllSlots]
        );
    }

    #[test]
    fn overview_marks_booked_and_open_slots() {
        let mut state = AppState::new();
        let slot = |id, is_booked| Slot {
            id,
            date_time: "2025-03-08T20:00:00".into(),
            area: Some("garden".into()),
            capacity: 8,
            price_per_person: None,
            features: None,
            is_booked,
        };
        let cmds = update(&mut state, Message::AllSlotsLoaded(vec![slot(1, true), slot(2, false)]));
        let [Command::RenderHtml { target: "all-res", html }] = cmds.as_slice() else {
            panic!("expected overview render, got {:?}", cmds);
        };
        assert_eq!(html.matches(">Booked<").count(), 1);
        assert_eq!(html.matches(">Open<").count(), 1);
    }

    #[test]
    fn blank_report_date_means_today() {
        let mut state = AppState::new();
        assert_eq!(
            update(&mut state, Message::RequestDailyReport { date: Some(String::new()) }),
            vec![Command::FetchDailyReport(None)]
        );
        assert_eq!(
            update(&mut state, Message::RequestDailyReport { date: Some("2025-03-01".into()) }),
            vec![Command::FetchDailyReport(Some("2025-03-01".into()))]
        );
    }

    #[test]
    fn reports_render_as_text() {
        let mut state = AppState::new();
        let cmds = update(
            &mut state,
            Message::DailyReportLoaded(DailyReport { date: "2025-03-01".into(), reservations: 5 }),
        );
        assert_eq!(
            cmds,
            vec![Command::RenderText {
                target: "report",
                text: "Date: 2025-03-01\nReservations: 5".into(),
            }]
        );

        let cmds = update(
            &mut state,
            Message::WeeklyReportLoaded(WeeklyReport {
                week_start: "2025-02-24".into(),
                reservations: 31,
            }),
        );
        assert_eq!(
            cmds,
            vec![Command::RenderText {
                target: "report",
                text: "Week starting: 2025-02-24\nReservations: 31".into(),
            }]
        );
        assert_eq!(
            state.report_text.as_deref(),
            Some("Week starting: 2025-02-24\nReservations: 31")
        );
    }
}
