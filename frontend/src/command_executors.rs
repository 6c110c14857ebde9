//! Executes the side effects reducers ask for.
//!
//! Backend calls run as `spawn_local` tasks and report back with exactly one
//! message each: the success message, or the failure mapped through
//! `Message::from_api_error`.

use std::future::Future;

use crate::components::dialog;
use crate::constants::{CANCEL_CONFIRM, PARTY_SIZE_PROMPT};
use crate::dom_utils;
use crate::messages::{Command, Message};
use crate::models::SlotFilter;
use crate::network::{ApiClient, ApiResult};
use crate::state::dispatch_global_message;
use crate::debug_log;

pub fn execute_commands(commands: Vec<Command>) {
    for cmd in commands {
        execute_command(cmd);
    }
}

pub fn execute_command(cmd: Command) {
    match cmd {
        // ---------------- Backend calls ----------------
        Command::FetchSlots => {
            let filter = dom_utils::document()
                .map(|doc| read_slot_filter(&doc))
                .unwrap_or_default();
            spawn_request(async move { ApiClient::list_slots(&filter).await }, Message::SlotsLoaded);
        }
        Command::CreateReservation(payload) => {
            spawn_request(
                async move { ApiClient::create_reservation(&payload).await },
                |_| Message::ReservationCreated,
            );
        }
        Command::FetchReviews => {
            spawn_request(ApiClient::list_reviews(), Message::ReviewsLoaded);
        }
        Command::CreateReview(payload) => {
            spawn_request(
                async move { ApiClient::create_review(&payload).await },
                |_| Message::ReviewCreated,
            );
        }
        Command::FetchMyReservations => {
            spawn_request(ApiClient::my_reservations(), Message::MyReservationsLoaded);
        }
        Command::DeleteReservation(reservation_id) => {
            spawn_request(
                ApiClient::cancel_reservation(reservation_id),
                |_| Message::ReservationCancelled,
            );
        }
        Command::CreateSlot(payload) => {
            spawn_request(
                async move { ApiClient::create_slot(&payload).await },
                |_| Message::SlotCreated,
            );
        }
        Command::FetchAllSlots => {
            spawn_request(ApiClient::list_all_slots(), Message::AllSlotsLoaded);
        }
        Command::FetchDailyReport(date) => {
            spawn_request(
                async move { ApiClient::daily_report(date.as_deref()).await },
                Message::DailyReportLoaded,
            );
        }
        Command::FetchWeeklyReport => {
            spawn_request(ApiClient::weekly_report(), Message::WeeklyReportLoaded);
        }

        // ---------------- Dialogs ----------------
        Command::PromptPartySize(slot_id) => {
            wasm_bindgen_futures::spawn_local(async move {
                let answer = match dialog::prompt(PARTY_SIZE_PROMPT).await {
                    Ok(answer) => answer,
                    Err(e) => {
                        web_sys::console::error_1(&format!("Party size dialog failed: {:?}", e).into());
                        None
                    }
                };
                dispatch_global_message(Message::PartySizeAnswered { slot_id, answer });
            });
        }
        Command::ConfirmCancel(reservation_id) => {
            wasm_bindgen_futures::spawn_local(async move {
                let confirmed = match dialog::confirm(CANCEL_CONFIRM).await {
                    Ok(confirmed) => confirmed,
                    Err(e) => {
                        web_sys::console::error_1(&format!("Cancel dialog failed: {:?}", e).into());
                        false
                    }
                };
                dispatch_global_message(Message::CancelAnswered { reservation_id, confirmed });
            });
        }

        // ---------------- DOM ----------------
        Command::RenderHtml { target, html } => with_document(|doc| {
            if !dom_utils::set_inner_html(doc, target, &html) {
                debug_log!("#{} not on this page, skipping render", target);
            }
        }),
        Command::RenderText { target, text } => with_document(|doc| {
            if !dom_utils::set_text(doc, target, &text) {
                debug_log!("#{} not on this page, skipping render", target);
            }
        }),
        Command::ClearInput(id) => with_document(|doc| dom_utils::set_field_value(doc, id, "")),
        Command::Notify(notice) => crate::toast::show(&notice),
        Command::Redirect(url) => {
            let result = web_sys::window()
                .map(|w| w.location().set_href(&url))
                .transpose();
            if let Err(e) = result {
                web_sys::console::error_1(&format!("Redirect to {} failed: {:?}", url, e).into());
            }
        }
    }
}

/// Run a backend call and dispatch its outcome.
fn spawn_request<T, Fut, F>(request: Fut, on_success: F)
where
    T: 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
    F: FnOnce(T) -> Message + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        let msg = match request.await {
            Ok(value) => on_success(value),
            Err(err) => Message::from_api_error(err),
        };
        dispatch_global_message(msg);
    });
}

fn with_document<F: FnOnce(&web_sys::Document)>(f: F) {
    match dom_utils::document() {
        Ok(doc) => f(&doc),
        Err(e) => web_sys::console::error_1(&e),
    }
}

/// Read the search inputs present on the page. Absent inputs are unfiltered.
pub fn read_slot_filter(document: &web_sys::Document) -> SlotFilter {
    SlotFilter::from_lookup(|id| dom_utils::field_value(document, id))
}
