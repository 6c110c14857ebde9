use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, RequestMode, Response};

use super::config;
use super::error::ApiError;
use crate::constants::LOGIN_PATH;
use crate::models::{
    Ack, DailyReport, NewReservation, NewReview, NewSlot, Reservation, Review, Slot, SlotFilter,
    WeeklyReport,
};
use crate::debug_log;

pub type ApiResult<T> = Result<T, ApiError>;

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

pub const RESERVATIONS_PATH: &str = "/api/reservations";
pub const MY_RESERVATIONS_PATH: &str = "/api/reservations/me";
pub const REVIEWS_PATH: &str = "/api/reviews";
pub const SLOTS_PATH: &str = "/api/slots";
pub const ALL_SLOTS_PATH: &str = "/api/slots?only_available=false";
pub const DAILY_REPORT_PATH: &str = "/api/reports/daily";
pub const WEEKLY_REPORT_PATH: &str = "/api/reports/weekly";

/// `/api/slots` with the non-empty filter fields as query parameters.
pub fn slots_path(filter: &SlotFilter) -> String {
    let query = filter.to_query_string();
    if query.is_empty() {
        SLOTS_PATH.to_string()
    } else {
        format!("{}?{}", SLOTS_PATH, query)
    }
}

pub fn reservation_path(reservation_id: u32) -> String {
    format!("{}/{}", RESERVATIONS_PATH, reservation_id)
}

pub fn daily_report_path(date: Option<&str>) -> String {
    match date.filter(|d| !d.is_empty()) {
        Some(date) => {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .append_pair("date", date)
                .finish();
            format!("{}?{}", DAILY_REPORT_PATH, query)
        }
        None => DAILY_REPORT_PATH.to_string(),
    }
}

/// If a response was redirected to the backend's login page, return that
/// page's URL.
pub fn login_redirect(final_url: &str) -> Option<String> {
    let parsed = url::Url::parse(final_url).ok()?;
    if parsed.path().starts_with(LOGIN_PATH) {
        Some(final_url.to_string())
    } else {
        None
    }
}

// REST API client for the reservation backend
pub struct ApiClient;

impl ApiClient {
    // ---------------- Slots ----------------

    pub async fn list_slots(filter: &SlotFilter) -> ApiResult<Vec<Slot>> {
        Self::get(&slots_path(filter)).await
    }

    /// Every slot including booked ones (staff overview).
    pub async fn list_all_slots() -> ApiResult<Vec<Slot>> {
        Self::get(ALL_SLOTS_PATH).await
    }

    pub async fn create_slot(slot: &NewSlot) -> ApiResult<Ack> {
        Self::send_json(SLOTS_PATH, "POST", slot).await
    }

    // ---------------- Reservations ----------------

    pub async fn create_reservation(reservation: &NewReservation) -> ApiResult<Ack> {
        Self::send_json(RESERVATIONS_PATH, "POST", reservation).await
    }

    pub async fn my_reservations() -> ApiResult<Vec<Reservation>> {
        Self::get(MY_RESERVATIONS_PATH).await
    }

    pub async fn cancel_reservation(reservation_id: u32) -> ApiResult<Ack> {
        let url = config::current().url(&reservation_path(reservation_id));
        Self::fetch_json(&url, "DELETE", None).await
    }

    // ---------------- Reviews ----------------

    pub async fn list_reviews() -> ApiResult<Vec<Review>> {
        Self::get(REVIEWS_PATH).await
    }

    pub async fn create_review(review: &NewReview) -> ApiResult<Ack> {
        Self::send_json(REVIEWS_PATH, "POST", review).await
    }

    // ---------------- Reports (staff) ----------------

    pub async fn daily_report(date: Option<&str>) -> ApiResult<DailyReport> {
        Self::get(&daily_report_path(date)).await
    }

    pub async fn weekly_report() -> ApiResult<WeeklyReport> {
        Self::get(WEEKLY_REPORT_PATH).await
    }

    // ---------------- Plumbing ----------------

    async fn get<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
        let url = config::current().url(path);
        Self::fetch_json(&url, "GET", None).await
    }

    async fn send_json<T: DeserializeOwned, B: Serialize>(
        path: &str,
        method: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = config::current().url(path);
        let body = serde_json::to_string(body)?;
        Self::fetch_json(&url, method, Some(body)).await
    }

    /// Perform a request and decode the JSON body. Non-OK responses become
    /// `ApiError::RequestFailed` with a readable message.
    pub async fn fetch_json<T: DeserializeOwned>(
        url: &str,
        method: &str,
        body: Option<String>,
    ) -> ApiResult<T> {
        debug_log!("{} {}", method, url);
        let js_err = |e: JsValue| ApiError::from_js(&e);

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        if config::current().is_cross_origin() {
            opts.set_credentials(RequestCredentials::Include);
        } else {
            opts.set_credentials(RequestCredentials::SameOrigin);
        }

        let headers = Headers::new().map_err(js_err)?;
        headers.append("Accept", "application/json").map_err(js_err)?;
        if let Some(data) = body {
            opts.set_body(&JsValue::from_str(&data));
            headers.append("Content-Type", "application/json").map_err(js_err)?;
        }
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;

        let window = web_sys::window()
            .ok_or_else(|| ApiError::Transport("no global window exists".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_err)?;
        let resp: Response = resp_value.dyn_into().map_err(js_err)?;

        if resp.redirected() {
            if let Some(login_url) = login_redirect(&resp.url()) {
                return Err(ApiError::LoginRequired { login_url });
            }
        }

        let text = JsFuture::from(resp.text().map_err(js_err)?)
            .await
            .map_err(js_err)?
            .as_string()
            .unwrap_or_default();

        if !resp.ok() {
            let err = ApiError::from_response(resp.status(), &resp.status_text(), &text);
            web_sys::console::warn_1(&format!("{} {} failed: {}", method, url, err).into());
            return Err(err);
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_search_path_includes_only_present_filters() {
        assert_eq!(slots_path(&SlotFilter::default()), "/api/slots");
        let filter = SlotFilter {
            size: Some("4".into()),
            price_min: Some("100".into()),
            ..SlotFilter::default()
        };
        assert_eq!(slots_path(&filter), "/api/slots?size=4&price_min=100");
    }

    #[test]
    fn cancel_path_embeds_id() {
        assert_eq!(reservation_path(42), "/api/reservations/42");
    }

    #[test]
    fn daily_report_date_is_optional() {
        assert_eq!(daily_report_path(None), "/api/reports/daily");
        assert_eq!(daily_report_path(Some("")), "/api/reports/daily");
        assert_eq!(
            daily_report_path(Some("2025-03-01")),
            "/api/reports/daily?date=2025-03-01"
        );
    }

    #[test]
    fn detects_login_redirects() {
        assert_eq!(
            login_redirect("http://localhost:5000/login?next=%2Fme"),
            Some("http://localhost:5000/login?next=%2Fme".to_string())
        );
        assert_eq!(login_redirect("http://localhost:5000/api/reviews"), None);
        assert_eq!(login_redirect("not a url"), None);
    }
}
