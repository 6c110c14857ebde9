use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::utils::coerce_number;

// API models that match the backend JSON.
// Everything here is transient: the backend owns the data and the frontend
// only keeps what is currently rendered.

/// A bookable table slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub id: u32,
    pub date_time: String,
    #[serde(default)]
    pub area: Option<String>,
    pub capacity: i64,
    #[serde(default)]
    pub price_per_person: Option<f64>,
    #[serde(default)]
    pub features: Option<String>,
    #[serde(default)]
    pub is_booked: bool,
}

/// A reservation owned by the current user, joined with its slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: u32,
    #[serde(default, alias = "slot_id")]
    pub table_slot_id: Option<u32>,
    pub date_time: String,
    #[serde(default)]
    pub area: Option<String>,
    pub capacity: i64,
    #[serde(default)]
    pub price_per_person: Option<f64>,
    #[serde(default)]
    pub features: Option<String>,
    #[serde(default)]
    pub party_size: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: Option<u32>,
    pub username: String,
    pub rating: i64,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub date: String,
    pub reservations: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReport {
    pub week_start: String,
    pub reservations: u64,
}

/// Acknowledgement returned by every write endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ack {
    pub ok: bool,
    pub id: Option<u32>,
    pub reservation_id: Option<u32>,
}

// ---------------------------------------------------------------------------
// Write payloads
// ---------------------------------------------------------------------------

/// Body of `POST /api/reservations`. `party_size` is `null` when the typed
/// value is not a number; the backend decides what to do with it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewReservation {
    pub table_slot_id: u32,
    pub party_size: Option<Number>,
}

impl NewReservation {
    pub fn from_input(table_slot_id: u32, party_size: &str) -> Self {
        Self {
            table_slot_id,
            party_size: coerce_number(party_size),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewReview {
    pub rating: Option<Number>,
    pub comment: String,
}

impl NewReview {
    pub fn from_input(rating: &str, comment: &str) -> Self {
        Self {
            rating: coerce_number(rating),
            comment: comment.to_string(),
        }
    }
}

/// Raw values of the staff "add slot" form, as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlotForm {
    pub date_time: String,
    pub capacity: String,
    pub area: String,
    pub price_per_person: String,
    pub features: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewSlot {
    pub date_time: String,
    pub capacity: Option<Number>,
    pub area: String,
    pub price_per_person: Option<Number>,
    pub features: String,
}

impl From<SlotForm> for NewSlot {
    fn from(form: SlotForm) -> Self {
        // A blank price means a free slot.
        let price = if form.price_per_person.is_empty() {
            "0"
        } else {
            form.price_per_person.as_str()
        };
        Self {
            capacity: coerce_number(&form.capacity),
            price_per_person: coerce_number(price),
            date_time: form.date_time,
            area: form.area,
            features: form.features,
        }
    }
}

// ---------------------------------------------------------------------------
// Slot search
// ---------------------------------------------------------------------------

/// Optional search fields of the home page. Blank inputs are `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlotFilter {
    pub date: Option<String>,
    pub time: Option<String>,
    pub size: Option<String>,
    pub area: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub features: Option<String>,
}

impl SlotFilter {
    /// Build a filter from a lookup of input values by element id. Missing
    /// inputs and empty values are both treated as "no filter".
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        use crate::constants::*;

        let field = |id: &str| lookup(id).filter(|v| !v.is_empty());
        Self {
            date: field(FILTER_DATE_ID),
            time: field(FILTER_TIME_ID),
            size: field(FILTER_SIZE_ID),
            area: field(FILTER_AREA_ID),
            price_min: field(FILTER_MIN_PRICE_ID),
            price_max: field(FILTER_MAX_PRICE_ID),
            features: field(FILTER_FEATURES_ID),
        }
    }

    /// `(key, value)` pairs in the order the backend documents them.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("date", &self.date),
            ("time", &self.time),
            ("size", &self.size),
            ("area", &self.area),
            ("price_min", &self.price_min),
            ("price_max", &self.price_max),
            ("features", &self.features),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.as_deref().map(|v| (k, v)))
        .collect()
    }

    /// URL-encoded query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.pairs() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn slot_tolerates_missing_optional_fields() {
        let slot: Slot = serde_json::from_value(json!({
            "id": 3,
            "date_time": "2025-03-01T19:30:00",
            "capacity": 4,
            "area": null
        }))
        .unwrap();
        assert_eq!(slot.area, None);
        assert_eq!(slot.features, None);
        assert!(!slot.is_booked);
    }

    #[test]
    fn reservation_accepts_backend_slot_id() {
        let r: Reservation = serde_json::from_value(json!({
            "id": 9,
            "slot_id": 3,
            "date_time": "2025-03-01T19:30:00",
            "capacity": 4,
            "area": "patio",
            "price_per_person": 500.0,
            "features": "window"
        }))
        .unwrap();
        assert_eq!(r.table_slot_id, Some(3));
        assert_eq!(r.party_size, None);
    }

    #[test]
    fn ack_accepts_any_object() {
        let ack: Ack = serde_json::from_value(json!({"ok": true, "reservation_id": 12})).unwrap();
        assert!(ack.ok);
        assert_eq!(ack.reservation_id, Some(12));
        let empty: Ack = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty, Ack::default());
    }

    #[test]
    fn reservation_payload_is_numeric() {
        let body = serde_json::to_value(NewReservation::from_input(7, " 4 ")).unwrap();
        assert_eq!(body, json!({"table_slot_id": 7, "party_size": 4}));

        let body = serde_json::to_value(NewReservation::from_input(7, "four")).unwrap();
        assert_eq!(body, json!({"table_slot_id": 7, "party_size": null}));
    }

    #[test]
    fn blank_slot_price_defaults_to_zero() {
        let slot = NewSlot::from(SlotForm {
            date_time: "2025-03-01T19:30".into(),
            capacity: "6".into(),
            area: "indoor".into(),
            price_per_person: String::new(),
            features: "".into(),
        });
        let body = serde_json::to_value(slot).unwrap();
        assert_eq!(body["price_per_person"], json!(0));
        assert_eq!(body["capacity"], json!(6));
    }

    #[test]
    fn filter_omits_blank_fields() {
        let values: HashMap<&str, &str> = [
            (FILTER_DATE_ID, "2025-03-01"),
            (FILTER_SIZE_ID, ""),
            (FILTER_AREA_ID, "patio"),
        ]
        .into_iter()
        .collect();
        let filter = SlotFilter::from_lookup(|id| values.get(id).map(|v| v.to_string()));

        assert_eq!(filter.size, None);
        assert_eq!(filter.to_query_string(), "date=2025-03-01&area=patio");
    }

    #[test]
    fn filter_encodes_values_in_documented_order() {
        let filter = SlotFilter {
            features: Some("window, quiet".into()),
            time: Some("19:30".into()),
            price_max: Some("800".into()),
            ..SlotFilter::default()
        };
        assert_eq!(
            filter.to_query_string(),
            "time=19%3A30&price_max=800&features=window%2C+quiet"
        );
    }

    #[test]
    fn empty_filter_has_empty_query() {
        assert_eq!(SlotFilter::default().to_query_string(), "");
    }
}
