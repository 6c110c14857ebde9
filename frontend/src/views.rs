// frontend/src/views.rs
//
// Pure HTML rendering for every list the pages show. Functions here take
// backend models and return markup; writing it into the DOM is the command
// executor's job, so everything in this file is testable off-browser.
//
use crate::constants::*;
use crate::models::{DailyReport, Reservation, Review, Slot, WeeklyReport};
use crate::utils::{escape_html, format_date, format_date_time, format_price, format_time};

/// CSS class shared by every slot / reservation card.
pub const CARD_CLASS: &str = "slot pop";
pub const REVIEW_CLASS: &str = "review pop";

fn placeholder(text: &str) -> String {
    format!(r#"<div class="muted">{}</div>"#, escape_html(text))
}

fn opt_text(value: &Option<String>) -> String {
    escape_html(value.as_deref().unwrap_or(""))
}

/// Star glyphs for a 1–5 rating, e.g. `★★★★☆` for 4. Out-of-range ratings
/// are clamped so a bad row never breaks the list.
pub fn stars(rating: i64) -> String {
    let filled = rating.clamp(0, MAX_RATING) as usize;
    let empty = MAX_RATING as usize - filled;
    let mut out = String::with_capacity(MAX_RATING as usize * 3);
    out.extend(std::iter::repeat(STAR_FILLED).take(filled));
    out.extend(std::iter::repeat(STAR_EMPTY).take(empty));
    out
}

// ---------------------------------------------------------------------------
// Home page
// ---------------------------------------------------------------------------

pub fn render_slot_card(slot: &Slot) -> String {
    let price = slot.price_per_person.unwrap_or(0.0);
    format!(
        r#"<div class="{card}" data-slot-id="{id}">
  <h4>{date} • {time}</h4>
  <div class="muted">{area} • up to {capacity} guests</div>
  <div class="price"><span class="badge">{currency}{price}/person</span></div>
  <div class="muted">{features}</div>
  <div class="actions"><button class="btn" {attr}="{id}">Book Now</button></div>
</div>"#,
        card = CARD_CLASS,
        id = slot.id,
        date = escape_html(&format_date(&slot.date_time)),
        time = escape_html(&format_time(&slot.date_time)),
        area = opt_text(&slot.area),
        capacity = slot.capacity,
        currency = CURRENCY_SYMBOL,
        price = format_price(price),
        features = opt_text(&slot.features),
        attr = BOOK_ATTR,
    )
}

/// Slot search results; the placeholder alone when nothing matched.
pub fn render_slots(slots: &[Slot]) -> String {
    if slots.is_empty() {
        return placeholder(NO_SLOTS_PLACEHOLDER);
    }
    slots.iter().map(render_slot_card).collect::<Vec<_>>().join("\n")
}

pub fn render_review(review: &Review) -> String {
    format!(
        r#"<div class="{class}">
  <div class="stars">{stars}</div>
  <div class="muted">@{user} • {date}</div>
  <div>{comment}</div>
</div>"#,
        class = REVIEW_CLASS,
        stars = stars(review.rating),
        user = escape_html(&review.username),
        date = escape_html(&format_date(&review.created_at)),
        comment = opt_text(&review.comment),
    )
}

pub fn render_reviews(reviews: &[Review]) -> String {
    if reviews.is_empty() {
        return placeholder(NO_REVIEWS_PLACEHOLDER);
    }
    reviews.iter().map(render_review).collect::<Vec<_>>().join("\n")
}

// ---------------------------------------------------------------------------
// My reservations
// ---------------------------------------------------------------------------

pub fn render_reservation(reservation: &Reservation) -> String {
    format!(
        r#"<div class="{card}" data-reservation-id="{id}">
  <h4>{when}</h4>
  <div class="muted">{area} • up to {capacity}</div>
  <div class="muted">{features}</div>
  <button class="btn ghost" {attr}="{id}">Cancel</button>
</div>"#,
        card = CARD_CLASS,
        id = reservation.id,
        when = escape_html(&format_date_time(&reservation.date_time)),
        area = opt_text(&reservation.area),
        capacity = reservation.capacity,
        features = opt_text(&reservation.features),
        attr = CANCEL_ATTR,
    )
}

pub fn render_reservations(reservations: &[Reservation]) -> String {
    if reservations.is_empty() {
        return placeholder(NO_RESERVATIONS_PLACEHOLDER);
    }
    reservations.iter().map(render_reservation).collect::<Vec<_>>().join("\n")
}

// ---------------------------------------------------------------------------
// Staff dashboard
// ---------------------------------------------------------------------------

pub fn status_badge(is_booked: bool) -> &'static str {
    if is_booked {
        r#"<span class="badge booked">Booked</span>"#
    } else {
        r#"<span class="badge open">Open</span>"#
    }
}

pub fn render_staff_slot(slot: &Slot) -> String {
    format!(
        r#"<div class="{card}" data-slot-id="{id}">
  <h4>{when}</h4>
  <div class="muted">{area} • cap {capacity}</div>
  <div>{badge}</div>
  <div class="muted">{features}</div>
</div>"#,
        card = CARD_CLASS,
        id = slot.id,
        when = escape_html(&format_date_time(&slot.date_time)),
        area = opt_text(&slot.area),
        capacity = slot.capacity,
        badge = status_badge(slot.is_booked),
        features = opt_text(&slot.features),
    )
}

pub fn render_staff_slots(slots: &[Slot]) -> String {
    if slots.is_empty() {
        return placeholder(NO_STAFF_SLOTS_PLACEHOLDER);
    }
    slots.iter().map(render_staff_slot).collect::<Vec<_>>().join("\n")
}

/// Plain-text body for the report output element.
pub fn daily_report_text(report: &DailyReport) -> String {
    format!("Date: {}\nReservations: {}", report.date, report.reservations)
}

pub fn weekly_report_text(report: &WeeklyReport) -> String {
    format!("Week starting: {}\nReservations: {}", report.week_start, report.reservations)
}
