// DOM ids the server-rendered pages provide. Views only mount when the ids
// they declare are present.

// Home page: slot search + booking
pub const SLOTS_CONTAINER_ID: &str = "slots";
pub const SEARCH_BUTTON_ID: &str = "btn-search";
pub const FILTER_DATE_ID: &str = "f-date";
pub const FILTER_TIME_ID: &str = "f-time";
pub const FILTER_SIZE_ID: &str = "f-size";
pub const FILTER_AREA_ID: &str = "f-area";
pub const FILTER_MIN_PRICE_ID: &str = "f-min";
pub const FILTER_MAX_PRICE_ID: &str = "f-max";
pub const FILTER_FEATURES_ID: &str = "f-features";

// Home page: reviews
pub const REVIEWS_CONTAINER_ID: &str = "reviews";
pub const REVIEW_BUTTON_ID: &str = "btn-review";
pub const REVIEW_RATING_ID: &str = "rev-rating";
pub const REVIEW_COMMENT_ID: &str = "rev-comment";

// My reservations page
pub const MY_RESERVATIONS_CONTAINER_ID: &str = "my-res";

// Staff dashboard
pub const ADD_SLOT_BUTTON_ID: &str = "btn-add-slot";
pub const SLOT_DATETIME_ID: &str = "s-datetime";
pub const SLOT_CAPACITY_ID: &str = "s-cap";
pub const SLOT_AREA_ID: &str = "s-area";
pub const SLOT_PRICE_ID: &str = "s-price";
pub const SLOT_FEATURES_ID: &str = "s-feat";
pub const ALL_SLOTS_CONTAINER_ID: &str = "all-res";
pub const DAILY_REPORT_BUTTON_ID: &str = "btn-daily";
pub const WEEKLY_REPORT_BUTTON_ID: &str = "btn-weekly";
pub const REPORT_DATE_ID: &str = "r-date";
pub const REPORT_OUTPUT_ID: &str = "report";

// Delegated click targets
pub const BOOK_ATTR: &str = "data-book";
pub const CANCEL_ATTR: &str = "data-cancel";

// Widgets created on demand
pub const DIALOG_MODAL_ID: &str = "dialog-modal";
pub const TOAST_ROOT_ID: &str = "toast-root";
pub const TOAST_STYLES_ID: &str = "toast-styles";

// Notification / dialog copy
pub const PARTY_SIZE_PROMPT: &str = "Party size?";
pub const CANCEL_CONFIRM: &str = "Cancel this reservation?";
pub const BOOKED_NOTICE: &str = "Booked!";
pub const REVIEW_THANKS_NOTICE: &str = "Thanks for your review!";
pub const SLOT_ADDED_NOTICE: &str = "Slot added.";

// Empty-list placeholders
pub const NO_SLOTS_PLACEHOLDER: &str = "No matching slots.";
pub const NO_REVIEWS_PLACEHOLDER: &str = "No reviews yet.";
pub const NO_RESERVATIONS_PLACEHOLDER: &str = "You have no reservations.";
pub const NO_STAFF_SLOTS_PLACEHOLDER: &str = "No slots created yet.";

// Reviews are rated on a five-star scale.
pub const MAX_RATING: i64 = 5;
pub const STAR_FILLED: char = '★';
pub const STAR_EMPTY: char = '☆';

pub const CURRENCY_SYMBOL: &str = "₹";

/// How long a toast stays on screen.
pub const DEFAULT_TOAST_MS: u32 = 4000;

/// Path prefix the backend redirects anonymous callers to.
pub const LOGIN_PATH: &str = "/login";
