use crate::models::{
    DailyReport, NewReservation, NewReview, NewSlot, Reservation, Review, Slot, SlotForm,
    WeeklyReport,
};
use crate::network::ApiError;

/// Everything that can happen to the app: user actions, dialog answers and
/// backend responses. Reducers turn these into state changes + commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Slot search & booking
    LoadSlots,
    SlotsLoaded(Vec<Slot>),
    BookClicked(u32),
    PartySizeAnswered { slot_id: u32, answer: Option<String> },
    ReservationCreated,

    // Reviews
    LoadReviews,
    ReviewsLoaded(Vec<Review>),
    SubmitReview { rating: String, comment: String },
    ReviewCreated,

    // My reservations
    LoadMyReservations,
    MyReservationsLoaded(Vec<Reservation>),
    CancelClicked(u32),
    CancelAnswered { reservation_id: u32, confirmed: bool },
    ReservationCancelled,

    // Staff dashboard
    SubmitSlot(SlotForm),
    SlotCreated,
    LoadAllSlots,
    AllSlotsLoaded(Vec<Slot>),
    RequestDailyReport { date: Option<String> },
    DailyReportLoaded(DailyReport),
    RequestWeeklyReport,
    WeeklyReportLoaded(WeeklyReport),

    // Failures
    RequestFailed(String),
    LoginRequired { login_url: String },
}

impl Message {
    /// Map a failed call onto the message that reports it.
    pub fn from_api_error(err: ApiError) -> Self {
        match err {
            ApiError::LoginRequired { login_url } => Message::LoginRequired { login_url },
            other => Message::RequestFailed(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A non-blocking notification shown as a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: &str) -> Self {
        Self { kind: NoticeKind::Success, text: text.to_string() }
    }

    pub fn error(text: &str) -> Self {
        Self { kind: NoticeKind::Error, text: text.to_string() }
    }
}

/// Commands represent side effects that should be executed after state updates.
/// This separates pure state changes from effects like UI updates, API calls, etc.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // ---- Backend calls ----
    /// Read the filter inputs and search slots.
    FetchSlots,
    CreateReservation(NewReservation),
    FetchReviews,
    CreateReview(NewReview),
    FetchMyReservations,
    DeleteReservation(u32),
    CreateSlot(NewSlot),
    FetchAllSlots,
    FetchDailyReport(Option<String>),
    FetchWeeklyReport,

    // ---- Dialogs ----
    PromptPartySize(u32),
    ConfirmCancel(u32),

    // ---- DOM ----
    /// Replace the inner HTML of the element with this id.
    RenderHtml { target: &'static str, html: String },
    /// Replace the text content of the element with this id.
    RenderText { target: &'static str, text: String },
    ClearInput(&'static str),
    Notify(Notice),
    Redirect(String),
}

impl Command {
    /// True for commands that hit the network.
    pub fn is_request(&self) -> bool {
        matches!(
            self,
            Command::FetchSlots
                | Command::CreateReservation(_)
                | Command::FetchReviews
                | Command::CreateReview(_)
                | Command::FetchMyReservations
                | Command::DeleteReservation(_)
                | Command::CreateSlot(_)
                | Command::FetchAllSlots
                | Command::FetchDailyReport(_)
                | Command::FetchWeeklyReport
        )
    }
}
