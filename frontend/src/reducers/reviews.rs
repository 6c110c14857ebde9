//! Review list & submission reducer.

use crate::constants::{REVIEWS_CONTAINER_ID, REVIEW_COMMENT_ID, REVIEW_THANKS_NOTICE};
use crate::messages::{Command, Message, Notice};
use crate::models::NewReview;
use crate::state::AppState;
use crate::views;

/// Handles review messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::LoadReviews => {
            commands.push(Command::FetchReviews);
            true
        }
        Message::ReviewsLoaded(reviews) => {
            state.reviews = reviews.clone();
            commands.push(Command::RenderHtml {
                target: REVIEWS_CONTAINER_ID,
                html: views::render_reviews(&state.reviews),
            });
            true
        }
        Message::SubmitReview { rating, comment } => {
            commands.push(Command::CreateReview(NewReview::from_input(rating, comment)));
            true
        }
        Message::ReviewCreated => {
            commands.push(Command::ClearInput(REVIEW_COMMENT_ID));
            commands.push(Command::FetchReviews);
            commands.push(Command::Notify(Notice::success(REVIEW_THANKS_NOTICE)));
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::messages::{Command, Message, Notice};
    use crate::models::Review;
    use crate::state::AppState;
    use crate::update::update;
    use serde_json::json;

    #[test]
    fn submission_sends_numeric_rating() {
        let mut state = AppState::new();
        let cmds = update(
            &mut state,
            Message::SubmitReview { rating: "4".into(), comment: "Great biryani".into() },
        );
        let [Command::CreateReview(payload)] = cmds.as_slice() else {
            panic!("expected one review request, got {:?}", cmds);
        };
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({"rating": 4, "comment": "Great biryani"})
        );
    }

    #[test]
    fn success_clears_comment_and_reloads() {
        let mut state = AppState::new();
        let cmds = update(&mut state, Message::ReviewCreated);
        assert_eq!(
            cmds,
            vec![
                Command::ClearInput("rev-comment"),
                Command::FetchReviews,
                Command::Notify(Notice::success("Thanks for your review!")),
            ]
        );
    }

    #[test]
    fn reloaded_list_shows_new_rating() {
        let mut state = AppState::new();
        let cmds = update(
            &mut state,
            Message::ReviewsLoaded(vec![Review {
                id: Some(3),
                username: "ravi".into(),
                rating: 4,
                comment: Some("Great biryani".into()),
                created_at: "2025-03-02T12:00:00".into(),
            }]),
        );
        let [Command::RenderHtml { target: "reviews", html }] = cmds.as_slice() else {
            panic!("expected a review render, got {:?}", cmds);
        };
        assert!(html.contains("★★★★☆"));
        assert!(html.contains("@ravi"));
        assert_eq!(state.reviews.len(), 1);
    }

    #[test]
    fn failed_submission_does_not_reload() {
        let mut state = AppState::new();
        let cmds = update(&mut state, Message::RequestFailed("Rating must be 1-5".into()));
        assert!(cmds.iter().all(|c| !c.is_request()));
        assert_eq!(cmds, vec![Command::Notify(Notice::error("Rating must be 1-5"))]);
    }
}
