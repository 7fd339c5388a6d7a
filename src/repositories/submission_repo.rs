use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::debug;
use crate::models::feedback::{Feedback, FeedbackForm};
use crate::models::reservation::{Reservation, ReservationForm};

/// Volatile, append-only record of everything posted through the site forms.
///
/// Each collection is guarded by its own mutex, and the id of a new record is
/// derived from the collection length inside the same critical section as the
/// append, so ids stay `1..=n` in submission order under concurrent requests.
/// Nothing survives a restart.
#[derive(Default)]
pub struct SubmissionRepo {
    reservations: Mutex<Vec<Reservation>>,
    feedbacks: Mutex<Vec<Feedback>>,
}

impl SubmissionRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record_reservation(
        &self,
        form: ReservationForm,
    ) -> Reservation {
        let mut reservations = self.reservations.lock().await;
        let reservation = Reservation::from_form(
            next_id(reservations.len()),
            form,
            OffsetDateTime::now_utc(),
        );
        reservations.push(reservation.clone());
        debug!("Stored reservation {} ({} in total)", reservation.id, reservations.len());

        reservation
    }

    pub async fn record_feedback(
        &self,
        form: FeedbackForm,
    ) -> Feedback {
        let mut feedbacks = self.feedbacks.lock().await;
        let feedback = Feedback::from_form(
            next_id(feedbacks.len()),
            form,
            OffsetDateTime::now_utc(),
        );
        feedbacks.push(feedback.clone());
        debug!("Stored feedback {} ({} in total)", feedback.id, feedbacks.len());

        feedback
    }

    pub async fn reservations(&self) -> Vec<Reservation> {
        self.reservations.lock().await.clone()
    }

    pub async fn feedbacks(&self) -> Vec<Feedback> {
        self.feedbacks.lock().await.clone()
    }
}

fn next_id(prior_records: usize) -> u64 {
    prior_records as u64 + 1
}
