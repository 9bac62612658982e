#[path = "support/fakes.rs"]
pub mod fakes;

pub use fakes::{FakeAccessGuardService, FakeReviewRecordRepository};
pub use harness::{ReviewsHarness, create_reviews_harness, review_record};
