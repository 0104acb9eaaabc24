//! Load and submit flows, expressed as functions that turn record-store
//! calls into [`BoardEvent`]s. The caller decides when (and whether) to feed
//! the resulting event back into its [`StoryBoard`].

use chrono::{DateTime, Utc};

use crate::board::{BoardEvent, StoryBoard, SubmitRejection};
use crate::geo::{jitter, BANGALORE_CENTER, JITTER_SPREAD};
use crate::store::RecordStore;
use crate::story::DateStory;

pub async fn load<S>(store: &S) -> BoardEvent
where
    S: RecordStore + ?Sized,
{
    match store.list().await {
        Ok(stories) => BoardEvent::LoadSucceeded(stories),
        Err(e) => BoardEvent::LoadFailed(e.to_string()),
    }
}

/// Validate the board's draft and build the record to send.
///
/// Nothing is sent when this fails; turn the rejection into
/// [`BoardEvent::SubmitRejected`] to surface it.
pub fn prepare_submission(
    board: &StoryBoard,
    now: DateTime<Utc>,
    sample: impl FnMut() -> f64,
) -> Result<DateStory, SubmitRejection> {
    if board.is_submitting() {
        return Err(SubmitRejection::AlreadySubmitting);
    }
    board.draft().validate()?;

    let position = jitter(BANGALORE_CENTER, JITTER_SPREAD, sample);
    Ok(DateStory::from_draft(board.draft(), position, now))
}

pub async fn submit<S>(store: &S, story: DateStory) -> BoardEvent
where
    S: RecordStore + ?Sized,
{
    match store.create(&story).await {
        Ok(()) => BoardEvent::SubmitSucceeded(story),
        Err(e) => BoardEvent::SubmitFailed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{DraftField, NoticeKind, StoryDraft, SUCCESS_MESSAGE, VALIDATION_MESSAGE};
    use crate::filter::CategoryFilter;
    use crate::store::StoreError;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::cell::RefCell;

    /// In-memory record store that records every call
    #[derive(Default)]
    struct StubStore {
        stored: RefCell<Vec<DateStory>>,
        fail_with: Option<StoreError>,
        list_calls: RefCell<usize>,
        create_calls: RefCell<usize>,
    }

    impl StubStore {
        fn with(stories: Vec<DateStory>) -> Self {
            Self {
                stored: RefCell::new(stories),
                ..Default::default()
            }
        }

        fn failing(error: StoreError) -> Self {
            Self {
                fail_with: Some(error),
                ..Default::default()
            }
        }
    }

    #[async_trait(?Send)]
    impl RecordStore for StubStore {
        async fn list(&self) -> Result<Vec<DateStory>, StoreError> {
            *self.list_calls.borrow_mut() += 1;
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(self.stored.borrow().clone()),
            }
        }

        async fn create(&self, story: &DateStory) -> Result<(), StoreError> {
            *self.create_calls.borrow_mut() += 1;
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => {
                    self.stored.borrow_mut().push(story.clone());
                    Ok(())
                }
            }
        }
    }

    fn seeded(id: &str, category: &str) -> DateStory {
        DateStory {
            id: id.to_string(),
            rating: "3".to_string(),
            type_of_date: category.to_string(),
            location: "Church Street".to_string(),
            story: "Books and coffee".to_string(),
            latitude: "12.975".to_string(),
            longitude: "77.605".to_string(),
            timestamp: "2024-12-01T10:00:00.000Z".to_string(),
            icon_url: String::new(),
        }
    }

    fn fill(board: &mut StoryBoard, draft: &StoryDraft) {
        for field in DraftField::ALL {
            board.apply(BoardEvent::EditDraft(field, draft.field(field).to_string()));
        }
    }

    fn cubbon_park() -> StoryDraft {
        StoryDraft {
            rating: "4".to_string(),
            type_of_date: "walk and talk".to_string(),
            location: "Cubbon Park".to_string(),
            story: "Lovely evening".to_string(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 8, 19, 45, 12).unwrap()
    }

    #[tokio::test]
    async fn test_load_success() {
        let store = StubStore::with(vec![seeded("1", "Food centric"), seeded("2", "walk and talk")]);
        let mut board = StoryBoard::new();
        board.apply(load(&store).await);

        assert_eq!(board.records().len(), 2);
        assert_eq!(board.visible().len(), 2);
    }

    #[tokio::test]
    async fn test_load_failure_is_silent() {
        let store = StubStore::failing(StoreError::Network("offline".to_string()));
        let event = load(&store).await;
        assert_eq!(event, BoardEvent::LoadFailed("network error: offline".to_string()));

        let mut board = StoryBoard::new();
        board.apply(event);
        assert!(board.records().is_empty());
        assert!(board.notice().is_none());
    }

    #[tokio::test]
    async fn test_successful_submission() {
        let store = StubStore::with(vec![seeded("1", "walk and talk")]);
        let mut board = StoryBoard::new();
        board.apply(load(&store).await);
        board.apply(BoardEvent::SelectCategory(CategoryFilter::Only(
            "walk and talk".to_string(),
        )));
        board.apply(BoardEvent::OpenForm);
        fill(&mut board, &cubbon_park());

        let story = prepare_submission(&board, now(), || 0.5).unwrap();
        board.apply(BoardEvent::SubmitStarted);
        board.apply(submit(&store, story.clone()).await);

        assert_eq!(*store.create_calls.borrow(), 1);
        assert_eq!(store.stored.borrow().last(), Some(&story));
        assert!(board.records().contains(&story));
        assert!(board.visible().contains(&story));
        assert!(board.draft().is_empty());
        assert!(!board.is_form_open());
        let notice = board.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, SUCCESS_MESSAGE);
    }

    #[tokio::test]
    async fn test_submitted_record_shape() {
        let mut board = StoryBoard::new();
        fill(&mut board, &cubbon_park());
        let story = prepare_submission(&board, now(), || 0.5).unwrap();

        assert_eq!(story.id, now().timestamp_millis().to_string());
        assert_eq!(story.rating, "4");
        assert_eq!(story.type_of_date, "walk and talk");
        assert_eq!(story.location, "Cubbon Park");
        assert_eq!(story.story, "Lovely evening");
        assert_eq!(story.latitude, "12.971600");
        assert_eq!(story.longitude, "77.594600");
        assert_eq!(story.timestamp, "2025-03-08T19:45:12.000Z");
        assert_eq!(story.icon_url, "");
    }

    #[tokio::test]
    async fn test_any_empty_field_blocks_submission() {
        for missing in DraftField::ALL {
            let store = StubStore::with(vec![seeded("1", "Food centric")]);
            let mut board = StoryBoard::new();
            board.apply(load(&store).await);

            let mut draft = cubbon_park();
            draft.set(missing, String::new());
            fill(&mut board, &draft);

            let rejection = prepare_submission(&board, now(), || 0.5).unwrap_err();
            assert_eq!(rejection, SubmitRejection::MissingFields(vec![missing]));
            board.apply(BoardEvent::SubmitRejected(rejection));

            assert_eq!(*store.create_calls.borrow(), 0);
            assert_eq!(board.records().len(), 1);
            assert_eq!(board.notice().unwrap().message, VALIDATION_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_draft() {
        let store = StubStore::failing(StoreError::Status(500));
        let mut board = StoryBoard::new();
        board.apply(BoardEvent::OpenForm);
        fill(&mut board, &cubbon_park());

        let story = prepare_submission(&board, now(), || 0.5).unwrap();
        board.apply(BoardEvent::SubmitStarted);
        let event = submit(&store, story).await;
        assert_eq!(
            event,
            BoardEvent::SubmitFailed("record store responded with status 500".to_string())
        );
        board.apply(event);

        assert!(board.records().is_empty());
        assert_eq!(*board.draft(), cubbon_park());
        assert!(board.is_form_open());
        assert_eq!(board.notice().unwrap().kind, NoticeKind::Error);
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_rejected() {
        let mut board = StoryBoard::new();
        fill(&mut board, &cubbon_park());
        board.apply(BoardEvent::SubmitStarted);

        assert_eq!(
            prepare_submission(&board, now(), || 0.5),
            Err(SubmitRejection::AlreadySubmitting)
        );
    }

    #[tokio::test]
    async fn test_jittered_position_within_window() {
        let mut board = StoryBoard::new();
        fill(&mut board, &cubbon_park());

        for sample in [0.0, 0.123_456_789, 0.5, 0.987_654_321, 0.999_999] {
            let story = prepare_submission(&board, now(), || sample).unwrap();
            let position = story.coordinates().unwrap();
            assert!((position.lat - BANGALORE_CENTER.lat).abs() <= 0.05 + 1e-9);
            assert!((position.lng - BANGALORE_CENTER.lng).abs() <= 0.05 + 1e-9);
            assert_eq!(story.latitude.split('.').nth(1).unwrap().len(), 6);
            assert_eq!(story.longitude.split('.').nth(1).unwrap().len(), 6);
        }
    }
}
