use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter::{list_view, CategoryFilter, FilterMode, RatingFilter, StoryFilter};
use crate::map::{markers_for, MapConfig, MarkerSpec};
use crate::story::DateStory;

pub const VALIDATION_MESSAGE: &str = "Please fill in all fields";
pub const SUCCESS_MESSAGE: &str = "Your date story has been shared! 💕";
pub const FAILURE_MESSAGE: &str = "Something went wrong.";
pub const PENDING_MESSAGE: &str = "Hang on, your last story is still being shared.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftField {
    Rating,
    TypeOfDate,
    Location,
    Story,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::Rating,
        DraftField::TypeOfDate,
        DraftField::Location,
        DraftField::Story,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Rating => "rating",
            DraftField::TypeOfDate => "type of date",
            DraftField::Location => "location",
            DraftField::Story => "story",
        }
    }
}

/// Form contents as typed, before a record is built from them
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoryDraft {
    pub rating: String,
    pub type_of_date: String,
    pub location: String,
    pub story: String,
}

impl StoryDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Rating => &self.rating,
            DraftField::TypeOfDate => &self.type_of_date,
            DraftField::Location => &self.location,
            DraftField::Story => &self.story,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Rating => self.rating = value,
            DraftField::TypeOfDate => self.type_of_date = value,
            DraftField::Location => self.location = value,
            DraftField::Story => self.story = value,
        }
    }

    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|field| self.field(*field).is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<(), SubmitRejection> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SubmitRejection::MissingFields(missing))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.missing_fields().len() == DraftField::ALL.len()
    }
}

/// Why a submit attempt never reached the network
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error("missing fields: {}", .0.iter().map(DraftField::label).collect::<Vec<_>>().join(", "))]
    MissingFields(Vec<DraftField>),
    #[error("a submission is already in flight")]
    AlreadySubmitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// User-visible message shown after a submit attempt.
///
/// `seq` is unique per posted notice, so a stale expiry never clears a newer one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub seq: u64,
}

/// Every transition the board understands
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    LoadSucceeded(Vec<DateStory>),
    LoadFailed(String),
    SelectCategory(CategoryFilter),
    SelectRating(RatingFilter),
    SetFilterMode(FilterMode),
    EditDraft(DraftField, String),
    OpenForm,
    CloseForm,
    ToggleForm,
    SubmitRejected(SubmitRejection),
    SubmitStarted,
    SubmitSucceeded(DateStory),
    SubmitFailed(String),
    DismissNotice,
    /// Clear the notice only if it is still the one with this `seq`
    ExpireNotice(u64),
}

/// All UI state for the page: records, filters, the form and its notices.
///
/// `visible` is always `filters.apply(records)`; every event that touches
/// either side recomputes it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoryBoard {
    records: Vec<DateStory>,
    visible: Vec<DateStory>,
    filters: StoryFilter,
    filter_mode: FilterMode,
    draft: StoryDraft,
    form_open: bool,
    submitting: bool,
    notice: Option<Notice>,
    notice_seq: u64,
    // Created here and confirmed by the store; survives a late initial load
    local_submissions: Vec<DateStory>,
}

impl StoryBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: BoardEvent) {
        match event {
            BoardEvent::LoadSucceeded(stories) => {
                self.records = stories;
                let missing: Vec<DateStory> = self
                    .local_submissions
                    .iter()
                    .filter(|local| !self.records.iter().any(|r| r.id == local.id))
                    .cloned()
                    .collect();
                self.records.extend(missing);
                self.refilter();
            }
            BoardEvent::LoadFailed(_) => {}
            BoardEvent::SelectCategory(category) => {
                self.filters.category = category;
                self.refilter();
            }
            BoardEvent::SelectRating(rating) => {
                self.filters.rating = rating;
                self.refilter();
            }
            BoardEvent::SetFilterMode(mode) => self.filter_mode = mode,
            BoardEvent::EditDraft(field, value) => self.draft.set(field, value),
            BoardEvent::OpenForm => self.form_open = true,
            BoardEvent::CloseForm => self.form_open = false,
            BoardEvent::ToggleForm => self.form_open = !self.form_open,
            BoardEvent::SubmitRejected(rejection) => {
                let message = match rejection {
                    SubmitRejection::MissingFields(_) => VALIDATION_MESSAGE,
                    SubmitRejection::AlreadySubmitting => PENDING_MESSAGE,
                };
                self.post_notice(NoticeKind::Warning, message);
            }
            BoardEvent::SubmitStarted => {
                self.submitting = true;
                self.notice = None;
            }
            BoardEvent::SubmitSucceeded(story) => {
                self.submitting = false;
                self.local_submissions.push(story.clone());
                self.records.push(story);
                self.refilter();
                self.draft = StoryDraft::default();
                self.form_open = false;
                self.post_notice(NoticeKind::Success, SUCCESS_MESSAGE);
            }
            BoardEvent::SubmitFailed(_) => {
                self.submitting = false;
                self.post_notice(NoticeKind::Error, FAILURE_MESSAGE);
            }
            BoardEvent::DismissNotice => self.notice = None,
            BoardEvent::ExpireNotice(seq) => {
                if self.notice.as_ref().is_some_and(|notice| notice.seq == seq) {
                    self.notice = None;
                }
            }
        }
    }

    fn post_notice(&mut self, kind: NoticeKind, message: &str) {
        self.notice_seq += 1;
        self.notice = Some(Notice {
            kind,
            message: message.to_string(),
            seq: self.notice_seq,
        });
    }

    fn refilter(&mut self) {
        self.visible = self.filters.apply(&self.records);
    }

    pub fn records(&self) -> &[DateStory] {
        &self.records
    }

    pub fn visible(&self) -> &[DateStory] {
        &self.visible
    }

    pub fn list_view(&self) -> &[DateStory] {
        list_view(&self.visible)
    }

    pub fn markers(&self, config: &MapConfig) -> Vec<MarkerSpec> {
        markers_for(&self.visible, config)
    }

    pub fn filters(&self) -> &StoryFilter {
        &self.filters
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    pub fn draft(&self) -> &StoryDraft {
        &self.draft
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Notice for the page banner; hidden while the form modal covers the page
    pub fn page_notice(&self) -> Option<&Notice> {
        self.notice.as_ref().filter(|_| !self.form_open)
    }

    /// Notice shown inside the open form, where validation and failure feedback lands
    pub fn form_notice(&self) -> Option<&Notice> {
        self.notice.as_ref().filter(|_| self.form_open)
    }
}
