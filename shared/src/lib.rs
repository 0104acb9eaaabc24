//! Domain model and UI state for the Dates of Bangalore map.
//!
//! Nothing in here touches the browser: the frontend crate supplies a
//! [`RecordStore`] and feeds [`BoardEvent`]s into a [`StoryBoard`].

pub mod board;
pub mod filter;
pub mod geo;
pub mod map;
pub mod store;
pub mod story;
pub mod workflow;

pub use board::{
    BoardEvent, DraftField, Notice, NoticeKind, StoryBoard, StoryDraft, SubmitRejection,
};
pub use filter::{
    CategoryFilter, FilterMode, RatingFilter, StoryFilter, DATE_CATEGORIES, LIST_VIEW_LIMIT,
};
pub use geo::{Bounds, LatLng, BANGALORE_BOUNDS, BANGALORE_CENTER};
pub use map::{markers_for, MapConfig, MarkerSpec, PopupContent};
pub use store::{CreateStoryRequest, RecordStore, StoreError};
pub use story::{star_row, DateStory};
