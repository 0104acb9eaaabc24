pub mod use_story_board;

pub use use_story_board::use_story_board;
