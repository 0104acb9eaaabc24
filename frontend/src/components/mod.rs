pub mod filter_bar;
pub mod header;
pub mod map_view;
pub mod notice_banner;
pub mod star_row;
pub mod story_form;
pub mod story_list;
