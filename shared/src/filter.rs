use serde::{Deserialize, Serialize};
use std::fmt;

use crate::story::{parse_leading_int, DateStory};

/// Category labels offered by the filter buttons and the submission form
pub const DATE_CATEGORIES: [&str; 5] = [
    "drinks and snacks",
    "Food centric",
    "sit back and watch",
    "activity and adventure",
    "walk and talk",
];

/// Ratings offered by the rating filter
pub const RATING_CHOICES: [i64; 5] = [1, 2, 3, 4, 5];

/// The list view never shows more than this many stories
pub const LIST_VIEW_LIMIT: usize = 5;

pub const ALL_TYPES_LABEL: &str = "All Types";
pub const ALL_RATINGS_LABEL: &str = "All Ratings";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a button label; the "All Types" sentinel maps to `All`
    pub fn from_label(label: &str) -> Self {
        if label == ALL_TYPES_LABEL {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    pub fn matches(&self, story: &DateStory) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => story.type_of_date == *category,
        }
    }

    /// Every selectable option, sentinel first
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(Self::All)
            .chain(DATE_CATEGORIES.iter().map(|c| Self::Only(c.to_string())))
            .collect()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_TYPES_LABEL),
            Self::Only(category) => f.write_str(category),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RatingFilter {
    #[default]
    All,
    Only(i64),
}

impl RatingFilter {
    /// Parse a select value; the "All Ratings" sentinel and unparsable input map to `All`
    pub fn from_label(label: &str) -> Self {
        if label == ALL_RATINGS_LABEL {
            return Self::All;
        }
        parse_leading_int(label).map_or(Self::All, Self::Only)
    }

    /// Stories whose rating does not parse never match a concrete rating
    pub fn matches(&self, story: &DateStory) -> bool {
        match self {
            Self::All => true,
            Self::Only(rating) => story.rating_value() == Some(*rating),
        }
    }

    pub fn options() -> Vec<RatingFilter> {
        std::iter::once(Self::All)
            .chain(RATING_CHOICES.iter().copied().map(Self::Only))
            .collect()
    }
}

impl fmt::Display for RatingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_RATINGS_LABEL),
            Self::Only(rating) => write!(f, "{rating}"),
        }
    }
}

/// Which filter panel is currently on screen. Both filters stay in force either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterMode {
    #[default]
    Type,
    Rating,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoryFilter {
    pub category: CategoryFilter,
    pub rating: RatingFilter,
}

impl StoryFilter {
    pub fn matches(&self, story: &DateStory) -> bool {
        self.category.matches(story) && self.rating.matches(story)
    }

    /// Visible subset in record-store order
    pub fn apply(&self, stories: &[DateStory]) -> Vec<DateStory> {
        stories
            .iter()
            .filter(|story| self.matches(story))
            .cloned()
            .collect()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.category == CategoryFilter::All && self.rating == RatingFilter::All
    }
}

/// First few visible stories, for the card list under the map
pub fn list_view(visible: &[DateStory]) -> &[DateStory] {
    &visible[..visible.len().min(LIST_VIEW_LIMIT)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &str, category: &str, rating: &str) -> DateStory {
        DateStory {
            id: id.to_string(),
            type_of_date: category.to_string(),
            rating: rating.to_string(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<DateStory> {
        vec![
            story("1", "walk and talk", "4"),
            story("2", "Food centric", "5"),
            story("3", "walk and talk", "2"),
            story("4", "rooftop bars", "4"),
            story("5", "Food centric", "4.0"),
            story("6", "walk and talk", "n/a"),
        ]
    }

    fn ids(stories: &[DateStory]) -> Vec<&str> {
        stories.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_unfiltered_keeps_everything_in_order() {
        let filter = StoryFilter::default();
        assert!(filter.is_unfiltered());
        assert_eq!(ids(&filter.apply(&sample())), ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_category_filter() {
        let filter = StoryFilter {
            category: CategoryFilter::from_label("walk and talk"),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&sample())), ["1", "3", "6"]);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let filter = StoryFilter {
            category: CategoryFilter::Only("food centric".to_string()),
            ..Default::default()
        };
        assert!(filter.apply(&sample()).is_empty());
    }

    #[test]
    fn test_rating_filter_parses_leading_integer() {
        let filter = StoryFilter {
            rating: RatingFilter::from_label("4"),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&sample())), ["1", "4", "5"]);
    }

    #[test]
    fn test_filters_compose_with_and() {
        let filter = StoryFilter {
            category: CategoryFilter::Only("Food centric".to_string()),
            rating: RatingFilter::Only(4),
        };
        assert_eq!(ids(&filter.apply(&sample())), ["5"]);
    }

    #[test]
    fn test_matches_set_definition_for_every_option() {
        let stories = sample();
        for category in CategoryFilter::options() {
            for rating in RatingFilter::options() {
                let filter = StoryFilter {
                    category: category.clone(),
                    rating,
                };
                let expected: Vec<&str> = stories
                    .iter()
                    .filter(|s| {
                        (category == CategoryFilter::All
                            || CategoryFilter::Only(s.type_of_date.clone()) == category)
                            && (rating == RatingFilter::All
                                || s.rating_value().map(RatingFilter::Only) == Some(rating))
                    })
                    .map(|s| s.id.as_str())
                    .collect();
                assert_eq!(ids(&filter.apply(&stories)), expected);
            }
        }
    }

    #[test]
    fn test_apply_is_idempotent() {
        let filter = StoryFilter {
            category: CategoryFilter::Only("walk and talk".to_string()),
            rating: RatingFilter::All,
        };
        let stories = sample();
        assert_eq!(filter.apply(&stories), filter.apply(&stories));
    }

    #[test]
    fn test_sentinel_labels() {
        assert_eq!(CategoryFilter::from_label("All Types"), CategoryFilter::All);
        assert_eq!(RatingFilter::from_label("All Ratings"), RatingFilter::All);
        assert_eq!(CategoryFilter::All.to_string(), "All Types");
        assert_eq!(RatingFilter::Only(3).to_string(), "3");
        assert_eq!(CategoryFilter::options().len(), 6);
        assert_eq!(RatingFilter::options().len(), 6);
    }

    #[test]
    fn test_list_view_truncates() {
        let many: Vec<DateStory> = (0..12)
            .map(|i| story(&i.to_string(), "walk and talk", "3"))
            .collect();
        assert_eq!(list_view(&many).len(), LIST_VIEW_LIMIT);
        assert_eq!(list_view(&many)[0].id, "0");
        assert_eq!(list_view(&many[..2]).len(), 2);
        assert!(list_view(&[]).is_empty());
    }
}
