//! A video game catalogue entry. This is one example of an element that can be stored in an
//! [`OrderedTree`][crate::tree::OrderedTree]: games order by ISBN and then by title.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::record::VideoGame;
//! use ordered_tree::tree::OrderedTree;
//!
//! let mut shelf = OrderedTree::new();
//! shelf.insert(VideoGame::new("978-2", "Quake", 1996, "id Software", "M"));
//! shelf.insert(VideoGame::new("978-1", "Doom", 1993, "id Software", "M"));
//!
//! // Only the ISBN and title identify a game.
//! let doom = VideoGame::new("978-1", "Doom", 2016, "Bethesda", "M");
//! assert!(shelf.contains(&doom));
//! assert_eq!(shelf.find_min().map(|game| game.year()), Ok(1993));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single video game. Two games are the same game when their ISBN and title match; the rest of
/// the fields are descriptive.
#[derive(Debug, Clone)]
pub struct VideoGame {
    isbn: String,
    title: String,
    year: i32,
    studio_or_publisher: String,
    rating: String,
}

impl VideoGame {
    /// Construct a new `VideoGame`.
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        year: i32,
        studio_or_publisher: impl Into<String>,
        rating: impl Into<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            year,
            studio_or_publisher: studio_or_publisher.into(),
            rating: rating.into(),
        }
    }

    /// The game's ISBN.
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// The game's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The year the game was released.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Who developed or published the game.
    pub fn studio_or_publisher(&self) -> &str {
        &self.studio_or_publisher
    }

    /// The game's content rating, e.g. `"E"` or `"M"`.
    pub fn rating(&self) -> &str {
        &self.rating
    }

    /// Changes the ISBN. Since the ISBN is part of the ordering, don't do this to a game while it
    /// is stored in a tree.
    pub fn set_isbn(&mut self, isbn: impl Into<String>) {
        self.isbn = isbn.into();
    }

    /// Changes the title. Like [`set_isbn`][Self::set_isbn] this changes the ordering.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Changes the release year.
    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    /// Changes the studio or publisher.
    pub fn set_studio_or_publisher(&mut self, studio_or_publisher: impl Into<String>) {
        self.studio_or_publisher = studio_or_publisher.into();
    }

    /// Changes the content rating.
    pub fn set_rating(&mut self, rating: impl Into<String>) {
        self.rating = rating.into();
    }
}

impl PartialEq for VideoGame {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn && self.title == other.title
    }
}

impl Eq for VideoGame {}

impl PartialOrd for VideoGame {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VideoGame {
    fn cmp(&self, other: &Self) -> Ordering {
        self.isbn
            .cmp(&other.isbn)
            .then_with(|| self.title.cmp(&other.title))
    }
}

/// Only hashes the fields used for equality.
impl Hash for VideoGame {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn.hash(state);
        self.title.hash(state);
    }
}

impl fmt::Display for VideoGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ISBN: {}\nTitle: {}\nYear: {}\nStudio or Publisher: {}\nRating: {}\n\n",
            self.isbn, self.title, self.year, self.studio_or_publisher, self.rating
        )
    }
}
