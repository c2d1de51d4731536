use super::{Rating, Title, Verdict, Year};
use crate::error::RecordError;
use nutype::nutype;
use serde::Deserialize;

const BECHDEL_VIEW_URL: &str = "https://bechdeltest.com/view";
const IMDB_TITLE_URL: &str = "https://www.imdb.com/title";

/// bechdeltest.com identifier of a movie.
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct MovieId(String);

/// A single rated movie.
///
/// Every field is validated on construction, so a record in a
/// [`Dataset`](crate::Dataset) always has a non-empty title, a rating in
/// `0..=3` and a plausible release year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    pub title: Title,
    pub year: Year,
    pub rating: Rating,
    pub id: MovieId,
    pub imdb_id: Option<String>,
}

impl MovieRecord {
    pub fn verdict(&self) -> Verdict {
        self.rating.verdict()
    }

    pub fn passes(&self) -> bool {
        self.rating.passes()
    }

    /// Link to the movie's page on bechdeltest.com.
    pub fn bechdel_url(&self) -> String {
        format!("{BECHDEL_VIEW_URL}/{}/", self.id)
    }

    pub fn imdb_url(&self) -> Option<String> {
        self.imdb_id
            .as_deref()
            .map(|imdb_id| format!("{IMDB_TITLE_URL}/{imdb_id}/"))
    }
}

/// Row layout of `movies.json` as written by the scraper.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawMovieRow {
    year: i32,
    id: RawMovieId,
    #[serde(default)]
    imdb_id: Option<String>,
    title: String,
    rating: u8,
}

/// The scraper emits string ids; hand-edited datasets sometimes carry numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawMovieId {
    Text(String),
    Number(u64),
}

impl TryFrom<RawMovieRow> for MovieRecord {
    type Error = RecordError;

    fn try_from(row: RawMovieRow) -> Result<Self, Self::Error> {
        let id = match row.id {
            RawMovieId::Text(text) => text,
            RawMovieId::Number(number) => number.to_string(),
        };

        Ok(Self {
            title: Title::try_new(row.title)?,
            year: Year::try_new(row.year)?,
            rating: Rating::try_new(row.rating)?,
            id: MovieId::try_new(id)?,
            imdb_id: row
                .imdb_id
                .map(|imdb_id| imdb_id.trim().to_string())
                .filter(|imdb_id| !imdb_id.is_empty()),
        })
    }
}
