pub(crate) mod config;
pub use config::{
    AppConfig, AppConfigError, DatasetConfig, DisplayConfig, Language, SearchSettings,
};

pub(crate) mod movie;
pub(crate) use movie::RawMovieRow;
pub use movie::{MovieId, MovieIdError, MovieRecord};

pub(crate) mod rating;
pub use rating::{PASSING_RATING, Rating, RatingError, Verdict};

pub(crate) mod title;
pub use title::{Title, TitleError};

pub(crate) mod year;
pub use year::{MAX_YEAR, MIN_YEAR, Year, YearError};
