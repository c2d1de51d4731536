//! Turns resolver outcomes into terminal text.

use crate::messages::{Catalog, interpolate};
use bechdel_core::LoadError;
use bechdel_core::types::{MovieRecord, Verdict};
use bechdel_search::Lookup;

/// Cycles through the pass and fail descriptor texts, one step per result.
///
/// Each verdict keeps its own position.
#[derive(Debug)]
pub struct Descriptors {
    catalog: &'static Catalog,
    pass_index: usize,
    fail_index: usize,
}

impl Descriptors {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self {
            catalog,
            pass_index: 0,
            fail_index: 0,
        }
    }

    pub fn next(&mut self, verdict: Verdict) -> &'static str {
        let (texts, index) = match verdict {
            Verdict::Pass => (self.catalog.pass_texts, &mut self.pass_index),
            Verdict::Fail => (self.catalog.fail_texts, &mut self.fail_index),
        };
        if texts.is_empty() {
            return "";
        }
        let text = texts[*index % texts.len()];
        *index += 1;
        text
    }
}

pub fn render_lookup(
    lookup: &Lookup<MovieRecord>,
    query: &str,
    catalog: &'static Catalog,
    descriptors: &mut Descriptors,
) -> String {
    match lookup {
        Lookup::NotFound => interpolate(catalog.not_found, &[("query", query.trim())]),
        Lookup::Found { record, was_fuzzy } => {
            render_record(record, *was_fuzzy, catalog, descriptors)
        }
    }
}

fn render_record(
    record: &MovieRecord,
    was_fuzzy: bool,
    catalog: &'static Catalog,
    descriptors: &mut Descriptors,
) -> String {
    let year = record.year.to_string();
    let vars = [("title", record.title.as_str()), ("year", year.as_str())];
    let heading = if was_fuzzy {
        interpolate(catalog.did_you_mean, &vars)
    } else {
        interpolate(catalog.movie_title, &vars)
    };

    let verdict = record.verdict();
    let badge = match verdict {
        Verdict::Pass => catalog.yes,
        Verdict::Fail => catalog.nope,
    };

    format!(
        "{heading}\n{badge} {}\n{} {}",
        descriptors.next(verdict),
        catalog.see_more,
        record.bechdel_url()
    )
}

pub fn render_load_error(error: &LoadError, catalog: &Catalog) -> String {
    format!("{}\n({error})", catalog.generic_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bechdel_core::types::{Language, MovieId, Rating, Title, Year};

    fn record(title: &str, year: i32, rating: u8) -> MovieRecord {
        MovieRecord {
            title: Title::try_new(title.to_string()).unwrap(),
            year: Year::try_new(year).unwrap(),
            rating: Rating::try_new(rating).unwrap(),
            id: MovieId::try_new("7623".to_string()).unwrap(),
            imdb_id: None,
        }
    }

    fn en() -> &'static Catalog {
        Catalog::for_language(Language::En)
    }

    #[test]
    fn test_descriptors_cycle_per_verdict() {
        let catalog = en();
        let mut descriptors = Descriptors::new(catalog);

        assert_eq!(descriptors.next(Verdict::Pass), catalog.pass_texts[0]);
        assert_eq!(descriptors.next(Verdict::Fail), catalog.fail_texts[0]);
        assert_eq!(descriptors.next(Verdict::Pass), catalog.pass_texts[1]);

        for _ in 2..catalog.pass_texts.len() {
            descriptors.next(Verdict::Pass);
        }
        assert_eq!(descriptors.next(Verdict::Pass), catalog.pass_texts[0]);
        assert_eq!(descriptors.next(Verdict::Fail), catalog.fail_texts[1]);
    }

    #[test]
    fn test_render_exact_pass() {
        let catalog = en();
        let mut descriptors = Descriptors::new(catalog);
        let lookup = Lookup::Found {
            record: record("It", 2017, 3),
            was_fuzzy: false,
        };

        let text = render_lookup(&lookup, "it", catalog, &mut descriptors);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "It (2017)");
        assert!(lines[1].starts_with("Yes! "));
        assert!(lines[2].ends_with("https://bechdeltest.com/view/7623/"));
    }

    #[test]
    fn test_render_fuzzy_fail() {
        let catalog = en();
        let mut descriptors = Descriptors::new(catalog);
        let lookup = Lookup::Found {
            record: record("Harry Potter", 2001, 1),
            was_fuzzy: true,
        };

        let text = render_lookup(&lookup, "hary poter", catalog, &mut descriptors);

        assert!(text.starts_with("Did you mean \"Harry Potter (2001)\"?\nNope "));
        assert!(text.contains(catalog.fail_texts[0]));
    }

    #[test]
    fn test_render_not_found_uses_trimmed_query() {
        let catalog = en();
        let mut descriptors = Descriptors::new(catalog);

        let text = render_lookup(&Lookup::NotFound, "  xyz123 ", catalog, &mut descriptors);

        assert!(text.starts_with("Couldn\u{2019}t find \u{201c}xyz123\u{201d}"));
    }

    #[test]
    fn test_render_load_error() {
        let catalog = Catalog::for_language(Language::Fr);
        let error = LoadError::TimedOut { after_ms: 30000 };

        let text = render_load_error(&error, catalog);

        assert!(text.starts_with(catalog.generic_error));
        assert!(text.contains("30000ms"));
    }
}
