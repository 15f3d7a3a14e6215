use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Number of genre categories in the taxonomy; every preference vector has
/// exactly this many entries.
pub const GENRE_COUNT: usize = 12;

/// The fixed genre taxonomy shared by the rule engine, the vectorizer and the
/// filters. Variant order defines vector index order and must not change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Comedy,
    Crime,
    Drama,
    Fantasy,
    Horror,
    Mystery,
    Romance,
    SciFi,
    Thriller,
}

impl Genre {
    /// All genres in taxonomy (index) order
    pub const ALL: [Genre; GENRE_COUNT] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Comedy,
        Genre::Crime,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Mystery,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
    ];

    /// Position of this genre in the taxonomy, and so in every vector
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical display name
    pub fn name(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Animation => "Animation",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Thriller => "Thriller",
        }
    }

    /// Parses a genre name, tolerating arbitrary casing. Unrecognized names
    /// yield `None` and are ignored by callers rather than treated as errors.
    pub fn from_name(name: &str) -> Option<Genre> {
        let name = name.trim();
        Genre::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(name))
    }

    /// Maps a TMDB genre identifier to a taxonomy genre.
    ///
    /// Covers both the movie id range and the TV id range. Several TV
    /// sub-genre ids collapse onto one taxonomy entry (e.g. the various
    /// drama-flavored TV ids all map to Drama). Unknown ids yield `None`.
    pub fn from_provider_id(id: u32) -> Option<Genre> {
        match id {
            // Movie genres
            28 => Some(Genre::Action),
            12 => Some(Genre::Adventure),
            16 => Some(Genre::Animation),
            35 => Some(Genre::Comedy),
            80 => Some(Genre::Crime),
            18 => Some(Genre::Drama),
            14 => Some(Genre::Fantasy),
            27 => Some(Genre::Horror),
            9648 => Some(Genre::Mystery),
            10749 => Some(Genre::Romance),
            878 => Some(Genre::SciFi),
            53 => Some(Genre::Thriller),
            // TV-specific genres
            10759 => Some(Genre::Action),
            10762 => Some(Genre::Animation),
            10763 | 10764 | 10766 | 10768 | 37 => Some(Genre::Drama),
            10765 => Some(Genre::SciFi),
            10767 => Some(Genre::Comedy),
            _ => None,
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_order_is_stable() {
        assert_eq!(Genre::Action.index(), 0);
        assert_eq!(Genre::Crime.index(), 4);
        assert_eq!(Genre::Thriller.index(), GENRE_COUNT - 1);
    }

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(Genre::from_name("sci-fi"), Some(Genre::SciFi));
        assert_eq!(Genre::from_name(" Romance "), Some(Genre::Romance));
        assert_eq!(Genre::from_name("DRAMA"), Some(Genre::Drama));
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(Genre::from_name("Documentary"), None);
        assert_eq!(Genre::from_name(""), None);
    }

    #[test]
    fn test_movie_id_mapping() {
        assert_eq!(Genre::from_provider_id(28), Some(Genre::Action));
        assert_eq!(Genre::from_provider_id(10749), Some(Genre::Romance));
        assert_eq!(Genre::from_provider_id(878), Some(Genre::SciFi));
    }

    #[test]
    fn test_tv_ids_collapse_to_one_name() {
        for id in [10763, 10764, 10766, 10768, 37] {
            assert_eq!(Genre::from_provider_id(id), Some(Genre::Drama));
        }
        assert_eq!(Genre::from_provider_id(10765), Some(Genre::SciFi));
    }

    #[test]
    fn test_unknown_id_ignored() {
        assert_eq!(Genre::from_provider_id(99), None);
        assert_eq!(Genre::from_provider_id(10770), None);
    }
}
