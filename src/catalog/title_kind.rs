use core::cmp::Ordering;
use core::convert::Infallible;
use core::fmt::{Display, Formatter};
use core::str::FromStr;

/// Content type of a title.
///
/// Matching is exact and case-sensitive: only `"Movie"` and `"TV Show"` map to the known
/// variants, everything else is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TitleKind {
    Movie,
    TvShow,
    Other(String),
}

impl TitleKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Movie => "Movie",
            Self::TvShow => "TV Show",
            Self::Other(text) => text,
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Movie => 0,
            Self::TvShow => 1,
            Self::Other(_) => 2,
        }
    }
}

impl FromStr for TitleKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Movie" => Self::Movie,
            "TV Show" => Self::TvShow,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<&str> for TitleKind {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl Display for TitleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Kinds sort by their text so listings match the order users see in the source data.
// Equal text only happens for an `Other` spelled like a known kind; the variant breaks the tie.
impl Ord for TitleKind {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str()).then_with(|| self.rank().cmp(&other.rank()))
    }
}

impl PartialOrd for TitleKind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
