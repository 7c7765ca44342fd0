/// A catalog token found in the agent string plus the version text that
/// followed it (empty when none did).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate<'a> {
    pub token: &'a str,
    pub version: &'a str,
}

/// Result of a successful [`CandidateSet::find`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Found {
    /// Index of the first candidate carrying the token.
    pub index: usize,
    /// The search name that hit, in its canonical casing.
    pub name: &'static str,
}

/// Candidates in order of appearance. Duplicates are kept.
#[derive(Debug, Clone, Default)]
pub(crate) struct CandidateSet<'a> {
    items: Vec<Candidate<'a>>,
}

impl<'a> CandidateSet<'a> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate<'a>> {
        self.items.iter()
    }

    /// Version captured for candidate `index`, empty if out of range.
    pub fn version(&self, index: usize) -> &'a str {
        self.items.get(index).map_or("", |c| c.version)
    }

    pub fn token(&self, index: usize) -> &'a str {
        self.items.get(index).map_or("", |c| c.token)
    }

    /// Try each name in turn against the candidate tokens (ASCII
    /// case-insensitive). The first name present wins, at the index of its
    /// first occurrence.
    pub fn find(&self, names: &[&'static str]) -> Option<Found> {
        names.iter().find_map(|&name| {
            self.items
                .iter()
                .position(|c| c.token.eq_ignore_ascii_case(name))
                .map(|index| Found { index, name })
        })
    }

    /// Index of the first candidate whose token is exactly `token`.
    pub fn position(&self, token: &str) -> Option<usize> {
        self.items.iter().position(|c| c.token == token)
    }
}

impl<'a> FromIterator<Candidate<'a>> for CandidateSet<'a> {
    fn from_iter<I: IntoIterator<Item = Candidate<'a>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
