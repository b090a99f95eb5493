/// Keyword filter applied to commit subjects.
///
/// An empty filter accepts everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordFilter {
    terms: Vec<String>,
}

impl KeywordFilter {
    /// Build a filter from individual terms, dropping empty ones
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        KeywordFilter {
            terms: terms
                .into_iter()
                .map(Into::into)
                .filter(|term: &String| !term.is_empty())
                .collect(),
        }
    }

    /// Build a filter from a comma-joined list such as `bugfix,security`
    pub fn from_joined(joined: &str) -> Self {
        Self::new(joined.split(','))
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// True when no terms are set or any term is a literal substring of `subject`
    pub fn accepts(&self, subject: &str) -> bool {
        self.terms.is_empty() || self.terms.iter().any(|term| subject.contains(term.as_str()))
    }
}
