//! Record types for a dictionary of sayings.

use crate::map::Searchable;

/// What a saying means, in English and optionally in Hawaiian.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Explanation {
    /// The meaning in English.
    pub english: String,
    /// The meaning in Hawaiian, if recorded.
    pub hawaiian: Option<String>,
}

/// A saying's dictionary entry.
///
/// Value searches over a map of sayings match against the translation.
///
/// # Examples
///
/// ```
/// use rbmap::{OrderedMap, Saying};
///
/// let mut map = OrderedMap::new();
/// map.insert("Na kai 'ewalu.", Saying::new("The eight seas.", "The channels between the islands.")).unwrap();
/// map.insert("Nānā i ke kumu.", Saying::new("Look to the source.", "Seek knowledge from its origin.")).unwrap();
///
/// assert_eq!(map.search_values("seas").collect::<Vec<_>>(), [&"Na kai 'ewalu."]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Saying {
    /// A literal English rendering.
    pub translation: String,
    /// What the saying conveys.
    pub explanation: Explanation,
}

impl Saying {
    /// Creates an entry with an English explanation only.
    pub fn new<T, E>(translation: T, english: E) -> Saying where T: Into<String>, E: Into<String> {
        Saying {
            translation: translation.into(),
            explanation: Explanation { english: english.into(), hawaiian: None },
        }
    }

    /// Adds a Hawaiian explanation.
    pub fn with_hawaiian<H>(mut self, hawaiian: H) -> Saying where H: Into<String> {
        self.explanation.hawaiian = Some(hawaiian.into());
        self
    }
}

impl Searchable for Saying {
    fn search_text(&self) -> &str { &self.translation }
}
