use serde::{Deserialize, Serialize};

/// Response shape shared by every product endpoint
///
/// Successful responses carry their items in `results` and an empty `error`.
/// Failures carry no results and the error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub results: Vec<T>,
    pub error: String,
}

impl<T> Envelope<T> {
    /// Wraps a list of results
    pub fn results(results: Vec<T>) -> Self {
        Self {
            results,
            error: String::new(),
        }
    }

    /// Wraps a single item in a one-element list
    pub fn single(item: T) -> Self {
        Self::results(vec![item])
    }

    /// Error envelope with no results
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            results: Vec::new(),
            error: error.into(),
        }
    }

    /// Takes the first result, if any
    pub fn into_first(self) -> Option<T> {
        self.results.into_iter().next()
    }
}
