//! Per-hook result state for cached reads.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use lending::ApiError;

/// Data, in-flight flag and last error of one query hook.
///
/// A refetch keeps the previous data visible until the new result lands.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self { data: None, loading: false, error: None }
    }
}

impl<T> QueryState<T> {
    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish(&mut self, result: Result<T, ApiError>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
    }

    /// Nothing to show yet: first fetch still running.
    #[must_use]
    pub fn is_initial_load(&self) -> bool {
        self.loading && self.data.is_none()
    }

    /// Error worth a full-page message (no stale data to fall back on).
    #[must_use]
    pub fn blocking_error(&self) -> Option<&ApiError> {
        if self.data.is_some() {
            return None;
        }
        self.error.as_ref()
    }
}
