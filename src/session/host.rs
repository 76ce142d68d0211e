//! Commit channel to the host
//!
//! Sessions report successful interactions by committing their full current
//! value. The host only ever observes the latest commit.

/// Receiver of committed values
pub trait CommitSink<T: ?Sized> {
    fn commit(&mut self, value: &T);
}

impl<T: ?Sized, F: FnMut(&T)> CommitSink<T> for F {
    fn commit(&mut self, value: &T) {
        self(value)
    }
}

/// Sink that keeps only the newest value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestValue<T> {
    value: Option<T>,
    commits: usize,
}

impl<T> LatestValue<T> {
    pub fn new() -> Self {
        Self {
            value: None,
            commits: 0,
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Number of commits received so far
    pub fn commits(&self) -> usize {
        self.commits
    }
}

impl<T> Default for LatestValue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> CommitSink<[T]> for LatestValue<Vec<T>> {
    fn commit(&mut self, value: &[T]) {
        self.value = Some(value.to_vec());
        self.commits += 1;
    }
}

impl CommitSink<crate::search::SearchValue> for LatestValue<crate::search::SearchValue> {
    fn commit(&mut self, value: &crate::search::SearchValue) {
        self.value = Some(value.clone());
        self.commits += 1;
    }
}
