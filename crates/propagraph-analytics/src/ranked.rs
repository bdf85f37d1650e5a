//! Ranked `(node name, value)` results and the extremum scan behind them.

use serde::Serialize;

/// A node name paired with the metric value that singled it out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked<T> {
    /// Display name of the winning node (or edge source). Empty for the
    /// no-data sentinel.
    pub name: String,
    pub value: T,
}

impl<T> Ranked<T> {
    /// Pair a name with a value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl<T: Default> Ranked<T> {
    /// The `("", 0)` result returned when there is nothing to rank.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            value: T::default(),
        }
    }

    /// Whether this is the no-data sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// Scan `(node, value)` candidates in order and keep the one `replaces`
/// prefers.
///
/// The first candidate seeds the scan. With a strict comparison
/// (`a > b`) earlier ties win; with a non-strict one (`a >= b`) later
/// ties win.
pub(crate) fn pick<T, I, F>(candidates: I, replaces: F) -> Option<(usize, T)>
where
    T: Copy,
    I: IntoIterator<Item = (usize, T)>,
    F: Fn(T, T) -> bool,
{
    let mut best: Option<(usize, T)> = None;
    for (node, value) in candidates {
        match best {
            Some((_, current)) if !replaces(value, current) => {}
            _ => best = Some((node, value)),
        }
    }
    best
}
