use crate::view::RowView;
use std::collections::HashMap;

pub const DEFAULT_MAX_SCRAP: usize = 8;

/// Detached rows waiting to be rebound, keyed by template name.
///
/// Only rows of the same template are interchangeable, so each template gets
/// its own bounded heap. Rows offered beyond the bound are dropped.
#[derive(Debug)]
pub struct RecyclePool<T> {
    scrap: HashMap<String, Vec<RowView<T>>>,
    max_scrap: usize,
}

impl<T> RecyclePool<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_SCRAP)
    }

    /// Creates a pool keeping at most `max_scrap` rows per template.
    pub fn with_capacity(max_scrap: usize) -> Self {
        Self {
            scrap: HashMap::new(),
            max_scrap,
        }
    }

    /// Offers a row for reuse. Returns `false` when the heap was full and the
    /// row was dropped instead.
    pub fn put(&mut self, row: RowView<T>) -> bool {
        let heap = self.scrap.entry(row.template().to_string()).or_default();
        if heap.len() >= self.max_scrap {
            return false;
        }
        heap.push(row);
        true
    }

    /// Takes a row previously built from `template`, if any.
    pub fn take(&mut self, template: &str) -> Option<RowView<T>> {
        self.scrap.get_mut(template).and_then(Vec::pop)
    }

    pub fn scrap_count(&self, template: &str) -> usize {
        self.scrap.get(template).map_or(0, Vec::len)
    }

    pub fn len(&self) -> usize {
        self.scrap.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.scrap.clear();
    }
}

impl<T> Default for RecyclePool<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{Inflater, RowTemplate};
    use crate::theme::Theme;

    fn inflater() -> Inflater {
        let mut inflater = Inflater::with_color(Theme::new(), false);
        inflater
            .register(RowTemplate::new("a", "{{ x }}", &["x"]))
            .unwrap();
        inflater
            .register(RowTemplate::new("b", "{{ y }}", &["y"]))
            .unwrap();
        inflater
    }

    #[test]
    fn rows_come_back_by_template() {
        let inflater = inflater();
        let mut pool: RecyclePool<()> = RecyclePool::new();
        let row_a = inflater.inflate("a").unwrap();
        let id = row_a.id();
        pool.put(row_a);
        pool.put(inflater.inflate("b").unwrap());

        assert_eq!(pool.len(), 2);
        assert!(pool.take("missing").is_none());
        let taken = pool.take("a").unwrap();
        assert_eq!(taken.id(), id);
        assert_eq!(pool.scrap_count("a"), 0);
        assert_eq!(pool.scrap_count("b"), 1);
    }

    #[test]
    fn pool_is_bounded_per_template() {
        let inflater = inflater();
        let mut pool: RecyclePool<()> = RecyclePool::with_capacity(1);
        assert!(pool.put(inflater.inflate("a").unwrap()));
        assert!(!pool.put(inflater.inflate("a").unwrap()));
        assert!(pool.put(inflater.inflate("b").unwrap()));
        assert_eq!(pool.len(), 2);
        pool.clear();
        assert!(pool.is_empty());
    }
}
