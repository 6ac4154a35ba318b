//! Host-side scrolling list.
//!
//! Keeps only the rows that are on screen. When the window moves, rows that
//! scroll out go to a [`RecyclePool`] and are handed back to the adapter for
//! the positions that scroll in, so the number of rows ever built is bounded
//! by the viewport height plus the pool capacity, not by the list length.

use crate::adapter::{NoteRow, NotesAdapter};
use crate::error::{NotelistError, Result};
use crate::row_cache::RowCache;
use log::trace;
use rowkit::{Inflater, RecyclePool};
use std::collections::HashMap;
use std::ops::Range;

pub struct NoteListView {
    attached: Vec<(usize, NoteRow)>,
    pool: RecyclePool<RowCache>,
    first: usize,
    height: usize,
    width: Option<usize>,
}

impl NoteListView {
    /// A viewport showing `height` rows, each padded to `width` columns when set.
    pub fn new(height: usize, width: Option<usize>) -> Self {
        Self::with_pool(height, width, RecyclePool::new())
    }

    pub fn with_pool(height: usize, width: Option<usize>, pool: RecyclePool<RowCache>) -> Self {
        Self {
            attached: Vec::new(),
            pool,
            first: 0,
            height,
            width,
        }
    }

    pub fn first_visible(&self) -> usize {
        self.first
    }

    pub fn scroll_to(&mut self, first: usize) {
        self.first = first;
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.first = self.first.saturating_add_signed(delta);
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height;
    }

    /// Positions currently on screen, in order.
    pub fn visible_positions(&self) -> Vec<usize> {
        self.attached.iter().map(|(p, _)| *p).collect()
    }

    pub fn attached_rows(&self) -> impl Iterator<Item = &NoteRow> {
        self.attached.iter().map(|(_, row)| row)
    }

    pub fn pool(&self) -> &RecyclePool<RowCache> {
        &self.pool
    }

    fn window(&self, count: usize) -> Range<usize> {
        let first = self.first.min(count.saturating_sub(self.height));
        first..(first + self.height).min(count)
    }

    /// Rebinds every visible position against the adapter's current data.
    pub fn layout(&mut self, adapter: &NotesAdapter, parent: &Inflater) -> Result<()> {
        let window = self.window(adapter.count());
        self.first = window.start;

        let mut kept: HashMap<usize, NoteRow> = HashMap::new();
        for (position, row) in self.attached.drain(..) {
            if window.contains(&position) {
                kept.insert(position, row);
            } else {
                self.pool.put(row);
            }
        }

        let mut attached: Vec<(usize, NoteRow)> = Vec::with_capacity(window.len());
        for position in window.clone() {
            let reuse = kept
                .remove(&position)
                .or_else(|| self.pool.take(adapter.view_type(position)));
            let bound = match reuse {
                Some(mut row) => match adapter.bind_row(position, &mut row, parent) {
                    Ok(()) => Ok(row),
                    Err(err) => {
                        self.pool.put(row);
                        Err(err)
                    }
                },
                None => adapter.render_row(position, None, parent),
            };
            match bound {
                Ok(row) => attached.push((position, row)),
                Err(err) => {
                    // Hand every row we still hold back to the pool.
                    let held = attached.into_iter().map(|(_, row)| row);
                    for row in held.chain(kept.into_values()) {
                        self.pool.put(row);
                    }
                    return Err(err);
                }
            }
        }
        self.attached = attached;

        trace!(
            "event=layout module=list_view first={} visible={} scrap={}",
            window.start,
            self.attached.len(),
            self.pool.len()
        );
        Ok(())
    }

    /// Draws the visible rows, one line each.
    pub fn frame(&self, parent: &Inflater) -> Result<Vec<String>> {
        self.attached
            .iter()
            .map(|(_, row)| {
                row.render_line(parent, self.width)
                    .map_err(NotelistError::from)
            })
            .collect()
    }
}
