//! The public pool: a vector of lazily-allocated pages plus the page
//! selection policy that ties `create`/`clone_id` together.

use std::borrow::Cow;
use std::io;

use tracing::{debug, trace};

use crate::config::{slots_needed, MAX_PAGES};
use crate::error::{PoolError, PoolResult};
use crate::id::StringId;
use crate::page::Page;

/// Up to 256 lazily-allocated 1 MiB pages, each an independent string arena.
///
/// Not `Sync`: every operation mutates page state and callers are expected
/// to serialize access themselves (see the concurrency model in the design
/// notes).
pub struct Pool {
    pages: Vec<Option<Page>>,
    touched: usize,
}

impl Pool {
    /// Creates an empty pool with no pages allocated yet.
    pub fn new() -> Self {
        let mut pages = Vec::with_capacity(MAX_PAGES);
        pages.resize_with(MAX_PAGES, || None);
        Pool { pages, touched: 0 }
    }

    /// Creates an empty pool with no pages allocated yet.
    pub fn new_pool() -> Self {
        Self::new()
    }

    /// Finds (lazily allocating if needed) a page with at least `n` free
    /// sections: scans touched pages from the highest index downward for
    /// an uninitialized slot or one with enough room, and only grows the
    /// pool past `touched` if neither exists.
    fn find_page(&mut self, n: usize) -> PoolResult<usize> {
        for i in (0..self.touched).rev() {
            if self.pages[i].is_none() {
                debug!(page = i, "lazily initializing page");
                self.pages[i] = Some(Page::new());
                return Ok(i);
            }
        }
        for i in (0..self.touched).rev() {
            if let Some(p) = &self.pages[i] {
                if p.free_slot_count() >= n {
                    return Ok(i);
                }
            }
        }
        if self.touched == MAX_PAGES {
            return Err(PoolError::OutOfPages {
                needed: n,
                max: MAX_PAGES,
            });
        }
        let i = self.touched;
        debug!(page = i, "growing pool into a new page");
        self.pages[i] = Some(Page::new());
        self.touched += 1;
        Ok(i)
    }

    fn page(&self, index: usize) -> &Page {
        self.pages[index].as_ref().expect("page index must be live")
    }

    fn page_mut(&mut self, index: usize) -> &mut Page {
        self.pages[index].as_mut().expect("page index must be live")
    }

    /// Interns `bytes`, returning a fresh id with one outstanding reference.
    pub fn create(&mut self, bytes: &[u8]) -> PoolResult<StringId> {
        let n = slots_needed(bytes.len());
        let page_index = self.find_page(n)?;
        let head = self.page_mut(page_index).alloc_chain(bytes);
        trace!(page = page_index, section = head, len = bytes.len(), "created string");
        Ok(StringId::new(page_index, head as usize))
    }

    /// Adds a reference to `id`, incrementing its refcount or, at
    /// saturation, physically duplicating the chain into a new id.
    pub fn clone_id(&mut self, id: StringId) -> PoolResult<StringId> {
        let page_index = id.page();
        let head = id.section() as u16;

        if !self.page(page_index).is_saturated(head) {
            self.page_mut(page_index).bump_refcount(head);
            trace!(page = page_index, section = head, "cloned (refcount++)");
            return Ok(id);
        }

        let count = self.page(page_index).chain_len(head);
        let raw = self.page(page_index).extract_chain_bytes(head);
        let dest_page = self.find_page(count)?;
        let dhead = self.page_mut(dest_page).install_chain(&raw, count);
        debug!(
            src_page = page_index,
            src_section = head,
            dst_page = dest_page,
            dst_section = dhead,
            "refcount saturated, duplicated chain"
        );
        Ok(StringId::new(dest_page, dhead as usize))
    }

    /// Drops one reference to `id`, reclaiming its chain onto the free-list
    /// once the last reference is released.
    pub fn release(&mut self, id: StringId) {
        let page_index = id.page();
        let head = id.section() as u16;
        let page = self.page_mut(page_index);
        let refcount = page.get_refcount(head);
        if refcount > 0 {
            page.decrement_refcount(head);
            trace!(page = page_index, section = head, "released (refcount--)");
        } else {
            page.free_chain(head);
            trace!(page = page_index, section = head, "released (chain freed)");
        }
    }

    /// Compares `id`'s payload against `bytes` without materializing a copy
    /// unless the chain is fragmented.
    pub fn eq(&self, id: StringId, bytes: &[u8]) -> bool {
        self.page(id.page()).payload_eq(id.section() as u16, bytes)
    }

    /// Reads `id`'s payload: a borrowed slice when its chain is contiguous,
    /// an owned copy otherwise.
    pub fn read(&self, id: StringId) -> Cow<'_, [u8]> {
        self.page(id.page()).read(id.section() as u16).1
    }

    /// Writes a human-readable report of every touched page to `out`.
    pub fn dump(&self, out: &mut dyn io::Write) -> io::Result<()> {
        for (i, slot) in self.pages.iter().enumerate().take(self.touched) {
            if let Some(page) = slot {
                writeln!(out, "--- page {i} ---")?;
                page.dump(out)?;
            }
        }
        Ok(())
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

/// Explicit, deterministic-looking teardown of a pool; `Pool`'s `Drop`
/// (owning its page storage) already does the real work, so this exists
/// for callers that want a named call site for it.
pub fn delete_pool(pool: Pool) {
    drop(pool);
}
