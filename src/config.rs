//! Physical layout constants for the page/section allocator.
//!
//! Unlike most "config" modules these are not runtime-tunable: they are
//! baked into the 16-bit section-index and handle encodings, so changing
//! one changes the on-disk shape of a page. They live here anyway so the
//! rest of the crate has one place to look for "what are the numbers".

/// Size in bytes of a single section, the smallest unit of payload storage.
pub const SECTION_SIZE: usize = 14;

/// Number of sections in a page; bounded by the 16-bit section index.
pub const SECTIONS_PER_PAGE: usize = 0x10000;

/// Maximum number of pages a pool may ever touch; bounded by the 8-bit
/// page index half of a `StringId`.
pub const MAX_PAGES: usize = 256;

/// Payload bytes available in a head section (2 bytes are the refcount).
pub const HEAD_PAYLOAD: usize = SECTION_SIZE - 2;

/// Padding tag meaning "the terminal section's payload fills it exactly;
/// no trailing NUL is present".
pub const TAG_EXACT: u8 = 0x00;

/// Padding tag meaning "a NUL separator followed by `0xFF` filler occupies
/// the rest of the terminal section".
pub const TAG_PADDING: u8 = 0xFF;

/// Padding tag stamped into the tail of the free-list.
pub const TAG_FREE: u8 = 0xFE;

/// Number of sections a payload of `sz` bytes needs.
///
/// The `+3` accounts for the 2-byte refcount in the head section plus the
/// tail byte that the terminal section may need for its padding tag.
pub fn slots_needed(sz: usize) -> usize {
    (sz + 3) / SECTION_SIZE
}
