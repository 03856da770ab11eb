//! Grid collage: cell geometry, paging, and page composition

/// Page composition with cell-level failure isolation
pub mod compositor;
/// Cell geometry, paging arithmetic, and fit scaling
pub mod layout;

pub use compositor::compose_pages;
pub use layout::GridLayout;
