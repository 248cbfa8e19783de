//! Layout primitives shared by the views
//!
//! Padding is applied inside a view's bounds, between its edges and the
//! content it draws.

// ============================================================================
// Padding
// ============================================================================

/// Padding around a view's content (top, right, bottom, left)
///
/// # Examples
///
/// ```ignore
/// // Equal padding on all sides (8px)
/// let p = Padding::all(8);
///
/// // Only the top differs
/// let p = Padding { top: 20, ..Padding::all(8) };
///
/// // Total space consumed on each axis
/// let total_width = p.horizontal();
/// let total_height = p.vertical();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    /// Top padding (pixels)
    pub top: u32,

    /// Right padding (pixels)
    pub right: u32,

    /// Bottom padding (pixels)
    pub bottom: u32,

    /// Left padding (pixels)
    pub left: u32,
}

impl Padding {
    /// Creates equal padding on all sides
    pub fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Returns total horizontal padding (left + right)
    pub fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    /// Returns total vertical padding (top + bottom)
    pub fn vertical(&self) -> u32 {
        self.top + self.bottom
    }
}
