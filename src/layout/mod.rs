//! Column height equalization
//!
//! Measures the document-relative bottom edge of a set of column boxes and
//! grows their container so it reaches at least as low as the lowest column.
//! The core here knows nothing about the DOM: anything that can report an
//! offset height, an offset top, and an optional offset parent is a box.

pub mod snapshot;

use serde::{Deserialize, Serialize};

pub use snapshot::{LayoutSnapshot, SnapshotBox, SnapshotNode};

/// Layout pixels, as reported by the DOM `offset*` properties
pub type Px = i32;

/// A rendered box in a layout tree
///
/// Missing or detached boxes report zero for every measurement.
pub trait LayoutBox: Sized {
    /// Rendered height of the box itself
    fn offset_height(&self) -> Px;

    /// Vertical offset relative to the positioning ancestor
    fn offset_top(&self) -> Px;

    /// Nearest ancestor that establishes a positioning context
    fn offset_parent(&self) -> Option<Self>;
}

/// Something whose rendered height can be assigned
pub trait HeightTarget {
    /// Assign `height`; returns false when nothing was written
    fn set_height(&mut self, height: Px) -> bool;
}

/// Document coordinate of the bottom edge of `element`
///
/// Walks the offset-parent chain, summing the offset of every box that still
/// has a parent. The root contributes no offset. Sums saturate at the `i32`
/// bounds.
pub fn document_bottom_of<B: LayoutBox>(element: &B) -> Px {
    let mut bottom = element.offset_height();
    let mut top = element.offset_top();
    let mut parent = element.offset_parent();

    while let Some(node) = parent {
        bottom = bottom.saturating_add(top);
        top = node.offset_top();
        parent = node.offset_parent();
    }

    bottom
}

/// Outcome of measuring a container against its columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equalization {
    /// Container bottom before any change
    pub container_bottom: Px,

    /// Lowest column bottom, or None when there were no columns
    pub lowest_column_bottom: Option<Px>,

    /// Largest column shortfall below the container (never negative)
    pub needed: Px,

    /// Container's own height at measurement time
    pub previous_height: Px,

    /// Height assigned, or None when the container already covers every
    /// column or could not be written
    pub new_height: Option<Px>,
}

impl Equalization {
    /// Container height after the equalization takes effect
    pub fn resulting_height(&self) -> Px {
        self.new_height.unwrap_or(self.previous_height)
    }

    pub fn is_change(&self) -> bool {
        self.new_height.is_some()
    }

    /// Write phase: assign the planned height, if any
    ///
    /// Returns the record as applied; `new_height` is cleared when the target
    /// rejected the write.
    pub fn apply<T: HeightTarget>(self, target: &mut T) -> Equalization {
        match self.new_height {
            Some(height) if !target.set_height(height) => Equalization { new_height: None, ..self },
            _ => self,
        }
    }
}

/// Read phase: measure every column and the container without mutating anything
///
/// The growth is the single largest shortfall across all columns, applied once.
pub fn plan<B: LayoutBox>(container: &B, columns: &[B]) -> Equalization {
    let lowest_column_bottom = columns.iter().map(document_bottom_of).max();
    let container_bottom = document_bottom_of(container);
    let previous_height = container.offset_height();

    let needed = lowest_column_bottom
        .map(|lowest| lowest.saturating_sub(container_bottom).max(0))
        .unwrap_or(0);

    let new_height = if needed > 0 {
        Some(previous_height.saturating_add(needed))
    } else {
        None
    };

    Equalization {
        container_bottom,
        lowest_column_bottom,
        needed,
        previous_height,
        new_height,
    }
}

/// Grow `container` so its bottom edge covers every column
///
/// All measurements are taken before the container is written.
pub fn equalize_column_heights<B>(container: &mut B, columns: &[B]) -> Equalization
where
    B: LayoutBox + HeightTarget,
{
    let equalization = plan(&*container, columns).apply(container);

    if equalization.is_change() {
        log::debug!(
            "Grew column container by {}px to {}px",
            equalization.needed,
            equalization.resulting_height()
        );
    }

    equalization
}
