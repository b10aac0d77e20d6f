//! Screen regions of the demo host
//!
//! `LayoutRegions` records where each surface was drawn in the last frame and
//! `region_at()` answers which surface owns a given cell.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};

#[cfg(test)]
#[path = "layout/layout_regions_tests.rs"]
mod layout_regions_tests;
