//! Intersection grouper (pipeline stage 2)
//!
//! Builds the intersection graph between one page's horizontal and vertical
//! rulings and unions connected lines into components. Each surviving
//! component — at least 2 horizontal and 2 vertical members — is a candidate
//! table for grid reconstruction.
//!
//! The pair test is a plain O(H·V) scan. Per-page ruling counts are small
//! (pages, not documents, bound the search), so a spatial index would buy
//! nothing here.

use crate::config::DetectorConfig;
use crate::union_find::UnionFind;
use gridline_core::{ClassifiedLine, Orientation};

/// A connected component of intersecting rulings: one candidate table.
#[derive(Debug, Clone, PartialEq)]
pub struct LineComponent {
    /// Horizontal members, in classification order
    pub horizontals: Vec<ClassifiedLine>,
    /// Vertical members, in classification order
    pub verticals: Vec<ClassifiedLine>,
}

impl LineComponent {
    /// Source primitive ids of all members, horizontals first.
    #[must_use = "returns the contributing primitive ids"]
    pub fn source_ids(&self) -> Vec<String> {
        self.horizontals
            .iter()
            .chain(self.verticals.iter())
            .map(|line| line.source_id.clone())
            .collect()
    }
}

/// Test whether a horizontal and a vertical ruling intersect within
/// `tolerance`: the vertical's position must fall inside the horizontal's
/// extent (widened by the tolerance) and vice versa.
#[inline]
#[must_use = "returns whether the rulings intersect"]
pub fn intersects(horizontal: &ClassifiedLine, vertical: &ClassifiedLine, tolerance: f32) -> bool {
    vertical.position >= horizontal.range_min() - tolerance
        && vertical.position <= horizontal.range_max() + tolerance
        && horizontal.position >= vertical.range_min() - tolerance
        && horizontal.position <= vertical.range_max() + tolerance
}

/// Partition one page's classified rulings into candidate-table components.
///
/// Lines are indexed `0..H` (horizontals) then `H..H+V` (verticals) and every
/// intersecting horizontal/vertical pair is unioned. Components with fewer
/// than 2 horizontal or 2 vertical members are isolated rulings, not grids,
/// and are silently dropped.
///
/// Component order is reproducible: ascending union-find root index.
#[must_use = "returns the candidate-table components"]
pub fn group_components(lines: Vec<ClassifiedLine>, config: &DetectorConfig) -> Vec<LineComponent> {
    let (horizontals, verticals): (Vec<ClassifiedLine>, Vec<ClassifiedLine>) = lines
        .into_iter()
        .partition(|line| line.orientation == Orientation::Horizontal);

    let h_count = horizontals.len();
    let mut uf = UnionFind::new(h_count + verticals.len());

    for (h_idx, horizontal) in horizontals.iter().enumerate() {
        for (v_idx, vertical) in verticals.iter().enumerate() {
            if intersects(horizontal, vertical, config.intersection_tolerance) {
                uf.union(h_idx, h_count + v_idx);
            }
        }
    }

    let mut components = Vec::new();
    for (root, members) in uf.groups() {
        let mut component = LineComponent {
            horizontals: Vec::new(),
            verticals: Vec::new(),
        };
        for member in members {
            if member < h_count {
                component.horizontals.push(horizontals[member].clone());
            } else {
                component.verticals.push(verticals[member - h_count].clone());
            }
        }
        if component.horizontals.len() >= 2 && component.verticals.len() >= 2 {
            components.push(component);
        } else {
            log::trace!(
                "dropping component at root {root}: {}h x {}v below grid minimum",
                component.horizontals.len(),
                component.verticals.len()
            );
        }
    }

    log::debug!("grouped rulings into {} candidate table(s)", components.len());
    components
}
