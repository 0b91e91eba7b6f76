// SPDX-License-Identifier: MPL-2.0
//! Fill levels of the per-item progress segments at the top of the viewer.

/// Fill of segment `index` while item `current` is at `fraction`.
///
/// Items before the current one are full, later ones are empty.
#[must_use]
pub fn segment_fill(index: usize, current: usize, fraction: f32) -> f32 {
    match index.cmp(&current) {
        std::cmp::Ordering::Less => 1.0,
        std::cmp::Ordering::Equal => fraction.clamp(0.0, 1.0),
        std::cmp::Ordering::Greater => 0.0,
    }
}

/// Fills for an author with `count` items.
#[must_use]
pub fn segment_fills(count: usize, current: usize, fraction: f32) -> Vec<f32> {
    (0..count)
        .map(|index| segment_fill(index, current, fraction))
        .collect()
}
