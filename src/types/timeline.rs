//! Time-ordered pixel storage.

use std::collections::BTreeMap;

use crate::error::{PxonError, Result};

use super::Pixel;

/// Width of a time key: enough decimal digits for any `u64`.
pub const TIME_KEY_WIDTH: usize = 20;

/// Encode a time as a fixed-width, zero-padded decimal key.
///
/// The sign bit is flipped before formatting, so lexicographic order of keys
/// matches numeric order of times across the whole `i64` range.
pub fn time_key(time: i64) -> String {
    let biased = (time as u64) ^ (1 << 63);
    format!("{:0width$}", biased, width = TIME_KEY_WIDTH)
}

/// Pixels ordered by ascending time.
///
/// At most one pixel is kept per time. Inserting a pixel whose time is
/// already present replaces the earlier one (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelTimeIndex {
    pixels: BTreeMap<i64, Pixel>,
}

impl PixelTimeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a stamped pixel, returning any pixel it replaced.
    pub fn insert(&mut self, pixel: Pixel) -> Result<Option<Pixel>> {
        let time = pixel.time().ok_or_else(|| {
            PxonError::timestamp("cannot index a pixel that has no time")
        })?;
        let replaced = self.pixels.insert(time, pixel);
        if replaced.is_some() {
            tracing::trace!(time, key = %time_key(time), "replaced pixel with equal time");
        }
        Ok(replaced)
    }

    /// Snapshot of the pixels in ascending time order.
    pub fn ordered_pixels(&self) -> Vec<Pixel> {
        self.pixels.values().copied().collect()
    }

    /// Iterate pixels in ascending time order.
    pub fn iter(&self) -> impl Iterator<Item = &Pixel> {
        self.pixels.values()
    }

    /// Look up the pixel stored at a time.
    pub fn get(&self, time: i64) -> Option<&Pixel> {
        self.pixels.get(&time)
    }

    /// Earliest and latest times, if any pixels are present.
    pub fn span(&self) -> Option<(i64, i64)> {
        let first = self.pixels.keys().next()?;
        let last = self.pixels.keys().next_back()?;
        Some((*first, *last))
    }

    /// Latest time in the index.
    pub fn last_time(&self) -> Option<i64> {
        self.pixels.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

impl<'a> IntoIterator for &'a PixelTimeIndex {
    type Item = &'a Pixel;
    type IntoIter = std::collections::btree_map::Values<'a, i64, Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;

    fn pixel(x: i64, time: i64) -> Pixel {
        Pixel::live(x, 0, Colour::BLACK).unwrap().stamped(time)
    }

    #[test]
    fn test_ordered_regardless_of_insertion_order() {
        let mut index = PixelTimeIndex::new();
        for t in [1000, 0, 500, -20, 250] {
            index.insert(pixel(t.max(0), t)).unwrap();
        }

        let times: Vec<i64> = index.iter().filter_map(|p| p.time()).collect();
        assert_eq!(times, vec![-20, 0, 250, 500, 1000]);
    }

    #[test]
    fn test_equal_time_last_write_wins() {
        let mut index = PixelTimeIndex::new();
        assert!(index.insert(pixel(1, 100)).unwrap().is_none());
        let replaced = index.insert(pixel(2, 100)).unwrap();

        assert_eq!(replaced.map(|p| p.x()), Some(1));
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(100).map(|p| p.x()), Some(2));
    }

    #[test]
    fn test_unstamped_pixel_rejected() {
        let mut index = PixelTimeIndex::new();
        let err = index.insert(Pixel::live(0, 0, Colour::WHITE).unwrap()).unwrap_err();
        assert!(matches!(err, PxonError::InvalidTimestamp { .. }));
        assert!(index.is_empty());
    }

    #[test]
    fn test_ordered_pixels_is_snapshot() {
        let mut index = PixelTimeIndex::new();
        index.insert(pixel(0, 10)).unwrap();
        let snapshot = index.ordered_pixels();
        index.insert(pixel(1, 20)).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(index.ordered_pixels().len(), 2);
    }

    #[test]
    fn test_span() {
        let mut index = PixelTimeIndex::new();
        assert_eq!(index.span(), None);
        index.insert(pixel(0, 40)).unwrap();
        index.insert(pixel(0, -5)).unwrap();
        assert_eq!(index.span(), Some((-5, 40)));
        assert_eq!(index.last_time(), Some(40));
    }

    #[test]
    fn test_time_key_fixed_width() {
        for t in [i64::MIN, -1, 0, 1, 2500, i64::MAX] {
            assert_eq!(time_key(t).len(), TIME_KEY_WIDTH);
        }
    }

    #[test]
    fn test_time_key_order_matches_numeric_order() {
        let times = [i64::MIN, -1_000_000, -1, 0, 1, 9, 10, 2500, 1_000_000, i64::MAX];
        for pair in times.windows(2) {
            assert!(time_key(pair[0]) < time_key(pair[1]), "{:?}", pair);
        }
    }
}
