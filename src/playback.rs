//! Timed playback of a document's pixels.
//!
//! [`Playback`] walks pixels in ascending time and reports how long to wait
//! before each one. It never sleeps itself; pacing belongs to the caller.

use std::time::Duration;

use crate::types::{Pixel, PixelTimeIndex};

/// A pixel and the delay since the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub pixel: Pixel,
    pub delay: Duration,
}

/// Iterator over the pixels of an index with inter-pixel delays.
///
/// The first delay is measured from time zero. Negative gaps are clamped to
/// zero.
pub struct Playback<'a> {
    pixels: std::collections::btree_map::Values<'a, i64, Pixel>,
    previous: i64,
}

impl<'a> Playback<'a> {
    pub fn new(index: &'a PixelTimeIndex) -> Self {
        Self {
            pixels: index.into_iter(),
            previous: 0,
        }
    }

    /// Total time from zero to the last pixel.
    pub fn duration(index: &PixelTimeIndex) -> Duration {
        let last = index.last_time().unwrap_or(0).max(0);
        Duration::from_millis(last as u64)
    }
}

impl Iterator for Playback<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let pixel = *self.pixels.next()?;
        let time = pixel.time().unwrap_or(self.previous);
        let gap = time.saturating_sub(self.previous).max(0);
        self.previous = time;

        Some(Frame {
            pixel,
            delay: Duration::from_millis(gap as u64),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pixels.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;

    fn index(times: &[i64]) -> PixelTimeIndex {
        let mut index = PixelTimeIndex::new();
        for &t in times {
            index
                .insert(Pixel::live(0, 0, Colour::BLACK).unwrap().stamped(t))
                .unwrap();
        }
        index
    }

    #[test]
    fn test_delays_between_pixels() {
        let index = index(&[1000, 0, 2500]);
        let delays: Vec<u128> = Playback::new(&index).map(|f| f.delay.as_millis()).collect();
        assert_eq!(delays, vec![0, 1000, 1500]);
    }

    #[test]
    fn test_first_delay_from_zero() {
        let index = index(&[300]);
        let frames: Vec<Frame> = Playback::new(&index).collect();
        assert_eq!(frames[0].delay, Duration::from_millis(300));
    }

    #[test]
    fn test_negative_times_clamped() {
        let index = index(&[-200, 100]);
        let delays: Vec<u128> = Playback::new(&index).map(|f| f.delay.as_millis()).collect();
        assert_eq!(delays, vec![0, 300]);
    }

    #[test]
    fn test_duration() {
        assert_eq!(Playback::duration(&index(&[])), Duration::ZERO);
        assert_eq!(Playback::duration(&index(&[5, 2500])), Duration::from_millis(2500));
    }
}
