//! Fixed-size circular frame store with running channel sums.
//!
//! All slots live in one flat plane per channel, indexed by a write cursor,
//! so memory use is fixed once allocated. Invariant: `sums[c][i]` equals the
//! sum of channel `c`, pixel `i` over the `filled` slots currently held.

use std::ops::Range;

use crate::live_view::common::error::{Result, ViewerError};
use crate::live_view::frame::{ChannelCodec, PixelBuffer};

pub(crate) struct FrameStore {
    width: usize,
    height: usize,
    capacity: usize,
    /// Per channel: `capacity` slots of `width * height` samples each
    slots: [Vec<f32>; 3],
    sums: [Vec<f32>; 3],
    cursor: usize,
    filled: usize,
}

impl FrameStore {
    pub(crate) fn allocate(width: usize, height: usize, capacity: usize) -> Result<Self> {
        let failed = || ViewerError::AllocationFailed {
            width,
            height,
            level: capacity,
        };
        let pixels = width.checked_mul(height).ok_or_else(failed)?;
        let slot_len = pixels.checked_mul(capacity).ok_or_else(failed)?;

        let plane = |len: usize| -> Result<Vec<f32>> {
            let mut v = Vec::new();
            v.try_reserve_exact(len).map_err(|_| failed())?;
            v.resize(len, 0.0);
            Ok(v)
        };

        Ok(Self {
            width,
            height,
            capacity,
            slots: [plane(slot_len)?, plane(slot_len)?, plane(slot_len)?],
            sums: [plane(pixels)?, plane(pixels)?, plane(pixels)?],
            cursor: 0,
            filled: 0,
        })
    }

    pub(crate) fn matches(&self, width: usize, height: usize, capacity: usize) -> bool {
        self.width == width && self.height == height && self.capacity == capacity
    }

    pub(crate) fn filled(&self) -> usize {
        self.filled
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn sums(&self) -> [&[f32]; 3] {
        [&self.sums[0], &self.sums[1], &self.sums[2]]
    }

    /// Drops every held frame without giving up the allocation.
    pub(crate) fn clear(&mut self) {
        for plane in self.slots.iter_mut().chain(self.sums.iter_mut()) {
            plane.fill(0.0);
        }
        self.cursor = 0;
        self.filled = 0;
    }

    /// Adds `frame` to the window, evicting the oldest frame once full.
    /// Returns the number of frames now held, which is the averaging divisor.
    pub(crate) fn push<C: ChannelCodec>(&mut self, codec: &C, frame: &PixelBuffer) -> usize {
        let slot = self.slot_range(self.cursor);

        if self.filled == self.capacity {
            for (sum, plane) in self.sums.iter_mut().zip(&self.slots) {
                for (s, old) in sum.iter_mut().zip(&plane[slot.clone()]) {
                    *s -= *old;
                }
            }
        }

        let [r, g, b] = &mut self.slots;
        codec.decode_into(
            frame,
            [
                &mut r[slot.clone()],
                &mut g[slot.clone()],
                &mut b[slot.clone()],
            ],
        );

        for (sum, plane) in self.sums.iter_mut().zip(&self.slots) {
            for (s, new) in sum.iter_mut().zip(&plane[slot.clone()]) {
                *s += *new;
            }
        }

        self.cursor = (self.cursor + 1) % self.capacity;
        self.filled = (self.filled + 1).min(self.capacity);
        self.filled
    }

    fn slot_range(&self, index: usize) -> Range<usize> {
        let len = self.width * self.height;
        index * len..(index + 1) * len
    }
}
