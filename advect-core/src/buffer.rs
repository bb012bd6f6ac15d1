//! Fixed-length storage for per-particle scalars.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

/// A resizable sequence of `f64`, one entry per particle.
///
/// The buffer dereferences to `[f64]`, so indexing, iteration and chunking
/// all go through the slice API. Its length only changes through [`resize`]
/// or [`take`].
///
/// [`resize`]: NumericBuffer::resize
/// [`take`]: NumericBuffer::take
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericBuffer {
    data: Vec<f64>,
}

impl NumericBuffer {
    /// Create a buffer of `size` elements, all equal to `value`.
    pub fn new(size: usize, value: f64) -> Self {
        Self {
            data: vec![value; size],
        }
    }

    pub fn zeros(size: usize) -> Self {
        Self::new(size, 0.0)
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Grow or shrink to `new_size`, keeping the existing prefix.
    /// New elements are `0.0`.
    pub fn resize(&mut self, new_size: usize) {
        self.data.reserve(new_size.saturating_sub(self.data.len()));
        self.data.resize(new_size, 0.0);
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Move the contents out, leaving this buffer empty and reusable.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Write one snapshot line: every value followed by a comma, then a newline.
    pub fn write_csv<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.to_csv_line().as_bytes())
    }

    pub fn to_csv_line(&self) -> String {
        let mut line = String::with_capacity(self.data.len() * 8 + 1);
        for value in &self.data {
            // Writing into a String cannot fail.
            let _ = write!(line, "{},", value);
        }
        line.push('\n');
        line
    }
}

impl Deref for NumericBuffer {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.data
    }
}

impl DerefMut for NumericBuffer {
    fn deref_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

impl From<Vec<f64>> for NumericBuffer {
    fn from(data: Vec<f64>) -> Self {
        Self { data }
    }
}

impl From<NumericBuffer> for Vec<f64> {
    fn from(buffer: NumericBuffer) -> Self {
        buffer.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_every_slot() {
        let buf = NumericBuffer::new(3, 1.0);
        assert_eq!(buf.size(), 3);
        assert!(buf.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn resize_keeps_prefix_and_zero_fills_tail() {
        let mut buf = NumericBuffer::from(vec![1.0, 2.0]);
        buf.resize(4);
        assert_eq!(&buf[..], &[1.0, 2.0, 0.0, 0.0]);
        buf.resize(1);
        assert_eq!(&buf[..], &[1.0]);
    }

    #[test]
    fn indexed_write() {
        let mut buf = NumericBuffer::zeros(2);
        buf[1] = 4.5;
        assert_eq!(buf[1], 4.5);
        assert_eq!(buf[0], 0.0);
    }

    #[test]
    fn csv_line_is_comma_terminated() {
        let buf = NumericBuffer::from(vec![-0.5, 0.0, 1.25]);
        assert_eq!(buf.to_csv_line(), "-0.5,0,1.25,\n");

        let mut out = Vec::new();
        buf.write_csv(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "-0.5,0,1.25,\n");
    }

    #[test]
    fn empty_buffer_writes_bare_newline() {
        assert_eq!(NumericBuffer::default().to_csv_line(), "\n");
    }

    #[test]
    fn clone_is_independent() {
        let src = NumericBuffer::new(3, 1.0);
        let mut copy = src.clone();
        copy[0] = 2.0;
        assert_eq!(src[0], 1.0);
        assert_eq!(copy[0], 2.0);
    }

    #[test]
    fn take_leaves_source_empty_and_reusable() {
        let mut src = NumericBuffer::new(3, 2.0);
        let moved = src.take();
        assert_eq!(moved.size(), 3);
        assert_eq!(src.size(), 0);

        src.resize(2);
        src[1] = 7.0;
        assert_eq!(&src[..], &[0.0, 7.0]);
    }
}
