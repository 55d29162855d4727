//! Compact binary wire codec for polygons.
//!
//! Layout, all integers and floats big-endian (network byte order),
//! coordinates IEEE-754 double precision:
//!
//! ```text
//! u32             contour count
//! per contour, in order:
//!   i32           signed point count: +n for a solid contour, -n for a hole
//!   f64 * 2n      interleaved x0 y0 x1 y1 ... x(n-1) y(n-1)
//! ```
//!
//! There is no magic number, no version tag, no length field and no
//! checksum. The format is strictly positional with zero redundancy:
//! truncation surfaces as [`CodecError::TruncatedInput`], while corruption
//! that preserves record lengths decodes into silently wrong geometry.
//! Callers needing integrity must wrap the encoded bytes externally.

use polyio_types::{Contour, Point, Polygon};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CodecError {
    #[error("truncated input: needed {needed} more bytes, {available} available")]
    TruncatedInput { needed: usize, available: usize },
    #[error("contour {index} declares zero points")]
    EmptyContour { index: usize },
}

/// Encode `polygon` into the binary wire format.
pub fn encode_binary(polygon: &Polygon) -> Vec<u8> {
    let payload: usize = polygon
        .iter()
        .map(|c| 4 + 16 * c.len())
        .sum();
    let mut buf = Vec::with_capacity(4 + payload);

    buf.extend_from_slice(&(polygon.len() as u32).to_be_bytes());
    for contour in polygon {
        let count = contour.len() as i32;
        let signed = if contour.is_hole() { -count } else { count };
        buf.extend_from_slice(&signed.to_be_bytes());
        for p in contour.points() {
            buf.extend_from_slice(&p.x.to_be_bytes());
            buf.extend_from_slice(&p.y.to_be_bytes());
        }
    }
    buf
}

/// Decode a polygon from bytes produced by [`encode_binary`].
///
/// Reads exactly the declared records from the front of `bytes`; trailing
/// bytes are ignored.
pub fn decode_binary(bytes: &[u8]) -> Result<Polygon, CodecError> {
    let mut reader = ByteReader::new(bytes);
    let contour_count = reader.read_u32()?;

    // Declared counts are untrusted; cap reservations by what the remaining
    // input could possibly back (4 bytes per contour header, 16 per point).
    let mut contours =
        Vec::with_capacity((contour_count as usize).min(reader.remaining() / 4));
    for index in 0..contour_count {
        let signed = reader.read_i32()?;
        if signed == 0 {
            return Err(CodecError::EmptyContour { index: index as usize });
        }
        let hole = signed < 0;
        let point_count = signed.unsigned_abs() as usize;

        let mut points = Vec::with_capacity(point_count.min(reader.remaining() / 16));
        for _ in 0..point_count {
            let x = reader.read_f64()?;
            let y = reader.read_f64()?;
            points.push(Point::new(x, y));
        }
        contours.push(Contour::new(points, hole));
    }
    Ok(Polygon::from_contours(contours))
}

/// Front-to-back cursor over a byte slice with big-endian primitive reads.
struct ByteReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let available = self.remaining();
        if available < N {
            return Err(CodecError::TruncatedInput {
                needed: N - available,
                available,
            });
        }
        let mut out = [0u8; N];
        out.copy_from_slice(&self.bytes[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }

    fn read_u32(&mut self) -> Result<u32, CodecError> {
        Ok(u32::from_be_bytes(self.take()?))
    }

    fn read_i32(&mut self) -> Result<i32, CodecError> {
        Ok(i32::from_be_bytes(self.take()?))
    }

    fn read_f64(&mut self) -> Result<f64, CodecError> {
        Ok(f64::from_be_bytes(self.take()?))
    }
}
