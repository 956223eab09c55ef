//! Encoded polyline codec.
//!
//! Implements the Google encoded polyline algorithm format: each
//! coordinate is stored as a signed delta from the previous one,
//! zig-zag encoded, split into 5-bit chunks (low chunk first, bit 6
//! set on every chunk except the last) and offset into printable
//! ASCII. Values are scaled by 1e5, giving 1e-5 degrees of precision.

use crate::domain::Coordinate;

/// Scale factor between degrees and the encoded integer representation.
const PRECISION: f64 = 1e5;

/// Chunk bytes are offset into the printable range starting at `?`.
const CHUNK_OFFSET: u8 = 63;

/// Continuation bit: set on every chunk except the last of a value.
const CONTINUATION_BIT: u64 = 0x20;

/// Error decoding an encoded polyline string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedGeometry {
    /// The input ended while a chunk's continuation bit was still set,
    /// or a single value ran past the representable width.
    #[error("polyline chunk starting at byte {offset} never terminates")]
    UnterminatedChunk { offset: usize },

    /// A byte outside the polyline alphabet (`?`..=`~`).
    #[error("invalid polyline byte {byte:#04x} at offset {offset}")]
    InvalidByte { byte: u8, offset: usize },
}

/// Decode an encoded polyline into an ordered coordinate sequence.
///
/// Coordinates are reconstructed by cumulative summation of the
/// decoded deltas in encounter order. The result is empty only when
/// the input is empty.
///
/// # Examples
///
/// ```
/// use fuel_server::polyline::decode;
///
/// let points = decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();
/// assert_eq!(points.len(), 3);
/// assert!((points[0].latitude - 38.5).abs() < 1e-9);
/// assert!((points[0].longitude - -120.2).abs() < 1e-9);
/// ```
pub fn decode(encoded: &str) -> Result<Vec<Coordinate>, MalformedGeometry> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();

    let mut offset = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while offset < bytes.len() {
        let (dlat, after_lat) = decode_value(bytes, offset)?;
        let (dlng, after_lng) = decode_value(bytes, after_lat)?;

        lat += dlat;
        lng += dlng;
        points.push(Coordinate::new(lat as f64 / PRECISION, lng as f64 / PRECISION));

        offset = after_lng;
    }

    Ok(points)
}

/// Encode a coordinate sequence as a polyline string.
///
/// Inverse of [`decode`] up to the 1e-5 degree precision of the
/// format: coordinates are rounded to five decimal places before
/// encoding.
pub fn encode(points: &[Coordinate]) -> String {
    let mut out = String::new();

    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for point in points {
        let lat = (point.latitude * PRECISION).round() as i64;
        let lng = (point.longitude * PRECISION).round() as i64;

        encode_value(lat - prev_lat, &mut out);
        encode_value(lng - prev_lng, &mut out);

        prev_lat = lat;
        prev_lng = lng;
    }

    out
}

/// Decode one zig-zag, chunked value starting at `start`.
///
/// Returns the signed delta and the offset just past its last chunk.
fn decode_value(bytes: &[u8], start: usize) -> Result<(i64, usize), MalformedGeometry> {
    let mut accumulated: u64 = 0;
    let mut shift: u32 = 0;
    let mut offset = start;

    loop {
        let Some(&byte) = bytes.get(offset) else {
            return Err(MalformedGeometry::UnterminatedChunk { offset: start });
        };

        if !(CHUNK_OFFSET..=b'~').contains(&byte) {
            return Err(MalformedGeometry::InvalidByte { byte, offset });
        }

        // A well-formed value fits in 64 bits; a run of continuation
        // chunks past that point can never terminate meaningfully.
        if shift >= u64::BITS {
            return Err(MalformedGeometry::UnterminatedChunk { offset: start });
        }

        let chunk = u64::from(byte - CHUNK_OFFSET);
        accumulated |= (chunk & (CONTINUATION_BIT - 1)) << shift;
        offset += 1;

        if chunk & CONTINUATION_BIT == 0 {
            break;
        }
        shift += 5;
    }

    // Zig-zag: even values are non-negative, odd values negative.
    let delta = if accumulated & 1 == 1 {
        !((accumulated >> 1) as i64)
    } else {
        (accumulated >> 1) as i64
    };

    Ok((delta, offset))
}

/// Encode one signed delta as zig-zag chunks appended to `out`.
fn encode_value(delta: i64, out: &mut String) {
    let mut value = ((delta << 1) ^ (delta >> 63)) as u64;

    loop {
        let mut chunk = value & (CONTINUATION_BIT - 1);
        value >>= 5;
        if value != 0 {
            chunk |= CONTINUATION_BIT;
        }
        out.push(char::from(chunk as u8 + CHUNK_OFFSET));
        if value == 0 {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The worked example from the polyline format documentation.
    const REFERENCE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    fn assert_close(point: Coordinate, lat: f64, lng: f64) {
        assert!(
            (point.latitude - lat).abs() < 1e-9 && (point.longitude - lng).abs() < 1e-9,
            "expected ({lat}, {lng}), got {point}"
        );
    }

    #[test]
    fn decode_reference_polyline() {
        let points = decode(REFERENCE).unwrap();
        assert_eq!(points.len(), 3);
        assert_close(points[0], 38.5, -120.2);
        assert_close(points[1], 40.7, -120.95);
        assert_close(points[2], 43.252, -126.453);
    }

    #[test]
    fn encode_reference_points() {
        let points = [
            Coordinate::new(38.5, -120.2),
            Coordinate::new(40.7, -120.95),
            Coordinate::new(43.252, -126.453),
        ];
        assert_eq!(encode(&points), REFERENCE);
    }

    #[test]
    fn empty_input_decodes_to_empty() {
        assert_eq!(decode("").unwrap(), Vec::new());
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn single_point() {
        let points = decode("_p~iF~ps|U").unwrap();
        assert_eq!(points.len(), 1);
        assert_close(points[0], 38.5, -120.2);
    }

    #[test]
    fn missing_longitude_is_unterminated() {
        // A complete latitude value with nothing after it.
        let err = decode("_p~iF").unwrap_err();
        assert_eq!(err, MalformedGeometry::UnterminatedChunk { offset: 5 });
    }

    #[test]
    fn truncated_chunk_is_unterminated() {
        // "_p~" are all continuation chunks; the closing byte is cut off.
        let err = decode("_p~").unwrap_err();
        assert_eq!(err, MalformedGeometry::UnterminatedChunk { offset: 0 });
    }

    #[test]
    fn byte_below_alphabet_is_invalid() {
        let err = decode(" ").unwrap_err();
        assert_eq!(
            err,
            MalformedGeometry::InvalidByte {
                byte: b' ',
                offset: 0
            }
        );
    }

    #[test]
    fn invalid_byte_mid_stream_reports_its_offset() {
        let err = decode("_p~iF!").unwrap_err();
        assert_eq!(
            err,
            MalformedGeometry::InvalidByte {
                byte: b'!',
                offset: 5
            }
        );
    }

    #[test]
    fn runaway_continuation_is_unterminated() {
        // 14 chunks with the continuation bit set exceed 64 bits of value.
        let runaway: String = std::iter::repeat('`').take(14).collect();
        let err = decode(&runaway).unwrap_err();
        assert_eq!(err, MalformedGeometry::UnterminatedChunk { offset: 0 });
    }

    #[test]
    fn error_display() {
        let err = MalformedGeometry::UnterminatedChunk { offset: 3 };
        assert_eq!(err.to_string(), "polyline chunk starting at byte 3 never terminates");

        let err = MalformedGeometry::InvalidByte {
            byte: b' ',
            offset: 0,
        };
        assert!(err.to_string().contains("0x20"));
    }
}
