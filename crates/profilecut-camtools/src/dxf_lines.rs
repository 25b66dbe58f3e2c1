//! DXF Line Extraction
//!
//! Pulls `LINE` entities out of DXF text. The input is read as a stream of
//! group-code/value line pairs; only the entity type marker and the six
//! endpoint coordinate codes are interpreted, everything else is skipped.
//!
//! Group codes are matched exactly on the trimmed line, so codes such as
//! `110` or `100` never masquerade as `11` or `10`, and a value line is never
//! re-read as a code.

use profilecut_core::{PathError, PathResult, Point, Segment};
use std::io::BufRead;
use tracing::{debug, warn};

/// Entity type value that opens a line record
const LINE_MARKER: &str = "LINE";

/// Group code whose value names the next entity type
const ENTITY_TYPE_CODE: i32 = 0;

/// Endpoint coordinate group codes of a DXF `LINE` entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupCode {
    StartX,
    StartY,
    StartZ,
    EndX,
    EndY,
    EndZ,
}

impl GroupCode {
    /// Map a numeric group code to a coordinate slot
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            10 => Some(Self::StartX),
            20 => Some(Self::StartY),
            30 => Some(Self::StartZ),
            11 => Some(Self::EndX),
            21 => Some(Self::EndY),
            31 => Some(Self::EndZ),
            _ => None,
        }
    }

    /// The numeric DXF group code
    pub fn code(&self) -> u16 {
        match self {
            Self::StartX => 10,
            Self::StartY => 20,
            Self::StartZ => 30,
            Self::EndX => 11,
            Self::EndY => 21,
            Self::EndZ => 31,
        }
    }
}

/// Incrementally filled line entity
///
/// Each coordinate slot is filled independently as its group code is seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentBuilder {
    start: [Option<f64>; 3],
    end: [Option<f64>; 3],
}

impl SegmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a coordinate value, replacing any earlier value for the slot
    pub fn set(&mut self, code: GroupCode, value: f64) {
        let slot = match code {
            GroupCode::StartX => &mut self.start[0],
            GroupCode::StartY => &mut self.start[1],
            GroupCode::StartZ => &mut self.start[2],
            GroupCode::EndX => &mut self.end[0],
            GroupCode::EndY => &mut self.end[1],
            GroupCode::EndZ => &mut self.end[2],
        };
        *slot = Some(value);
    }

    /// Whether all six coordinates are present
    pub fn is_complete(&self) -> bool {
        self.start.iter().chain(self.end.iter()).all(Option::is_some)
    }

    /// Whether no coordinate has been set yet
    pub fn is_empty(&self) -> bool {
        self.start.iter().chain(self.end.iter()).all(Option::is_none)
    }

    /// The finished segment, once complete
    pub fn build(&self) -> Option<Segment> {
        match (self.start, self.end) {
            ([Some(sx), Some(sy), Some(sz)], [Some(ex), Some(ey), Some(ez)]) => Some(
                Segment::new(Point::new(sx, sy, sz), Point::new(ex, ey, ez)),
            ),
            _ => None,
        }
    }
}

/// Extracts line segments from DXF text
#[derive(Debug)]
pub struct DxfLineExtractor;

impl DxfLineExtractor {
    /// Extract every complete `LINE` entity from a DXF string
    pub fn extract_str(text: &str) -> PathResult<Vec<Segment>> {
        let lines: Vec<&str> = text.lines().collect();
        Self::extract(&lines)
    }

    /// Extract every complete `LINE` entity from a buffered reader
    ///
    /// Lines are decoded lossily. Only ASCII codes and numbers are
    /// interpreted, so codepage text in names or headers does not matter.
    pub fn extract_reader<R: BufRead>(mut reader: R) -> PathResult<Vec<Segment>> {
        let mut lines = Vec::new();
        let mut buf = Vec::new();

        while reader.read_until(b'\n', &mut buf)? > 0 {
            let line = String::from_utf8_lossy(&buf);
            lines.push(line.trim_end_matches(['\n', '\r']).to_string());
            buf.clear();
        }

        Self::extract(&lines)
    }

    /// Extract every complete `LINE` entity, in file order
    ///
    /// A segment is emitted the moment its sixth coordinate arrives. Records
    /// that end before all six coordinates are seen are dropped with a warning.
    pub fn extract<S: AsRef<str>>(lines: &[S]) -> PathResult<Vec<Segment>> {
        let mut segments = Vec::new();
        let mut current: Option<SegmentBuilder> = None;
        let mut idx = 0;

        while idx < lines.len() {
            let text = lines[idx].as_ref().trim();

            let Ok(code) = text.parse::<i32>() else {
                // Stray text outside the pair structure; a bare marker still opens a record.
                if text == LINE_MARKER {
                    Self::discard_partial(current.take(), idx);
                    current = Some(SegmentBuilder::new());
                }
                idx += 1;
                continue;
            };

            let value_idx = idx + 1;

            if code == ENTITY_TYPE_CODE {
                Self::discard_partial(current.take(), idx);
                if lines
                    .get(value_idx)
                    .is_some_and(|value| value.as_ref().trim() == LINE_MARKER)
                {
                    current = Some(SegmentBuilder::new());
                }
            } else if let (Some(group), Some(builder)) =
                (GroupCode::from_code(code), current.as_mut())
            {
                let raw = lines
                    .get(value_idx)
                    .ok_or(PathError::MissingValue {
                        line: idx + 1,
                        code: group.code(),
                    })?
                    .as_ref();
                builder.set(group, Self::parse_value(raw, value_idx + 1)?);

                if let Some(segment) = builder.build() {
                    debug!(index = segments.len(), %segment, "Extracted line segment");
                    segments.push(segment);
                    current = None;
                }
            }

            idx = value_idx + 1;
        }

        Self::discard_partial(current, lines.len());

        Ok(segments)
    }

    fn parse_value(raw: &str, line: usize) -> PathResult<f64> {
        let trimmed = raw.trim();
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(PathError::InvalidNumber {
                line,
                value: trimmed.to_string(),
            }),
        }
    }

    fn discard_partial(builder: Option<SegmentBuilder>, idx: usize) {
        if let Some(builder) = builder {
            if !builder.is_empty() {
                warn!(line = idx + 1, "Discarding incomplete LINE entity");
            }
        }
    }
}
