use crate::error::{CamToolError, CamToolResult, ParameterError, ParameterResult};
use crate::stats::PathSummary;
use profilecut_core::{
    Segment, DEFAULT_CLEARANCE_HEIGHT, DEFAULT_FEED_RATE, DEFAULT_LAYER_COUNT, DEFAULT_TOLERANCE,
    DEFAULT_TOTAL_DEPTH,
};
use serde::{Deserialize, Serialize};

/// Parameters for the layered profile cut
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileCutParameters {
    /// Depth added by each layer
    pub layer_depth: f64,
    /// Number of passes around the profile
    pub layer_count: u32,
    /// Feed rate for XY moves; plunges use half of it
    pub feed_rate: f64,
    /// Z the tool retracts to after the last layer
    pub clearance_height: f64,
    /// Prefix the program with `;` comment lines describing the job
    pub header_comments: bool,
}

impl Default for ProfileCutParameters {
    fn default() -> Self {
        Self::from_total_depth(DEFAULT_TOTAL_DEPTH, DEFAULT_LAYER_COUNT, DEFAULT_FEED_RATE)
    }
}

impl ProfileCutParameters {
    /// Split `total_depth` into `layer_count` equal layers
    pub fn from_total_depth(total_depth: f64, layer_count: u32, feed_rate: f64) -> Self {
        Self {
            layer_depth: total_depth / f64::from(layer_count.max(1)),
            layer_count,
            feed_rate,
            clearance_height: DEFAULT_CLEARANCE_HEIGHT,
            header_comments: false,
        }
    }

    pub fn validate(&self) -> ParameterResult<()> {
        if self.layer_count == 0 {
            return Err(ParameterError::InvalidValue {
                name: "layer_count".to_string(),
                reason: "at least one layer is required".to_string(),
            });
        }
        for (name, value) in [("layer_depth", self.layer_depth), ("feed_rate", self.feed_rate)] {
            if !value.is_finite() {
                return Err(ParameterError::InvalidValue {
                    name: name.to_string(),
                    reason: format!("{value} is not a finite number"),
                });
            }
            if value <= 0.0 {
                return Err(ParameterError::NotPositive {
                    name: name.to_string(),
                    value,
                });
            }
        }
        if !self.clearance_height.is_finite() {
            return Err(ParameterError::InvalidValue {
                name: "clearance_height".to_string(),
                reason: format!("{} is not a finite number", self.clearance_height),
            });
        }
        Ok(())
    }
}

/// Generator for layered profile G-Code
pub struct ProfileCutGenerator {
    params: ProfileCutParameters,
}

impl ProfileCutGenerator {
    pub fn new(params: ProfileCutParameters) -> Self {
        Self { params }
    }

    /// Generate one command per line for an already ordered path
    ///
    /// Connectivity is not checked here; `segments` is traced as given.
    pub fn generate(&self, segments: &[Segment]) -> CamToolResult<Vec<String>> {
        self.params.validate()?;
        let first = segments
            .first()
            .ok_or_else(|| CamToolError::GenerationFailed("no segments to cut".to_string()))?;
        let p = &self.params;

        let mut gcode =
            Vec::with_capacity(3 + p.layer_count as usize * (segments.len() + 2));

        if p.header_comments {
            self.push_header(&mut gcode, segments);
        }

        gcode.push("G90".to_string());

        for layer in 1..=p.layer_count {
            let depth = p.layer_depth * f64::from(layer);
            gcode.push(format!("G1 Z-{:.3} F{:.3}", depth, p.feed_rate / 2.0));
            gcode.push(format!(
                "G1 X{:.3} Y{:.3} F{:.3}",
                first.start.x, first.start.y, p.feed_rate
            ));
            for segment in segments {
                gcode.push(format!(
                    "G1 X{:.3} Y{:.3} F{:.3}",
                    segment.end.x, segment.end.y, p.feed_rate
                ));
            }
        }

        // Raise the tool above the surface.
        gcode.push(format!("G1 Z{:.3} F{:.3}", p.clearance_height, p.feed_rate));
        gcode.push("M2".to_string());

        Ok(gcode)
    }

    /// Generate the whole program as newline-terminated text
    pub fn generate_program(&self, segments: &[Segment]) -> CamToolResult<String> {
        let mut program = self.generate(segments)?.join("\n");
        program.push('\n');
        Ok(program)
    }

    fn push_header(&self, gcode: &mut Vec<String>, segments: &[Segment]) {
        let p = &self.params;
        let summary = PathSummary::from_segments(segments, DEFAULT_TOLERANCE);

        gcode.push("; Profile Cut Toolpath".to_string());
        gcode.push(format!("; Segments: {}", summary.segment_count));
        gcode.push(format!("; Path length: {:.3}", summary.length));
        if let Some(bounds) = summary.bounds {
            gcode.push(format!(
                "; Extent: {:.3} x {:.3}",
                bounds.width(),
                bounds.height()
            ));
        }
        gcode.push(format!(
            "; Layers: {} x {:.3} (total {:.3})",
            p.layer_count,
            p.layer_depth,
            p.layer_depth * f64::from(p.layer_count)
        ));
        gcode.push(format!("; Feed rate: {:.3}", p.feed_rate));
    }
}
