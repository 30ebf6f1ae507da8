//! Entity encoders: one fixed group-code schema per drawable primitive.
//!
//! Token order within each schema is part of the format contract for the
//! AC1009 revision and is reproduced exactly. Coordinates live in the 2D
//! plane; Z values are always synthesized as zero.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{DxfError, Result};
use crate::group::GroupWriter;
use crate::scalar::Scalar;

/// A single drawable primitive, encoded as one token block inside the
/// `ENTITIES` section.
///
/// Entities are transient: constructed, encoded, and discarded in a single
/// call. The `layer` is an opaque integer identifier and `width` is the
/// line thickness; neither needs to reference a declared resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Entity<T: Scalar> {
    Point {
        x: T,
        y: T,
        layer: i32,
    },
    Line {
        x1: T,
        y1: T,
        x2: T,
        y2: T,
        width: T,
        layer: i32,
    },
    Circle {
        radius: T,
        x: T,
        y: T,
        width: T,
        layer: i32,
    },
    /// Angles are in degrees, passed through verbatim: no normalization,
    /// and `start > end` is allowed.
    Arc {
        center_x: T,
        center_y: T,
        radius: T,
        start_angle_deg: T,
        end_angle_deg: T,
        width: T,
        layer: i32,
    },
    /// Heavyweight 2D polyline: a POLYLINE header followed by one VERTEX
    /// block per point and a SEQEND terminator.
    Polyline {
        xs: Vec<T>,
        ys: Vec<T>,
        width: T,
        layer: i32,
        closed: bool,
    },
    /// Lightweight polyline: vertex coordinates inline in a single block.
    LwPolyline {
        xs: Vec<T>,
        ys: Vec<T>,
        width: T,
        layer: i32,
        closed: bool,
    },
    /// The major axis is given as an endpoint offset from the center;
    /// `start_param` and `end_param` are parametric angles in radians.
    Ellipse {
        center_x: T,
        center_y: T,
        major_dx: T,
        major_dy: T,
        ratio: T,
        start_param: T,
        end_param: T,
        layer: i32,
    },
}

impl<T: Scalar> Entity<T> {
    /// Entity type name as emitted after group code 0.
    pub fn type_name(&self) -> &'static str {
        match self {
            Entity::Point { .. } => "POINT",
            Entity::Line { .. } => "LINE",
            Entity::Circle { .. } => "CIRCLE",
            Entity::Arc { .. } => "ARC",
            Entity::Polyline { .. } => "POLYLINE",
            Entity::LwPolyline { .. } => "LWPOLYLINE",
            Entity::Ellipse { .. } => "ELLIPSE",
        }
    }

    /// Check the parameters the format cannot express.
    ///
    /// Polyline vertex runs must pair up by index, so both runs need the
    /// same nonzero length. Geometric degeneracy (zero radius, coincident
    /// endpoints) is accepted untouched.
    pub fn validate(&self) -> Result<()> {
        match self {
            Entity::Polyline { xs, ys, .. } | Entity::LwPolyline { xs, ys, .. } => {
                check_vertex_runs(xs, ys)
            }
            _ => Ok(()),
        }
    }

    /// Encode this entity as its fixed group-code schema.
    ///
    /// Validation runs before the first token, so a failed call leaves the
    /// sink untouched.
    pub fn encode<W: Write>(&self, out: &mut GroupWriter<W>) -> Result<()> {
        self.validate()?;
        match self {
            Entity::Point { x, y, layer } => encode_point(out, *x, *y, *layer),
            Entity::Line {
                x1,
                y1,
                x2,
                y2,
                width,
                layer,
            } => encode_line(out, *x1, *y1, *x2, *y2, *width, *layer),
            Entity::Circle {
                radius,
                x,
                y,
                width,
                layer,
            } => encode_circle(out, *radius, *x, *y, *width, *layer),
            Entity::Arc {
                center_x,
                center_y,
                radius,
                start_angle_deg,
                end_angle_deg,
                width,
                layer,
            } => encode_arc(
                out,
                *center_x,
                *center_y,
                *radius,
                *start_angle_deg,
                *end_angle_deg,
                *width,
                *layer,
            ),
            Entity::Polyline {
                xs,
                ys,
                width,
                layer,
                closed,
            } => encode_polyline(out, xs, ys, *width, *layer, *closed),
            Entity::LwPolyline {
                xs,
                ys,
                width,
                layer,
                closed,
            } => encode_lwpolyline(out, xs, ys, *width, *layer, *closed),
            Entity::Ellipse {
                center_x,
                center_y,
                major_dx,
                major_dy,
                ratio,
                start_param,
                end_param,
                layer,
            } => encode_ellipse(
                out,
                *center_x,
                *center_y,
                *major_dx,
                *major_dy,
                *ratio,
                *start_param,
                *end_param,
                *layer,
            ),
        }
    }
}

fn check_vertex_runs<T: Scalar>(xs: &[T], ys: &[T]) -> Result<()> {
    if xs.len() != ys.len() {
        return Err(DxfError::VertexCountMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    if xs.is_empty() {
        return Err(DxfError::EmptyPolyline);
    }
    Ok(())
}

/// Polyline flags value (bit 0 = closed).
fn polyline_flags(closed: bool) -> i32 {
    if closed {
        1
    } else {
        0
    }
}

fn encode_point<T: Scalar, W: Write>(
    out: &mut GroupWriter<W>,
    x: T,
    y: T,
    layer: i32,
) -> Result<()> {
    out.pair(0, "POINT")?;
    out.pair(8, layer)?;
    out.pair(10, x)?;
    out.pair(20, y)?;
    out.pair(30, T::ZERO)?;
    Ok(())
}

fn encode_line<T: Scalar, W: Write>(
    out: &mut GroupWriter<W>,
    x1: T,
    y1: T,
    x2: T,
    y2: T,
    width: T,
    layer: i32,
) -> Result<()> {
    out.pair(0, "LINE")?;
    out.pair(8, layer)?;
    out.pair(39, width)?;
    // Start point
    out.pair(10, x1)?;
    out.pair(20, y1)?;
    out.pair(30, T::ZERO)?;
    // End point
    out.pair(11, x2)?;
    out.pair(21, y2)?;
    out.pair(31, T::ZERO)?;
    Ok(())
}

fn encode_circle<T: Scalar, W: Write>(
    out: &mut GroupWriter<W>,
    radius: T,
    x: T,
    y: T,
    width: T,
    layer: i32,
) -> Result<()> {
    out.pair(0, "CIRCLE")?;
    out.pair(8, layer)?;
    out.pair(39, width)?;
    // Center point in UCS coordinates
    out.pair(10, x)?;
    out.pair(20, y)?;
    out.pair(30, T::ZERO)?;
    out.pair(40, radius)?;
    Ok(())
}

#[allow(clippy::too_many_arguments)] // DXF arc requires all these parameters
fn encode_arc<T: Scalar, W: Write>(
    out: &mut GroupWriter<W>,
    center_x: T,
    center_y: T,
    radius: T,
    start_angle_deg: T,
    end_angle_deg: T,
    width: T,
    layer: i32,
) -> Result<()> {
    out.pair(0, "ARC")?;
    // Arcs carry subclass markers in this dialect
    out.pair(100, "AcDbEntity")?;
    out.pair(8, layer)?;
    out.pair(100, "AcDbCircle")?;
    out.pair(39, width)?;
    out.pair(10, center_x)?;
    out.pair(20, center_y)?;
    out.pair(30, T::ZERO)?;
    out.pair(40, radius)?;
    out.pair(100, "AcDbArc")?;
    out.pair(50, start_angle_deg)?;
    out.pair(51, end_angle_deg)?;
    Ok(())
}

fn encode_polyline<T: Scalar, W: Write>(
    out: &mut GroupWriter<W>,
    xs: &[T],
    ys: &[T],
    width: T,
    layer: i32,
    closed: bool,
) -> Result<()> {
    out.pair(0, "POLYLINE")?;
    out.pair(8, layer)?;
    out.pair(39, width)?;
    out.pair(100, "AcDb2dPolyline")?;
    // Obsolete "entities follow" flag, kept for old readers
    out.pair(66, 1)?;
    // The polyline's own point is always the origin; elevation 0
    out.pair(10, T::ZERO)?;
    out.pair(20, T::ZERO)?;
    out.pair(30, T::ZERO)?;
    out.pair(70, polyline_flags(closed))?;

    for (x, y) in xs.iter().zip(ys) {
        out.pair(0, "VERTEX")?;
        out.pair(8, layer)?;
        out.pair(100, "AcDb2dVertex")?;
        out.pair(10, *x)?;
        out.pair(20, *y)?;
        out.pair(30, T::ZERO)?;
    }

    out.pair(0, "SEQEND")?;
    Ok(())
}

fn encode_lwpolyline<T: Scalar, W: Write>(
    out: &mut GroupWriter<W>,
    xs: &[T],
    ys: &[T],
    width: T,
    layer: i32,
    closed: bool,
) -> Result<()> {
    out.pair(0, "LWPOLYLINE")?;
    out.pair(8, layer)?;
    out.pair(100, "AcDbPolyline")?;
    out.pair(90, xs.len())?;
    out.pair(70, polyline_flags(closed))?;
    // Constant width across all segments
    out.pair(43, width)?;

    for (x, y) in xs.iter().zip(ys) {
        out.pair(10, *x)?;
        out.pair(20, *y)?;
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn encode_ellipse<T: Scalar, W: Write>(
    out: &mut GroupWriter<W>,
    center_x: T,
    center_y: T,
    major_dx: T,
    major_dy: T,
    ratio: T,
    start_param: T,
    end_param: T,
    layer: i32,
) -> Result<()> {
    out.pair(0, "ELLIPSE")?;
    out.pair(100, "AcDbEntity")?;
    out.pair(8, layer)?;
    out.pair(100, "AcDbEllipse")?;
    // Center
    out.pair(10, center_x)?;
    out.pair(20, center_y)?;
    out.pair(30, T::ZERO)?;
    // Endpoint of the major axis, relative to the center
    out.pair(11, major_dx)?;
    out.pair(21, major_dy)?;
    out.pair(31, T::ZERO)?;
    // Minor/major axis ratio, then the parametric angle range
    out.pair(40, ratio)?;
    out.pair(41, start_param)?;
    out.pair(42, end_param)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(entity: &Entity<f64>) -> Vec<String> {
        let mut out = GroupWriter::new(Vec::new());
        entity.encode(&mut out).unwrap();
        String::from_utf8(out.into_inner())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_point_schema() {
        let tokens = encode(&Entity::Point {
            x: 5.0,
            y: 7.5,
            layer: 3,
        });
        assert_eq!(
            tokens,
            ["0", "POINT", "8", "3", "10", "5", "20", "7.5", "30", "0"]
        );
    }

    #[test]
    fn test_arc_schema_carries_subclass_markers() {
        let tokens = encode(&Entity::Arc {
            center_x: 100.0,
            center_y: 75.0,
            radius: 65.0,
            start_angle_deg: 180.0,
            end_angle_deg: 360.0,
            width: 0.0,
            layer: 0,
        });
        assert_eq!(
            tokens,
            [
                "0", "ARC", "100", "AcDbEntity", "8", "0", "100", "AcDbCircle", "39", "0", "10",
                "100", "20", "75", "30", "0", "40", "65", "100", "AcDbArc", "50", "180", "51",
                "360"
            ]
        );
    }

    #[test]
    fn test_arc_angles_pass_through_unnormalized() {
        let tokens = encode(&Entity::Arc {
            center_x: 0.0,
            center_y: 0.0,
            radius: 1.0,
            start_angle_deg: 400.0,
            end_angle_deg: -90.0,
            width: 0.0,
            layer: 0,
        });
        assert!(tokens.contains(&"400".to_string()));
        assert!(tokens.contains(&"-90".to_string()));
    }

    #[test]
    fn test_lwpolyline_schema() {
        let tokens = encode(&Entity::LwPolyline {
            xs: vec![0.0, 10.0],
            ys: vec![0.0, 5.0],
            width: 1.0,
            layer: 0,
            closed: false,
        });
        assert_eq!(
            tokens,
            [
                "0",
                "LWPOLYLINE",
                "8",
                "0",
                "100",
                "AcDbPolyline",
                "90",
                "2",
                "70",
                "0",
                "43",
                "1",
                "10",
                "0",
                "20",
                "0",
                "10",
                "10",
                "20",
                "5"
            ]
        );
    }

    #[test]
    fn test_ellipse_schema() {
        let tokens = encode(&Entity::Ellipse {
            center_x: 1.0,
            center_y: 2.0,
            major_dx: 10.0,
            major_dy: 0.0,
            ratio: 0.5,
            start_param: 0.0,
            end_param: 6.5,
            layer: 4,
        });
        assert_eq!(
            tokens,
            [
                "0",
                "ELLIPSE",
                "100",
                "AcDbEntity",
                "8",
                "4",
                "100",
                "AcDbEllipse",
                "10",
                "1",
                "20",
                "2",
                "30",
                "0",
                "11",
                "10",
                "21",
                "0",
                "31",
                "0",
                "40",
                "0.5",
                "41",
                "0",
                "42",
                "6.5"
            ]
        );
    }

    #[test]
    fn test_vertex_run_mismatch_writes_nothing() {
        let entity = Entity::Polyline {
            xs: vec![1.0, 2.0],
            ys: vec![1.0],
            width: 0.0,
            layer: 0,
            closed: true,
        };
        let mut out = GroupWriter::new(Vec::new());
        let err = entity.encode(&mut out).unwrap_err();
        assert!(matches!(
            err,
            DxfError::VertexCountMismatch { xs: 2, ys: 1 }
        ));
        assert!(out.into_inner().is_empty());
    }

    #[test]
    fn test_empty_vertex_runs_rejected() {
        let entity = Entity::LwPolyline {
            xs: vec![],
            ys: vec![],
            width: 0.0,
            layer: 0,
            closed: false,
        };
        assert!(matches!(
            entity.validate().unwrap_err(),
            DxfError::EmptyPolyline
        ));
    }

    #[test]
    fn test_open_polyline_clears_closed_flag() {
        let tokens = encode(&Entity::Polyline {
            xs: vec![0.0, 1.0],
            ys: vec![0.0, 1.0],
            width: 0.0,
            layer: 0,
            closed: false,
        });
        let flag_pos = tokens.iter().position(|t| t == "70").unwrap();
        assert_eq!(tokens[flag_pos + 1], "0");
    }
}
