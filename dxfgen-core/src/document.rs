//! Document session: lifecycle state and the fixed header/footer that
//! bracket a well-formed DXF file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::marker::PhantomData;
use std::path::Path;

use tracing::{debug, warn};

use crate::entity::Entity;
use crate::error::{DxfError, Result};
use crate::group::GroupWriter;
use crate::scalar::Scalar;

/// Format revision identifier written to `$ACADVER` (R11/R12). Readers
/// targeting that revision match on this string verbatim.
pub const ACAD_VERSION: &str = "AC1009";

/// A DXF document session.
///
/// Owns exactly one output sink, opened by [`begin`](Document::begin) and
/// consumed by [`end`](Document::end). Entity operations are only valid
/// while the session is open; calling them on a closed session is a
/// reported error. Dropping an open session writes the footer and releases
/// the sink, so the produced file is well-formed on every exit path.
///
/// The scalar type `T` is fixed for the session's lifetime. The sink type
/// defaults to a buffered file for the path-based API; tests and embedding
/// callers can supply any [`Write`] sink via
/// [`begin_writer`](Document::begin_writer).
pub struct Document<T: Scalar, W: Write = BufWriter<File>> {
    sink: Option<GroupWriter<W>>,
    _scalar: PhantomData<T>,
}

impl<T: Scalar> Document<T> {
    /// Open a session writing to a new file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut doc = Self::new();
        doc.begin(path)?;
        Ok(doc)
    }

    /// Open the output file and write the document header.
    ///
    /// Idempotent: on an already-open session this is a no-op and no second
    /// sink is opened. A failure while writing the header leaves the
    /// session closed.
    pub fn begin<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        if self.is_open() {
            return Ok(());
        }
        let file = File::create(path)?;
        self.attach(BufWriter::new(file))
    }
}

impl<T: Scalar, W: Write> Document<T, W> {
    /// Create a session with no output attached yet.
    pub fn new() -> Self {
        Self {
            sink: None,
            _scalar: PhantomData,
        }
    }

    /// Attach an already-open sink and write the document header.
    ///
    /// Generic counterpart of [`begin`](Document::begin); same idempotence.
    pub fn begin_writer(&mut self, sink: W) -> Result<()> {
        if self.is_open() {
            return Ok(());
        }
        self.attach(sink)
    }

    pub fn is_open(&self) -> bool {
        self.sink.is_some()
    }

    fn attach(&mut self, sink: W) -> Result<()> {
        let mut out = GroupWriter::new(sink);

        // Header section: format revision and world-space insertion base
        out.pair(0, "SECTION")?;
        out.pair(2, "HEADER")?;
        out.pair(9, "$ACADVER")?;
        out.pair(1, ACAD_VERSION)?;
        out.pair(9, "$INSBASE")?;
        out.pair(10, T::ZERO)?;
        out.pair(20, T::ZERO)?;
        out.pair(30, T::ZERO)?;
        out.pair(0, "ENDSEC")?;

        // Entities section stays open until end()
        out.pair(0, "SECTION")?;
        out.pair(2, "ENTITIES")?;

        self.sink = Some(out);
        debug!("dxf session opened");
        Ok(())
    }

    /// Write the entities terminator and document footer, flush, and
    /// release the sink.
    ///
    /// Idempotent: on an already-closed session this is a no-op. The sink
    /// is consumed permanently; the session cannot be reopened.
    pub fn end(&mut self) -> Result<()> {
        let Some(mut out) = self.sink.take() else {
            return Ok(());
        };
        out.pair(0, "ENDSEC")?;
        out.pair(0, "EOF")?;
        out.flush()?;
        debug!("dxf session closed");
        Ok(())
    }

    /// Encode one entity into the open session.
    pub fn write_entity(&mut self, entity: &Entity<T>) -> Result<()> {
        let out = self.sink.as_mut().ok_or(DxfError::SessionClosed)?;
        entity.encode(out)
    }

    /// Plot a point.
    pub fn point(&mut self, x: T, y: T, layer: i32) -> Result<()> {
        self.write_entity(&Entity::Point { x, y, layer })
    }

    /// Plot a line segment.
    pub fn line(&mut self, x1: T, y1: T, x2: T, y2: T, width: T, layer: i32) -> Result<()> {
        self.write_entity(&Entity::Line {
            x1,
            y1,
            x2,
            y2,
            width,
            layer,
        })
    }

    /// Plot a circle centered at (x, y).
    pub fn circle(&mut self, radius: T, x: T, y: T, width: T, layer: i32) -> Result<()> {
        self.write_entity(&Entity::Circle {
            radius,
            x,
            y,
            width,
            layer,
        })
    }

    /// Plot a circular arc. Angles are degrees and are passed through
    /// verbatim, including `start > end`.
    #[allow(clippy::too_many_arguments)] // DXF arc requires all these parameters
    pub fn arc(
        &mut self,
        center_x: T,
        center_y: T,
        radius: T,
        start_angle_deg: T,
        end_angle_deg: T,
        width: T,
        layer: i32,
    ) -> Result<()> {
        self.write_entity(&Entity::Arc {
            center_x,
            center_y,
            radius,
            start_angle_deg,
            end_angle_deg,
            width,
            layer,
        })
    }

    /// Plot a 2D polyline from paired x/y vertex runs.
    ///
    /// Fails without writing anything when the runs differ in length or
    /// are empty.
    pub fn polyline(&mut self, xs: &[T], ys: &[T], width: T, layer: i32, closed: bool) -> Result<()> {
        self.write_entity(&Entity::Polyline {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            width,
            layer,
            closed,
        })
    }

    /// Plot a lightweight polyline. Same vertex-run validation as
    /// [`polyline`](Document::polyline).
    pub fn lwpolyline(
        &mut self,
        xs: &[T],
        ys: &[T],
        width: T,
        layer: i32,
        closed: bool,
    ) -> Result<()> {
        self.write_entity(&Entity::LwPolyline {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            width,
            layer,
            closed,
        })
    }

    /// Plot an ellipse. The major axis is an endpoint offset from the
    /// center; parameters are radians.
    #[allow(clippy::too_many_arguments)]
    pub fn ellipse(
        &mut self,
        center_x: T,
        center_y: T,
        major_dx: T,
        major_dy: T,
        ratio: T,
        start_param: T,
        end_param: T,
        layer: i32,
    ) -> Result<()> {
        self.write_entity(&Entity::Ellipse {
            center_x,
            center_y,
            major_dx,
            major_dy,
            ratio,
            start_param,
            end_param,
            layer,
        })
    }
}

impl<T: Scalar, W: Write> Default for Document<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, W: Write> Drop for Document<T, W> {
    fn drop(&mut self) {
        if let Err(err) = self.end() {
            warn!("failed to finalize dxf document: {}", err);
        }
    }
}
