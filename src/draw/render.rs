//! Cairo-based stroke rendering.

use super::color::Color;
use cairo::{Context, LineCap, LineJoin, Operator};

/// Resolved paint settings for one stroke.
///
/// Built from the tool state at the moment a segment is rendered, see
/// [`crate::input::Tool::stroke_style`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Line width in pixels
    pub width: f64,
    /// Source color, opacity already applied
    pub color: Color,
    /// Compositing operator (`Over` for ink, `DestOut` for erasing)
    pub operator: Operator,
}

impl StrokeStyle {
    /// Returns true if this style removes pixels instead of painting them.
    pub fn erases(&self) -> bool {
        self.operator == Operator::DestOut
    }
}

/// Renders a freehand polyline through `points` as a single stroke.
///
/// Uses round caps and joins so the line looks like a pen trace. Rendering
/// the whole path at once keeps translucent strokes uniform where segments
/// overlap. A path with a single point produces no pixels.
pub fn render_stroke(
    ctx: &Context,
    points: &[(f64, f64)],
    style: &StrokeStyle,
) -> Result<(), cairo::Error> {
    let Some((&(x0, y0), rest)) = points.split_first() else {
        return Ok(());
    };

    ctx.save()?;
    ctx.set_operator(style.operator);
    let Color { r, g, b, a } = style.color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.set_line_width(style.width);
    ctx.set_line_cap(LineCap::Round);
    ctx.set_line_join(LineJoin::Round);

    ctx.move_to(x0, y0);
    for &(x, y) in rest {
        ctx.line_to(x, y);
    }

    let stroked = ctx.stroke();
    ctx.restore()?;
    stroked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, RED, Raster, Viewport};

    fn ink(color: Color, width: f64) -> StrokeStyle {
        StrokeStyle {
            width,
            color,
            operator: Operator::Over,
        }
    }

    #[test]
    fn stroke_paints_along_path() {
        let mut raster = Raster::new(Viewport::new(40, 40)).unwrap();
        {
            let ctx = raster.context().unwrap();
            render_stroke(&ctx, &[(5.0, 20.0), (35.0, 20.0)], &ink(RED, 6.0)).unwrap();
        }
        assert_eq!(raster.pixel(20, 20).unwrap(), Some([255, 0, 0, 255]));
        assert_eq!(raster.pixel(20, 30).unwrap(), Some([0, 0, 0, 0]));
    }

    #[test]
    fn single_point_draws_nothing() {
        let mut raster = Raster::new(Viewport::new(10, 10)).unwrap();
        {
            let ctx = raster.context().unwrap();
            render_stroke(&ctx, &[(5.0, 5.0)], &ink(BLACK, 4.0)).unwrap();
            render_stroke(&ctx, &[], &ink(BLACK, 4.0)).unwrap();
        }
        assert_eq!(raster.pixel(5, 5).unwrap(), Some([0, 0, 0, 0]));
    }

    #[test]
    fn dest_out_removes_ink() {
        let mut raster = Raster::new(Viewport::new(40, 40)).unwrap();
        {
            let ctx = raster.context().unwrap();
            render_stroke(&ctx, &[(0.0, 20.0), (40.0, 20.0)], &ink(RED, 10.0)).unwrap();
            let eraser = StrokeStyle {
                width: 10.0,
                color: BLACK,
                operator: Operator::DestOut,
            };
            assert!(eraser.erases());
            render_stroke(&ctx, &[(0.0, 20.0), (40.0, 20.0)], &eraser).unwrap();
        }
        assert_eq!(raster.pixel(20, 20).unwrap(), Some([0, 0, 0, 0]));
    }
}
