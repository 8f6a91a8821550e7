use cairo::ImageSurface;
use pagescribe::config::Config;
use pagescribe::draw::{Color, Viewport};
use pagescribe::input::{PointerEvent, Tool};
use pagescribe::toolbar::Toolbar;
use pagescribe::{DrawingSurface, PageElements};

/// Toolbar that keeps every indicator change in order.
#[derive(Default)]
struct RecordingToolbar {
    calls: Vec<String>,
}

impl Toolbar for RecordingToolbar {
    fn set_toolbar_visible(&mut self, visible: bool) {
        self.calls.push(format!("toolbar:{visible}"));
    }

    fn set_surface_active(&mut self, active: bool) {
        self.calls.push(format!("surface:{active}"));
    }

    fn set_toggle_active(&mut self, active: bool) {
        self.calls.push(format!("toggle:{active}"));
    }

    fn mark_tool(&mut self, tool: Tool) {
        self.calls.push(format!("tool:{tool}"));
    }

    fn mark_color(&mut self, color: Color) {
        self.calls.push(format!("color:{}", color.to_hex()));
    }
}

fn active_surface() -> DrawingSurface<RecordingToolbar> {
    let page = PageElements::complete(Viewport::new(120, 80), RecordingToolbar::default());
    let mut surface = DrawingSurface::attach(page, &Config::default()).unwrap();
    surface.toggle();
    surface
}

fn stroke(surface: &mut DrawingSurface<RecordingToolbar>, from: (f64, f64), to: (f64, f64)) {
    surface.pointer_down(&PointerEvent::mouse(from.0, from.1));
    surface.pointer_move(&PointerEvent::mouse(to.0, to.1));
    surface.pointer_up();
}

fn png_pixel(bytes: &[u8], x: usize, y: usize) -> [u8; 4] {
    let mut image = ImageSurface::create_from_png(&mut &bytes[..]).unwrap();
    let stride = image.stride() as usize;
    let data = image.data().unwrap();
    let offset = y * stride + x * 4;
    let word = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    word.to_be_bytes()
}

#[test]
fn attach_syncs_indicators_before_any_input() {
    let page = PageElements::complete(Viewport::new(10, 10), RecordingToolbar::default());
    let surface = DrawingSurface::attach(page, &Config::default()).unwrap();

    assert_eq!(
        surface.toolbar().calls,
        vec![
            "toolbar:false",
            "surface:false",
            "toggle:false",
            "tool:pen",
            "color:#000000"
        ]
    );
}

#[test]
fn color_while_erasing_marks_pen_on_toolbar() {
    let mut surface = active_surface();
    surface.select_tool("eraser");
    surface.select_color("#00ff00");

    assert_eq!(surface.tool_state().tool, Tool::Pen);
    let calls = &surface.toolbar().calls;
    let tail: Vec<&str> = calls[calls.len() - 3..].iter().map(String::as_str).collect();
    assert_eq!(tail, ["tool:eraser", "color:#00ff00", "tool:pen"]);
}

#[test]
fn clear_then_undo_restores_both_strokes() {
    let mut surface = active_surface();
    stroke(&mut surface, (10.0, 20.0), (110.0, 20.0));
    stroke(&mut surface, (10.0, 60.0), (110.0, 60.0));
    let before_clear = surface.capture().unwrap();

    surface.clear();
    assert_eq!(surface.pixel(60, 20).unwrap().unwrap()[3], 0);

    assert!(surface.undo());
    let after_undo = surface.capture().unwrap();
    assert!(after_undo.same_pixels(&before_clear).unwrap());
}

#[test]
fn eraser_leaves_transparent_pixels() {
    let mut surface = active_surface();
    surface.select_color("white");
    surface.set_size("12");
    stroke(&mut surface, (10.0, 40.0), (110.0, 40.0));
    assert_eq!(surface.pixel(60, 40).unwrap(), Some([255, 255, 255, 255]));

    surface.select_tool("eraser");
    stroke(&mut surface, (10.0, 40.0), (110.0, 40.0));
    assert_eq!(surface.pixel(60, 40).unwrap(), Some([0, 0, 0, 0]));
}

#[test]
fn exported_png_matches_raster() {
    let mut surface = active_surface();
    surface.select_color("#0000ff");
    stroke(&mut surface, (10.0, 40.0), (110.0, 40.0));

    let mut bytes = Vec::new();
    surface.raster().write_png(&mut bytes).unwrap();

    // ARGB32 in native order: alpha, red, green, blue
    assert_eq!(png_pixel(&bytes, 60, 40), [255, 0, 0, 255]);
    assert_eq!(png_pixel(&bytes, 60, 5), [0, 0, 0, 0]);
}
