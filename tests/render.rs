use sketchpad::Config;
use sketchpad::draw::{CairoCanvas, ImageFormat};
use sketchpad::input::{EventKind, PointerEvent, Sketch};

fn make_sketch(width: u32, height: u32) -> Sketch<CairoCanvas> {
    let canvas = CairoCanvas::new(width, height).unwrap();
    Sketch::new(canvas, &Config::default()).unwrap()
}

fn drag(sketch: &mut Sketch<CairoCanvas>, points: &[(f64, f64)]) {
    let (first, rest) = points.split_first().unwrap();
    sketch
        .dispatch_pointer_event(&PointerEvent::new(EventKind::MouseDown, first.0, first.1))
        .unwrap();
    for &(x, y) in rest {
        sketch
            .dispatch_pointer_event(&PointerEvent::new(EventKind::MouseMove, x, y))
            .unwrap();
    }
    let last = points[points.len() - 1];
    sketch
        .dispatch_pointer_event(&PointerEvent::new(EventKind::MouseUp, last.0, last.1))
        .unwrap();
}

fn alpha_at(sketch: &Sketch<CairoCanvas>, x: u32, y: u32) -> u8 {
    sketch.canvas().pixel(x, y).unwrap().unwrap()[0]
}

fn surface_is_blank(sketch: &Sketch<CairoCanvas>) -> bool {
    let canvas = sketch.canvas();
    (0..canvas.height()).all(|y| (0..canvas.width()).all(|x| alpha_at(sketch, x, y) == 0))
}

#[test]
fn marker_paints_in_current_color() {
    let mut sketch = make_sketch(80, 40);
    sketch.set_option("color", "#ff0000").unwrap();
    sketch.set_option("size", "6").unwrap();
    drag(&mut sketch, &[(10.0, 20.0), (70.0, 20.0)]);

    let [a, r, g, b] = sketch.canvas().pixel(40, 20).unwrap().unwrap();
    assert_eq!(a, 255);
    assert_eq!(r, 255);
    assert_eq!(g, 0);
    assert_eq!(b, 0);
    assert_eq!(alpha_at(&sketch, 40, 35), 0);
}

#[test]
fn undo_leaves_an_empty_surface() {
    let mut sketch = make_sketch(40, 40);
    drag(&mut sketch, &[(5.0, 5.0), (35.0, 35.0)]);
    assert!(!surface_is_blank(&sketch));

    sketch.undo().unwrap();
    assert!(surface_is_blank(&sketch));

    sketch.redo().unwrap();
    assert!(!surface_is_blank(&sketch));
}

#[test]
fn eraser_cuts_through_earlier_strokes_only() {
    let mut sketch = make_sketch(80, 60);
    sketch.set_option("size", "10").unwrap();
    drag(&mut sketch, &[(10.0, 20.0), (70.0, 20.0)]);

    sketch.set_option("tool", "eraser").unwrap();
    drag(&mut sketch, &[(40.0, 0.0), (40.0, 59.0)]);
    assert_eq!(alpha_at(&sketch, 40, 20), 0);
    assert_eq!(alpha_at(&sketch, 15, 20), 255);

    // Later strokes paint normally over the erased area.
    sketch.set_option("tool", "marker").unwrap();
    drag(&mut sketch, &[(30.0, 45.0), (50.0, 45.0)]);
    assert_eq!(alpha_at(&sketch, 40, 45), 255);
}

#[test]
fn rectangle_handles_negative_extents() {
    let mut sketch = make_sketch(60, 60);
    sketch.set_option("tool", "rectangle").unwrap();
    sketch.set_option("size", "4").unwrap();
    drag(&mut sketch, &[(50.0, 50.0), (30.0, 30.0), (10.0, 10.0)]);

    assert!(alpha_at(&sketch, 10, 30) > 0);
    assert!(alpha_at(&sketch, 50, 30) > 0);
    assert_eq!(alpha_at(&sketch, 30, 30), 0);
}

#[test]
fn circle_is_centred_on_press_point() {
    let mut sketch = make_sketch(100, 100);
    sketch.set_option("tool", "circle").unwrap();
    sketch.set_option("size", "4").unwrap();
    drag(&mut sketch, &[(50.0, 50.0), (70.0, 50.0)]);

    assert!(alpha_at(&sketch, 70, 50) > 0);
    assert!(alpha_at(&sketch, 30, 50) > 0);
    assert!(alpha_at(&sketch, 50, 30) > 0);
    assert_eq!(alpha_at(&sketch, 50, 50), 0);
}

#[test]
fn text_leaves_ink_near_its_anchor() {
    let mut sketch = make_sketch(200, 80);
    sketch.set_option("tool", "text").unwrap();
    sketch.set_option("text", "WWW").unwrap();
    sketch
        .dispatch_pointer_event(&PointerEvent::new(EventKind::MouseUp, 10.0, 50.0))
        .unwrap();

    assert_eq!(sketch.committed().len(), 1);
    assert!(!surface_is_blank(&sketch));
}

#[test]
fn exports_encode_real_images() {
    let mut sketch = make_sketch(16, 16);
    drag(&mut sketch, &[(2.0, 2.0), (14.0, 14.0)]);

    let png = sketch.export(ImageFormat::Png).unwrap();
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));

    let jpeg = sketch.export(ImageFormat::Jpeg).unwrap();
    assert!(jpeg.starts_with(&[0xFF, 0xD8, 0xFF]));

    let url = sketch.download("jpg").unwrap();
    assert!(url.starts_with("data:image/jpeg;base64,/9j/"));
}
