use super::*;
use crate::action::{ActionLog, LineStyle, Point};
use crate::config::Config;
use crate::draw::{BLACK, Canvas, Color, CompositeMode, DrawCommand, RED, RecordingCanvas};
use crate::error::SketchError;
use crate::input::{EventKind, PointerEvent, RawPointerEvent, Sketch, TouchPoint};

fn create_test_sketch() -> Sketch<RecordingCanvas> {
    Sketch::new(RecordingCanvas::new(100, 100), &Config::default()).unwrap()
}

fn create_test_state(tool: &str) -> SketchState {
    SketchState::new(
        tool.to_string(),
        BLACK,
        5.0,
        LineStyle::Solid,
        ActionLog::new(),
    )
}

fn send(sketch: &mut Sketch<RecordingCanvas>, kind: EventKind, x: f64, y: f64) {
    sketch
        .dispatch_pointer_event(&PointerEvent::new(kind, x, y))
        .unwrap();
}

fn drag(sketch: &mut Sketch<RecordingCanvas>, points: &[(f64, f64)]) {
    let Some((&first, rest)) = points.split_first() else {
        return;
    };
    send(sketch, EventKind::MouseDown, first.0, first.1);
    for &(x, y) in rest {
        send(sketch, EventKind::MouseMove, x, y);
    }
    let last = points[points.len() - 1];
    send(sketch, EventKind::MouseUp, last.0, last.1);
}

fn points_of(sketch: &Sketch<RecordingCanvas>, index: usize) -> Vec<(f64, f64)> {
    sketch.committed()[index]
        .points()
        .map(|point| (point.x, point.y))
        .collect()
}

#[test]
fn test_marker_end_to_end() {
    let mut sketch = create_test_sketch();
    sketch.set_option("tool", "marker").unwrap();
    sketch.set_option("color", "#f00").unwrap();
    sketch.set_option("size", "3").unwrap();
    sketch.set_option("style", "solid").unwrap();

    send(&mut sketch, EventKind::MouseDown, 10.0, 10.0);
    send(&mut sketch, EventKind::MouseMove, 20.0, 10.0);
    send(&mut sketch, EventKind::MouseUp, 20.0, 10.0);

    assert_eq!(sketch.committed().len(), 1);
    let action = &sketch.committed()[0];
    assert_eq!(action.tool, "marker");
    assert_eq!(action.color, RED);
    assert_eq!(action.size, 3.0);
    assert_eq!(action.style, LineStyle::Solid);
    assert_eq!(points_of(&sketch, 0), vec![(10.0, 10.0), (20.0, 10.0)]);
    assert!(sketch.draft().is_none());
    assert!(!sketch.canvas().is_blank());

    sketch.undo().unwrap();
    assert!(sketch.committed().is_empty());
    assert!(sketch.canvas().is_blank());
}

#[test]
fn test_color_is_bound_at_stroke_start() {
    let mut sketch = create_test_sketch();
    sketch.set_option("color", "red").unwrap();

    send(&mut sketch, EventKind::MouseDown, 1.0, 1.0);
    send(&mut sketch, EventKind::MouseMove, 5.0, 5.0);
    sketch.set_option("color", "blue").unwrap();
    send(&mut sketch, EventKind::MouseMove, 9.0, 9.0);
    send(&mut sketch, EventKind::MouseUp, 9.0, 9.0);

    assert_eq!(sketch.committed()[0].color, RED);
    assert_eq!(sketch.option_value("color").unwrap(), "#0000ff");
}

#[test]
fn test_rectangle_keeps_first_and_latest_point() {
    let mut sketch = create_test_sketch();
    sketch.set_option("tool", "rectangle").unwrap();

    send(&mut sketch, EventKind::MouseDown, 1.0, 1.0);
    send(&mut sketch, EventKind::MouseMove, 2.0, 2.0);
    send(&mut sketch, EventKind::MouseMove, 3.0, 3.0);

    let draft_points: Vec<Point> = sketch.draft().unwrap().points().collect();
    assert_eq!(draft_points, vec![Point::new(1.0, 1.0), Point::new(3.0, 3.0)]);

    send(&mut sketch, EventKind::MouseUp, 3.0, 3.0);
    assert_eq!(points_of(&sketch, 0), vec![(1.0, 1.0), (3.0, 3.0)]);
}

#[test]
fn test_marker_keeps_every_point() {
    let mut sketch = create_test_sketch();
    drag(&mut sketch, &[(0.0, 0.0), (1.0, 0.0), (2.0, 1.0), (3.0, 3.0)]);
    // The release ends the session before its point would be recorded.
    assert_eq!(sketch.committed()[0].events.len(), 4);
}

#[test]
fn test_dash_patterns_follow_style() {
    let mut sketch = create_test_sketch();
    sketch.set_option("size", "5").unwrap();

    sketch.set_option("style", "dashed").unwrap();
    drag(&mut sketch, &[(0.0, 0.0), (10.0, 0.0)]);
    sketch.set_option("style", "dotted").unwrap();
    drag(&mut sketch, &[(0.0, 5.0), (10.0, 5.0)]);
    sketch.set_option("style", "solid").unwrap();
    drag(&mut sketch, &[(0.0, 9.0), (10.0, 9.0)]);

    let patterns: Vec<Vec<f64>> = sketch
        .committed()
        .iter()
        .map(|action| action.dash_pattern())
        .collect();
    assert_eq!(patterns, vec![vec![15.0, 15.0], vec![1.0, 10.0], vec![]]);

    let dashes: Vec<&Vec<f64>> = sketch
        .canvas()
        .commands_since_clear()
        .iter()
        .filter_map(|command| match command {
            DrawCommand::SetDashPattern(pattern) => Some(pattern),
            _ => None,
        })
        .collect();
    assert_eq!(dashes, [&vec![15.0, 15.0], &vec![1.0, 10.0], &vec![]]);
}

#[test]
fn test_redraw_is_a_function_of_log_and_draft() {
    let mut sketch = create_test_sketch();
    drag(&mut sketch, &[(0.0, 0.0), (10.0, 10.0)]);
    sketch.set_option("tool", "circle").unwrap();
    drag(&mut sketch, &[(50.0, 50.0), (60.0, 50.0)]);
    sketch.undo().unwrap();
    sketch.redo().unwrap();
    sketch.set_option("tool", "line").unwrap();
    send(&mut sketch, EventKind::MouseDown, 5.0, 5.0);
    send(&mut sketch, EventKind::MouseMove, 40.0, 40.0);

    sketch.canvas_mut().take_commands();
    sketch.redraw().unwrap();
    let first = sketch.canvas_mut().take_commands();
    sketch.redraw().unwrap();
    let second = sketch.canvas_mut().take_commands();

    assert_eq!(first, second);
    assert_eq!(first.first(), Some(&DrawCommand::Clear));
    // The live line draft paints after both committed actions.
    assert_eq!(
        first.iter().filter(|command| **command == DrawCommand::Stroke).count(),
        3
    );
}

#[test]
fn test_undo_redo_round_trip() {
    let mut sketch = create_test_sketch();
    drag(&mut sketch, &[(1.0, 1.0), (2.0, 2.0)]);
    let before = sketch.committed().to_vec();

    sketch.undo().unwrap();
    assert!(sketch.committed().is_empty());
    assert_eq!(sketch.state().log.undone(), before.as_slice());

    sketch.redo().unwrap();
    assert_eq!(sketch.committed(), before.as_slice());
    assert!(!sketch.state().log.can_redo());
}

#[test]
fn test_undo_redo_on_empty_history_are_no_ops() {
    let mut sketch = create_test_sketch();
    sketch.undo().unwrap();
    sketch.redo().unwrap();
    assert!(sketch.committed().is_empty());
    assert!(sketch.canvas().is_blank());
}

#[test]
fn test_new_stroke_clears_redo_by_default() {
    let mut sketch = create_test_sketch();
    drag(&mut sketch, &[(1.0, 1.0), (2.0, 2.0)]);
    sketch.undo().unwrap();
    drag(&mut sketch, &[(3.0, 3.0), (4.0, 4.0)]);

    sketch.redo().unwrap();
    assert_eq!(sketch.committed().len(), 1);
    assert_eq!(points_of(&sketch, 0)[0], (3.0, 3.0));
}

#[test]
fn test_preserved_redo_survives_new_stroke() {
    let mut config = Config::default();
    config.history.preserve_redo_on_commit = true;
    let mut sketch = Sketch::new(RecordingCanvas::new(50, 50), &config).unwrap();

    drag(&mut sketch, &[(1.0, 1.0), (2.0, 2.0)]);
    sketch.undo().unwrap();
    drag(&mut sketch, &[(3.0, 3.0), (4.0, 4.0)]);
    sketch.redo().unwrap();

    assert_eq!(sketch.committed().len(), 2);
    assert_eq!(points_of(&sketch, 1)[0], (1.0, 1.0));
}

#[test]
fn test_undo_and_redo_tools_act_on_release() {
    let mut sketch = create_test_sketch();
    drag(&mut sketch, &[(1.0, 1.0), (2.0, 2.0)]);

    sketch.set_option("tool", "undo").unwrap();
    send(&mut sketch, EventKind::MouseDown, 0.0, 0.0);
    assert_eq!(sketch.committed().len(), 1);
    send(&mut sketch, EventKind::MouseUp, 0.0, 0.0);
    assert!(sketch.committed().is_empty());

    sketch.set_option("tool", "redo").unwrap();
    send(&mut sketch, EventKind::TouchEnd, 0.0, 0.0);
    assert_eq!(sketch.committed().len(), 1);
}

#[test]
fn test_text_commits_on_release() {
    let mut sketch = create_test_sketch();
    sketch.set_option("tool", "text").unwrap();
    sketch.set_option("text", "Hello").unwrap();

    send(&mut sketch, EventKind::MouseDown, 30.0, 40.0);
    assert!(sketch.committed().is_empty());
    send(&mut sketch, EventKind::MouseUp, 30.0, 40.0);

    let action = &sketch.committed()[0];
    assert_eq!(action.text.as_deref(), Some("Hello"));
    assert_eq!(points_of(&sketch, 0), vec![(30.0, 40.0)]);
    assert!(sketch.canvas().commands_since_clear().contains(&DrawCommand::FillText {
        text: "Hello".to_string(),
        x: 30.0,
        y: 40.0,
    }));
}

#[test]
fn test_arrow_tools_mark_committed_actions() {
    let mut sketch = create_test_sketch();
    sketch.set_option("tool", "arrow_line").unwrap();
    drag(&mut sketch, &[(10.0, 10.0), (30.0, 10.0), (50.0, 10.0)]);
    sketch.set_option("tool", "double_arrow_line").unwrap();
    drag(&mut sketch, &[(10.0, 60.0), (50.0, 60.0)]);

    let arrows: Vec<(bool, bool)> = sketch
        .committed()
        .iter()
        .map(|action| (action.draw_start_arrow, action.draw_end_arrow))
        .collect();
    assert_eq!(arrows, [(false, true), (true, true)]);
    assert_eq!(points_of(&sketch, 0), [(10.0, 10.0), (50.0, 10.0)]);

    // Each shaft is followed by its own barb path: two barbs per head.
    let commands = sketch.canvas().commands_since_clear();
    let strokes: Vec<usize> = commands
        .iter()
        .enumerate()
        .filter(|(_, command)| **command == DrawCommand::Stroke)
        .map(|(index, _)| index)
        .collect();
    assert_eq!(strokes.len(), 4);
    let moves_between = |from: usize, to: usize| {
        commands[from..to]
            .iter()
            .filter(|command| matches!(command, DrawCommand::MoveTo(..)))
            .count()
    };
    assert_eq!(moves_between(strokes[0], strokes[1]), 2);
    assert_eq!(moves_between(strokes[2], strokes[3]), 4);
    assert!(commands[strokes[0]..strokes[1]].contains(&DrawCommand::MoveTo(50.0, 10.0)));
    assert!(commands[strokes[2]..strokes[3]].contains(&DrawCommand::MoveTo(10.0, 60.0)));
}

#[test]
fn test_eraser_restores_composite_between_actions() {
    let mut sketch = create_test_sketch();
    drag(&mut sketch, &[(0.0, 0.0), (10.0, 10.0)]);
    sketch.set_option("tool", "eraser").unwrap();
    drag(&mut sketch, &[(5.0, 5.0), (6.0, 6.0)]);
    sketch.set_option("tool", "marker").unwrap();
    drag(&mut sketch, &[(20.0, 20.0), (30.0, 30.0)]);

    let commands = sketch.canvas().commands_since_clear();
    let last_stroke = commands
        .iter()
        .rposition(|command| *command == DrawCommand::Stroke)
        .unwrap();
    let mut mode = CompositeMode::SourceOver;
    for command in &commands[..last_stroke] {
        if let DrawCommand::SetCompositeMode(next) = command {
            mode = *next;
        }
    }
    assert_eq!(mode, CompositeMode::SourceOver);
    assert_eq!(sketch.canvas().composite_mode(), CompositeMode::SourceOver);
}

#[test]
fn test_leave_and_cancel_commit_the_stroke() {
    let mut sketch = create_test_sketch();
    send(&mut sketch, EventKind::MouseDown, 1.0, 1.0);
    send(&mut sketch, EventKind::MouseMove, 2.0, 2.0);
    send(&mut sketch, EventKind::MouseLeave, 3.0, 3.0);
    assert_eq!(sketch.committed().len(), 1);

    send(&mut sketch, EventKind::TouchStart, 4.0, 4.0);
    send(&mut sketch, EventKind::TouchCancel, 4.0, 4.0);
    assert_eq!(sketch.committed().len(), 2);
    assert!(!sketch.state().is_painting());
}

#[test]
fn test_moves_while_idle_are_ignored() {
    let mut sketch = create_test_sketch();
    send(&mut sketch, EventKind::MouseMove, 1.0, 1.0);
    send(&mut sketch, EventKind::MouseUp, 1.0, 1.0);
    assert!(sketch.committed().is_empty());
    assert!(sketch.draft().is_none());
}

#[test]
fn test_tool_change_mid_stroke_commits_stroke() {
    let mut sketch = create_test_sketch();
    send(&mut sketch, EventKind::MouseDown, 1.0, 1.0);
    send(&mut sketch, EventKind::MouseMove, 2.0, 2.0);

    sketch.set_option("tool", "line").unwrap();

    assert_eq!(sketch.committed().len(), 1);
    assert_eq!(sketch.committed()[0].tool, "marker");
    assert!(matches!(sketch.state().state, DrawingState::Idle));
}

#[test]
fn test_press_during_live_stroke_commits_previous() {
    let mut state = create_test_state("marker");
    state.begin_stroke(StrokeFamily::Freehand);
    state.record_point(&PointerEvent::new(EventKind::MouseDown, 1.0, 1.0));
    state.begin_stroke(StrokeFamily::Freehand);

    assert_eq!(state.log.len(), 1);
    assert!(state.is_painting());
    assert!(state.draft().unwrap().is_empty());
}

#[test]
fn test_empty_stroke_is_discarded() {
    let mut state = create_test_state("marker");
    state.begin_stroke(StrokeFamily::Freehand);
    state.end_stroke();
    assert!(state.log.is_empty());
    assert!(!state.is_painting());
}

#[test]
fn test_invalid_size_is_rejected() {
    let mut sketch = create_test_sketch();
    for bad in ["abc", "NaN", "-1", "0"] {
        assert!(matches!(
            sketch.set_option("size", bad),
            Err(SketchError::InvalidSize(_))
        ));
    }
    assert_eq!(sketch.option_value("size").unwrap(), "5");
    assert!(sketch.take_notifications().is_empty());
}

#[test]
fn test_unknown_tool_is_rejected() {
    let mut sketch = create_test_sketch();
    assert!(matches!(
        sketch.set_option("tool", "lasso"),
        Err(SketchError::UnrecognizedTool(name)) if name == "lasso"
    ));
    assert_eq!(sketch.option_value("tool").unwrap(), "marker");

    let mut config = Config::default();
    config.drawing.default_tool = "lasso".to_string();
    assert!(matches!(
        Sketch::new(RecordingCanvas::new(10, 10), &config),
        Err(SketchError::UnrecognizedTool(_))
    ));
}

#[test]
fn test_invalid_option_values_are_rejected() {
    let mut sketch = create_test_sketch();
    assert!(matches!(
        sketch.set_option("color", "#zzz"),
        Err(SketchError::InvalidColor(_))
    ));
    assert!(matches!(
        sketch.set_option("style", "wavy"),
        Err(SketchError::InvalidStyle(_))
    ));
    assert!(matches!(
        sketch.set_option("opacity", "1"),
        Err(SketchError::UnknownOption(_))
    ));
}

#[test]
fn test_option_changes_are_notified() {
    let mut sketch = create_test_sketch();
    sketch.set_option("color", "rgb(0, 255, 0)").unwrap();
    sketch.set_option("size", "2.5").unwrap();
    sketch.set_option("text", "note").unwrap();

    let changes = sketch.take_notifications();
    let names: Vec<String> = changes.iter().map(OptionChanged::event_name).collect();
    assert_eq!(
        names,
        ["sketch.changecolor", "sketch.changesize", "sketch.changetext"]
    );
    assert_eq!(changes[0].value, "#00ff00");
    assert_eq!(changes[1].value, "2.5");
    assert!(sketch.take_notifications().is_empty());
}

#[test]
fn test_raw_touch_events_are_offset() {
    let mut sketch = create_test_sketch();
    sketch.set_surface_offset(Point::new(100.0, 50.0));

    let touch = |kind, x, y| RawPointerEvent::touch(kind, vec![TouchPoint { page_x: x, page_y: y }]);
    sketch
        .handle_raw_event(&touch(EventKind::TouchStart, 110.0, 60.0))
        .unwrap();
    sketch
        .handle_raw_event(&touch(EventKind::TouchMove, 120.0, 70.0))
        .unwrap();
    let mut end = RawPointerEvent::touch(EventKind::TouchEnd, Vec::new());
    end.page_x = 120.0;
    end.page_y = 70.0;
    sketch.handle_raw_event(&end).unwrap();

    assert_eq!(
        points_of(&sketch, 0),
        vec![(10.0, 10.0), (20.0, 20.0)]
    );
}

#[test]
fn test_download_formats() {
    let mut sketch = create_test_sketch();
    assert!(sketch.download("png").unwrap().starts_with("data:image/png;base64,"));
    assert!(sketch.download("jpg").unwrap().starts_with("data:image/jpeg;base64,"));
    assert!(matches!(
        sketch.download("bmp"),
        Err(SketchError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_custom_colors_keep_alpha() {
    let mut sketch = create_test_sketch();
    sketch.set_option("color", "rgba(255, 0, 0, 0.5)").unwrap();
    drag(&mut sketch, &[(1.0, 1.0), (2.0, 2.0)]);
    assert_eq!(sketch.committed()[0].color, Color::new(1.0, 0.0, 0.0, 0.5));
    assert!(sketch.tool_links());
}
