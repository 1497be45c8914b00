use bargraph_rs::bar_graph::{BAR_WIDTH, Y_AXIS_LABEL};
use bargraph_rs::render::RecordingRenderer;
use bargraph_rs::{BarGraphGeneric, DrawOptions, PlotError};

fn widget() -> BarGraphGeneric<RecordingRenderer> {
    BarGraphGeneric::new(RecordingRenderer::default())
}

#[test]
fn one_bar_per_category() {
    let mut w = widget();
    w.draw(&["a", "b", "c", "d"], &[0.1, 0.2, 0.3, 0.4], &DrawOptions::default())
        .unwrap();
    assert_eq!(w.figure().unwrap().bar_count(), 4);
    assert_eq!(w.canvas().unwrap().bar_count, 4);
}

#[test]
fn y_range_is_fixed_regardless_of_values() {
    let mut w = widget();
    w.draw(&[0, 1, 2], &[2.0, -1.0, 0.5], &DrawOptions::default())
        .unwrap();
    let ax = &w.figure().unwrap().axes()[0];
    assert_eq!(ax.ylim(), (0.0, 1.0));
    assert_eq!(w.canvas().unwrap().ylim, (0.0, 1.0));
    // raw heights are kept; clipping happens when pixels are produced
    assert_eq!(ax.containers()[0].heights, vec![2.0, -1.0, 0.5]);
}

#[test]
fn axis_label_absent_unless_given() {
    let mut w = widget();
    w.draw(&[0, 1], &[0.3, 0.6], &DrawOptions::default()).unwrap();
    assert_eq!(w.figure().unwrap().axes()[0].xlabel(), None);

    w.draw(
        &[0, 1],
        &[0.3, 0.6],
        &DrawOptions::new().axis_label("Distance (m)"),
    )
    .unwrap();
    assert_eq!(w.figure().unwrap().axes()[0].xlabel(), Some("Distance (m)"));
    assert_eq!(w.canvas().unwrap().xlabel.as_deref(), Some("Distance (m)"));
}

#[test]
fn tick_labels_applied_in_order() {
    let mut w = widget();
    let opts = DrawOptions::new().tick_labels(["A", "B", "C"]);
    w.draw(&[0, 1, 2], &[0.1, 0.5, 0.9], &opts).unwrap();
    let ax = &w.figure().unwrap().axes()[0];
    assert_eq!(ax.xtick_labels(), vec!["A", "B", "C"]);
    assert_eq!(ax.xticks(), vec![BAR_WIDTH, 1.0 + BAR_WIDTH, 2.0 + BAR_WIDTH]);
}

#[test]
fn default_ticks_are_numeric() {
    let mut w = widget();
    w.draw(&[0, 1, 2], &[0.1, 0.5, 0.9], &DrawOptions::default())
        .unwrap();
    let ax = &w.figure().unwrap().axes()[0];
    assert!(!ax.has_custom_xticklabels());
    assert_eq!(ax.xtick_labels(), vec!["0.35", "1.35", "2.35"]);
}

#[test]
fn second_draw_replaces_first() {
    let mut w = widget();
    w.draw(
        &[0, 1, 2, 3, 4],
        &[0.1, 0.2, 0.3, 0.4, 0.5],
        &DrawOptions::new()
            .axis_label("first")
            .error_primary(vec![0.01; 5]),
    )
    .unwrap();
    w.draw(&[0, 1], &[0.9, 0.8], &DrawOptions::default()).unwrap();

    let fig = w.figure().unwrap();
    assert_eq!(fig.axes().len(), 1);
    assert_eq!(fig.bar_count(), 2);
    let ax = &fig.axes()[0];
    assert_eq!(ax.containers().len(), 1);
    assert_eq!(ax.containers()[0].heights, vec![0.9, 0.8]);
    assert!(ax.containers()[0].errorbars.is_none());
    assert_eq!(ax.xlabel(), None);
    assert_eq!(w.canvas().unwrap().bar_count, 2);
    assert_eq!(w.base().renderer().render_count, 2);
}

#[test]
fn y_label_is_constant() {
    let mut w = widget();
    for opts in [
        DrawOptions::default(),
        DrawOptions::new().axis_label("Site"),
        DrawOptions::new().tick_labels(["x"]),
    ] {
        w.draw(&["only"], &[0.4], &opts).unwrap();
        assert_eq!(w.figure().unwrap().axes()[0].ylabel(), Some(Y_AXIS_LABEL));
        assert_eq!(w.canvas().unwrap().ylabel.as_deref(), Some("Tree Crossing Fit"));
    }
}

#[test]
fn mismatched_error_lengths_propagate() {
    let mut w = widget();
    let err = w
        .draw(
            &[0, 1, 2],
            &[0.1, 0.2, 0.3],
            &DrawOptions::new().error_primary(vec![0.1]),
        )
        .unwrap_err();
    assert_eq!(
        err,
        PlotError::LengthMismatch {
            what: "yerr",
            expected: 3,
            found: 1
        }
    );
}

#[test]
fn empty_input_draws_empty_chart() {
    let mut w = widget();
    let none: [&str; 0] = [];
    w.draw(&none, &[], &DrawOptions::default()).unwrap();
    assert_eq!(w.figure().unwrap().bar_count(), 0);
    assert_eq!(w.canvas().unwrap().ylim, (0.0, 1.0));
}

#[test]
fn draw_fits_surface_to_display_area() {
    let mut w = widget();
    w.resize((320, 240)).unwrap();
    w.draw(&[0], &[0.5], &DrawOptions::default()).unwrap();
    assert_eq!(w.canvas().unwrap().size, (320, 240));
    w.resize((500, 300)).unwrap();
    assert_eq!(w.canvas().unwrap().size, (500, 300));
}
