//! End-to-end simulation of the header interactions without a host toolkit.
//!
//! Drives a [`HeaderView`] through a sort click, a drag-to-reorder, and a
//! column resize, printing the committed transitions as the connected slots
//! receive them. Run with:
//!
//! ```text
//! cargo run --example sortable_header
//! ```

use gridline::prelude::*;
use gridline::widget::DragOrigin;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let columns = vec![
        Column::new("id").with_title("ID"),
        Column::new("name").with_title("Name"),
        Column::new("age")
            .with_title("Age")
            .with_column_type(ColumnType::Number),
    ];

    let mut header = HeaderView::new()
        .with_all_columns(columns.clone())
        .with_columns(columns)
        .with_reorder_enabled(true);

    header.sort_changed.connect(|spec| {
        let entries: Vec<String> = spec
            .iter()
            .map(|entry| format!("{} {:?}", entry.name, entry.direction))
            .collect();
        println!("sort specification: [{}]", entries.join(", "));
    });
    header.column_dropped.connect(|&(drag, drop)| {
        println!("reorder: move declared column {drag} to {drop}");
    });
    header.resize_dropped.connect(|(drag, info)| {
        println!("resize: column {} to {:.0}px", drag.name, info.size);
    });

    // A click on the "name" header cycles its sort direction.
    let mut press = MousePressEvent::new(MouseButton::Left, 150.0);
    header.handle_cell_press(1, &mut press);
    let mut release = MouseReleaseEvent::new(MouseButton::Left, 150.0);
    header.handle_cell_release(1, &mut release);

    // Drag the "id" column two slots to the right.
    let tracker = PointerDragTracker::new();
    let mut press = MousePressEvent::new(MouseButton::Left, 40.0);
    if header.handle_cell_press(0, &mut press) {
        let mut handle = tracker.start(DragOrigin {
            visible_index: 0,
            press_x: press.local_x,
            column_widths: vec![100.0, 100.0, 100.0],
        });
        for x in [120.0, 200.0, 260.0] {
            header.update_column_drag(tracker.pointer_moved(&mut handle, x));
            println!("  lifted cell offset: {:.0}px", header.cell_shift(0));
        }
        let _ = tracker.pointer_released(&mut handle, 260.0);
        let mut release = MouseReleaseEvent::new(MouseButton::Left, 260.0);
        header.end_column_drag(Some(&mut release));
    }

    // Resize the "age" column; the release that concludes the gesture is
    // consumed, so the trailing cell release does not toggle sort.
    let resize = ResizeTracker::new();
    let mut press = MousePressEvent::new(MouseButton::Left, 298.0);
    if header.handle_resize_press(2, 100.0, &mut press) {
        let handle = resize.start(2, "age", 100.0, press.local_x);
        header.update_column_resize(resize.pointer_moved(&handle, 330.0));
        let (drag, info) = resize.pointer_released(&handle, 340.0);
        let mut release = MouseReleaseEvent::new(MouseButton::Left, 340.0);
        header.end_column_resize(drag, info, Some(&mut release));
        header.handle_cell_release(2, &mut release);
    }
}
