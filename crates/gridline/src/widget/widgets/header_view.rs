//! HeaderView widget: the interaction controller for a grid's column header
//! row.
//!
//! This module provides [`HeaderView`], which owns the three header
//! interactions of a data grid:
//!
//! - Click-to-sort with multi-column sort specifications
//! - Column drag-to-reorder with a live shift preview
//! - Column resizing, mutually exclusive with reordering
//!
//! The widget is deliberately render-free: it consumes pointer events the
//! host toolkit has already resolved to header cells, runs the gesture state
//! machines, and exposes the render-relevant state (`cell_shift`, hover,
//! drag flags) for the host's cell renderer to read. Continuous pointer
//! tracking is delegated to the primitives in
//! [`column_drag`](crate::widget::column_drag) and
//! [`column_resize`](crate::widget::column_resize); the header only consumes
//! their output events.
//!
//! # Event flow
//!
//! A pointer-down on a resize handle claims the event
//! ([`handle_resize_press`](HeaderView::handle_resize_press) accepts it), so
//! the generic cell press handler ignores the same pointer-down. A
//! pointer-down elsewhere on a draggable cell arms a reorder gesture. A
//! pointer-up that concluded neither gesture toggles the column's sort.
//!
//! # Example
//!
//! ```
//! use gridline::model::Column;
//! use gridline::widget::events::{MouseButton, MousePressEvent, MouseReleaseEvent};
//! use gridline::widget::widgets::HeaderView;
//!
//! let mut header = HeaderView::new()
//!     .with_all_columns(vec![Column::new("id"), Column::new("name")])
//!     .with_columns(vec![Column::new("id"), Column::new("name")])
//!     .with_reorder_enabled(true);
//!
//! header.sort_changed.connect(|spec| {
//!     println!("sort by {} column(s)", spec.len());
//! });
//!
//! // A click on the first header cell cycles its sort direction.
//! let mut press = MousePressEvent::new(MouseButton::Left, 10.0);
//! header.handle_cell_press(0, &mut press);
//! let mut release = MouseReleaseEvent::new(MouseButton::Left, 10.0);
//! header.handle_cell_release(0, &mut release);
//! ```

use gridline_core::{Object, ObjectId, Signal};

use crate::model::{Column, SortSpec, visible_to_full_index};
use crate::widget::column_drag::{DragState, DragUpdate};
use crate::widget::column_resize::{ResizeDrag, ResizeInfo, ResizeState};
use crate::widget::events::{MouseButton, MousePressEvent, MouseReleaseEvent};

/// Interaction controller for a row of column headers.
///
/// # Signals
///
/// - `sort_changed(SortSpec)`: Emitted when a sort toggle commits a new
///   specification
/// - `column_dropped((usize, usize))`: Emitted when a reorder gesture
///   commits; carries the drag and drop indices in the *full* column list
/// - `resize_drag_started(ResizeDrag)`: Emitted when a resize gesture starts
/// - `resize_dragged(ResizeDrag)`: Emitted for every resize delta
/// - `resize_dropped((ResizeDrag, ResizeInfo))`: Emitted when a resize
///   gesture commits
///
/// Signals fire only on committed transitions, never speculatively; a
/// cancelled gesture emits nothing.
pub struct HeaderView {
    id: ObjectId,

    /// The currently rendered columns, in visible order.
    columns: Vec<Column>,

    /// The full declared column list, which may differ from the visible
    /// subset in both length and order.
    all_columns: Vec<Column>,

    /// Current multi-column sort specification.
    sort_spec: SortSpec,

    /// Whether drag-to-reorder is enabled at all.
    reorder_enabled: bool,

    /// State of the in-flight reorder gesture, if any.
    drag: DragState,

    /// State of the in-flight resize gesture, if any.
    resize: ResizeState,

    /// Name of the hovered column, for presentation only.
    hover_column: Option<String>,

    /// Emitted when a sort toggle commits a new specification.
    pub sort_changed: Signal<SortSpec>,

    /// Emitted when a reorder gesture commits, with full-list indices.
    pub column_dropped: Signal<(usize, usize)>,

    /// Emitted when a resize gesture starts.
    pub resize_drag_started: Signal<ResizeDrag>,

    /// Emitted for every resize delta.
    pub resize_dragged: Signal<ResizeDrag>,

    /// Emitted when a resize gesture commits.
    pub resize_dropped: Signal<(ResizeDrag, ResizeInfo)>,
}

impl Default for HeaderView {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderView {
    /// Creates an empty header with both gestures idle.
    pub fn new() -> Self {
        Self {
            id: ObjectId::next(),
            columns: Vec::new(),
            all_columns: Vec::new(),
            sort_spec: SortSpec::new(),
            reorder_enabled: false,
            drag: DragState::baseline(),
            resize: ResizeState::default(),
            hover_column: None,
            sort_changed: Signal::new(),
            column_dropped: Signal::new(),
            resize_drag_started: Signal::new(),
            resize_dragged: Signal::new(),
            resize_dropped: Signal::new(),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Sets the visible columns using builder pattern.
    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the full declared column list using builder pattern.
    pub fn with_all_columns(mut self, all_columns: Vec<Column>) -> Self {
        self.all_columns = all_columns;
        self
    }

    /// Sets the sort specification using builder pattern. Accepts a single
    /// entry, a list, or an absent value; everything normalizes to a
    /// [`SortSpec`].
    pub fn with_sort_info(mut self, sort_info: impl Into<SortSpec>) -> Self {
        self.sort_spec = sort_info.into();
        self
    }

    /// Enables or disables drag-to-reorder using builder pattern.
    pub fn with_reorder_enabled(mut self, enabled: bool) -> Self {
        self.reorder_enabled = enabled;
        self
    }

    /// The visible columns, in render order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Replaces the visible columns.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    /// The full declared column list.
    pub fn all_columns(&self) -> &[Column] {
        &self.all_columns
    }

    /// Replaces the full declared column list.
    pub fn set_all_columns(&mut self, all_columns: Vec<Column>) {
        self.all_columns = all_columns;
    }

    /// The current sort specification.
    pub fn sort_spec(&self) -> &SortSpec {
        &self.sort_spec
    }

    /// Replaces the sort specification without emitting `sort_changed`.
    pub fn set_sort_info(&mut self, sort_info: impl Into<SortSpec>) {
        self.sort_spec = sort_info.into();
    }

    /// Whether drag-to-reorder is enabled.
    pub fn reorder_enabled(&self) -> bool {
        self.reorder_enabled
    }

    /// Enables or disables drag-to-reorder.
    pub fn set_reorder_enabled(&mut self, enabled: bool) {
        self.reorder_enabled = enabled;
    }

    // =========================================================================
    // Presentation read-outs
    // =========================================================================

    /// The in-flight reorder gesture's state record.
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Whether a reorder gesture is live.
    pub fn is_dragging(&self) -> bool {
        self.drag.dragging
    }

    /// Whether a resize gesture is in progress.
    pub fn is_resizing(&self) -> bool {
        self.resize.resizing
    }

    /// Name of the hovered column, if any.
    pub fn hover_column(&self) -> Option<&str> {
        self.hover_column.as_deref()
    }

    /// Whether the cell at `visible_index` is the lifted one.
    pub fn is_drag_column(&self, visible_index: usize) -> bool {
        self.drag.dragging && self.drag.drag_column_index == Some(visible_index)
    }

    /// The horizontal offset the renderer applies to the cell at
    /// `visible_index`: the live drag offset for the lifted cell, the shift
    /// preview for displaced cells, zero otherwise.
    pub fn cell_shift(&self, visible_index: usize) -> f32 {
        if !self.drag.dragging {
            return 0.0;
        }
        if self.drag.drag_column_index == Some(visible_index) {
            return self.drag.drag_left.unwrap_or(0.0);
        }
        if let Some(shifted) = &self.drag.shift_indexes
            && shifted.contains(&visible_index)
        {
            return self.drag.shift_size.unwrap_or(0.0);
        }
        0.0
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Cycles the sort direction of the column at `visible_index` and emits
    /// `sort_changed` with the new specification.
    ///
    /// The stored specification is cloned before the toggle, so connected
    /// slots receive a specification that never aliases a half-updated one.
    pub fn toggle_sort(&mut self, visible_index: usize) -> bool {
        let Some(column) = self.columns.get(visible_index).cloned() else {
            return false;
        };

        let mut spec = self.sort_spec.clone();
        spec.toggle(&column);

        tracing::trace!(
            target: "gridline::widget::header_view",
            column = %column.name,
            entries = spec.len(),
            "sort toggled"
        );

        self.sort_spec = spec.clone();
        self.sort_changed.emit(spec);
        true
    }

    // =========================================================================
    // Reorder gesture
    // =========================================================================

    /// Arms a reorder gesture on the column at `visible_index`. The gesture
    /// stays armed (not yet dragging) until the first tracker update, so a
    /// click without movement still reaches the sort toggle.
    fn begin_column_drag(&mut self, visible_index: usize) {
        self.drag = DragState::baseline();
        self.drag.drag_column = self.columns.get(visible_index).cloned();
        self.drag.drag_column_index = Some(visible_index);

        tracing::trace!(target: "gridline::widget::header_view", visible_index, "column drag armed");
    }

    /// Applies a live tracker update: the drag fields are replaced verbatim
    /// and the gesture becomes live. Ignored if no gesture is armed.
    pub fn update_column_drag(&mut self, update: DragUpdate) {
        if self.drag.drag_column.is_none() {
            tracing::trace!(target: "gridline::widget::header_view", "drag update with no armed gesture, ignoring");
            return;
        }
        self.drag.apply(update);
    }

    /// Concludes the reorder gesture.
    ///
    /// If a candidate drop slot is set, both the lifted and the target
    /// column are translated to their indices in the full column list and
    /// `column_dropped` is emitted exactly once; a missing candidate (the
    /// pointer was released without a valid target) or an unresolvable
    /// translation skips the emission. Commit and cancel share the cleanup:
    /// the drag record returns to its baseline either way.
    ///
    /// Pass the concluding release event so it is consumed while the
    /// gesture is live: an ancestor must not reinterpret the pointer-up,
    /// and the pending cell release must not toggle sort. Returns whether a
    /// drop was committed.
    pub fn end_column_drag(&mut self, event: Option<&mut MouseReleaseEvent>) -> bool {
        if self.drag.dragging
            && let Some(event) = event
        {
            event.base.accept();
        }

        let mut committed = false;
        if let (Some(drag_index), Some(drop_index)) =
            (self.drag.drag_column_index, self.drag.drop_index)
        {
            let full_drag = visible_to_full_index(&self.columns, &self.all_columns, drag_index);
            let full_drop = visible_to_full_index(&self.columns, &self.all_columns, drop_index);

            match (full_drag, full_drop) {
                (Some(full_drag), Some(full_drop)) => {
                    tracing::trace!(
                        target: "gridline::widget::header_view",
                        full_drag,
                        full_drop,
                        "column drop committed"
                    );
                    self.column_dropped.emit((full_drag, full_drop));
                    committed = true;
                }
                _ => {
                    tracing::trace!(
                        target: "gridline::widget::header_view",
                        drag_index,
                        drop_index,
                        "drop target did not resolve to the full column list, skipping commit"
                    );
                }
            }
        }

        self.drag = DragState::baseline();
        committed
    }

    // =========================================================================
    // Resize gesture
    // =========================================================================

    /// Forwards a resize delta to the owning grid. Ignored unless a resize
    /// gesture is in progress.
    pub fn update_column_resize(&mut self, drag: ResizeDrag) {
        if !self.resize.resizing {
            tracing::trace!(target: "gridline::widget::header_view", "resize update with no active gesture, ignoring");
            return;
        }
        self.resize_dragged.emit(drag);
    }

    /// Concludes the resize gesture and forwards the final descriptor and
    /// outcome to the owning grid.
    ///
    /// Pass the concluding release event so the pending cell release does
    /// not toggle sort on the same column. Returns whether a resize was in
    /// progress.
    pub fn end_column_resize(
        &mut self,
        drag: ResizeDrag,
        info: ResizeInfo,
        event: Option<&mut MouseReleaseEvent>,
    ) -> bool {
        if !self.resize.resizing {
            return false;
        }
        self.resize.resizing = false;

        if let Some(event) = event {
            event.base.accept();
        }

        tracing::trace!(
            target: "gridline::widget::header_view",
            column = %drag.name,
            size = info.size,
            "column resize dropped"
        );
        self.resize_dropped.emit((drag, info));
        true
    }

    // =========================================================================
    // Interaction dispatch
    // =========================================================================

    /// Pointer-down on a column's resize handle.
    ///
    /// Starts a resize gesture: marks the resize flag, claims the event so
    /// the generic cell press handler ignores this pointer-down, and emits
    /// `resize_drag_started` with the gesture's starting descriptor.
    /// `start_size` is the column's current width, supplied by the host's
    /// layout. Rejected for non-left buttons, for non-resizable columns,
    /// and structurally while either gesture is already active.
    pub fn handle_resize_press(
        &mut self,
        visible_index: usize,
        start_size: f32,
        event: &mut MousePressEvent,
    ) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        let Some(column) = self.columns.get(visible_index) else {
            return false;
        };
        if !column.resizable {
            return false;
        }
        if self.drag.dragging || self.drag.drag_column.is_some() || self.resize.resizing {
            tracing::trace!(target: "gridline::widget::header_view", "resize press rejected, gesture already active");
            return false;
        }

        self.resize.resizing = true;
        event.base.accept();

        let drag = ResizeDrag {
            visible_index,
            name: column.name.clone(),
            start_size,
            size: start_size,
            delta: 0.0,
        };

        tracing::trace!(target: "gridline::widget::header_view", column = %drag.name, "column resize started");
        self.resize_drag_started.emit(drag);
        true
    }

    /// Pointer-down on a column's header cell.
    ///
    /// Ignored if the event was claimed by a resize start, if reordering is
    /// disabled, if the column is not draggable, or structurally while
    /// either gesture is already active. Otherwise arms a reorder gesture.
    pub fn handle_cell_press(&mut self, visible_index: usize, event: &mut MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        if event.base.is_accepted() {
            return false;
        }
        if !self.reorder_enabled {
            return false;
        }
        let Some(column) = self.columns.get(visible_index) else {
            return false;
        };
        if !column.draggable {
            return false;
        }
        if self.resize.resizing || self.drag.dragging || self.drag.drag_column.is_some() {
            tracing::trace!(target: "gridline::widget::header_view", "cell press rejected, gesture already active");
            return false;
        }

        self.begin_column_drag(visible_index);
        true
    }

    /// Pointer-up on a column's header cell.
    ///
    /// Ignored while a reorder or resize gesture is in progress and ignored
    /// if the event was consumed by a just-concluded gesture. Otherwise, a
    /// sortable column gets its sort toggled.
    pub fn handle_cell_release(
        &mut self,
        visible_index: usize,
        event: &mut MouseReleaseEvent,
    ) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        if self.drag.dragging {
            return false;
        }
        if self.resize.resizing {
            return false;
        }
        if event.base.is_accepted() {
            return false;
        }

        // An armed drag that never saw movement is a plain click; discard it.
        if self.drag.drag_column.is_some() {
            self.drag = DragState::baseline();
        }

        let Some(column) = self.columns.get(visible_index) else {
            return false;
        };
        if !column.sortable {
            return false;
        }
        self.toggle_sort(visible_index)
    }

    /// Pointer entered a column's header cell. Presentation only.
    pub fn handle_cell_hover_in(&mut self, visible_index: usize) {
        self.hover_column = self.columns.get(visible_index).map(|column| column.name.clone());
    }

    /// Pointer left the header cells. Presentation only.
    pub fn handle_cell_hover_out(&mut self) {
        self.hover_column = None;
    }
}

impl Object for HeaderView {
    fn object_id(&self) -> ObjectId {
        self.id
    }
}

static_assertions::assert_impl_all!(HeaderView: Send, Sync);

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::model::SortDirection;

    fn column(name: &str) -> Column {
        Column::new(name)
    }

    /// Visible order intentionally differs from declared order so index
    /// translation mistakes show up.
    fn header() -> HeaderView {
        HeaderView::new()
            .with_all_columns(vec![column("c0"), column("c1"), column("c2")])
            .with_columns(vec![column("c2"), column("c0"), column("c1")])
            .with_reorder_enabled(true)
    }

    fn drag_update(drop_index: Option<usize>) -> DragUpdate {
        DragUpdate {
            drag_left: 24.0,
            drop_index,
            shift_indexes: HashSet::from([1]),
            shift_size: -100.0,
        }
    }

    fn drops(header: &HeaderView) -> Arc<Mutex<Vec<(usize, usize)>>> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();
        header.column_dropped.connect(move |&pair| {
            received_clone.lock().push(pair);
        });
        received
    }

    fn sort_changes(header: &HeaderView) -> Arc<Mutex<Vec<SortSpec>>> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();
        header.sort_changed.connect(move |spec| {
            received_clone.lock().push(spec.clone());
        });
        received
    }

    fn click(header: &mut HeaderView, visible_index: usize) {
        let mut press = MousePressEvent::new(MouseButton::Left, 10.0);
        header.handle_cell_press(visible_index, &mut press);
        let mut release = MouseReleaseEvent::new(MouseButton::Left, 10.0);
        header.handle_cell_release(visible_index, &mut release);
    }

    #[test]
    fn test_click_cycles_sort_and_emits() {
        let mut header = header();
        let changes = sort_changes(&header);

        // Three clicks on the same sortable column: ascending, descending,
        // then back to unsorted.
        click(&mut header, 0);
        click(&mut header, 0);
        click(&mut header, 0);

        let specs = changes.lock();
        assert_eq!(specs.len(), 3);
        assert_eq!(
            specs[0].find("c2").unwrap().direction,
            Some(SortDirection::Ascending)
        );
        assert_eq!(
            specs[1].find("c2").unwrap().direction,
            Some(SortDirection::Descending)
        );
        assert!(specs[2].is_empty());
        assert!(header.sort_spec().is_empty());
    }

    #[test]
    fn test_clicks_keep_sort_names_unique() {
        let mut header = header();

        click(&mut header, 0);
        click(&mut header, 0);

        assert_eq!(header.sort_spec().len(), 1);
    }

    #[test]
    fn test_multi_column_sort_survives_removal() {
        let mut header = header();

        click(&mut header, 0); // c2 ascending
        click(&mut header, 1); // c0 ascending
        click(&mut header, 0); // c2 descending
        click(&mut header, 0); // c2 removed

        let spec = header.sort_spec();
        assert_eq!(spec.len(), 1);
        assert!(spec.find("c0").unwrap().is_ascending());
    }

    #[test]
    fn test_unsortable_column_release_is_ignored() {
        let mut header = HeaderView::new()
            .with_all_columns(vec![column("c0")])
            .with_columns(vec![column("c0").with_sortable(false)]);
        let changes = sort_changes(&header);

        click(&mut header, 0);

        assert!(changes.lock().is_empty());
    }

    #[test]
    fn test_reorder_commit_translates_to_full_indices() {
        let mut header = header();
        let dropped = drops(&header);

        let mut press = MousePressEvent::new(MouseButton::Left, 10.0);
        assert!(header.handle_cell_press(0, &mut press));
        header.update_column_drag(drag_update(Some(2)));
        assert!(header.is_dragging());

        let mut release = MouseReleaseEvent::new(MouseButton::Left, 250.0);
        assert!(header.end_column_drag(Some(&mut release)));

        // Visible 0 is "c2" (full index 2); visible 2 is "c1" (full index 1).
        assert_eq!(*dropped.lock(), vec![(2, 1)]);
        assert!(release.base.is_accepted());

        // Commit shares the cancel cleanup: everything back at baseline.
        assert!(!header.is_dragging());
        assert!(header.drag_state().drag_column.is_none());
        assert!(header.drag_state().drop_index.is_none());
        assert!(header.drag_state().shift_indexes.is_none());
    }

    #[test]
    fn test_reorder_cancel_emits_nothing_and_resets() {
        let mut header = header();
        let dropped = drops(&header);

        let mut press = MousePressEvent::new(MouseButton::Left, 10.0);
        assert!(header.handle_cell_press(0, &mut press));
        header.update_column_drag(drag_update(None));

        let mut release = MouseReleaseEvent::new(MouseButton::Left, 250.0);
        assert!(!header.end_column_drag(Some(&mut release)));

        assert!(dropped.lock().is_empty());
        // The drop event is still consumed by the live gesture.
        assert!(release.base.is_accepted());
        assert!(!header.is_dragging());
        assert!(header.drag_state().drag_column.is_none());
    }

    #[test]
    fn test_drag_conclusion_does_not_toggle_sort() {
        let mut header = header();
        let changes = sort_changes(&header);

        let mut press = MousePressEvent::new(MouseButton::Left, 10.0);
        header.handle_cell_press(0, &mut press);
        header.update_column_drag(drag_update(Some(1)));

        let mut release = MouseReleaseEvent::new(MouseButton::Left, 120.0);
        header.end_column_drag(Some(&mut release));
        assert!(!header.handle_cell_release(0, &mut release));

        assert!(changes.lock().is_empty());
    }

    #[test]
    fn test_plain_click_after_armed_drag_still_sorts() {
        // Press arms the gesture but no movement arrives: the release is a
        // plain click and must reach the sort toggle.
        let mut header = header();
        let changes = sort_changes(&header);

        let mut press = MousePressEvent::new(MouseButton::Left, 10.0);
        assert!(header.handle_cell_press(0, &mut press));
        assert!(!header.is_dragging());

        let mut release = MouseReleaseEvent::new(MouseButton::Left, 10.0);
        assert!(header.handle_cell_release(0, &mut release));

        assert_eq!(changes.lock().len(), 1);
        assert!(header.drag_state().drag_column.is_none());
    }

    #[test]
    fn test_unresolvable_drop_skips_commit() {
        // The dragged column is missing from the declared list; the
        // translation fails and the commit must be skipped, not emitted
        // with a bogus index.
        let mut header = HeaderView::new()
            .with_all_columns(vec![column("c0"), column("c1")])
            .with_columns(vec![column("ghost"), column("c0"), column("c1")])
            .with_reorder_enabled(true);
        let dropped = drops(&header);

        let mut press = MousePressEvent::new(MouseButton::Left, 10.0);
        assert!(header.handle_cell_press(0, &mut press));
        header.update_column_drag(drag_update(Some(2)));
        assert!(!header.end_column_drag(None));

        assert!(dropped.lock().is_empty());
        assert!(!header.is_dragging());
    }

    #[test]
    fn test_resize_suppresses_sort() {
        let mut header = header();
        let changes = sort_changes(&header);

        let mut press = MousePressEvent::new(MouseButton::Left, 95.0);
        assert!(header.handle_resize_press(0, 100.0, &mut press));
        // The claimed press must not also arm a reorder gesture.
        assert!(!header.handle_cell_press(0, &mut press));

        let drag = ResizeDrag {
            visible_index: 0,
            name: "c2".into(),
            start_size: 100.0,
            size: 130.0,
            delta: 30.0,
        };
        header.update_column_resize(drag.clone());

        let mut release = MouseReleaseEvent::new(MouseButton::Left, 125.0);
        let info = ResizeInfo { size: 130.0, delta: 30.0 };
        assert!(header.end_column_resize(drag, info, Some(&mut release)));

        // The pointer-up that concluded the resize must not toggle sort.
        assert!(!header.handle_cell_release(0, &mut release));
        assert!(changes.lock().is_empty());
        assert!(!header.is_resizing());
    }

    #[test]
    fn test_resize_signals_forward_descriptors() {
        let mut header = header();

        let started = Arc::new(Mutex::new(Vec::new()));
        let started_clone = started.clone();
        header.resize_drag_started.connect(move |drag| {
            started_clone.lock().push(drag.clone());
        });

        let dropped = Arc::new(Mutex::new(Vec::new()));
        let dropped_clone = dropped.clone();
        header.resize_dropped.connect(move |pair| {
            dropped_clone.lock().push(pair.clone());
        });

        let mut press = MousePressEvent::new(MouseButton::Left, 95.0);
        assert!(header.handle_resize_press(1, 80.0, &mut press));

        {
            let started = started.lock();
            assert_eq!(started.len(), 1);
            assert_eq!(started[0].name, "c0");
            assert_eq!(started[0].start_size, 80.0);
            assert_eq!(started[0].delta, 0.0);
        }

        let drag = ResizeDrag {
            visible_index: 1,
            name: "c0".into(),
            start_size: 80.0,
            size: 60.0,
            delta: -20.0,
        };
        let info = ResizeInfo { size: 60.0, delta: -20.0 };
        assert!(header.end_column_resize(drag.clone(), info, None));
        assert_eq!(*dropped.lock(), vec![(drag, info)]);
    }

    #[test]
    fn test_dragging_blocks_resize_start() {
        let mut header = header();

        let mut press = MousePressEvent::new(MouseButton::Left, 10.0);
        header.handle_cell_press(0, &mut press);
        header.update_column_drag(drag_update(Some(1)));

        let mut resize_press = MousePressEvent::new(MouseButton::Left, 95.0);
        assert!(!header.handle_resize_press(1, 100.0, &mut resize_press));
        assert!(!header.is_resizing());
        // The rejected press stays unclaimed.
        assert!(!resize_press.base.is_accepted());
        // The drag is untouched.
        assert!(header.is_dragging());
        assert_eq!(header.drag_state().drop_index, Some(1));
    }

    #[test]
    fn test_resizing_blocks_drag_start() {
        let mut header = header();

        let mut press = MousePressEvent::new(MouseButton::Left, 95.0);
        assert!(header.handle_resize_press(0, 100.0, &mut press));

        // A fresh, unclaimed press on another column: still rejected while
        // the resize is in progress.
        let mut cell_press = MousePressEvent::new(MouseButton::Left, 150.0);
        assert!(!header.handle_cell_press(1, &mut cell_press));
        assert!(header.drag_state().drag_column.is_none());
        assert!(header.is_resizing());
    }

    #[test]
    fn test_release_during_live_drag_is_ignored() {
        let mut header = header();
        let changes = sort_changes(&header);

        let mut press = MousePressEvent::new(MouseButton::Left, 10.0);
        header.handle_cell_press(0, &mut press);
        header.update_column_drag(drag_update(Some(1)));

        let mut release = MouseReleaseEvent::new(MouseButton::Left, 10.0);
        assert!(!header.handle_cell_release(0, &mut release));
        assert!(changes.lock().is_empty());
    }

    #[test]
    fn test_press_ignored_when_reorder_disabled_or_not_draggable() {
        let mut header = header().with_reorder_enabled(false);
        let mut press = MousePressEvent::new(MouseButton::Left, 10.0);
        assert!(!header.handle_cell_press(0, &mut press));

        let mut header = HeaderView::new()
            .with_all_columns(vec![column("c0")])
            .with_columns(vec![column("c0").with_draggable(false)])
            .with_reorder_enabled(true);
        let mut press = MousePressEvent::new(MouseButton::Left, 10.0);
        assert!(!header.handle_cell_press(0, &mut press));
        assert!(header.drag_state().drag_column.is_none());
    }

    #[test]
    fn test_non_left_buttons_are_ignored() {
        let mut header = header();
        let changes = sort_changes(&header);

        let mut press = MousePressEvent::new(MouseButton::Right, 10.0);
        assert!(!header.handle_cell_press(0, &mut press));
        assert!(!header.handle_resize_press(0, 100.0, &mut press));

        let mut release = MouseReleaseEvent::new(MouseButton::Right, 10.0);
        assert!(!header.handle_cell_release(0, &mut release));
        assert!(changes.lock().is_empty());
    }

    #[test]
    fn test_drag_update_without_arm_is_ignored() {
        let mut header = header();
        header.update_column_drag(drag_update(Some(1)));
        assert!(!header.is_dragging());
    }

    #[test]
    fn test_cell_shift_reads() {
        let mut header = header();

        assert_eq!(header.cell_shift(0), 0.0);

        let mut press = MousePressEvent::new(MouseButton::Left, 10.0);
        header.handle_cell_press(0, &mut press);
        header.update_column_drag(DragUpdate {
            drag_left: 42.0,
            drop_index: Some(1),
            shift_indexes: HashSet::from([1]),
            shift_size: -100.0,
        });

        assert!(header.is_drag_column(0));
        assert_eq!(header.cell_shift(0), 42.0);
        assert_eq!(header.cell_shift(1), -100.0);
        assert_eq!(header.cell_shift(2), 0.0);
    }

    #[test]
    fn test_hover_tracking() {
        let mut header = header();
        assert!(header.hover_column().is_none());

        header.handle_cell_hover_in(1);
        assert_eq!(header.hover_column(), Some("c0"));

        header.handle_cell_hover_out();
        assert!(header.hover_column().is_none());
    }

    #[test]
    fn test_sort_info_normalization_paths() {
        use crate::model::{ColumnType, SortEntry};

        let header = HeaderView::new()
            .with_sort_info(SortEntry::new("a", ColumnType::Text).with_direction(SortDirection::Ascending));
        assert_eq!(header.sort_spec().len(), 1);

        let header = HeaderView::new().with_sort_info(Option::<Vec<SortEntry>>::None);
        assert!(header.sort_spec().is_empty());
    }
}
