//! End-to-end interaction flow tests.
//!
//! These exercise the full loop the UI shell drives: chart store measurements
//! flow into the wave model through the visual-offset mapping, a pointer drag
//! moves a control point under the ordering constraint, and every model
//! notification writes changed sites back into the store.

// Allow test-specific patterns
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use chart_types::{ChartStore, Jaw, SiteKey, SiteMeasurement, SurfaceSide, ToothNumber, ToothRecord};
use perio_wave::{
    render, sync_to_store, visual_values_for, DragSession, DrawCommand, Viewport, WaveDirection,
    WaveModel,
};
use std::cell::RefCell;
use std::rc::Rc;

fn seeded_chart(number: ToothNumber) -> ChartStore {
    let mut chart = ChartStore::new();
    let mut record = ToothRecord::new(number);
    record
        .periodontal
        .set_site(SiteKey::MesioBuccal, SiteMeasurement::new(3, -1));
    record
        .periodontal
        .set_site(SiteKey::Buccal, SiteMeasurement::new(5, -2));
    record
        .periodontal
        .set_site(SiteKey::DistoBuccal, SiteMeasurement::new(2, 0));
    chart.insert(record);
    chart
}

#[test]
fn drag_writes_back_through_the_store() {
    let number = ToothNumber::new(16).unwrap();
    let mut chart = seeded_chart(number);

    // Store -> model.
    let mut model = WaveModel::default();
    model.set_values(visual_values_for(&chart, number, SurfaceSide::Buccal));
    let snap = *model.snapshot().values;
    assert_eq!(snap.pd, [4, 7, 3]);
    assert_eq!(snap.gm, [2, 4, 1]);

    // Collect every notification the way a bound view would.
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    model.subscribe(move |values| sink.borrow_mut().push(*values));

    let direction = WaveDirection::for_view(number.jaw(), SurfaceSide::Buccal);
    assert_eq!(number.jaw(), Jaw::Upper);
    let viewport = Viewport::new(160.0, 140.0, direction).unwrap();

    // Grab the central pd point and drag it three levels deeper.
    let xs = viewport.x_positions();
    let mut session = DragSession::new();
    let grab_y = viewport.y_for_level(model.snapshot().values.pd[1]);
    assert!(session.pointer_down(&model, &viewport, xs[2], grab_y).is_some());
    session.pointer_move(&mut model, &viewport, xs[2], viewport.y_for_level(10));
    session.pointer_up();

    // Model -> store, as a notification handler would do it.
    for values in seen.borrow().iter() {
        sync_to_store(&mut chart, number, SurfaceSide::Buccal, values);
    }

    let site = *chart
        .tooth(number)
        .unwrap()
        .periodontal
        .site(SiteKey::Buccal);
    assert_eq!(site.probing_depth, 8); // visual 10 minus central offset 2
    assert_eq!(site.gingival_margin, -2); // untouched by the pd drag

    // The other two sites round-tripped without drift.
    let tooth = chart.tooth(number).unwrap();
    assert_eq!(tooth.periodontal.site(SiteKey::MesioBuccal).probing_depth, 3);
    assert_eq!(tooth.periodontal.site(SiteKey::DistoBuccal).probing_depth, 2);
}

#[test]
fn resync_after_writeback_is_stable() {
    let number = ToothNumber::new(36).unwrap();
    let mut chart = seeded_chart(number);
    // Lower jaw reads the lingual-side triplet for its top view; seed it too.
    chart.update_tooth(number, |tooth| {
        tooth
            .periodontal
            .set_site(SiteKey::Lingual, SiteMeasurement::new(6, -3));
    });

    let values = visual_values_for(&chart, number, SurfaceSide::Lingual);
    // Writing the freshly derived values back must be a no-op.
    assert_eq!(sync_to_store(&mut chart, number, SurfaceSide::Lingual, &values), 0);

    // And deriving again yields the identical visual state.
    assert_eq!(visual_values_for(&chart, number, SurfaceSide::Lingual), values);
}

#[test]
fn tooth_removed_mid_drag_drops_writes() {
    let number = ToothNumber::new(24).unwrap();
    let mut chart = seeded_chart(number);

    let mut model = WaveModel::default();
    model.set_values(visual_values_for(&chart, number, SurfaceSide::Buccal));

    // Tooth disappears while the drag is still in flight.
    chart.remove(number);

    let viewport = Viewport::new(160.0, 140.0, WaveDirection::Down).unwrap();
    let xs = viewport.x_positions();
    let mut session = DragSession::new();
    let grab_y = viewport.y_for_level(model.snapshot().values.pd[1]);
    session.pointer_down(&model, &viewport, xs[2], grab_y);
    session.pointer_move(&mut model, &viewport, xs[2], viewport.y_for_level(11));

    // The pending notification writes nowhere and errors nowhere.
    let values = *model.snapshot().values;
    assert_eq!(sync_to_store(&mut chart, number, SurfaceSide::Buccal, &values), 0);
    assert!(chart.tooth(number).is_none());
}

#[test]
fn both_jaw_orientations_render_complete_frames() {
    let number = ToothNumber::new(46).unwrap();
    let chart = seeded_chart(number);

    for side in [SurfaceSide::Buccal, SurfaceSide::Lingual] {
        let direction = WaveDirection::for_view(number.jaw(), side);
        let viewport = Viewport::new(120.0, 180.0, direction).unwrap();
        let values = visual_values_for(&chart, number, side);

        let frame = render(&values, &viewport);
        assert_eq!(frame.commands[0], DrawCommand::Clear);
        let strokes = frame
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeCurve { .. }))
            .count();
        assert_eq!(strokes, 2);
        assert_eq!(frame.device_size(2.0), (240, 360));
    }
}
