use nannou::prelude::{vec2, Rect, Vec2};
use springy_grid::visibility::{self, viewport_rect};
use springy_grid::{GridLayout, Item, ItemId, ParamsHandle, Preset, SpringLayoutEngine, SpringParams, VISIBLE_MARGIN};

fn engine() -> SpringLayoutEngine {
    SpringLayoutEngine::new(ParamsHandle::new(SpringParams::default()))
}

fn viewport(offset_y: f32) -> Rect {
    viewport_rect(vec2(0.0, offset_y), vec2(300.0, 300.0))
}

fn assert_close(actual: f32, expected: f32) {
    assert!((actual - expected).abs() < 1e-3, "expected {}, got {}", expected, actual);
}

#[test]
fn scroll_displaces_item_near_origin() {
    let grid = GridLayout::default();
    let mut engine = engine();
    engine.resync_grid(viewport(0.0), &grid);

    engine.on_scroll_delta(-50.0, vec2(150.0, 150.0));

    let center = engine.query_displaced_center(ItemId(0)).unwrap();
    assert_eq!(center.x, 32.0);
    assert_close(center.y, 24.1333);
}

#[test]
fn larger_divisor_means_smaller_displacement() {
    let grid = GridLayout::default();
    let mut engine = engine();
    engine.set_parameters(0.8, 1.0, 3000.0);
    engine.resync_grid(viewport(0.0), &grid);

    engine.on_scroll_delta(-50.0, vec2(150.0, 150.0));

    let center = engine.query_displaced_center(ItemId(0)).unwrap();
    assert_close(center.y - 32.0, -3.9333);
}

#[test]
fn resync_is_idempotent() {
    let grid = GridLayout::default();
    let mut engine = engine();

    let first = engine.resync_grid(viewport(0.0), &grid);
    assert!(first.added > 0);
    assert_eq!(first.removed, 0);
    let before = engine.frame();

    let second = engine.resync_grid(viewport(0.0), &grid);
    assert!(second.is_noop());
    assert_eq!(engine.frame(), before);
}

#[test]
fn attached_set_matches_expanded_viewport() {
    let grid = GridLayout::default();
    let mut engine = engine();
    engine.resync_grid(viewport(0.0), &grid);

    // 5 columns at width 300, 7 rows with centers at y <= 400
    let expected = grid.items_in_rect(engine.expanded_rect(viewport(0.0)), 300.0);
    assert_eq!(engine.len(), expected.len());
    assert_eq!(engine.len(), 5 * 7);
    for item in expected {
        assert!(engine.is_attached(item.id));
    }
}

#[test]
fn scrolling_away_detaches_items() {
    let grid = GridLayout::default();
    let mut engine = engine();
    engine.resync_grid(viewport(0.0), &grid);
    assert!(engine.is_attached(ItemId(0)));

    let report = engine.resync_grid(viewport(1000.0), &grid);
    assert!(report.removed > 0);
    assert!(!engine.is_attached(ItemId(0)));

    let area = engine.expanded_rect(viewport(1000.0));
    for attachment in engine.attachments() {
        assert!(visibility::contains(area, attachment.anchor), "{:?} outside {:?}", attachment.anchor, area);
    }
}

#[test]
fn items_outside_the_expanded_rect_are_ignored() {
    let mut engine = engine();
    let items = vec![
        Item { id: ItemId(1), center: vec2(50.0, 50.0) },
        Item { id: ItemId(2), center: vec2(1000.0, 1000.0) },
        Item { id: ItemId(3), center: vec2(-150.0, 20.0) },
    ];

    let report = engine.resync(viewport(0.0), items);
    assert_eq!(report.added, 1);
    assert!(engine.is_attached(ItemId(1)));
    assert!(!engine.is_attached(ItemId(2)));
    assert!(!engine.is_attached(ItemId(3)));
}

#[test]
fn duplicate_ids_share_one_attachment() {
    let mut engine = engine();
    let items = vec![
        Item { id: ItemId(7), center: vec2(50.0, 50.0) },
        Item { id: ItemId(7), center: vec2(50.0, 50.0) },
    ];

    engine.resync(viewport(0.0), items);
    assert_eq!(engine.len(), 1);
}

#[test]
fn empty_item_set_empties_the_registry() {
    let grid = GridLayout::default();
    let mut engine = engine();
    engine.resync_grid(viewport(0.0), &grid);
    let attached = engine.len();

    let report = engine.resync(viewport(0.0), Vec::new());
    assert_eq!(report.removed, attached);
    assert!(engine.is_empty());
    assert!(engine.frame().is_empty());
}

#[test]
fn new_attachments_start_displaced() {
    let mut engine = engine();
    engine.on_scroll_delta(-50.0, vec2(150.0, 150.0));

    engine.resync(viewport(0.0), vec![Item { id: ItemId(0), center: vec2(32.0, 32.0) }]);

    let attachment = engine.attachment(ItemId(0)).unwrap();
    assert_eq!(attachment.anchor, vec2(32.0, 32.0));
    assert_close(attachment.center.y, 24.1333);
}

#[test]
fn no_touch_means_no_displacement() {
    let grid = GridLayout::default();
    let mut engine = engine();
    engine.resync_grid(viewport(0.0), &grid);

    engine.on_scroll_delta(-80.0, Vec2::ZERO);

    for attachment in engine.attachments() {
        assert_eq!(attachment.center, attachment.anchor);
    }
}

#[test]
fn displacement_is_measured_from_the_anchor() {
    let grid = GridLayout::default();
    let mut engine = engine();
    engine.resync_grid(viewport(0.0), &grid);

    engine.on_scroll_delta(-50.0, vec2(150.0, 150.0));
    engine.on_scroll_delta(-50.0, vec2(150.0, 150.0));

    // Repeating the same delta does not compound
    assert_close(engine.query_displaced_center(ItemId(0)).unwrap().y, 24.1333);
}

#[test]
fn bounds_change_reports_its_delta() {
    let mut engine = engine();
    let delta = engine.on_bounds_change(100.0, 60.0, vec2(10.0, 10.0));

    assert_eq!(delta, -40.0);
    assert_eq!(engine.scroll_state().last_delta, -40.0);
    assert_eq!(engine.scroll_state().touch_location, vec2(10.0, 10.0));
}

#[test]
fn resync_leaves_scroll_state_alone() {
    let grid = GridLayout::default();
    let mut engine = engine();
    engine.on_scroll_delta(12.0, vec2(40.0, 40.0));
    let before = engine.scroll_state();

    engine.resync_grid(viewport(0.0), &grid);
    assert_eq!(engine.scroll_state(), before);
}

#[test]
fn retuning_only_affects_new_attachments() {
    let mut engine = engine();
    engine.resync(viewport(0.0), vec![Item { id: ItemId(0), center: vec2(32.0, 32.0) }]);

    engine.apply_preset(Preset::Stiff);
    engine.resync(
        viewport(0.0),
        vec![
            Item { id: ItemId(0), center: vec2(32.0, 32.0) },
            Item { id: ItemId(1), center: vec2(86.0, 32.0) },
        ],
    );

    let old = engine.attachment(ItemId(0)).unwrap();
    assert_eq!((old.damping, old.frequency), (0.8, 1.0));

    let new = engine.attachment(ItemId(1)).unwrap();
    assert_eq!((new.damping, new.frequency), (0.9, 0.8));
}

#[test]
fn divisor_change_applies_on_next_update() {
    let mut engine = engine();
    engine.resync(viewport(0.0), vec![Item { id: ItemId(0), center: vec2(32.0, 32.0) }]);
    engine.on_scroll_delta(-50.0, vec2(150.0, 150.0));
    assert_close(engine.query_displaced_center(ItemId(0)).unwrap().y, 24.1333);

    engine.set_parameters(0.8, 1.0, 3000.0);
    // Cached centers stay put until the next update
    assert_close(engine.query_displaced_center(ItemId(0)).unwrap().y, 24.1333);

    engine.on_scroll_delta(-50.0, vec2(150.0, 150.0));
    assert_close(engine.query_displaced_center(ItemId(0)).unwrap().y, 28.0667);
}

#[test]
fn stiff_preset_is_echoed_back() {
    let mut engine = engine();

    let echoed = engine.apply_preset(Preset::Stiff);
    assert_eq!(echoed, SpringParams::new(0.9, 0.8, 2000.0));
    assert_eq!(engine.parameters(), echoed);
}

#[test]
fn parameters_are_shared_with_other_handles() {
    let mut engine = engine();
    let panel_view = engine.params_handle();

    engine.set_parameters(0.05, 10.0, 0.0);
    assert_eq!(panel_view.get(), SpringParams::new(0.05, 10.0, 0.0));
    assert!(panel_view.shares_with(&engine.params_handle()));
}

#[test]
fn items_in_rect_uses_displaced_centers() {
    let mut engine = engine();
    engine.resync(viewport(0.0), vec![Item { id: ItemId(0), center: vec2(32.0, 32.0) }]);
    engine.on_scroll_delta(-50.0, vec2(150.0, 150.0));

    let above = Rect::from_x_y_w_h(30.0, 15.0, 60.0, 30.0);
    let below = Rect::from_x_y_w_h(30.0, 45.0, 60.0, 30.0);
    assert_eq!(engine.items_in_rect(above).len(), 1);
    assert!(engine.items_in_rect(below).is_empty());
}

#[test]
fn frame_is_sorted_by_id() {
    let grid = GridLayout::default();
    let mut engine = engine();
    engine.resync_grid(viewport(0.0), &grid);

    let frame = engine.frame();
    assert!(frame.windows(2).all(|pair| pair[0].0 < pair[1].0));
}

#[test]
fn clear_detaches_everything() {
    let grid = GridLayout::default();
    let mut engine = engine();
    engine.resync_grid(viewport(0.0), &grid);

    engine.clear();
    assert!(engine.is_empty());

    let report = engine.resync_grid(viewport(0.0), &grid);
    assert_eq!(report.added, 35);
}

#[test]
fn margin_controls_how_far_attachments_reach() {
    let grid = GridLayout::default();

    let mut default_engine = engine();
    assert_eq!(default_engine.margin(), VISIBLE_MARGIN);
    default_engine.resync_grid(viewport(0.0), &grid);
    assert_eq!(default_engine.len(), 5 * 7);

    // Without a margin only rows centered inside the 300pt viewport attach
    let mut tight = engine().with_margin(0.0);
    assert_eq!(tight.margin(), 0.0);
    tight.resync_grid(viewport(0.0), &grid);
    assert_eq!(tight.len(), 5 * 5);
    assert!(tight.is_attached(ItemId(20)));
    assert!(!tight.is_attached(ItemId(25)));
}

#[test]
fn attachment_offset_is_center_minus_anchor() {
    let grid = GridLayout::default();
    let mut engine = engine();
    engine.resync_grid(viewport(0.0), &grid);
    assert_eq!(engine.attachment(ItemId(0)).unwrap().offset(), Vec2::ZERO);

    engine.on_scroll_delta(-50.0, vec2(150.0, 150.0));

    let attachment = engine.attachment(ItemId(0)).unwrap();
    let offset = attachment.offset();
    assert_eq!(offset.x, 0.0);
    assert_close(offset.y, 24.1333 - 32.0);
    assert_close((attachment.anchor + offset).y, attachment.center.y);
}
