//! Placement engine behaviour over whole operation sequences.

use button_studio::engine::{
    add_widget_to_column, collapse_widget, move_widget, toggle_widget, AddOutcome, PlacementError,
};
use button_studio::models::{Column, WidgetType};

mod fixtures;
use fixtures::{all_ids, assert_contiguous, column_ids, default, test_layout_small, Sequence};

// ============================================================================
// Reference Scenario
// ============================================================================

#[test]
fn test_move_right_to_left_front() {
    let mut layout = default();
    let left_before = layout.columns.left.len();
    let right_before = layout.columns.right.len();
    assert_eq!(right_before, 11);

    let moved_id = layout.columns.right[5].id.clone();
    move_widget(&mut layout, &moved_id, Column::Right, 5, Column::Left, 0).unwrap();

    assert_eq!(layout.columns.left.len(), left_before + 1);
    assert_eq!(layout.columns.left[0].id, moved_id);
    assert_eq!(layout.columns.right.len(), right_before - 1);

    let right_orders: Vec<usize> = layout.columns.right.iter().map(|w| w.order).collect();
    assert_eq!(right_orders, (0..right_before - 1).collect::<Vec<_>>());
    assert_contiguous(&layout);
}

// ============================================================================
// Properties Over Random Sequences
// ============================================================================

#[test]
fn test_random_moves_keep_orders_contiguous_and_conserve_widgets() {
    for seed in 0..20 {
        let mut layout = default();
        let ids_before = all_ids(&layout);
        let mut seq = Sequence::new(seed);

        for _ in 0..200 {
            let source = seq.column();
            let len = layout.columns.get(source).len();
            if len == 0 {
                continue;
            }
            let index = seq.below(len);
            let id = layout.columns.get(source)[index].id.clone();
            let dest = seq.column();
            // Deliberately overshoot sometimes to exercise clamping
            let dest_index = seq.below(layout.columns.get(dest).len() + 4);

            move_widget(&mut layout, &id, source, index, dest, dest_index).unwrap();
            assert_contiguous(&layout);
        }

        assert_eq!(all_ids(&layout), ids_before, "seed {seed} lost or created widgets");
        assert!(layout.validate().is_ok());
    }
}

#[test]
fn test_random_adds_keep_types_singleton() {
    let mut layout = default();
    let count = layout.widget_count();
    let mut seq = Sequence::new(7);

    for _ in 0..100 {
        let widget_type = WidgetType::BUILT_IN[seq.below(WidgetType::BUILT_IN.len())];
        let column = seq.column();
        let order = seq.below(15);

        let outcome = add_widget_to_column(&mut layout, widget_type, column, order).unwrap();
        assert!(matches!(outcome, AddOutcome::Relocated { .. }));
        assert_contiguous(&layout);
    }

    assert_eq!(layout.widget_count(), count);
}

#[test]
fn test_invalid_requests_never_change_layout() {
    let mut layout = test_layout_small();
    let before = layout.clone();

    let results = [
        move_widget(&mut layout, "live-preview", Column::Center, 2, Column::Left, 0).map(|_| ()),
        move_widget(&mut layout, "box-shadow", Column::Right, 0, Column::Left, 0).map(|_| ()),
        toggle_widget(&mut layout, "ghost").map(|_| ()),
        collapse_widget(&mut layout, "ghost").map(|_| ()),
        add_widget_to_column(&mut layout, WidgetType::Unknown, Column::Left, 0).map(|_| ()),
    ];

    assert!(results.iter().all(Result::is_err));
    assert_eq!(layout, before);
}

// ============================================================================
// Individual Behaviours
// ============================================================================

#[test]
fn test_clamped_insertion_appends() {
    let mut layout = test_layout_small();
    move_widget(&mut layout, "saved-designs", Column::Left, 0, Column::Right, 1_000).unwrap();

    assert_eq!(
        column_ids(&layout, Column::Right),
        vec!["text-controls", "box-shadow", "saved-designs"]
    );
    assert_contiguous(&layout);
}

#[test]
fn test_emptying_a_column() {
    let mut layout = test_layout_small();
    move_widget(&mut layout, "saved-designs", Column::Left, 0, Column::Center, 0).unwrap();
    move_widget(&mut layout, "preset-gallery", Column::Left, 0, Column::Center, 0).unwrap();

    assert!(layout.columns.left.is_empty());
    assert_eq!(
        column_ids(&layout, Column::Center),
        vec!["preset-gallery", "saved-designs", "live-preview", "css-output"]
    );

    // An empty column still accepts drops
    move_widget(&mut layout, "css-output", Column::Center, 3, Column::Left, 5).unwrap();
    assert_eq!(column_ids(&layout, Column::Left), vec!["css-output"]);
    assert_contiguous(&layout);
}

#[test]
fn test_add_new_type_into_small_layout() {
    let mut layout = test_layout_small();
    let outcome =
        add_widget_to_column(&mut layout, WidgetType::HoverEffects, Column::Left, 1).unwrap();

    let AddOutcome::Created { id, placement } = outcome else {
        panic!("hover-effects was not in the layout yet");
    };
    assert_eq!(placement.order, 1);
    assert_eq!(column_ids(&layout, Column::Left)[1], id);
    assert_eq!(layout.widget(&id).unwrap().title, "Hover Effects");
    assert_contiguous(&layout);
}

#[test]
fn test_toggle_twice_restores_enabled() {
    let mut layout = default();
    for widget in layout.columns.iter().map(|w| w.id.clone()).collect::<Vec<_>>() {
        let original = layout.widget(&widget).unwrap().enabled;
        toggle_widget(&mut layout, &widget).unwrap();
        toggle_widget(&mut layout, &widget).unwrap();
        assert_eq!(layout.widget(&widget).unwrap().enabled, original);
    }
}

#[test]
fn test_collapse_does_not_reorder() {
    let mut layout = default();
    let before = column_ids(&layout, Column::Right);

    collapse_widget(&mut layout, "border-controls").unwrap();

    assert_eq!(column_ids(&layout, Column::Right), before);
    assert!(layout.widget("border-controls").unwrap().collapsed);
}

#[test]
fn test_error_messages() {
    let mut layout = test_layout_small();
    let err = move_widget(&mut layout, "x", Column::Left, 9, Column::Right, 0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "source index 9 is out of range for the left column (2 widgets)"
    );

    let err = "sidebar".parse::<Column>().unwrap_err();
    assert_eq!(err, PlacementError::UnknownColumn("sidebar".to_string()));
}
