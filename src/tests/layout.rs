use alloc::{string::ToString, vec, vec::Vec};

use crate::{
    metrics::get_metrics,
    render::{create_flat_layout, create_flat_layout_with, LayoutConfig, LayoutId, Part, Payload, Rect},
    renderers::{DrawCall, RecordingSurface},
    tests::util::{find_kind, init_logging, sample_equation},
};

#[test]
fn test_metrics() {
    let metrics = get_metrics("2", 100);
    assert_eq!((metrics.width, metrics.height, metrics.baseline), (56, 100, 75));

    assert_eq!(get_metrics("+", 100).width, 58);
    assert_eq!(get_metrics("2", 72).width, 40);
    assert_eq!(get_metrics("12", 100).width, 111);

    // Scaling is linear
    assert_eq!(get_metrics("x", 200).width, 2 * get_metrics("x", 100).width);
}

#[test]
fn test_single_leaf() {
    let tree = lit!(2);
    let layout = create_flat_layout(&tree, 100, 200, 200);

    assert_eq!(layout.len(), 1);
    let node = &layout.nodes()[0];
    assert_eq!(node.id, LayoutId::node(tree.root()));
    assert_eq!(node.bounds, Rect::new(72, 50, 128, 150));
    assert!(node.selectable);
    assert!(node.circle);
    assert_eq!(node.payload, Payload::Text { text: "2".to_string(), font_size: 100, baseline: 75 });
}

#[test]
fn test_expression() {
    init_logging();

    let tree = expr!(lit!(1), + lit!(2));
    let children = tree.children(tree.root());
    let layout = create_flat_layout(&tree, 100, 400, 200);

    // Groups come before their contents
    assert_eq!(
        layout.iter().map(|n| n.id).collect::<Vec<_>>(),
        vec![
            LayoutId::node(tree.root()),
            LayoutId::node(children[0]),
            LayoutId::node(children[1]),
            LayoutId::node(children[2]),
        ],
    );
    assert_eq!(
        layout.iter().map(|n| n.bounds).collect::<Vec<_>>(),
        vec![
            Rect::new(100, 50, 300, 150),
            Rect::new(100, 50, 156, 150),
            Rect::new(171, 50, 229, 150),
            Rect::new(244, 50, 300, 150),
        ],
    );
    assert_eq!(layout.group_contents(0).len(), 3);
    assert!(layout.group_contents(1).is_empty());

    // Operators are selectable, but aren't circled
    let plus = layout.get(LayoutId::node(children[1])).unwrap();
    assert!(plus.selectable);
    assert!(!plus.circle);
}

#[test]
fn test_config() {
    let tree = expr!(lit!(1), + lit!(2));
    let config = LayoutConfig { gap: 0, ..LayoutConfig::default() };
    let layout = create_flat_layout_with(&tree, 100, 400, 200, &config);

    assert_eq!(layout.nodes()[0].bounds.width(), 56 + 58 + 56);
}

#[test]
fn test_fraction() {
    let tree = frac!(lit!(1), lit!(2));
    let root = tree.root();
    let layout = create_flat_layout(&tree, 100, 81, 226);

    let numerator = layout.get(LayoutId::node(tree.children(root)[0])).unwrap();
    let bar = layout.get(LayoutId::part(root, Part::Bar)).unwrap();
    let denominator = layout.get(LayoutId::node(tree.children(root)[1])).unwrap();

    assert_eq!(layout.nodes()[0].bounds, Rect::new(0, 0, 81, 226));
    assert_eq!(numerator.bounds, Rect::new(12, 0, 68, 100));
    assert_eq!(bar.bounds, Rect::new(0, 110, 81, 116));
    assert_eq!(denominator.bounds, Rect::new(12, 126, 68, 226));
    assert_eq!(bar.payload, Payload::Bar);
    assert!(bar.selectable);
}

#[test]
fn test_fraction_alignment() {
    // The fraction bar lines up with the middle of the text either side of it
    let tree = expr!(lit!(1), + frac!(lit!(1), lit!(2)));
    let layout = create_flat_layout(&tree, 100, 1000, 1000);

    let fraction = find_kind(&tree, "Fraction");
    let plus = layout.get(LayoutId::node(tree.children(tree.root())[1])).unwrap();
    let bar = layout.get(LayoutId::part(fraction, Part::Bar)).unwrap();
    assert_eq!(plus.bounds.centre().1, bar.bounds.centre().1);
}

#[test]
fn test_parentheses() {
    let tree = prod!(lit!(2), * expr!(lit!(3), + lit!(4)));
    let expression = find_kind(&tree, "Expression");
    let layout = create_flat_layout(&tree, 100, 1000, 1000);

    let open = layout.get(LayoutId::part(expression, Part::Open)).unwrap();
    let close = layout.get(LayoutId::part(expression, Part::Close)).unwrap();
    let group = layout.get(LayoutId::node(expression)).unwrap();

    assert!(!open.selectable);
    assert!(!close.selectable);
    assert_eq!(open.bounds.right, group.bounds.left);
    assert_eq!(close.bounds.left, group.bounds.right);
    assert_eq!(open.bounds.height(), group.bounds.height() + 10);
    assert!(open.bounds.top < group.bounds.top);
    assert_eq!(LayoutId::part(expression, Part::Open).to_string(), alloc::format!("{}:open", expression));

    // Nothing else is parenthesised
    assert_eq!(layout.iter().filter(|n| matches!(n.payload, Payload::Parenthesis { .. })).count(), 2);
}

#[test]
fn test_sample_equation() {
    let tree = sample_equation();
    let layout = create_flat_layout(&tree, 72, 1200, 700);

    // Four groups are parenthesised, and every tree node has a layout node of its own
    let parens = layout.iter().filter(|n| matches!(n.payload, Payload::Parenthesis { .. })).count();
    assert_eq!(parens, 8);
    assert!(layout.get(LayoutId::part(tree.root(), Part::Equals)).is_some());
    for id in tree.ids() {
        assert!(layout.get(LayoutId::node(id)).is_some());
    }

    // The whole equation is centred
    let bounds = layout.nodes()[0].bounds;
    assert!((bounds.left - (1200 - bounds.right)).abs() <= 1);
    assert!((bounds.top - (700 - bounds.bottom)).abs() <= 1);

    // Layout is a pure function of its inputs
    assert_eq!(layout, create_flat_layout(&tree, 72, 1200, 700));
}

#[test]
fn test_negation() {
    let tree = neg!(ident!(x));
    let layout = create_flat_layout(&tree, 100, 1000, 1000);

    let sign = layout.get(LayoutId::part(tree.root(), Part::Sign)).unwrap();
    let x = layout.get(LayoutId::node(tree.children(tree.root())[0])).unwrap();
    assert_eq!(sign.bounds.right, x.bounds.left);
    assert!(sign.selectable);
    assert!(!sign.circle);
}

#[test]
fn test_render() {
    let tree = frac!(lit!(1), lit!(2));
    let layout = create_flat_layout(&tree, 100, 81, 226);

    let mut surface = RecordingSurface::new();
    layout.render(&mut surface);

    assert_eq!(surface.texts(), vec!["1", "2"]);
    assert_eq!(
        surface.calls,
        vec![
            DrawCall::Text { text: "1".to_string(), x: 12, y: 75, font_size: 100 },
            DrawCall::Line { from: (0, 113), to: (81, 113), thickness: 6 },
            DrawCall::Text { text: "2".to_string(), x: 12, y: 201, font_size: 100 },
        ],
    );

    let tree = prod!(lit!(2), * expr!(lit!(3), + lit!(4)));
    let layout = create_flat_layout(&tree, 100, 1000, 1000);
    let mut surface = RecordingSurface::new();
    layout.render(&mut surface);
    assert_eq!(surface.calls.iter().filter(|c| matches!(c, DrawCall::Curve { .. })).count(), 2);
}

#[test]
fn test_render_selection() {
    let tree = lit!(2);
    let layout = create_flat_layout(&tree, 100, 200, 200);
    let bounds = layout.nodes()[0].bounds;

    let mut surface = RecordingSurface::new();
    layout.render_selection(&mut surface, bounds, true);
    layout.render_selection(&mut surface, bounds, false);

    assert_eq!(
        surface.calls,
        vec![
            DrawCall::Circle { centre: (100, 100), radius: 36 },
            DrawCall::RoundRect { rect: Rect::new(64, 42, 136, 158), radius: 8 },
        ],
    );
}
