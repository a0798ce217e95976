use crate::{
    hit_test::union_bounds,
    render::{create_flat_layout, LayoutId, Part, Rect},
    tests::util::{find_kind, sample_equation},
};

#[test]
fn test_hit_test() {
    let tree = expr!(lit!(1), + lit!(2));
    let children = tree.children(tree.root());
    let layout = create_flat_layout(&tree, 100, 400, 200);

    // Leaves win over the groups containing them
    assert_eq!(layout.hit_test(200, 100).unwrap().id, LayoutId::node(children[1]));
    assert_eq!(layout.hit_test(120, 60).unwrap().id, LayoutId::node(children[0]));

    // The gaps between leaves belong to the group
    assert_eq!(layout.hit_test(160, 100).unwrap().id, LayoutId::node(tree.root()));

    // Edges are inside
    assert_eq!(layout.hit_test(300, 150).unwrap().id, LayoutId::node(children[2]));

    assert!(layout.hit_test(0, 0).is_none());
    assert!(layout.hit_test(301, 100).is_none());
}

#[test]
fn test_hit_test_centres() {
    let tree = sample_equation();
    let layout = create_flat_layout(&tree, 72, 1200, 700);

    for node in layout.iter().filter(|n| n.selectable) {
        let (x, y) = node.bounds.centre();
        let hit = layout.hit_test(x, y).unwrap();

        if node.is_group() {
            // The centre of a group may land on something nested inside it
            assert!(hit.bounds.contains(x, y));
            assert!(hit.bounds.area() <= node.bounds.area());
            assert_eq!(hit.bounds.union(&node.bounds), node.bounds);
        } else {
            assert_eq!(hit.id, node.id);
        }
    }
}

#[test]
fn test_hit_test_ties() {
    // A chain of one operand has exactly the same bounds as that operand, which is drawn later
    let tree = expr!(lit!(7));
    let seven = tree.children(tree.root())[0];
    let layout = create_flat_layout(&tree, 100, 200, 200);

    assert_eq!(layout.nodes()[0].bounds, layout.nodes()[1].bounds);
    assert_eq!(layout.hit_test(100, 100).unwrap().id, LayoutId::node(seven));
}

#[test]
fn test_parentheses_not_hit() {
    let tree = prod!(lit!(2), * expr!(lit!(3), + lit!(4)));
    let expression = find_kind(&tree, "Expression");
    let layout = create_flat_layout(&tree, 100, 1000, 1000);

    // Clicking a bracket selects whatever contains it
    let open = layout.get(LayoutId::part(expression, Part::Open)).unwrap();
    let (x, y) = open.bounds.centre();
    assert_eq!(layout.hit_test(x, y).unwrap().id, LayoutId::node(tree.root()));
}

#[test]
fn test_selection_bounds() {
    let tree = prod!(lit!(2), * expr!(lit!(3), + lit!(4)));
    let expression = find_kind(&tree, "Expression");
    let layout = create_flat_layout(&tree, 100, 1000, 1000);

    let open = layout.get(LayoutId::part(expression, Part::Open)).unwrap().bounds;
    let close = layout.get(LayoutId::part(expression, Part::Close)).unwrap().bounds;
    assert_eq!(
        layout.selection_bounds(expression),
        Some(Rect::new(open.left, open.top, close.right, close.bottom)),
    );

    // A node without brackets is just its own box
    let two = tree.children(tree.root())[0];
    assert_eq!(
        layout.selection_bounds(two),
        Some(layout.get(LayoutId::node(two)).unwrap().bounds),
    );

    assert_eq!(layout.selection_bounds(crate::NodeId::fresh()), None);
}

#[test]
fn test_union_bounds() {
    let tree = expr!(lit!(1), + lit!(2));
    let layout = create_flat_layout(&tree, 100, 400, 200);

    assert_eq!(union_bounds(layout.nodes()[1..].iter()), Some(Rect::new(100, 50, 300, 150)));
    assert_eq!(union_bounds(layout.nodes()[1..2].iter()), Some(Rect::new(100, 50, 156, 150)));
    assert_eq!(union_bounds(layout.nodes()[..0].iter()), None);

    let children = tree.children(tree.root());
    assert_eq!(layout.combined_selection_bounds(&[children[0], children[2]]), Some(Rect::new(100, 50, 300, 150)));
    assert_eq!(layout.combined_selection_bounds(&[children[0]]), Some(Rect::new(100, 50, 156, 150)));
    assert_eq!(layout.combined_selection_bounds(&[]), None);
    assert_eq!(layout.bounds(), Rect::new(100, 50, 300, 150));
}
