use alloc::string::ToString;

use crate::{
    Session, Tree,
    error::TransformError,
    node::NodeId,
    render::{Dimension, LayoutId},
    renderers::{DrawCall, RecordingSurface},
    tests::util::{find_literal, init_logging},
    transform::{DivideBothSides, RewriteAsNegation},
};

fn centre_of(session: &Session, id: NodeId) -> (Dimension, Dimension) {
    session.layout().get(LayoutId::node(id)).unwrap().bounds.centre()
}

#[test]
fn test_click() {
    let tree = eqn!(lit!(6), lit!(2));
    let six = find_literal(&tree, 6);
    let mut session = Session::new(tree, 72, 1200, 700);

    let (x, y) = centre_of(&session, six);
    assert_eq!(session.click(x, y), Some(six));
    assert_eq!(session.selections().len(), 1);

    // Clicking again deselects
    assert_eq!(session.click(x, y), Some(six));
    assert!(session.selections().is_empty());

    // Clicking nothing clears everything
    session.click(x, y);
    assert_eq!(session.click(0, 0), None);
    assert!(session.selections().is_empty());
}

#[test]
fn test_node_rule() {
    init_logging();

    let tree = eqn!(prod!(lit!(-1), * lit!(5)), ident!(x));
    let minus_one = find_literal(&tree, -1);
    let before = tree.clone();
    let mut session = Session::new(tree, 72, 1200, 700);

    let (x, y) = centre_of(&session, minus_one);
    session.click(x, y);
    let rules = session.applicable_node_rules();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].label(), "rewrite as negation");

    let old_layout = session.layout().clone();
    let mut animation = session.apply_node_rule(rules[0], minus_one).unwrap();
    assert_eq!(session.tree().to_string(), "-5 = x");
    assert_eq!(session.history(), &[before.clone()]);
    assert!(session.selections().is_empty());
    assert_eq!(animation.target(), session.layout());
    assert_ne!(&old_layout, session.layout());

    let mut frames = 0;
    animation.start(|_| frames += 1);
    assert_eq!(frames, 30);

    // Applying a rule where it doesn't fit changes nothing
    let root = session.tree().root();
    assert!(matches!(
        session.apply_node_rule(&RewriteAsNegation, root),
        Err(TransformError::Precondition(_)),
    ));
    assert_eq!(session.history().len(), 1);

    // Undo restores the previous tree and layout
    assert!(session.undo().is_some());
    assert_eq!(session.tree(), &before);
    assert_eq!(session.layout(), &old_layout);
    assert!(session.undo().is_none());
}

#[test]
fn test_selection_rule() {
    let tree = eqn!(lit!(6), lit!(2));
    let six = find_literal(&tree, 6);
    let two = find_literal(&tree, 2);
    let mut session = Session::new(tree, 72, 1200, 700);

    let (x, y) = centre_of(&session, six);
    session.click(x, y);
    let (x, y) = centre_of(&session, two);
    session.click(x, y);

    let rules = session.applicable_selection_rules();
    assert_eq!(rules.len(), 1);
    assert!(session.applicable_node_rules().is_empty());

    let request = session.input_request(rules[0]).unwrap();
    assert_eq!(request.math.to_string(), "6");

    // Zero is rejected before anything happens
    assert_eq!(
        session.apply_selection_rule(&DivideBothSides, &lit!(0)).map(|_| ()),
        Err(TransformError::InvalidInput("divide both sides")),
    );
    assert_eq!(session.tree().to_string(), "6 = 2");
    assert_eq!(session.selections().len(), 2);

    session.apply_selection_rule(&DivideBothSides, &lit!(2)).unwrap();
    assert_eq!(session.tree().to_string(), "6 / 2 = 2 / 2");
    assert!(session.tree().check_invariants().is_ok());
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_render() {
    let tree: Tree = eqn!(lit!(6), ident!(y));
    let six = find_literal(&tree, 6);
    let mut session = Session::new(tree, 72, 1200, 700);

    let (x, y) = centre_of(&session, six);
    session.click(x, y);

    let mut surface = RecordingSurface::new();
    session.render(&mut surface);

    // The halo goes underneath
    assert!(matches!(surface.calls[0], DrawCall::Circle { .. }));
    assert_eq!(surface.texts(), alloc::vec!["6", "=", "y"]);

    // One halo per selection
    let y_id = session.tree().children(session.tree().root())[1];
    let (x, y) = centre_of(&session, y_id);
    session.click(x, y);
    let mut surface = RecordingSurface::new();
    session.render(&mut surface);
    let halos = surface.calls.iter().take_while(|c| !matches!(c, DrawCall::Text { .. })).count();
    assert_eq!(halos, 2);
}
