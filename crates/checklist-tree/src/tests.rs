//! Pipeline Tests
//!
//! Store mutation -> publication -> re-flatten -> visible rows, the same
//! path a UI event takes.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::{
    parent_of, ChecklistConfig, ChecklistSelection, ExpansionState, FlatViewNode, NodeId, TreeFlattener,
    TreeStore,
};

/// Store with a subscriber that re-flattens on every publication
fn wired_store() -> (TreeStore, Rc<RefCell<TreeFlattener>>, Rc<RefCell<usize>>) {
    let mut store = ChecklistConfig::default().build_store().expect("default seed");
    let flattener = Rc::new(RefCell::new(TreeFlattener::new()));
    flattener.borrow_mut().flatten(store.roots());

    let publications = Rc::new(RefCell::new(0));
    {
        let flattener = flattener.clone();
        let publications = publications.clone();
        store.subscribe(move |roots| {
            flattener.borrow_mut().flatten(roots);
            *publications.borrow_mut() += 1;
        });
    }
    (store, flattener, publications)
}

fn row(flattener: &Rc<RefCell<TreeFlattener>>, id: NodeId) -> Arc<FlatViewNode> {
    flattener.borrow().flat_node(id).cloned().expect("row present")
}

#[test]
fn test_insert_shows_up_after_publication() {
    let (mut store, flattener, publications) = wired_store();
    let groceries = store.roots()[0].id;

    let id = store.insert_item(groceries, "Coffee").unwrap();

    assert_eq!(*publications.borrow(), 1);
    let coffee = row(&flattener, id);
    assert_eq!(coffee.depth, 1);
    assert_eq!(coffee.label, "Coffee");

    let flat = flattener.borrow().nodes().to_vec();
    assert_eq!(parent_of(&flat, &coffee).unwrap().id, groceries);
}

#[test]
fn test_untouched_rows_keep_identity_across_publications() {
    let (mut store, flattener, _) = wired_store();
    let before = flattener.borrow().nodes().to_vec();

    let renamed = store.roots()[1].children.as_ref().unwrap()[0].id;
    store.update_label(renamed, "Cook lunch");

    let after = flattener.borrow().nodes().to_vec();
    assert_eq!(before.len(), after.len());
    for (a, b) in before.iter().zip(&after) {
        assert_eq!(Arc::ptr_eq(a, b), a.id != renamed, "row {}", a.id);
    }
}

#[test]
fn test_placeholder_then_rename() {
    let (mut store, flattener, _) = wired_store();
    let list = store.insert_root();
    let placeholder = store.insert_item(list, "").unwrap();

    // Second "add" while the placeholder is a fresh item still works: items
    // carry an empty children sequence
    assert!(store.insert_item(placeholder, "").is_some());

    store.update_label(placeholder, "Passport");
    let flat = flattener.borrow().nodes().to_vec();
    let passport = flat.iter().find(|n| n.id == placeholder).unwrap();
    assert_eq!(passport.label, "Passport");
    assert!(passport.expandable);
    assert_eq!(parent_of(&flat, passport).unwrap().id, list);
}

#[test]
fn test_delete_prunes_view_state() {
    let (mut store, flattener, _) = wired_store();
    let mut expansion = ExpansionState::new();
    let mut selection = ChecklistSelection::new();

    let groceries = store.roots()[0].id;
    expansion.expand(groceries);
    selection.select(groceries);

    store.remove_root(groceries);

    let flat = flattener.borrow().nodes().to_vec();
    expansion.retain_live(&flat);
    selection.retain_live(&flat);
    assert!(expansion.is_empty());
    assert!(selection.is_empty());
    assert!(flattener.borrow().flat_node(groceries).is_none());
    assert_eq!(flat.iter().filter(|n| n.depth == 0).count(), 1);
}

#[test]
fn test_visible_rows_follow_expansion() {
    let (store, flattener, _) = wired_store();
    let mut expansion = ExpansionState::new();

    let collapsed = flattener.borrow().visible(expansion.predicate());
    assert_eq!(collapsed.len(), store.roots().len());

    expansion.expand_all(flattener.borrow().nodes());
    let all = flattener.borrow().visible(expansion.predicate());
    assert_eq!(all.len(), store.len());
}

#[test]
fn test_check_folder_from_visible_row() {
    let (store, flattener, _) = wired_store();
    let flat = flattener.borrow().nodes().to_vec();
    let mut selection = ChecklistSelection::new();

    let reminders = row(&flattener, store.roots()[1].id);
    selection.toggle_item(&flat, &reminders);

    assert_eq!(selection.len(), 4);
    assert!(selection.descendants_all_selected(&flat, &reminders));
}

#[test]
fn test_insert_under_checked_folder_unchecks_it() {
    let (mut store, flattener, _) = wired_store();
    let mut selection = ChecklistSelection::new();
    let reminders = store.roots()[1].id;
    {
        let flat = flattener.borrow().nodes().to_vec();
        selection.toggle_item(&flat, &row(&flattener, reminders));
    }
    assert!(selection.is_selected(reminders));

    let milk = store.insert_item(reminders, "Buy milk").unwrap();
    let flat = flattener.borrow().nodes().to_vec();
    selection.refresh_ancestors(&flat, milk);

    let folder = row(&flattener, reminders);
    assert!(!selection.is_selected(reminders));
    assert!(!selection.descendants_all_selected(&flat, &folder));
    assert!(selection.descendants_partially_selected(&flat, &folder));
    assert_eq!(selection.len(), 3);
}

#[test]
fn test_emptied_folder_is_unchecked() {
    let (mut store, flattener, _) = wired_store();
    let mut selection = ChecklistSelection::new();
    let list = store.insert_root();
    let only = store.insert_item(list, "Passport").unwrap();
    {
        let flat = flattener.borrow().nodes().to_vec();
        selection.toggle_item(&flat, &row(&flattener, list));
    }
    assert!(selection.is_selected(list) && selection.is_selected(only));

    store.remove(only);
    let flat = flattener.borrow().nodes().to_vec();
    selection.retain_live(&flat);
    let folder = row(&flattener, list);
    selection.check_root(&flat, &folder);

    // A folder with no descendants never counts as complete
    assert!(!selection.is_selected(list));
    assert!(selection.is_empty());
}
