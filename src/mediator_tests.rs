use super::*;
use crate::model::{ShoppingList, Subscription};
use std::cell::Cell;

fn setup() -> (Mediator, ListId) {
    let model: SharedModel = Rc::new(RefCell::new(ShoppingModel::new()));
    let list = model.borrow_mut().add_list("Wocheneinkauf");
    (Mediator::new(model), list)
}

fn counting(mediator: &Mediator) -> (Rc<Cell<usize>>, Subscription) {
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    let sub = mediator
        .model()
        .borrow_mut()
        .subscribe(Rc::new(move |_: &[ShoppingList]| seen.set(seen.get() + 1)));
    (calls, sub)
}

// ===== Validation =====

#[test]
fn create_list_trims_name() {
    let (mediator, _) = setup();
    let outcome = mediator.dispatch(Command::CreateList {
        name: "  Party  ".to_string(),
    });

    let Outcome::Applied(Effect::ListCreated { list, name }) = outcome else {
        panic!("expected ListCreated, got {outcome:?}");
    };
    assert_eq!(name, "Party");
    assert_eq!(mediator.model().borrow().list(list).unwrap().name, "Party");
}

#[test]
fn blank_list_name_is_rejected_without_notifying() {
    let (mediator, _) = setup();
    let (calls, _sub) = counting(&mediator);

    let outcome = mediator.dispatch(Command::CreateList {
        name: "   ".to_string(),
    });

    assert_eq!(outcome, Outcome::Rejected(ValidationError::EmptyListName));
    assert_eq!(calls.get(), 0);
    assert_eq!(mediator.model().borrow().lists().len(), 1);
}

#[test]
fn blank_rename_is_rejected() {
    let (mediator, list) = setup();
    let outcome = mediator.dispatch(Command::RenameList {
        list,
        name: String::new(),
    });
    assert_eq!(outcome, Outcome::Rejected(ValidationError::EmptyListName));
    assert_eq!(mediator.model().borrow().list(list).unwrap().name, "Wocheneinkauf");
}

#[test]
fn blank_item_name_is_rejected() {
    let (mediator, list) = setup();
    let outcome = mediator.dispatch(Command::AddItem {
        list,
        draft: ItemDraft::named(" \t"),
    });
    assert_eq!(outcome, Outcome::Rejected(ValidationError::EmptyItemName));
    assert!(mediator.model().borrow().list(list).unwrap().items.is_empty());
}

#[test]
fn add_item_cleans_fields() {
    let (mediator, list) = setup();
    let outcome = mediator.dispatch(Command::AddItem {
        list,
        draft: ItemDraft::named(" Tofu ")
            .with_category(" Fleischalternativen ")
            .with_description(" bio "),
    });
    assert!(outcome.is_applied());

    let model = mediator.model().borrow();
    let item = &model.list(list).unwrap().items[0];
    assert_eq!(item.name, "Tofu");
    assert_eq!(item.category, "fleischalternativen");
    assert_eq!(item.description, "bio");
}

#[test]
fn blank_participant_is_rejected() {
    let (mediator, list) = setup();
    let outcome = mediator.dispatch(Command::ShareList {
        list,
        participant: "  ".to_string(),
    });
    assert_eq!(outcome, Outcome::Rejected(ValidationError::EmptyParticipant));
}

#[test]
fn blank_category_is_rejected() {
    let (mediator, _) = setup();
    let outcome = mediator.dispatch(Command::AddCategory {
        name: " ".to_string(),
    });
    assert_eq!(outcome, Outcome::Rejected(ValidationError::EmptyCategory));
}

#[test]
fn add_category_reports_normalized_name() {
    let (mediator, _) = setup();
    let outcome = mediator.dispatch(Command::AddCategory {
        name: " Snacks ".to_string(),
    });
    assert_eq!(
        outcome,
        Outcome::Applied(Effect::CategoryAdded {
            name: "snacks".to_string()
        })
    );
}

// ===== Confirmation flow =====

#[test]
fn delete_list_asks_before_applying() {
    let (mediator, list) = setup();
    let (calls, _sub) = counting(&mediator);

    let outcome = mediator.dispatch(Command::DeleteList { list });
    let Outcome::NeedsConfirmation(request) = outcome else {
        panic!("expected confirmation, got {outcome:?}");
    };
    assert_eq!(request.prompt(), "Delete the list \"Wocheneinkauf\"?");
    assert_eq!(calls.get(), 0, "nothing happens before confirming");

    let outcome = mediator.confirm(request);
    assert!(matches!(outcome, Outcome::Applied(Effect::ListDeleted { .. })));
    assert!(mediator.model().borrow().lists().is_empty());
    assert_eq!(calls.get(), 1);
}

#[test]
fn delete_item_names_the_item_in_the_prompt() {
    let (mediator, list) = setup();
    let _ = mediator.dispatch(Command::AddItem {
        list,
        draft: ItemDraft::named("Reis"),
    });

    let outcome = mediator.dispatch(Command::DeleteItem { list, index: 0 });
    let Outcome::NeedsConfirmation(request) = outcome else {
        panic!("expected confirmation, got {outcome:?}");
    };
    assert_eq!(request.prompt(), "Delete \"Reis\" from the list?");

    let outcome = mediator.confirm(request);
    assert_eq!(
        outcome,
        Outcome::Applied(Effect::ItemDeleted {
            list,
            name: "Reis".to_string()
        })
    );
}

#[test]
fn share_list_asks_with_trimmed_participant() {
    let (mediator, list) = setup();
    let outcome = mediator.dispatch(Command::ShareList {
        list,
        participant: " Anna ".to_string(),
    });
    assert_eq!(
        outcome,
        Outcome::NeedsConfirmation(ConfirmRequest::ShareList {
            list,
            participant: "Anna".to_string()
        })
    );
}

#[test]
fn disabled_confirmation_applies_immediately() {
    let (mediator, list) = setup();
    let mediator = mediator.with_confirmation(false);

    let outcome = mediator.dispatch(Command::ShareList {
        list,
        participant: "Ben".to_string(),
    });
    assert!(matches!(
        outcome,
        Outcome::Applied(Effect::ListShared { added: true, .. })
    ));
    assert_eq!(
        mediator.model().borrow().list(list).unwrap().participants,
        vec!["Ben".to_string()]
    );
}

// ===== Failures =====

#[test]
fn unknown_list_fails_without_asking() {
    let (mediator, _) = setup();
    let missing = ListId::new(42);
    assert_eq!(
        mediator.dispatch(Command::DeleteList { list: missing }),
        Outcome::Failed(ModelError::ListNotFound(missing))
    );
    assert_eq!(
        mediator.dispatch(Command::MarkListComplete { list: missing }),
        Outcome::Failed(ModelError::ListNotFound(missing))
    );
}

#[test]
fn delete_item_out_of_range_fails() {
    let (mediator, list) = setup();
    assert_eq!(
        mediator.dispatch(Command::DeleteItem { list, index: 3 }),
        Outcome::Failed(ModelError::ItemIndexOutOfRange {
            list,
            index: 3,
            len: 0
        })
    );
}

#[test]
fn confirm_after_list_vanished_fails() {
    let (mediator, list) = setup();
    let Outcome::NeedsConfirmation(request) = mediator.dispatch(Command::DeleteList { list })
    else {
        panic!("expected confirmation");
    };
    let _ = mediator.model().borrow_mut().delete_list(list);

    assert_eq!(
        mediator.confirm(request),
        Outcome::Failed(ModelError::ListNotFound(list))
    );
}

// ===== Status transitions through the mediator =====

#[test]
fn toggling_last_open_item_completes_list() {
    let (mediator, list) = setup();
    let Outcome::Applied(Effect::ItemAdded { item, .. }) = mediator.dispatch(Command::AddItem {
        list,
        draft: ItemDraft::named("Banane"),
    }) else {
        panic!("expected ItemAdded");
    };

    let outcome = mediator.dispatch(Command::ToggleItem { list, item });
    assert_eq!(
        outcome,
        Outcome::Applied(Effect::ItemToggled {
            list,
            item,
            completed: true
        })
    );
    assert!(mediator.model().borrow().list(list).unwrap().completed);

    let _ = mediator.dispatch(Command::ReopenList { list });
    let model = mediator.model().borrow();
    let reopened = model.list(list).unwrap();
    assert!(!reopened.completed);
    assert!(!reopened.items[0].completed);
}

#[test]
fn update_item_overwrites_fields() {
    let (mediator, list) = setup();
    let Outcome::Applied(Effect::ItemAdded { item, .. }) = mediator.dispatch(Command::AddItem {
        list,
        draft: ItemDraft::named("Nudeln"),
    }) else {
        panic!("expected ItemAdded");
    };

    let outcome = mediator.dispatch(Command::UpdateItem {
        list,
        item,
        draft: ItemDraft::named("Vollkornnudeln").with_quantity(2.0, "kg"),
    });
    assert_eq!(outcome, Outcome::Applied(Effect::ItemUpdated { list, item }));

    let model = mediator.model().borrow();
    let updated = &model.list(list).unwrap().items[0];
    assert_eq!(updated.name, "Vollkornnudeln");
    assert_eq!(updated.amount_label(), "2 kg");
}

#[test]
fn effect_messages_read_naturally() {
    let shared = Effect::ListShared {
        list: ListId::new(1),
        participant: "Anna".to_string(),
        added: false,
    };
    assert_eq!(shared.to_string(), "Already shared with Anna");
    let toggled = Effect::ItemToggled {
        list: ListId::new(1),
        item: ItemId::new(1),
        completed: true,
    };
    assert_eq!(toggled.to_string(), "Item checked");
}
