//! EntityStore demo: collection mutations with status bookkeeping

use canister::{EntityState, EntityStore, Status};

#[derive(Clone, Debug, PartialEq)]
struct TodoItem {
    id: usize,
    text: String,
    completed: bool,
}

fn main() {
    println!("=== Todo Entities Demo ===\n");

    let store: EntityStore<TodoItem> = EntityStore::new(EntityState::default());

    // Subscribe to state changes
    let _sub = store.listen(|state: &EntityState<TodoItem>| {
        println!(
            "{} todos, {} active (status: {:?})",
            state.entities.len(),
            state.entities.iter().filter(|t| !t.completed).count(),
            state.status,
        );
    });

    println!("Loading todos...");
    store.set_action("GET_ALL");
    store.add_many(vec![
        TodoItem {
            id: 1,
            text: "Learn Canister".to_string(),
            completed: false,
        },
        TodoItem {
            id: 2,
            text: "Ship it".to_string(),
            completed: false,
        },
    ]);
    store.set_status(Status::Success);

    println!("\nCompleting todo 1...");
    store.update(
        |t| t.id == 1,
        TodoItem {
            id: 1,
            text: "Learn Canister".to_string(),
            completed: true,
        },
    );

    println!("\nRemoving todo 2...");
    store.remove(|t| t.id == 2);

    println!("\nFinal state: {:#?}", store.get());
}
