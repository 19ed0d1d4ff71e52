//! Store demo: typed changes, selection with dedup, and a tracing sink

use canister::{Merge, Store};

#[derive(Clone, Debug, PartialEq)]
struct CounterState {
    count: i32,
    label: String,
}

#[derive(Default)]
struct CounterPatch {
    count: Option<i32>,
    label: Option<String>,
}

impl Merge for CounterState {
    type Patch = CounterPatch;

    fn merge(&self, patch: CounterPatch) -> Self {
        Self {
            count: patch.count.unwrap_or(self.count),
            label: patch.label.unwrap_or_else(|| self.label.clone()),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Counter Store Demo ===\n");

    let store = Store::new(CounterState {
        count: 0,
        label: "clicks".to_string(),
    });
    store.log_changes();

    // Replays the current count, then follows changes to it only.
    let _count_sub = store.listen_select(
        |state| state.count,
        |count| println!("count is now {count}"),
    );

    println!("Incrementing twice...");
    store.change(CounterPatch {
        count: Some(1),
        ..Default::default()
    });
    store.change_with(|state| CounterState {
        count: state.count + 1,
        label: state.label.clone(),
    });

    // Relabeling does not re-emit the count selection.
    println!("\nRelabeling (count selection stays quiet)...");
    store.change(CounterPatch {
        label: Some("taps".to_string()),
        ..Default::default()
    });

    println!("\nFinal state: {:#?}", store.get());
}
