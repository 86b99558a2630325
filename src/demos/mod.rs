//! Demonstration steps. Each step constructs the entities it shows off and
//! writes its observations to the shared [`Console`].

pub mod inheritance;
pub mod initialization;
pub mod lifecycle;
pub mod market;
pub mod observers;
pub mod semantics;

use crate::console::Console;

pub const INHERITANCE: &str = "Inheritance";
pub const INITIALIZATION: &str = "Initialization";
pub const LIFECYCLE: &str = "Deinitialization";
pub const FALLIBLE: &str = "Failable initializer";
pub const SEALED: &str = "Final class";
pub const OBSERVERS: &str = "Property observers";
pub const MUTATION: &str = "Mutating methods";
pub const SEMANTICS: &str = "Structs vs classes";

/// Run every demonstration in order.
pub fn run_all(console: &Console) {
    tracing::info!("running demonstrations");

    console.section(INHERITANCE);
    inheritance::run(console);

    console.section(INITIALIZATION);
    initialization::run(console);

    console.section(LIFECYCLE);
    lifecycle::run(console);

    console.section(FALLIBLE);
    market::run_fallible(console);

    console.section(SEALED);
    market::run_sealed(console);

    console.section(OBSERVERS);
    observers::run(console);

    console.section(MUTATION);
    semantics::run_mutation(console);

    console.section(SEMANTICS);
    semantics::run_value_vs_reference(console);

    tracing::info!("demonstrations finished: {} lines", console.lines().len());
}
