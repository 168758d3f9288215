//! Example: animals built from components instead of a class hierarchy
//!
//! A turtle both walks and swims. With inheritance that needs a diamond; here
//! it is just one more component on the same entity.
//!
//! Run with `RUST_LOG=debug cargo run --example zoo --features profiling` to
//! see the registry's tracing output.

use tiny_ecs::prelude::*;

struct Name {
    name: String,
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[allow(dead_code)]
struct Swims {
    swim_speed: f32,
}

impl Default for Swims {
    fn default() -> Self {
        Self { swim_speed: 3.0 }
    }
}

#[allow(dead_code)]
struct Walks {
    walk_speed: f32,
}

impl Default for Walks {
    fn default() -> Self {
        Self { walk_speed: 2.0 }
    }
}

fn setup_profiling_subscriber() {
    #[cfg(feature = "profiling")]
    {
        use tracing_subscriber::fmt;
        use tracing_subscriber::prelude::*;
        use tracing_subscriber::{EnvFilter, Registry};

        let subscriber = Registry::default()
            .with(EnvFilter::from_default_env())
            .with(fmt::layer().with_target(false));

        if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("could not install tracing subscriber: {err}");
        }
    }
}

fn main() {
    setup_profiling_subscriber();

    let mut registry = ContainerRegistry::new();

    // Create a fish
    let fish = Entity::new();
    registry.container::<Name>().insert(fish, Name::from("Fish"));
    registry.container::<Swims>().insert(fish, Swims::default());

    // Create a horse
    let horse = Entity::new();
    registry.container::<Name>().emplace(horse, "Horse");
    registry.container::<Walks>().insert(horse, Walks::default());

    // Create a turtle
    let turtle = Entity::new();
    registry.container::<Name>().emplace(turtle, "Turtle");
    registry.container::<Walks>().insert(turtle, Walks::default());
    registry.container::<Swims>().insert(turtle, Swims::default());

    // Renaming has to go through the stored value, not a copy of it.
    let fish_name = registry.container::<Name>().get_mut(fish);
    fish_name.name.insert_str(0, "Big ");

    println!("----- ECS debug output -----");
    let names = registry.get::<Name>();
    let swims = registry.get::<Swims>();
    let walks = registry.get::<Walks>();
    if let (Some(names), Some(swims), Some(walks)) = (names, swims, walks) {
        for (animal, name) in names {
            println!(
                "{} {} swim and {} walk",
                name.name,
                if swims.has(animal) { "can" } else { "can't" },
                if walks.has(animal) { "can" } else { "can't" },
            );
        }
    }

    // Inspect the ECS state
    RegistryInspector::print_all(&registry);
    RegistryInspector::print_of(&registry, turtle);

    // The horse leaves the zoo
    registry.remove_all_of(horse);
    RegistryInspector::print_all(&registry);

    // Clearing the ECS before exit
    registry.clear_all();
}
