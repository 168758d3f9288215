use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use tiny_ecs::{ContainerRegistry, Entity};

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct Position(f32, f32, f32);

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct Velocity(f32, f32, f32);

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct Health(u32);

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct Name(String);

fn populated(entities: &[Entity]) -> ContainerRegistry {
    let mut registry = ContainerRegistry::new();
    for (i, &e) in entities.iter().enumerate() {
        registry.container::<Position>().insert(e, Position(1.0, 2.0, 3.0));
        registry.container::<Velocity>().insert(e, Velocity(1.0, 0.0, 0.0));
        if i % 2 == 0 {
            registry.container::<Health>().insert(e, Health(100));
        }
        if i % 3 == 0 {
            registry.container::<Name>().insert(e, Name("Entity".to_string()));
        }
    }
    registry
}

fn remove_all_of_benchmark(c: &mut Criterion) {
    let entities: Vec<Entity> = (0..10_000).map(|_| Entity::new()).collect();
    let mut group = c.benchmark_group("registry");

    group.bench_function("remove_all_of_10k", |b| {
        b.iter_batched(
            || populated(&entities),
            |mut registry| {
                for &e in &entities {
                    registry.remove_all_of(e);
                }
                registry
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("clear_all_10k", |b| {
        b.iter_batched(
            || populated(&entities),
            |mut registry| {
                registry.clear_all();
                registry
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, remove_all_of_benchmark);
criterion_main!(benches);
