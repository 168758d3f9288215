//! Property tests for the dense storage bookkeeping.

use std::collections::HashMap;

use proptest::prelude::*;
use tiny_ecs::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(usize, u32),
    Remove(usize),
    Clear,
    Sort,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0..16usize, any::<u32>()).prop_map(|(e, v)| Op::Insert(e, v)),
        4 => (0..16usize).prop_map(Op::Remove),
        1 => Just(Op::Clear),
        1 => Just(Op::Sort),
    ]
}

fn assert_consistent(container: &ComponentContainer<u32>, pool: &[Entity], model: &HashMap<Entity, u32>) {
    assert_eq!(container.len(), container.entities().len());
    assert_eq!(container.len(), container.components().len());
    assert_eq!(container.len(), model.len());
    assert_eq!(container.shadowed_len(), 0);

    for &e in pool {
        match model.get(&e) {
            Some(&value) => {
                let slot = container.index_of(e).unwrap();
                assert_eq!(container.entities()[slot], e);
                assert_eq!(container.components()[slot], value);
                assert_eq!(*container.get(e), value);
            }
            None => {
                assert!(!container.has(e));
                assert!(container.index_of(e).is_none());
            }
        }
    }
}

proptest! {
    #[test]
    fn storage_stays_consistent(ops in prop::collection::vec(op(), 0..200)) {
        let pool: Vec<Entity> = (0..16).map(|_| Entity::new()).collect();
        let mut container = ComponentContainer::new();
        let mut model = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(i, value) => {
                    let e = pool[i];
                    let inserted = container.try_insert(e, value).is_ok();
                    prop_assert_eq!(inserted, !model.contains_key(&e));
                    model.entry(e).or_insert(value);
                }
                Op::Remove(i) => {
                    let e = pool[i];
                    prop_assert_eq!(container.remove(e), model.remove(&e));
                }
                Op::Clear => {
                    container.clear();
                    model.clear();
                }
                Op::Sort => {
                    container.sort_by(|a, b| a.cmp(&b));
                    prop_assert!(container.entities().windows(2).all(|w| w[0] < w[1]));
                }
            }
            assert_consistent(&container, &pool, &model);
        }
    }

    #[test]
    fn remove_moves_last_entry_into_freed_slot(len in 2..32usize, pick in 0..31usize) {
        let pick = pick % (len - 1);
        let pool: Vec<Entity> = (0..len).map(|_| Entity::new()).collect();
        let mut container = ComponentContainer::new();
        for (i, &e) in pool.iter().enumerate() {
            container.insert(e, i);
        }

        let last = pool[len - 1];
        container.remove(pool[pick]);

        prop_assert_eq!(container.len(), len - 1);
        prop_assert_eq!(container.entities()[pick], last);
        prop_assert_eq!(container.index_of(last), Some(pick));
        prop_assert_eq!(*container.get(last), len - 1);
    }
}
