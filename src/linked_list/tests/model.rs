extern crate std;

use std::vec::Vec;

use alloc::collections::VecDeque;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::linked_list::{LinkedList, ListError};

const STEPS: usize = 2_000;

fn assert_matches_model(list: &LinkedList<u32>, model: &VecDeque<u32>) {
    list.assert_invariants();
    assert_eq!(list.len(), model.len());
    assert_eq!(list.is_empty(), model.is_empty());
    assert!(list.iter().eq(model.iter()));
}

fn run_random_ops(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut list = LinkedList::new();
    let mut model = VecDeque::new();

    for step in 0..STEPS {
        let value = step as u32;
        match rng.random_range(0..9) {
            0 => {
                list.push_front(value);
                model.push_front(value);
            }
            1 => {
                list.push_back(value);
                model.push_back(value);
            }
            2 => {
                // Reach past both ends to exercise clamping.
                let len = model.len() as i64;
                let index = rng.random_range(-2..=len + 2);
                list.insert(index, value).unwrap();
                let position = index.clamp(0, len) as usize;
                model.insert(position, value);
            }
            3 => assert_eq!(list.pop_front().ok(), model.pop_front()),
            4 => assert_eq!(list.pop_back().ok(), model.pop_back()),
            5 => {
                list.reverse();
                model.make_contiguous().reverse();
            }
            6 => {
                let key = rng.random_range(0..STEPS as u32);
                assert_eq!(list.contains(&key), model.contains(&key));
            }
            7 => {
                let index = rng.random_range(-1..=model.len() as i64) as isize;
                let expected = usize::try_from(index)
                    .ok()
                    .and_then(|position| model.get(position))
                    .ok_or(ListError::IndexOutOfRange {
                        index,
                        len: model.len(),
                    });
                assert_eq!(list.get(index).map(|node| node.value()), expected);
            }
            _ => {
                assert_eq!(list.first().ok(), model.front());
                assert_eq!(list.last().ok(), model.back());
            }
        }
        assert_matches_model(&list, &model);
    }
}

#[test]
fn test_random_ops_match_model() {
    for seed in [1, 7, 42, 1_024] {
        run_random_ops(seed);
    }
}

#[test]
fn test_push_pop_restores_length() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut list: LinkedList<u32> = (0..50).collect();

    for _ in 0..200 {
        let value: u32 = rng.random();
        let before = list.len();

        list.push_front(value);
        assert_eq!(list.pop_front(), Ok(value));
        assert_eq!(list.len(), before);

        list.push_back(value);
        assert_eq!(list.pop_back(), Ok(value));
        assert_eq!(list.len(), before);
    }
    list.assert_invariants();
}

#[test]
fn test_insert_matches_push_at_bounds() {
    let mut rng = StdRng::seed_from_u64(5);
    let source: Vec<u32> = (0..32).map(|_| rng.random_range(0..1_000)).collect();

    let mut inserted = LinkedList::from_sequence(source.iter().copied(), false);
    let mut pushed = inserted.clone();

    for _ in 0..20 {
        let value = rng.random_range(0..1_000);
        let low = -rng.random_range(0..5_i32);
        inserted.insert(low, value).unwrap();
        pushed.push_front(value);

        // `high` must come from the length after the front insert to reach past the tail.
        let high = inserted.len() as i32 + rng.random_range(0..5);
        inserted.insert(high, value).unwrap();
        pushed.push_back(value);
    }

    inserted.assert_invariants();
    assert_eq!(inserted, pushed);
}

#[test]
fn test_sequence_round_trip() {
    let mut rng = StdRng::seed_from_u64(2024);
    for len in [0, 1, 2, 17, 300] {
        let source: Vec<u32> = (0..len).map(|_| rng.random()).collect();

        let list = LinkedList::from_sequence(source.clone(), false);
        list.assert_invariants();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), source);

        let mut reversed = LinkedList::from_sequence(source.clone(), true);
        reversed.assert_invariants();
        assert!(reversed.iter().eq(source.iter().rev()));

        reversed.reverse();
        assert_eq!(reversed, list);
    }
}
