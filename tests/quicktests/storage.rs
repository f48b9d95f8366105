use password_storage::{Attribute, Password, PasswordStorage, Record, StorageError};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

fn pw(occurrence: u8) -> Password {
    pw_with_strength(occurrence, 0)
}

fn pw_with_strength(occurrence: u8, strength: u8) -> Password {
    Password::new(
        format!("pw{}", occurrence),
        u32::from(occurrence),
        u32::from(strength),
    )
}

fn build(xs: &[u8]) -> PasswordStorage<Password> {
    let mut storage = PasswordStorage::new(Attribute::Occurrence);
    for x in xs {
        // Repeated values are rejected, which is fine here.
        let _ = storage.insert(pw(*x));
    }
    storage
}

/// Applies a set of operations to a tree and a `BTreeMap` side by side,
/// checking after every step that the two agree and the tree is still a
/// valid BST.
fn do_ops(
    ops: &[Op],
    storage: &mut PasswordStorage<Password>,
    map: &mut BTreeMap<u8, u8>,
) -> bool {
    for op in ops {
        let agrees = match *op {
            Op::Insert(o, s) => {
                let result = storage.insert(pw_with_strength(o, s));
                if map.contains_key(&o) {
                    result == Err(StorageError::DuplicateEntry)
                } else {
                    map.insert(o, s);
                    result.is_ok()
                }
            }
            Op::Remove(o) => match (storage.remove(&pw(o)), map.remove(&o)) {
                (Ok(removed), Some(s)) => {
                    removed.occurrence() == u32::from(o) && removed.strength() == u32::from(s)
                }
                (Err(StorageError::NotFound), None) => true,
                _ => false,
            },
            Op::Iter => storage
                .iter()
                .map(Password::occurrence)
                .eq(map.keys().map(|&k| u32::from(k))),
        };

        if !agrees || !storage.is_valid_bst() || storage.len() != map.len() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
    let mut storage = PasswordStorage::new(Attribute::Occurrence);
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut storage, &mut map)
        && map
            .iter()
            .all(|(&o, &s)| storage.lookup(&pw(o)).map(Password::strength) == Some(u32::from(s)))
}

#[quickcheck]
fn size_counts_successful_operations(xs: Vec<u8>, removes: Vec<u8>) -> bool {
    let mut storage = PasswordStorage::new(Attribute::Occurrence);
    let mut inserted = 0;
    let mut removed = 0;

    for x in &xs {
        if storage.insert(pw(*x)).is_ok() {
            inserted += 1;
        }
    }
    for x in &removes {
        if storage.remove(&pw(*x)).is_ok() {
            removed += 1;
        }
    }

    storage.len() == inserted - removed && storage.iter().count() == storage.len()
}

#[quickcheck]
fn contains(xs: Vec<u8>) -> bool {
    let storage = build(&xs);

    xs.iter()
        .all(|x| storage.lookup(&pw(*x)).map(Password::text) == Some(format!("pw{}", x).as_str()))
}

#[quickcheck]
fn contains_not(xs: Vec<u8>, nots: Vec<u8>) -> bool {
    let storage = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| storage.lookup(&pw(*x)).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<u8>, deletes: Vec<u8>) -> bool {
    let mut storage = build(&xs);
    for delete in &deletes {
        let _ = storage.remove(&pw(*delete));
        if !storage.is_valid_bst() {
            return false;
        }
    }

    let deleted: HashSet<_> = deletes.iter().collect();
    deletes.iter().all(|x| storage.lookup(&pw(*x)).is_none())
        && xs
            .iter()
            .filter(|x| !deleted.contains(x))
            .all(|x| storage.lookup(&pw(*x)).is_some())
}

#[quickcheck]
fn ordered_string_is_sorted(xs: Vec<u8>) -> bool {
    let storage = build(&xs);
    let out = storage.to_ordered_string();
    let lines: Vec<_> = out.lines().collect();

    let matches_records = lines
        .iter()
        .zip(storage.iter())
        .all(|(line, record)| *line == record.to_string());
    let ascending = storage
        .iter()
        .zip(storage.iter().skip(1))
        .all(|(a, b)| a.compare_by(b, Attribute::Occurrence).is_lt());

    lines.len() == storage.len()
        && matches_records
        && ascending
        && (out.is_empty() || out.ends_with('\n'))
}

#[quickcheck]
fn removing_two_child_root_promotes_predecessor(xs: Vec<u8>) -> bool {
    let mut storage = build(&xs);
    let (root, predecessor) = match storage.root() {
        Some(root) if root.number_of_children() == 2 => {
            (root.record().clone(), storage.predecessor(root.record()).cloned())
        }
        _ => return true,
    };
    let size = storage.len();

    storage.remove(&root).is_ok()
        && storage.is_valid_bst()
        && storage.len() == size - 1
        && storage.root().map(|r| r.record()) == predecessor.as_ref()
}

#[quickcheck]
fn min_max_match_extremes(xs: Vec<u8>) -> bool {
    let storage = build(&xs);
    let expected_min = xs.iter().min().map(|&x| u32::from(x));
    let expected_max = xs.iter().max().map(|&x| u32::from(x));

    storage.min().ok().map(Password::occurrence) == expected_min
        && storage.max().ok().map(Password::occurrence) == expected_max
}

#[quickcheck]
fn text_criterion_stays_valid(xs: Vec<String>, deletes: Vec<String>) -> bool {
    let mut storage = PasswordStorage::new(Attribute::Text);
    for x in &xs {
        let _ = storage.insert(Password::new(x.as_str(), 0, 0));
    }
    for x in &deletes {
        let _ = storage.remove(&Password::new(x.as_str(), 0, 0));
    }

    let remaining: HashSet<_> = xs.iter().filter(|x| !deletes.contains(x)).collect();
    storage.is_valid_bst() && storage.len() == remaining.len()
}

#[test]
fn scenario_two_child_removal() {
    let mut storage = build(&[5, 2, 8, 1, 9]);
    assert_eq!(storage.min().map(Password::occurrence), Ok(1));
    assert_eq!(storage.max().map(Password::occurrence), Ok(9));
    assert_eq!(storage.len(), 5);

    storage.remove(&pw(5)).unwrap();
    assert!(storage.is_valid_bst());
    assert_eq!(storage.len(), 4);
    assert_eq!(storage.lookup(&pw(5)), None);
}
