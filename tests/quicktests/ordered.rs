use ordered_tree::error::TreeError;
use ordered_tree::tree::OrderedTree;

use crate::init_logging;

fn build(xs: &[i8]) -> OrderedTree<i8> {
    xs.iter().copied().collect()
}

quickcheck::quickcheck! {
    fn in_order_is_sorted(xs: Vec<i8>) -> bool {
        init_logging();
        let tree = build(&xs);

        let mut sorted = xs;
        sorted.sort_unstable();
        tree.in_order().copied().eq(sorted)
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = build(&xs);

        nots.iter()
            .filter(|x| !xs.contains(x))
            .all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        init_logging();
        let mut tree = build(&xs);
        let inserted = xs.len();
        let mut still_present = xs;
        let mut successful = 0;

        for delete in &deletes {
            let before = tree.clone();
            match still_present.iter().position(|x| x == delete) {
                Some(pos) => {
                    // Only one copy goes per call.
                    still_present.swap_remove(pos);
                    if tree.remove(delete) != Ok(*delete) {
                        return false;
                    }
                    successful += 1;
                    if tree.size() != before.size() - 1 {
                        return false;
                    }
                    if tree.contains(delete) != still_present.contains(delete) {
                        return false;
                    }
                }
                None => {
                    let expected = if still_present.is_empty() {
                        TreeError::EmptyTree { operation: "remove" }
                    } else {
                        TreeError::NotFound
                    };
                    if tree.remove(delete) != Err(expected) || tree != before {
                        return false;
                    }
                }
            }
        }

        tree.size() == inserted - successful
            && tree.size() == still_present.len()
            && still_present.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn clone_is_independent(xs: Vec<i8>, extra: Vec<i8>) -> bool {
        let original = build(&xs);
        let snapshot: Vec<i8> = original.in_order().copied().collect();
        let mut cloned = original.clone();
        if cloned != original {
            return false;
        }

        for x in &extra {
            cloned.insert(*x);
        }
        for x in &xs {
            let _ = cloned.remove(x);
        }

        original.size() == xs.len()
            && xs.iter().all(|x| original.contains(x))
            && original.in_order().copied().eq(snapshot)
    }
}

quickcheck::quickcheck! {
    fn height_grows_along_sorted_input(n: u8) -> bool {
        let mut ascending = OrderedTree::new();
        let mut descending = OrderedTree::new();
        let mut last = -1;

        for i in 0..n {
            ascending.insert(i);
            descending.insert(u8::MAX - i);
            let height = ascending.height();
            if height < last || height != isize::from(i) || descending.height() != height {
                return false;
            }
            last = height;
        }
        true
    }
}

quickcheck::quickcheck! {
    fn min_and_max_match_traversal(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        match (xs.iter().min(), xs.iter().max()) {
            (Some(min), Some(max)) => tree.find_min() == Ok(min) && tree.find_max() == Ok(max),
            _ => tree.find_min().is_err() && tree.find_max().is_err() && tree.root().is_err(),
        }
    }
}

quickcheck::quickcheck! {
    fn equality_is_reflexive_and_symmetric(xs: Vec<i8>, ys: Vec<i8>) -> bool {
        let a = build(&xs);
        let b = build(&ys);

        a == a && (a == b) == (b == a) && (xs != ys || a == b)
    }
}

#[test]
fn same_shape_is_equal_different_shape_is_not() {
    init_logging();
    assert_eq!(build(&[5, 3, 8]), build(&[5, 8, 3]));
    assert_ne!(build(&[3, 5, 8]), build(&[5, 3, 8]));
}

#[test]
fn worked_example() {
    init_logging();
    let mut tree = build(&[5, 3, 8, 1, 4]);

    assert_eq!(tree.size(), 5);
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.remove(&5), Ok(5));
    assert_eq!(tree.root(), Ok(&8));
    assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![1, 3, 4, 8]);
    assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), vec![8, 3, 1, 4]);
}
