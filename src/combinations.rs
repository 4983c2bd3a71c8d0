//! k-element subset enumeration.

use alloc::vec::Vec;

/// Returns every `k`-element subset of `items`.
///
/// Each subset keeps the relative order of `items`, and every subset appears
/// exactly once. Subsets containing the first element come first.
///
/// ```
/// use concor::combinations;
///
/// let pairs = combinations(&['a', 'b', 'c'], 2);
/// assert_eq!(pairs, vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']]);
/// ```
#[must_use]
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let mut subsets = Vec::new();
    let mut picked = Vec::with_capacity(k);
    select(items, k, &mut picked, &mut subsets);
    subsets
}

fn select<T: Clone>(items: &[T], k: usize, picked: &mut Vec<T>, subsets: &mut Vec<Vec<T>>) {
    let needed = k - picked.len();
    if needed == 0 {
        subsets.push(picked.clone());
        return;
    }
    if items.len() < needed {
        return;
    }
    let Some((first, rest)) = items.split_first() else {
        return;
    };

    // include
    picked.push(first.clone());
    select(rest, k, picked, subsets);
    picked.pop();

    // exclude
    select(rest, k, picked, subsets);
}
