// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lazy k-combinations of a slice.

/// Returns the binomial coefficient for n choose k.
pub const fn nck(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    // nck(n, k) = nck(n, n - k), use the smaller k to keep products small.
    let k = if k > n - k { n - k } else { k };
    let mut result = 1;
    let mut i = 0;
    while i < k {
        result = result * (n - i) / (i + 1);
        i += 1;
    }

    result
}

/// An iterator over all the k-combinations of a slice.
///
/// Combinations are generated in lexicographic order of positions and each
/// one keeps the elements in the same order as the input slice, for example
/// the 2-combinations of `[a, b, c]` are `[a, b]`, `[a, c]`, `[b, c]`.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    positions: Vec<usize>,
    started: bool,
    done: bool,
}

impl<'a, T> Combinations<'a, T> {
    /// Creates an iterator over all the k-combinations of `items`.
    pub fn new(items: &'a [T], k: usize) -> Self {
        Self {
            items,
            positions: (0..k).collect(),
            started: false,
            done: k > items.len(),
        }
    }

    /// Advances to the next combination and returns the positions of its
    /// elements in the input slice.
    ///
    /// This is the allocation free version of [Iterator::next].
    pub fn next_positions(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
            return Some(&self.positions);
        }

        let n = self.items.len();
        let k = self.positions.len();

        // Find the rightmost position that can still move right.
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }

            i -= 1;
            if self.positions[i] < n - k + i {
                break;
            }
        }

        self.positions[i] += 1;
        for j in (i + 1)..k {
            self.positions[j] = self.positions[j - 1] + 1;
        }

        Some(&self.positions)
    }
}

impl<T: Copy> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let items = self.items;
        self.next_positions()
            .map(|positions| positions.iter().map(|&pos| items[pos]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn test_nck() {
        assert_eq!(nck(2, 3), 0);
        assert_eq!(nck(0, 0), 1);
        assert_eq!(nck(7, 5), 21);
        assert_eq!(nck(7, 2), 21);

        [1, 52, 1326, 22100, 270725, 2598960, 20358520, 133784560]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(52, k), v));

        [1, 5, 10, 10, 5, 1]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(5, k), v));
    }

    #[test]
    fn combinations_order() {
        let items = ['a', 'b', 'c', 'd'];
        let combos = Combinations::new(&items, 2)
            .map(|c| c.into_iter().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(combos, ["ab", "ac", "ad", "bc", "bd", "cd"]);
    }

    #[test]
    fn combinations_count() {
        let items = (0..7).collect::<Vec<_>>();
        for k in 0..=8 {
            let combos = Combinations::new(&items, k).collect::<Vec<_>>();
            assert_eq!(combos.len(), nck(7, k), "k={k}");

            // Each combination is unique and sorted like the input.
            let unique = combos.iter().cloned().collect::<HashSet<_>>();
            assert_eq!(unique.len(), combos.len());
            assert!(combos.iter().all(|c| c.len() == k));
            assert!(combos.iter().all(|c| c.windows(2).all(|w| w[0] < w[1])));
        }
    }

    #[test]
    fn combinations_are_restartable() {
        let items = [1, 2, 3, 4, 5, 6, 7];
        let first = Combinations::new(&items, 5).collect::<Vec<_>>();
        let second = Combinations::new(&items, 5).collect::<Vec<_>>();
        assert_eq!(first, second);

        let mut combos = Combinations::new(&items, 5);
        assert_eq!(combos.by_ref().count(), 21);
        assert_eq!(combos.next(), None);
        assert_eq!(combos.next_positions(), None);
    }
}
