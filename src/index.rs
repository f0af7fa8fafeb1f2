// Index arithmetic for a complete binary tree stored in a flat array.
//
//                 0
//         1               2
//     3       4       5       6
//   7   8   9  10  11  12  13  14
//
// Only the last level may be incomplete.

/// Index of the parent of `i`. Must not be called on the root.
#[inline]
pub fn parent(i: usize) -> usize {
    debug_assert!(i > 0, "the root has no parent");
    (i - 1) / 2
}

#[inline]
pub fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
pub fn right(i: usize) -> usize {
    2 * i + 2
}

/// Last index that has at least one child in a tree of `size` nodes.
pub fn last_parent(size: usize) -> Option<usize> {
    if size < 2 { None } else { Some(parent(size - 1)) }
}
