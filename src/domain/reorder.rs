/// Moves the element at `from` to index `to`, shifting everything in between.
///
/// This is an extract-and-reinsert, not a swap: moving index 0 to index 2 in
/// `[a, b, c]` yields `[b, c, a]`. Out-of-range indices leave the slice
/// untouched.
///
/// # Examples
/// ```
/// use dragboard_core::domain::reorder::array_move;
///
/// let mut items = vec!['a', 'b', 'c', 'd'];
/// array_move(&mut items, 3, 1);
/// assert_eq!(items, vec!['a', 'd', 'b', 'c']);
/// ```
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }

    let item = items.remove(from);
    items.insert(to, item);
}
