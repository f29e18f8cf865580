//! Forward-fill over optional cell sequences.

/// Replace each absent cell with the nearest preceding present value.
///
/// Cells before the first present value stay absent. Order-dependent:
/// callers must pass cells in original row order.
pub fn forward_fill<T: Clone>(cells: &mut [Option<T>]) {
    let mut last: Option<T> = None;
    for cell in cells.iter_mut() {
        match cell {
            Some(value) => last = Some(value.clone()),
            None => *cell = last.clone(),
        }
    }
}
