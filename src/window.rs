//! The sliding-window maximum-sum computation.
//!
//! Single linear pass: the sum of the first window seeds the running sum,
//! then each advance subtracts the departing element and adds the entering
//! one. O(n) time, O(1) extra memory, against the naive O(n * window_size)
//! recomputation of every window.

use crate::error::AppError::{
    self, EmptySequence, InvalidWindowSize, NumericOverflow, WindowSizeTooLarge,
};

/// Maximum sum over all contiguous windows of exactly `window_size` elements.
///
/// Pure function of its inputs. The running sum is kept in i128 so the slide
/// itself is exact; each window sum must still fit in i64, otherwise the
/// request fails with [`NumericOverflow`] rather than wrapping.
pub fn max_window_sum(numbers: &[i64], window_size: usize) -> Result<i64, AppError> {
    if window_size == 0 {
        return Err(InvalidWindowSize);
    }

    // Empty input wins over too-large so the frontends get the clearer message.
    if numbers.is_empty() {
        return Err(EmptySequence);
    }

    if window_size > numbers.len() {
        return Err(WindowSizeTooLarge {
            window_size,
            len: numbers.len(),
        });
    }

    let mut sum: i128 = numbers[..window_size].iter().map(|&n| i128::from(n)).sum();
    let mut best = checked_window_sum(sum)?;

    for i in window_size..numbers.len() {
        sum += i128::from(numbers[i]) - i128::from(numbers[i - window_size]);

        let current = checked_window_sum(sum)?;
        if current > best {
            best = current;
        }
    }

    Ok(best)
}

fn checked_window_sum(sum: i128) -> Result<i64, AppError> {
    i64::try_from(sum).map_err(|_| NumericOverflow)
}
