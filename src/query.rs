//! Query-string adapter.
//!
//! The React frontend repeats the key (`numbers=1&numbers=2`), the Angular
//! frontend joins with commas (`numbers=1,2`). Both must work, so every value
//! of every `numbers` key is split on commas and the pieces concatenated in
//! request order. The computation itself never sees the encoding.

use crate::error::AppError::{self, InvalidNumberFormat, InvalidWindowSize};

/// A fully parsed request, ready for the computation.
#[derive(Debug, PartialEq, Eq)]
pub struct WindowQuery {
    pub numbers: Vec<i64>,
    pub window_size: usize,
}

/// Turns decoded query pairs into a [`WindowQuery`].
///
/// Unknown keys are ignored. A repeated `windowSize` keeps the last value.
/// A missing `numbers` key yields an empty sequence, which the computation
/// rejects downstream.
pub fn parse_query(pairs: &[(String, String)]) -> Result<WindowQuery, AppError> {
    let mut numbers = Vec::new();
    let mut raw_window_size = None;

    for (key, value) in pairs {
        match key.as_str() {
            "numbers" => push_numbers(&mut numbers, value)?,
            "windowSize" => raw_window_size = Some(value),
            _ => {}
        }
    }

    let window_size = raw_window_size
        .ok_or(InvalidWindowSize)?
        .parse()
        .map_err(|_| InvalidWindowSize)?;
    if window_size == 0 {
        return Err(InvalidWindowSize);
    }

    Ok(WindowQuery {
        numbers,
        window_size,
    })
}

fn push_numbers(numbers: &mut Vec<i64>, value: &str) -> Result<(), AppError> {
    for piece in value.split(',') {
        let piece = piece.trim();

        // Stray commas ("1,,2") leave empty pieces, not malformed numbers.
        if piece.is_empty() {
            continue;
        }

        let number = piece
            .parse()
            .map_err(|_| InvalidNumberFormat(piece.to_string()))?;
        numbers.push(number);
    }

    Ok(())
}
