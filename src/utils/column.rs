//! Spreadsheet column labels.
//!
//! Columns use bijective base-26: `1 → A`, `26 → Z`, `27 → AA`. There is no
//! label for zero.

use crate::error::{Error, Result};

const RADIX: i64 = 26;

/// Convert a 1-based column number to its letter label.
///
/// ```rust
/// use kgutils::utils::column_number_to_letters;
///
/// assert_eq!(column_number_to_letters(28).unwrap(), "AB");
/// assert!(column_number_to_letters(0).is_err());
/// ```
pub fn column_number_to_letters(number: i64) -> Result<String> {
    if number <= 0 {
        return Err(Error::InvalidInput(format!(
            "column number must be positive, got {}",
            number
        )));
    }

    let mut letters = Vec::new();
    let mut n = number;
    while n > 0 {
        let remainder = (n - 1) % RADIX;
        letters.push(char::from(b'A' + remainder as u8));
        n = (n - 1) / RADIX;
    }
    Ok(letters.into_iter().rev().collect())
}

/// Convert a column label back to its 1-based number. Case-insensitive.
pub fn column_letters_to_number(label: &str) -> Result<i64> {
    if label.is_empty() {
        return Err(Error::InvalidInput("column label is empty".into()));
    }

    label.chars().try_fold(0i64, |acc, c| {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidInput(format!(
                "column label \"{}\" contains non-letter '{}'",
                label, c
            )));
        }
        let digit = i64::from(c.to_ascii_uppercase() as u8 - b'A') + 1;
        acc.checked_mul(RADIX)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| {
                Error::InvalidInput(format!("column label \"{}\" is too long", label))
            })
    })
}
