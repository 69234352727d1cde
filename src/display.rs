//! Compact [Display] adapters for logging and console output.

use std::fmt::{Display, Formatter};

pub struct DisplaySlice<'a, D: Display> {
    items: &'a [D],
}
impl<'a, D: Display> Display for DisplaySlice<'a, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        let len = self.items.len();
        for (index, item) in self.items.iter().enumerate() {
            match f.precision() {
                None => write!(f, "{item}")?,
                Some(precision) => write!(f, "{item:.precision$}")?,
            }
            if index != len - 1 {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")?;
        Ok(())
    }
}

impl<'a, D: Display> From<&'a [D]> for DisplaySlice<'a, D> {
    fn from(items: &'a [D]) -> Self {
        DisplaySlice { items }
    }
}

/// Renders a probability in the range [0, 1] as a percentage.
pub struct DisplayPercent(pub f64);

impl Display for DisplayPercent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(1);
        write!(f, "{:.precision$}%", self.0 * 100.0)
    }
}
