use std::ops::Range;

/// Finds the lowest run of `width` consecutive indices in an ascending
/// slice, returned as a half-open range.
///
/// # Examples
///
/// ```
/// use flexgrid::util::first_run;
///
/// assert_eq!(first_run(&[0, 1, 3, 4, 5], 3), Some(3..6));
/// assert_eq!(first_run(&[0, 1, 3, 4, 5], 2), Some(0..2));
/// assert_eq!(first_run(&[0, 2, 4], 2), None);
/// ```
pub fn first_run(sorted: &[usize], width: usize) -> Option<Range<usize>> {
    if width == 0 {
        return Some(0..0);
    }
    let mut start = 0;
    for i in 0..sorted.len() {
        if i > start && sorted[i] != sorted[i - 1] + 1 {
            start = i;
        }
        if i - start + 1 == width {
            return Some(sorted[start]..sorted[i] + 1);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_at_end() {
        assert_eq!(first_run(&[0, 2, 3, 4], 3), Some(2..5));
    }

    #[test]
    fn run_longer_than_input() {
        assert_eq!(first_run(&[0, 1], 3), None);
        assert_eq!(first_run(&[], 1), None);
    }

    #[test]
    fn exact_width_match() {
        assert_eq!(first_run(&[5, 6, 7], 3), Some(5..8));
    }
}
