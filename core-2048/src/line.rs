//! Sliding and merging of a single row or column.
//!
//! A line is given in axis order (lowest index first). Whether tiles travel towards the
//! start or the end of the line is controlled by `toward_far_end`.

/// The result of sliding one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlidLine {
    /// Final cell values in axis order, same length as the input.
    pub values: Vec<u32>,
    /// Sum of every value produced by a merge.
    pub score: u64,
    pub merges: u32,
}

impl SlidLine {
    pub fn changed_from(&self, original: &[u32]) -> bool {
        self.values != original
    }
}

/// Merges equal neighbours of `occupied`, scanning from its first element.
///
/// Each input value takes part in at most one merge, so `[2, 2, 2, 2]` becomes `[4, 4]`.
/// A pair whose sum does not fit in a `u32` stays unmerged.
pub fn merge_leading(occupied: &[u32]) -> (Vec<u32>, u64, u32) {
    let mut merged = Vec::with_capacity(occupied.len());
    let mut score = 0;
    let mut merges = 0;

    let mut values = occupied.iter().copied().peekable();

    while let Some(value) = values.next() {
        let doubled = value.checked_mul(2);

        match doubled.filter(|_| values.next_if_eq(&value).is_some()) {
            Some(doubled) => {
                merged.push(doubled);
                score += u64::from(doubled);
                merges += 1;
            }
            None => merged.push(value),
        }
    }

    (merged, score, merges)
}

/// Slides every tile in `line` towards one end and merges equal neighbours.
pub fn slide_line(line: &[u32], toward_far_end: bool) -> SlidLine {
    let mut occupied: Vec<u32> = line.iter().copied().filter(|&value| value != 0).collect();

    if toward_far_end {
        occupied.reverse();
    }

    let (mut merged, score, merges) = merge_leading(&occupied);

    if toward_far_end {
        merged.reverse();
    }

    let mut values = vec![0; line.len()];
    let start = if toward_far_end {
        line.len() - merged.len()
    } else {
        0
    };
    values[start..start + merged.len()].copy_from_slice(&merged);

    SlidLine {
        values,
        score,
        merges,
    }
}
