//! Column statistics used by the fill rules and the aggregator
//!
//! All functions skip absent values. They return `None` when nothing is left.

use crate::types::CellValue;
use std::collections::HashMap;

/// Most frequent non-absent value; ties go to the value seen first.
pub fn mode<'a, I>(values: I) -> Option<CellValue>
where
    I: IntoIterator<Item = &'a CellValue>,
{
    mode_by(values, |v| !v.is_empty())
}

/// `mode` variant that also skips whitespace-only text
pub fn mode_non_blank<'a, I>(values: I) -> Option<CellValue>
where
    I: IntoIterator<Item = &'a CellValue>,
{
    mode_by(values, |v| !v.is_blank())
}

fn mode_by<'a, I, F>(values: I, keep: F) -> Option<CellValue>
where
    I: IntoIterator<Item = &'a CellValue>,
    F: Fn(&CellValue) -> bool,
{
    // value -> (count, first position)
    let mut counts: HashMap<&CellValue, (usize, usize)> = HashMap::new();
    for (pos, value) in values.into_iter().enumerate() {
        if !keep(value) {
            continue;
        }
        counts.entry(value).or_insert((0, pos)).0 += 1;
    }

    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(value, _)| value.clone())
}

/// Median of the numeric values (mean of the two middle values for even counts)
pub fn median<'a, I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a CellValue>,
{
    let mut nums: Vec<f64> = values.into_iter().filter_map(CellValue::as_number).collect();
    median_of(&mut nums)
}

/// Median of a slice of numbers; sorts in place
pub fn median_of(nums: &mut [f64]) -> Option<f64> {
    if nums.is_empty() {
        return None;
    }
    nums.sort_by(|a, b| a.total_cmp(b));
    let mid = nums.len() / 2;
    if nums.len() % 2 == 0 {
        Some((nums[mid - 1] + nums[mid]) / 2.0)
    } else {
        Some(nums[mid])
    }
}

pub fn mean<'a, I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a CellValue>,
{
    let (sum, count) = values
        .into_iter()
        .filter_map(CellValue::as_number)
        .fold((0.0, 0usize), |(sum, count), n| (sum + n, count + 1));
    (count > 0).then(|| sum / count as f64)
}

pub fn max<'a, I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a CellValue>,
{
    values
        .into_iter()
        .filter_map(CellValue::as_number)
        .reduce(f64::max)
}

pub fn min<'a, I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a CellValue>,
{
    values
        .into_iter()
        .filter_map(CellValue::as_number)
        .reduce(f64::min)
}
