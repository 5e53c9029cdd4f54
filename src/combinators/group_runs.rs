//! Grouping of consecutive comparator-equal elements.

use std::cmp::Ordering;

use crate::sequence::{Characteristics, PullSequence};

/// Groups neighbouring elements while the comparator reports them equal.
///
/// Any comparator mismatch is a run boundary; the boundary-breaking element
/// is not dropped, it starts the next run. The pending run is flushed when
/// the source is exhausted.
///
/// # Example
///
/// ```rust
/// use pullseq::PullSequence;
///
/// let runs: Vec<Vec<i32>> = pullseq::group_runs(pullseq::of(vec![1, 1, 2, 2, 3]))
///     .into_iter()
///     .collect();
/// assert_eq!(runs, vec![vec![1, 1], vec![2, 2], vec![3]]);
/// ```
pub struct GroupRuns<S: PullSequence, C> {
    source: S,
    comparator: C,
    pending: Option<S::Item>,
    done: bool,
}

impl<S, C> GroupRuns<S, C>
where
    S: PullSequence,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
{
    /// Group runs of `source` elements equal under `comparator`.
    pub fn new(source: S, comparator: C) -> GroupRuns<S, C> {
        GroupRuns {
            source,
            comparator,
            pending: None,
            done: false,
        }
    }
}

impl<S, C> PullSequence for GroupRuns<S, C>
where
    S: PullSequence,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
{
    type Item = Vec<S::Item>;

    fn pull(&mut self) -> Option<Vec<S::Item>> {
        if self.done {
            return None;
        }
        let mut run: Vec<S::Item> = self.pending.take().into_iter().collect();
        loop {
            match self.source.pull() {
                Some(item) => {
                    let belongs = match run.last() {
                        Some(previous) => (self.comparator)(&item, previous) == Ordering::Equal,
                        None => true,
                    };
                    if belongs {
                        run.push(item);
                    } else {
                        self.pending = Some(item);
                        return Some(run);
                    }
                }
                None => {
                    self.done = true;
                    if run.is_empty() {
                        return None;
                    }
                    return Some(run);
                }
            }
        }
    }

    fn estimated_size(&self) -> Option<usize> {
        self.source.estimated_size()
    }

    fn characteristics(&self) -> Characteristics {
        self.source.characteristics() & !(Characteristics::SIZED | Characteristics::ORDERED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::sources;

    fn natural(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn groups_consecutive_equal_elements() {
        let runs: Vec<Vec<i32>> = GroupRuns::new(sources::of(vec![1, 1, 2, 2, 3]), natural)
            .into_iter()
            .collect();
        assert_eq!(runs, vec![vec![1, 1], vec![2, 2], vec![3]]);
    }

    #[test]
    fn empty_input_yields_zero_groups() {
        let runs: Vec<Vec<i32>> = GroupRuns::new(sources::of(Vec::new()), natural)
            .into_iter()
            .collect();
        assert!(runs.is_empty());
    }

    #[test]
    fn non_consecutive_duplicates_form_separate_runs() {
        let runs: Vec<Vec<i32>> = GroupRuns::new(sources::of(vec![1, 2, 1]), natural)
            .into_iter()
            .collect();
        assert_eq!(runs, vec![vec![1], vec![2], vec![1]]);
    }

    #[test]
    fn custom_comparator_defines_the_runs() {
        let runs: Vec<Vec<i32>> = GroupRuns::new(sources::of(vec![1, 3, 2, 4, 7]), |a, b| {
            (a % 2).cmp(&(b % 2))
        })
        .into_iter()
        .collect();
        assert_eq!(runs, vec![vec![1, 3], vec![2, 4], vec![7]]);
    }

    #[test]
    fn concatenating_runs_reproduces_the_source() {
        let original = vec![5, 5, 5, 1, 2, 2, 9];
        let runs: Vec<Vec<i32>> = GroupRuns::new(sources::of(original.clone()), natural)
            .into_iter()
            .collect();
        let rebuilt: Vec<i32> = runs.into_iter().flatten().collect();
        assert_eq!(rebuilt, original);
    }
}
