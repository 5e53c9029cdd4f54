//! Predicate- and size-based chunking.

use crate::sequence::{Characteristics, PullSequence};

/// Groups consecutive elements into slides, cutting a new slide whenever
/// the condition rejects the incoming element.
///
/// The condition sees the current slide and the next element; `true` means
/// "still the same slide". A rejected element is never dropped: it becomes
/// the first element of the next slide. Any non-empty pending slide is
/// flushed when the source is exhausted.
///
/// # Example
///
/// ```rust
/// use pullseq::PullSequence;
///
/// let chunks: Vec<Vec<i32>> = pullseq::aggregate(pullseq::of(vec![1, 2, 3, 4, 5]), 2)
///     .unwrap()
///     .into_iter()
///     .collect();
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub struct Aggregate<S: PullSequence, P> {
    source: S,
    condition: P,
    current_slide: Vec<S::Item>,
    done: bool,
}

impl<S, P> Aggregate<S, P>
where
    S: PullSequence,
    P: FnMut(&[S::Item], &S::Item) -> bool,
{
    /// Chunk `source` by `condition`.
    pub fn new(source: S, condition: P) -> Aggregate<S, P> {
        Aggregate {
            source,
            condition,
            current_slide: Vec::new(),
            done: false,
        }
    }
}

impl<S, P> PullSequence for Aggregate<S, P>
where
    S: PullSequence,
    P: FnMut(&[S::Item], &S::Item) -> bool,
{
    type Item = Vec<S::Item>;

    fn pull(&mut self) -> Option<Vec<S::Item>> {
        if self.done {
            return None;
        }
        loop {
            match self.source.pull() {
                Some(item) => {
                    let same_slide = self.current_slide.is_empty()
                        || (self.condition)(&self.current_slide, &item);
                    if same_slide {
                        self.current_slide.push(item);
                    } else {
                        let slide = std::mem::replace(&mut self.current_slide, vec![item]);
                        return Some(slide);
                    }
                }
                None => {
                    self.done = true;
                    if self.current_slide.is_empty() {
                        return None;
                    }
                    return Some(std::mem::take(&mut self.current_slide));
                }
            }
        }
    }

    fn estimated_size(&self) -> Option<usize> {
        self.source.estimated_size()
    }

    fn characteristics(&self) -> Characteristics {
        self.source.characteristics() & !Characteristics::SIZED
    }
}
