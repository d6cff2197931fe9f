/// Indices `k+1, k+1+T, k+1+2T, ...` up to `N` owned by worker `k` of `T`.
///
/// Every worker's range is disjoint from the others and together they cover
/// `1..=N` exactly, whatever `N mod T` is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StridedRange {
    next: i64,
    stride: i64,
    limit: i64,
}

impl StridedRange {
    pub fn new(worker_id: usize, workers: usize, limit: i64) -> Self {
        debug_assert!(worker_id < workers, "worker id out of range");
        Self {
            next: worker_id as i64 + 1,
            stride: workers.max(1) as i64,
            limit,
        }
    }
}

impl Iterator for StridedRange {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.next > self.limit {
            return None;
        }
        let current = self.next;
        match current.checked_add(self.stride) {
            Some(next) => self.next = next,
            // Stepping past i64::MAX: nothing left to yield
            None => self.limit = 0,
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.next > self.limit {
            return (0, Some(0));
        }
        let remaining = ((self.limit - self.next) / self.stride + 1) as usize;
        (remaining, Some(remaining))
    }
}
