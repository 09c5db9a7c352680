use super::scheduler::{FrameHandle, FrameScheduler};

/// FIFO of requested frames, drained by the host once per refresh.
///
/// Frames requested while the host is delivering land in the queue again and
/// wait for the next refresh, the same as nested `requestAnimationFrame`
/// calls.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    queued: Vec<FrameHandle>,
    requested: u64,
    cancelled: u64,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every queued handle, oldest first.
    pub fn drain_due(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.queued)
    }

    /// Number of requested frames that have neither been drained nor cancelled.
    pub fn outstanding(&self) -> usize {
        self.queued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }

    /// Total frames ever requested.
    pub fn requested_total(&self) -> u64 {
        self.requested
    }

    /// Total frames cancelled before delivery.
    pub fn cancelled_total(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle::from_raw(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.requested += 1;
        self.queued.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(pos) = self.queued.iter().position(|h| *h == handle) {
            self.queued.remove(pos);
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_unique() {
        let mut q = FrameQueue::new();
        let a = q.request_frame();
        let b = q.request_frame();
        assert_ne!(a, b);
        assert_eq!(q.outstanding(), 2);
    }

    #[test]
    fn handles_count_up_from_zero() {
        let mut q = FrameQueue::new();
        let raws: Vec<u64> = (0..3).map(|_| q.request_frame().raw()).collect();
        assert_eq!(raws, vec![0, 1, 2]);
    }

    #[test]
    fn cancel_removes_queued_handle() {
        let mut q = FrameQueue::new();
        let a = q.request_frame();
        let b = q.request_frame();
        q.cancel_frame(a);
        assert_eq!(q.cancelled_total(), 1);
        assert_eq!(q.drain_due(), vec![b]);
    }

    #[test]
    fn cancel_after_drain_is_noop() {
        let mut q = FrameQueue::new();
        let a = q.request_frame();
        assert_eq!(q.drain_due(), vec![a]);
        q.cancel_frame(a);
        assert_eq!(q.cancelled_total(), 0);
        assert!(q.is_empty());
    }

    #[test]
    fn drain_is_fifo() {
        let mut q = FrameQueue::new();
        let a = q.request_frame();
        let b = q.request_frame();
        assert_eq!(q.drain_due(), vec![a, b]);
        assert_eq!(q.requested_total(), 2);
    }
}
