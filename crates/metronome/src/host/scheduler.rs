/// Opaque id of one scheduled frame callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Host per-frame callback primitive.
///
/// A requested frame is delivered at most once, at the host's next frame
/// boundary, unless it is cancelled first. Cancelling a handle that already
/// fired or was never issued is a no-op.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;

    fn cancel_frame(&mut self, handle: FrameHandle);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for Box<S> {
    fn request_frame(&mut self) -> FrameHandle {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        (**self).cancel_frame(handle)
    }
}
