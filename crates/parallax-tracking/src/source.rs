/// Yields color frames from one camera of the rig on demand.
///
/// The contract mirrors a live capture device: a call either produces the
/// current frame or reports that the device dropped it. Implementations are
/// expected to swallow transient per-frame acquisition hiccups as
/// `Ok(None)`; `Err` is reserved for failures of the device itself (unplug,
/// backend teardown), which the pipeline propagates instead of skipping.
pub trait FrameSource {
    /// Frame type produced by this source.
    type Frame;

    /// Device failure reported by this source.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the current frame, or `None` when the device dropped it.
    fn grab(&mut self) -> Result<Option<Self::Frame>, Self::Error>;
}
