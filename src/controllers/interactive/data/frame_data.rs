use crate::core::zoom::status::ZoomUpdateReport;
use std::time::Duration;

/// Bookkeeping for one presented frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameData {
    pub frame_number: u64,
    pub render_duration: Duration,
    pub effective_cap: u32,
    pub update: ZoomUpdateReport,
}
