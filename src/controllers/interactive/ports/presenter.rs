use crate::controllers::interactive::data::frame_data::FrameData;
use crate::core::data::frame_buffer::FrameBuffer;

pub trait FramePresenterPort {
    fn present(&mut self, frame: &FrameBuffer, data: &FrameData);
}
