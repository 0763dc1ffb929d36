use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::presenter::FramePresenterPort;
use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::data::double_buffer::DoubleBuffer;
use crate::core::zoom::commands::ZoomCommand;
use crate::core::zoom::config::{ConfigError, ZoomConfig};
use crate::core::zoom::state::ZoomState;
use log::{debug, info};
use std::time::Instant;

/// Drives the render, transform, swap, present cycle on the calling thread.
pub struct ZoomController<P: FramePresenterPort> {
    state: ZoomState,
    buffers: DoubleBuffer,
    presenter: P,
    frame_number: u64,
    last_frame: Option<FrameData>,
}

impl<P: FramePresenterPort> ZoomController<P> {
    pub fn new(config: &ZoomConfig, presenter: P) -> Result<Self, ConfigError> {
        let state = ZoomState::from_config(config)?;

        info!(
            "starting {} zoom: {}x{} raster, aim ({}, {}), factors {:?}",
            state.preset.display_name(),
            state.raster.width(),
            state.raster.height(),
            state.aim.re,
            state.aim.im,
            state.factors
        );

        Ok(Self {
            buffers: DoubleBuffer::new(state.raster),
            state,
            presenter,
            frame_number: 0,
            last_frame: None,
        })
    }

    #[must_use]
    pub fn state(&self) -> &ZoomState {
        &self.state
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&FrameData> {
        self.last_frame.as_ref()
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn handle(&mut self, command: ZoomCommand) {
        self.state.apply(command);
    }

    /// Renders the back buffer, advances the view, swaps and presents.
    pub fn tick(&mut self) -> FrameData {
        let started = Instant::now();
        let effective_cap = self.state.effective_cap();

        render_frame(&self.state, self.buffers.back_mut());
        let update = self.state.advance();
        self.buffers.swap();

        self.frame_number += 1;
        let data = FrameData {
            frame_number: self.frame_number,
            render_duration: started.elapsed(),
            effective_cap,
            update,
        };

        self.presenter.present(self.buffers.front(), &data);

        debug!(
            "frame {} rendered in {:?} (cap {})",
            data.frame_number, data.render_duration, data.effective_cap
        );

        self.last_frame = Some(data);
        data
    }
}
