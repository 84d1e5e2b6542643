use crate::controllers::explorer::data::view_state::ViewState;
use crate::controllers::explorer::events::input_event::{InputEvent, KeyCommand, PointerButton};
use crate::controllers::explorer::ports::frame_sink::FrameSink;
use crate::core::actions::estimate_escape::ports::escape_map::EscapeMap;
use crate::core::actions::render_frame::ports::sample_source::SampleSource;
use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::frame_size::FrameSize;
use crate::core::util::pixel_to_plane::pixel_to_plane;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Continue,
    Exit,
}

/// Owns the view state and the frame buffer, and drives one synchronous
/// render-and-present cycle per input event.
pub struct ExplorerController<M, S, P>
where
    M: EscapeMap,
    S: SampleSource,
    P: FrameSink,
{
    state: ViewState,
    buffer: FrameBuffer,
    map: M,
    sampler: S,
    sink: P,
}

impl<M, S, P> ExplorerController<M, S, P>
where
    M: EscapeMap,
    S: SampleSource,
    P: FrameSink,
{
    pub fn new(size: FrameSize, map: M, sampler: S, sink: P) -> Self {
        Self {
            state: ViewState::default(),
            buffer: FrameBuffer::new(size),
            map,
            sampler,
            sink,
        }
    }

    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn frame(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Applies one interaction. Every event except quit mutates the state,
    /// recomputes the frame, and presents it.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<EventOutcome, P::Failure> {
        match event {
            InputEvent::Quit => {
                return Ok(EventOutcome::Exit);
            }
            InputEvent::PointerPress { position, button } => {
                let point = pixel_to_plane(position, self.state.viewport(), self.buffer.size());

                match button {
                    PointerButton::Primary => self.state.recentre(point),
                    PointerButton::Secondary => self.state.reseed(point),
                }

                let seed = self.state.seed();
                println!("Seed {:.6} + {:.6}i", seed.real, seed.imag);
            }
            InputEvent::Key(command) => {
                match command {
                    KeyCommand::Quit => return Ok(EventOutcome::Exit),
                    KeyCommand::ResetView => self.state.reset_view(),
                    KeyCommand::ZoomIn => self.state.zoom_in(),
                    KeyCommand::ZoomOut => self.state.zoom_out(),
                    KeyCommand::PanLeft => self.state.pan_left(),
                    KeyCommand::PanRight => self.state.pan_right(),
                    KeyCommand::PanUp => self.state.pan_up(),
                    KeyCommand::PanDown => self.state.pan_down(),
                    KeyCommand::HalveMaxIterations => self.state.halve_max_iterations(),
                    KeyCommand::DoubleMaxIterations => self.state.double_max_iterations(),
                    KeyCommand::HalveSamples => self.state.halve_samples(),
                    KeyCommand::DoubleSamples => self.state.double_samples(),
                }

                if matches!(
                    command,
                    KeyCommand::HalveMaxIterations
                        | KeyCommand::DoubleMaxIterations
                        | KeyCommand::HalveSamples
                        | KeyCommand::DoubleSamples
                ) {
                    println!(
                        "Maxiter {}, Samples {}",
                        self.state.max_iterations(),
                        self.state.samples()
                    );
                }
            }
        }

        self.redraw()?;
        Ok(EventOutcome::Continue)
    }

    /// Recomputes the frame from the current state and presents it.
    pub fn redraw(&mut self) -> Result<(), P::Failure> {
        render_frame(
            &mut self.buffer,
            self.state.viewport(),
            self.state.seed(),
            &self.map,
            self.state.max_iterations(),
            self.state.samples(),
            &mut self.sampler,
        );

        self.sink.present(&self.buffer)
    }

    /// Re-presents the last frame without recomputing, for window expose
    /// events.
    pub fn refresh(&mut self) -> Result<(), P::Failure> {
        self.sink.present(&self.buffer)
    }
}
