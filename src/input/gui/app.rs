//! Windowed front end: translates winit events into explorer input events
//! and presents frames through a `pixels` surface.

use crate::adapters::rand_sampler::ThreadRngSampler;
use crate::controllers::explorer::controller::{EventOutcome, ExplorerController};
use crate::controllers::explorer::events::input_event::{InputEvent, KeyCommand, PointerButton};
use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::Point;
use crate::core::maps::quadratic::QuadraticMap;
use crate::presenters::pixels::presenter::PixelsFrameSink;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowBuilder},
};

/// Runs the interactive explorer.
///
/// This function does not return until the window is closed.
pub fn run_gui(size: FrameSize) {
    let event_loop = EventLoop::new().expect("Failed to create event loop");

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Julia")
            .with_inner_size(PhysicalSize::new(size.width(), size.height()))
            .with_resizable(false)
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let surface_texture = SurfaceTexture::new(size.width(), size.height(), window);
    let pixels = Pixels::new(size.width(), size.height(), surface_texture)
        .expect("Failed to create pixels surface");

    let mut controller = ExplorerController::new(
        size,
        QuadraticMap,
        ThreadRngSampler::new(),
        PixelsFrameSink::new(pixels),
    );

    if let Err(e) = controller.redraw() {
        eprintln!("Render error: {e}");
        return;
    }

    let mut cursor_position: Option<PhysicalPosition<f64>> = None;

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Wait);

            let Event::WindowEvent { event, window_id } = event else {
                return;
            };
            if window_id != window.id() {
                return;
            }

            let input = match event {
                WindowEvent::CloseRequested => Some(InputEvent::Quit),
                WindowEvent::CursorMoved { position, .. } => {
                    cursor_position = Some(position);
                    None
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button,
                    ..
                } => pointer_event(button, cursor_position),
                WindowEvent::KeyboardInput {
                    event: key_event, ..
                } => {
                    if key_event.state == ElementState::Pressed && !key_event.repeat {
                        key_command(key_event.physical_key).map(InputEvent::Key)
                    } else {
                        None
                    }
                }
                WindowEvent::RedrawRequested => {
                    if let Err(e) = controller.refresh() {
                        eprintln!("Render error: {e}");
                        elwt.exit();
                    }
                    None
                }
                _ => None,
            };

            if let Some(input) = input {
                match controller.handle_event(input) {
                    Ok(EventOutcome::Continue) => {}
                    Ok(EventOutcome::Exit) => elwt.exit(),
                    Err(e) => {
                        eprintln!("Render error: {e}");
                        elwt.exit();
                    }
                }
            }
        })
        .expect("Event loop error");
}

fn pointer_event(
    button: MouseButton,
    cursor: Option<PhysicalPosition<f64>>,
) -> Option<InputEvent> {
    let position = cursor?;

    let button = match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        _ => return None,
    };

    Some(InputEvent::PointerPress {
        position: Point {
            x: position.x as i32,
            y: position.y as i32,
        },
        button,
    })
}

fn key_command(key: PhysicalKey) -> Option<KeyCommand> {
    let PhysicalKey::Code(code) = key else {
        return None;
    };

    match code {
        KeyCode::KeyQ => Some(KeyCommand::Quit),
        KeyCode::Digit0 => Some(KeyCommand::ResetView),
        KeyCode::Minus => Some(KeyCommand::ZoomOut),
        KeyCode::Equal => Some(KeyCommand::ZoomIn),
        KeyCode::ArrowLeft => Some(KeyCommand::PanLeft),
        KeyCode::ArrowRight => Some(KeyCommand::PanRight),
        KeyCode::ArrowUp => Some(KeyCommand::PanUp),
        KeyCode::ArrowDown => Some(KeyCommand::PanDown),
        KeyCode::Comma => Some(KeyCommand::HalveMaxIterations),
        KeyCode::Period => Some(KeyCommand::DoubleMaxIterations),
        KeyCode::BracketLeft => Some(KeyCommand::HalveSamples),
        KeyCode::BracketRight => Some(KeyCommand::DoubleSamples),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings_cover_every_command() {
        assert_eq!(
            key_command(PhysicalKey::Code(KeyCode::KeyQ)),
            Some(KeyCommand::Quit)
        );
        assert_eq!(
            key_command(PhysicalKey::Code(KeyCode::Digit0)),
            Some(KeyCommand::ResetView)
        );
        assert_eq!(
            key_command(PhysicalKey::Code(KeyCode::Minus)),
            Some(KeyCommand::ZoomOut)
        );
        assert_eq!(
            key_command(PhysicalKey::Code(KeyCode::Equal)),
            Some(KeyCommand::ZoomIn)
        );
        assert_eq!(
            key_command(PhysicalKey::Code(KeyCode::Comma)),
            Some(KeyCommand::HalveMaxIterations)
        );
        assert_eq!(
            key_command(PhysicalKey::Code(KeyCode::Period)),
            Some(KeyCommand::DoubleMaxIterations)
        );
        assert_eq!(
            key_command(PhysicalKey::Code(KeyCode::BracketLeft)),
            Some(KeyCommand::HalveSamples)
        );
        assert_eq!(
            key_command(PhysicalKey::Code(KeyCode::BracketRight)),
            Some(KeyCommand::DoubleSamples)
        );
    }

    #[test]
    fn test_unbound_key_maps_to_nothing() {
        assert_eq!(key_command(PhysicalKey::Code(KeyCode::KeyZ)), None);
    }

    #[test]
    fn test_pointer_event_requires_a_known_cursor_position() {
        assert_eq!(pointer_event(MouseButton::Left, None), None);
    }

    #[test]
    fn test_pointer_event_maps_buttons() {
        let cursor = Some(PhysicalPosition::new(10.0, 20.0));

        assert_eq!(
            pointer_event(MouseButton::Left, cursor),
            Some(InputEvent::PointerPress {
                position: Point { x: 10, y: 20 },
                button: PointerButton::Primary,
            })
        );
        assert_eq!(
            pointer_event(MouseButton::Right, cursor),
            Some(InputEvent::PointerPress {
                position: Point { x: 10, y: 20 },
                button: PointerButton::Secondary,
            })
        );
        assert_eq!(pointer_event(MouseButton::Middle, cursor), None);
    }
}
