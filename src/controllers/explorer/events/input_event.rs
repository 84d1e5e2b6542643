use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyCommand {
    Quit,
    ResetView,
    ZoomIn,
    ZoomOut,
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    HalveMaxIterations,
    DoubleMaxIterations,
    HalveSamples,
    DoubleSamples,
}

/// A discrete interaction delivered by the input source. The platform layer
/// translates raw window events into these before they reach the controller.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    PointerPress {
        position: Point,
        button: PointerButton,
    },
    Key(KeyCommand),
}
