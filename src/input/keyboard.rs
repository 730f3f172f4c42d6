use serde::{Deserialize, Serialize};

use crate::camera::ViewPresets;
use crate::session::ViewerCommand;

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// top_view = "Digit2"
/// toggle_auto_rotate = "KeyR"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Fly to the wheel close-up.
    WheelView,
    /// Fly to the overhead view.
    TopView,
    /// Fly to the front view.
    FrontView,
    /// Fly to the side view.
    SideView,
    /// Toggle turntable auto-rotation.
    ToggleAutoRotate,
    /// Return to the starting pose and resume auto-rotation.
    ReturnToDefault,
}

impl KeyAction {
    /// The command this action issues.
    #[must_use]
    pub fn to_command(self) -> ViewerCommand {
        let view = |name: &str| ViewerCommand::GoToView {
            name: name.to_owned(),
        };
        match self {
            Self::WheelView => view(ViewPresets::WHEEL),
            Self::TopView => view(ViewPresets::TOP),
            Self::FrontView => view(ViewPresets::FRONT),
            Self::SideView => view(ViewPresets::SIDE),
            Self::ToggleAutoRotate => ViewerCommand::ToggleAutoRotate,
            Self::ReturnToDefault => ViewerCommand::ReturnToDefault,
        }
    }
}
