//! Node colours.

use crossterm::style::Color;
use pathviz_core::NodeState;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

pub const WHITE: Color = rgb(255, 255, 255);
pub const BLACK: Color = rgb(0, 0, 0);
pub const RED: Color = rgb(255, 0, 0);
pub const GREEN: Color = rgb(0, 255, 0);
pub const PURPLE: Color = rgb(128, 0, 128);
pub const ORANGE: Color = rgb(255, 165, 0);
pub const TURQUOISE: Color = rgb(64, 224, 208);
pub const GREY: Color = rgb(128, 128, 128);
/// Background of unselected algorithm buttons.
pub const BUTTON: Color = rgb(40, 42, 44);

/// Background colour used to draw a node with the given status.
pub const fn state_color(status: NodeState) -> Color {
    match status {
        NodeState::Unvisited => WHITE,
        NodeState::Start => TURQUOISE,
        NodeState::End => ORANGE,
        NodeState::Blocked => BLACK,
        NodeState::Frontier => GREEN,
        NodeState::Visited => RED,
        NodeState::Path => PURPLE,
    }
}
