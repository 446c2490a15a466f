//! Draw commands - primitives in frame pixel coordinates

use serde::Serialize;

/// RGBA, each channel 0-1
pub type Color = [f32; 4];

/// Colors for different overlay elements
pub mod colors {
    use super::Color;

    /// Joint dots
    pub const YELLOW: Color = [1.0, 1.0, 0.0, 1.0];
    /// Right shoulder dot while misaligned
    pub const MAGENTA: Color = [1.0, 0.0, 1.0, 1.0];
    /// Nose dot while misaligned
    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    /// Limb segments
    pub const LIGHT_BLUE: Color = [0.4, 0.8, 1.0, 1.0];
    /// Angle label
    pub const LIGHT_GREEN: Color = [0.39, 0.91, 0.5, 1.0];
    /// Text on colored backgrounds
    pub const TEXT_LIGHT: Color = [1.0, 1.0, 0.9, 1.0];
    pub const TEXT_DARK: Color = [0.0, 0.0, 0.0, 1.0];
    /// Counter backgrounds
    pub const CORRECT_BG: Color = [0.07, 0.73, 0.0, 1.0];
    pub const INCORRECT_BG: Color = [0.87, 0.0, 0.0, 1.0];
    /// Alignment warning background
    pub const WARNING_BG: Color = [1.0, 0.6, 0.0, 1.0];
    /// Feedback backgrounds
    pub const ALERT_BG: Color = [1.0, 0.31, 0.31, 1.0];
    pub const HINT_BG: Color = [0.0, 0.6, 1.0, 1.0];
}

/// One primitive for the renderer
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Filled circle
    Circle {
        center: [f32; 2],
        radius: f32,
        color: Color,
    },
    Line {
        from: [f32; 2],
        to: [f32; 2],
        width: f32,
        color: Color,
    },
    /// Text anchored at its top-left corner
    Text {
        text: String,
        position: [f32; 2],
        scale: f32,
        color: Color,
        background: Option<Color>,
    },
}

impl DrawCommand {
    /// Mirror the x coordinates about a frame of `width` pixels
    pub fn mirrored(self, width: f32) -> Self {
        let flip = |[x, y]: [f32; 2]| [width - x, y];
        match self {
            DrawCommand::Circle { center, radius, color } => DrawCommand::Circle {
                center: flip(center),
                radius,
                color,
            },
            DrawCommand::Line { from, to, width: line_width, color } => DrawCommand::Line {
                from: flip(from),
                to: flip(to),
                width: line_width,
                color,
            },
            DrawCommand::Text { text, position, scale, color, background } => DrawCommand::Text {
                text,
                position: flip(position),
                scale,
                color,
                background,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_flips_x_only() {
        let line = DrawCommand::Line {
            from: [10.0, 20.0],
            to: [600.0, 40.0],
            width: 4.0,
            color: colors::LIGHT_BLUE,
        };
        assert_eq!(
            line.mirrored(640.0),
            DrawCommand::Line {
                from: [630.0, 20.0],
                to: [40.0, 40.0],
                width: 4.0,
                color: colors::LIGHT_BLUE,
            }
        );
    }

    #[test]
    fn test_serialized_shape() {
        let circle = DrawCommand::Circle {
            center: [1.0, 2.0],
            radius: 7.0,
            color: colors::YELLOW,
        };
        let json = serde_json::to_value(&circle).unwrap();
        assert_eq!(json["kind"], "circle");
        assert_eq!(json["radius"], 7.0);
        assert_eq!(json["center"][1], 2.0);
    }
}
