//! Frame annotation - turns a classification result into draw commands
//!
//! Body-attached shapes follow the mirror setting; counters, warnings and
//! feedback are screen-anchored and never mirrored.

use nalgebra::Point2;

use super::commands::{colors, Color, DrawCommand};
use crate::classifier::{ClassificationResult, FeedbackFlag};
use crate::geometry::{FrameSize, JointTriple, Torso};

const DOT_RADIUS: f32 = 7.0;
const LINE_WIDTH: f32 = 4.0;

const COUNTER_SCALE: f32 = 0.7;
const WARNING_SCALE: f32 = 0.65;
const LABEL_SCALE: f32 = 0.6;

/// Counters start at this fraction of the frame width
const COUNTER_X: f32 = 0.68;
/// Left margin for warnings and feedback
const MARGIN_X: f32 = 30.0;
/// Angle label offset right of the vertex joint
const LABEL_OFFSET_X: f32 = 15.0;

/// Which branch produced the frame, with the joints it measured
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scene {
    Absent,
    Misaligned { torso: Torso },
    Tracking { joints: Option<JointTriple> },
}

fn point(p: Point2<f32>) -> [f32; 2] {
    [p.x, p.y]
}

fn text(text: String, position: [f32; 2], scale: f32, color: Color, background: Color) -> DrawCommand {
    DrawCommand::Text {
        text,
        position,
        scale,
        color,
        background: Some(background),
    }
}

/// Build commands for the nose and shoulder dots
fn build_torso_dots(torso: &Torso) -> Vec<DrawCommand> {
    [
        (torso.nose, colors::WHITE),
        (torso.left_shoulder, colors::YELLOW),
        (torso.right_shoulder, colors::MAGENTA),
    ]
    .into_iter()
    .map(|(center, color)| DrawCommand::Circle {
        center: point(center),
        radius: DOT_RADIUS,
        color,
    })
    .collect()
}

/// Build commands for the measured limb: two segments, three dots
fn build_limb(joints: &JointTriple) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(5);

    for end in [joints.a, joints.c] {
        commands.push(DrawCommand::Line {
            from: point(joints.vertex),
            to: point(end),
            width: LINE_WIDTH,
            color: colors::LIGHT_BLUE,
        });
    }
    for joint in [joints.a, joints.vertex, joints.c] {
        commands.push(DrawCommand::Circle {
            center: point(joint),
            radius: DOT_RADIUS,
            color: colors::YELLOW,
        });
    }

    commands
}

/// Whole-degree angle next to the vertex joint
fn build_angle_label(vertex: Point2<f32>, angle: f32, width: f32, mirror: bool) -> DrawCommand {
    let x = if mirror { width - vertex.x } else { vertex.x };
    DrawCommand::Text {
        text: (angle as i32).to_string(),
        position: [x + LABEL_OFFSET_X, vertex.y],
        scale: LABEL_SCALE,
        color: colors::LIGHT_GREEN,
        background: None,
    }
}

fn build_counters(result: &ClassificationResult, frame: FrameSize) -> Vec<DrawCommand> {
    let x = frame.width as f32 * COUNTER_X;
    vec![
        text(
            format!("CORRECT: {}", result.correct_count),
            [x, 30.0],
            COUNTER_SCALE,
            colors::TEXT_LIGHT,
            colors::CORRECT_BG,
        ),
        text(
            format!("INCORRECT: {}", result.incorrect_count),
            [x, 80.0],
            COUNTER_SCALE,
            colors::TEXT_LIGHT,
            colors::INCORRECT_BG,
        ),
    ]
}

fn build_alignment_warning(result: &ClassificationResult, frame: FrameSize) -> Vec<DrawCommand> {
    let bottom = frame.height as f32;
    let mut commands = vec![text(
        "CAMERA NOT ALIGNED PROPERLY!!!".to_string(),
        [MARGIN_X, bottom - 60.0],
        WARNING_SCALE,
        colors::TEXT_LIGHT,
        colors::WARNING_BG,
    )];
    if let Some(offset) = result.alignment_offset_angle {
        commands.push(text(
            format!("OFFSET ANGLE: {}", offset as i32),
            [MARGIN_X, bottom - 30.0],
            WARNING_SCALE,
            colors::TEXT_LIGHT,
            colors::WARNING_BG,
        ));
    }
    commands
}

/// Row, text color and background for each feedback message
fn feedback_style(flag: FeedbackFlag) -> (f32, Color, Color) {
    match flag {
        FeedbackFlag::LowerArms => (80.0, colors::TEXT_DARK, colors::YELLOW),
        FeedbackFlag::StraightenArms => (125.0, colors::TEXT_LIGHT, colors::ALERT_BG),
        FeedbackFlag::BendElbows => (170.0, colors::TEXT_LIGHT, colors::ALERT_BG),
        FeedbackFlag::RaiseArms => (215.0, colors::TEXT_LIGHT, colors::HINT_BG),
    }
}

fn build_feedback(flags: &[FeedbackFlag]) -> Vec<DrawCommand> {
    flags
        .iter()
        .map(|&flag| {
            let (y, color, background) = feedback_style(flag);
            text(flag.message().to_string(), [MARGIN_X, y], LABEL_SCALE, color, background)
        })
        .collect()
}

/// Draw commands for one processed frame, in paint order
pub fn annotate(
    result: &ClassificationResult,
    scene: &Scene,
    frame: FrameSize,
    mirror: bool,
) -> Vec<DrawCommand> {
    let width = frame.width as f32;

    let body = match scene {
        Scene::Absent | Scene::Tracking { joints: None } => Vec::new(),
        Scene::Misaligned { torso } => build_torso_dots(torso),
        Scene::Tracking { joints: Some(joints) } => build_limb(joints),
    };

    let mut commands: Vec<DrawCommand> = if mirror {
        body.into_iter().map(|cmd| cmd.mirrored(width)).collect()
    } else {
        body
    };

    if let (Scene::Tracking { joints: Some(joints) }, Some(angle)) = (scene, result.joint_angle) {
        commands.push(build_angle_label(joints.vertex, angle, width, mirror));
    }

    commands.extend(build_counters(result, frame));

    match scene {
        Scene::Misaligned { .. } => commands.extend(build_alignment_warning(result, frame)),
        Scene::Tracking { .. } => commands.extend(build_feedback(&result.feedback)),
        Scene::Absent => {}
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: FrameSize = FrameSize::new(640, 480);

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn arm() -> JointTriple {
        JointTriple::new(
            Point2::new(300.0, 150.0),
            Point2::new(300.0, 250.0),
            Point2::new(380.0, 250.0),
        )
    }

    #[test]
    fn test_absent_shows_counters_only() {
        let result = ClassificationResult {
            correct_count: 4,
            incorrect_count: 1,
            ..Default::default()
        };
        let commands = annotate(&result, &Scene::Absent, FRAME, true);
        assert_eq!(texts(&commands), vec!["CORRECT: 4", "INCORRECT: 1"]);

        match &commands[0] {
            DrawCommand::Text { position, .. } => assert!((position[0] - 435.2).abs() < 0.01),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_misaligned_shows_warning_and_offset() {
        let torso = Torso {
            nose: Point2::new(352.0, 100.0),
            left_shoulder: Point2::new(420.0, 150.0),
            right_shoulder: Point2::new(320.0, 150.0),
        };
        let result = ClassificationResult {
            alignment_warning: true,
            alignment_offset_angle: Some(86.4),
            subject_present: true,
            ..Default::default()
        };
        let commands = annotate(&result, &Scene::Misaligned { torso }, FRAME, false);

        let circles = commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Circle { .. }))
            .count();
        assert_eq!(circles, 3);
        assert!(texts(&commands).contains(&"CAMERA NOT ALIGNED PROPERLY!!!"));
        assert!(texts(&commands).contains(&"OFFSET ANGLE: 86"));
    }

    #[test]
    fn test_tracking_draws_limb_label_and_feedback() {
        let result = ClassificationResult {
            joint_angle: Some(90.7),
            feedback: vec![FeedbackFlag::LowerArms, FeedbackFlag::BendElbows],
            subject_present: true,
            ..Default::default()
        };
        let scene = Scene::Tracking { joints: Some(arm()) };
        let commands = annotate(&result, &scene, FRAME, false);

        assert_eq!(
            texts(&commands),
            vec!["90", "CORRECT: 0", "INCORRECT: 0", "LOWER YOUR ARMS", "BEND YOUR ELBOWS"]
        );
        assert!(commands.contains(&DrawCommand::Circle {
            center: [300.0, 250.0],
            radius: DOT_RADIUS,
            color: colors::YELLOW,
        }));
        assert!(commands.contains(&DrawCommand::Text {
            text: "90".to_string(),
            position: [315.0, 250.0],
            scale: LABEL_SCALE,
            color: colors::LIGHT_GREEN,
            background: None,
        }));
    }

    #[test]
    fn test_mirror_moves_body_not_hud() {
        let result = ClassificationResult {
            joint_angle: Some(90.0),
            ..Default::default()
        };
        let scene = Scene::Tracking { joints: Some(arm()) };
        let plain = annotate(&result, &scene, FRAME, false);
        let mirrored = annotate(&result, &scene, FRAME, true);

        assert!(mirrored.contains(&DrawCommand::Circle {
            center: [260.0, 250.0],
            radius: DOT_RADIUS,
            color: colors::YELLOW,
        }));
        match mirrored.iter().find(|cmd| matches!(cmd, DrawCommand::Text { background: None, .. })) {
            Some(DrawCommand::Text { position, .. }) => assert_eq!(*position, [355.0, 250.0]),
            other => panic!("missing angle label: {other:?}"),
        }

        let hud = |commands: &[DrawCommand]| commands[commands.len() - 2..].to_vec();
        assert_eq!(hud(&plain), hud(&mirrored));
    }

    #[test]
    fn test_tracking_without_joints_draws_hud() {
        let result = ClassificationResult::default();
        let commands = annotate(&result, &Scene::Tracking { joints: None }, FRAME, true);
        assert_eq!(commands.len(), 2);
    }
}
