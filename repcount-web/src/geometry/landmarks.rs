//! Pose landmark set and joint extraction
//!
//! Holds one frame of MediaPipe Pose landmarks (normalized coordinates) as
//! produced by the pose model in JavaScript, and converts named joint groups
//! to pixel space for angle measurement.

use nalgebra::Point2;
use serde::Serialize;

use super::angles::{angle_at, JointTriple};

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 33;

/// Values per landmark in the flat array sent from JS: x, y, z, visibility
pub const LANDMARK_STRIDE: usize = 4;

pub const NOSE: usize = 0;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;

/// Joints with visibility below this are treated as not detected
pub const VISIBILITY_FLOOR: f32 = 0.5;

// ============================================================================
// LANDMARK DATA STRUCTURES
// ============================================================================

/// A single pose landmark
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,          // 0-1 normalized
    pub y: f32,          // 0-1 normalized
    pub z: f32,          // Relative depth
    pub visibility: f32, // 0-1 detection confidence
}

impl Landmark {
    pub const fn new(x: f32, y: f32, z: f32, visibility: f32) -> Self {
        Self { x, y, z, visibility }
    }

    fn is_usable(&self) -> bool {
        self.visibility >= VISIBILITY_FLOOR && self.x.is_finite() && self.y.is_finite()
    }
}

/// All landmarks of one detected subject for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkSet {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl LandmarkSet {
    pub fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    /// Decode the flat layout used by the JS bridge
    /// (33 landmarks × [x, y, z, visibility] = 132 values)
    ///
    /// Returns `None` if the slice has the wrong length.
    pub fn from_flat(data: &[f32]) -> Option<Self> {
        if data.len() != LANDMARK_COUNT * LANDMARK_STRIDE {
            return None;
        }

        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        for (landmark, chunk) in landmarks.iter_mut().zip(data.chunks_exact(LANDMARK_STRIDE)) {
            *landmark = Landmark::new(chunk[0], chunk[1], chunk[2], chunk[3]);
        }

        Some(Self { landmarks })
    }

    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.landmarks
    }
}

/// Frame dimensions in pixels, used to scale normalized coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn to_pixels(&self, landmark: &Landmark) -> Point2<f32> {
        Point2::new(landmark.x * self.width as f32, landmark.y * self.height as f32)
    }
}

// ============================================================================
// JOINT GROUPS
// ============================================================================

/// Body side whose arm is analyzed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn shoulder(self) -> usize {
        match self {
            Side::Left => LEFT_SHOULDER,
            Side::Right => RIGHT_SHOULDER,
        }
    }

    pub fn elbow(self) -> usize {
        match self {
            Side::Left => LEFT_ELBOW,
            Side::Right => RIGHT_ELBOW,
        }
    }

    pub fn wrist(self) -> usize {
        match self {
            Side::Left => LEFT_WRIST,
            Side::Right => RIGHT_WRIST,
        }
    }

    pub fn hip(self) -> usize {
        match self {
            Side::Left => LEFT_HIP,
            Side::Right => RIGHT_HIP,
        }
    }

    /// Shoulder, elbow and wrist in pixels (vertex = elbow), if all visible
    pub fn arm(self, landmarks: &LandmarkSet, frame: FrameSize) -> Option<JointTriple> {
        match extract_joint_coords(landmarks, JointGroup::Arm(self), frame).as_slice() {
            [Some(shoulder), Some(elbow), Some(wrist)] => {
                Some(JointTriple::new(*shoulder, *elbow, *wrist))
            }
            _ => None,
        }
    }

    /// Mean visibility of the shoulder, elbow and wrist
    pub fn arm_visibility(self, landmarks: &LandmarkSet) -> f32 {
        let indices = [self.shoulder(), self.elbow(), self.wrist()];
        let total: f32 = indices
            .iter()
            .filter_map(|&i| landmarks.get(i))
            .map(|lm| lm.visibility)
            .sum();
        total / indices.len() as f32
    }
}

/// Named subsets of joints that are read together
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JointGroup {
    Shoulders,
    Arm(Side),
}

impl JointGroup {
    pub fn indices(self) -> Vec<usize> {
        match self {
            JointGroup::Shoulders => vec![LEFT_SHOULDER, RIGHT_SHOULDER],
            JointGroup::Arm(side) => vec![side.shoulder(), side.elbow(), side.wrist()],
        }
    }
}

/// Pixel position of one joint, `None` if missing or below the visibility floor
pub fn joint_coord(landmarks: &LandmarkSet, index: usize, frame: FrameSize) -> Option<Point2<f32>> {
    landmarks
        .get(index)
        .filter(|lm| lm.is_usable())
        .map(|lm| frame.to_pixels(lm))
}

/// Pixel positions for a joint group, one entry per joint in group order
///
/// Partial results are normal: a joint that was not detected is `None`
/// while its neighbours may still be present.
pub fn extract_joint_coords(
    landmarks: &LandmarkSet,
    group: JointGroup,
    frame: FrameSize,
) -> Vec<Option<Point2<f32>>> {
    group
        .indices()
        .into_iter()
        .map(|index| joint_coord(landmarks, index, frame))
        .collect()
}

/// Nose and shoulders, used to judge camera alignment
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Torso {
    pub nose: Point2<f32>,
    pub left_shoulder: Point2<f32>,
    pub right_shoulder: Point2<f32>,
}

impl Torso {
    pub fn extract(landmarks: &LandmarkSet, frame: FrameSize) -> Option<Self> {
        let nose = joint_coord(landmarks, NOSE, frame)?;
        match extract_joint_coords(landmarks, JointGroup::Shoulders, frame).as_slice() {
            [Some(left_shoulder), Some(right_shoulder)] => Some(Self {
                nose,
                left_shoulder: *left_shoulder,
                right_shoulder: *right_shoulder,
            }),
            _ => None,
        }
    }

    /// Angle at the nose between the rays to both shoulders
    ///
    /// Small when the subject stands side-on to the camera (shoulders
    /// overlap), large when facing it.
    pub fn offset_angle(&self) -> Option<f32> {
        angle_at(self.left_shoulder, self.nose, self.right_shoulder)
    }
}
