//! Geometry module - joint angles and landmark extraction
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod landmarks;

pub use angles::{angle_at, JointTriple};
pub use landmarks::{
    extract_joint_coords, joint_coord,
    FrameSize, JointGroup, Landmark, LandmarkSet, Side, Torso,
    // Constants
    LANDMARK_COUNT, LANDMARK_STRIDE, VISIBILITY_FLOOR,
    NOSE, LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
};
