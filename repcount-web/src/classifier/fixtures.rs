//! Synthetic pose frames for classifier tests
//!
//! Joints are laid out in pixel space on a 640x480 frame and normalized on
//! the way in, so the measured angles match the requested ones.

use crate::geometry::{
    FrameSize, Landmark, LandmarkSet, LANDMARK_COUNT, LEFT_ELBOW, LEFT_SHOULDER, LEFT_WRIST, NOSE,
    RIGHT_ELBOW, RIGHT_HIP, RIGHT_SHOULDER, RIGHT_WRIST,
};

pub const FRAME: FrameSize = FrameSize::new(640, 480);

fn place(raw: &mut [Landmark; LANDMARK_COUNT], index: usize, x: f32, y: f32) {
    raw[index] = Landmark::new(
        x / FRAME.width as f32,
        y / FRAME.height as f32,
        0.0,
        0.95,
    );
}

/// Side view, right arm toward the camera, elbow bent to `elbow_angle`
pub fn curl_frame(elbow_angle: f32) -> LandmarkSet {
    let mut raw = [Landmark::default(); LANDMARK_COUNT];
    place(&mut raw, NOSE, 352.0, 100.0);
    place(&mut raw, LEFT_SHOULDER, 328.0, 150.0);
    place(&mut raw, RIGHT_SHOULDER, 320.0, 150.0);
    place(&mut raw, RIGHT_ELBOW, 320.0, 250.0);
    place(&mut raw, RIGHT_HIP, 320.0, 330.0);

    let theta = elbow_angle.to_radians();
    place(
        &mut raw,
        RIGHT_WRIST,
        320.0 + 100.0 * theta.sin(),
        250.0 - 100.0 * theta.cos(),
    );
    LandmarkSet::new(raw)
}

/// Same arm as `curl_frame` with the subject turned toward the camera
pub fn curl_frame_facing(elbow_angle: f32) -> LandmarkSet {
    let mut raw = *curl_frame(elbow_angle).landmarks();
    place(&mut raw, LEFT_SHOULDER, 420.0, 150.0);
    LandmarkSet::new(raw)
}

/// Front view, left arm at `shoulder_angle` from the shoulder line
pub fn press_frame(shoulder_angle: f32) -> LandmarkSet {
    let mut raw = [Landmark::default(); LANDMARK_COUNT];
    place(&mut raw, NOSE, 320.0, 160.0);
    place(&mut raw, LEFT_SHOULDER, 400.0, 240.0);
    place(&mut raw, RIGHT_SHOULDER, 240.0, 240.0);

    let phi = shoulder_angle.to_radians();
    let elbow_x = 400.0 - 90.0 * phi.cos();
    let elbow_y = 240.0 - 90.0 * phi.sin();
    place(&mut raw, LEFT_ELBOW, elbow_x, elbow_y);
    place(&mut raw, LEFT_WRIST, elbow_x, elbow_y - 60.0);
    LandmarkSet::new(raw)
}
