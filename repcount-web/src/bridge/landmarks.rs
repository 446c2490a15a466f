//! Landmark decoding for frames coming from JavaScript
//!
//! JS sends one flat Float32Array per frame: 33 landmarks × [x, y, z,
//! visibility], or an empty array when the pose model found nobody.

use crate::geometry::{FrameSize, LandmarkSet, LANDMARK_COUNT, LANDMARK_STRIDE};

use super::error::BridgeError;

/// Decode one frame; `Ok(None)` means no subject
pub fn decode_landmarks(data: &[f32]) -> Result<Option<LandmarkSet>, BridgeError> {
    if data.is_empty() {
        return Ok(None);
    }

    match LandmarkSet::from_flat(data) {
        Some(set) => Ok(Some(set)),
        None => {
            log::warn!(
                "Invalid landmark data length: {} (expected {})",
                data.len(),
                LANDMARK_COUNT * LANDMARK_STRIDE
            );
            Err(BridgeError::LandmarkLength(data.len()))
        }
    }
}

pub fn decode_frame_size(width: u32, height: u32) -> Result<FrameSize, BridgeError> {
    if width == 0 || height == 0 {
        log::warn!("Invalid frame size {}x{}", width, height);
        return Err(BridgeError::FrameSize { width, height });
    }
    Ok(FrameSize::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_means_no_subject() {
        assert_eq!(decode_landmarks(&[]), Ok(None));
    }

    #[test]
    fn test_full_frame_decodes() {
        let data = vec![0.5; LANDMARK_COUNT * LANDMARK_STRIDE];
        assert!(matches!(decode_landmarks(&data), Ok(Some(_))));
    }

    #[test]
    fn test_legacy_xyz_layout_rejected() {
        let data = vec![0.5; LANDMARK_COUNT * 3];
        assert_eq!(decode_landmarks(&data), Err(BridgeError::LandmarkLength(99)));
    }

    #[test]
    fn test_zero_frame_size_rejected() {
        assert!(decode_frame_size(640, 480).is_ok());
        assert_eq!(
            decode_frame_size(0, 480),
            Err(BridgeError::FrameSize { width: 0, height: 480 })
        );
    }
}
