//! # Body Dimensions
//!
//! Metric sizes derived from [`ShapeParameters`], shared by the part
//! generators and the assembler so that the length a part is built with is
//! the same length its joint anchors are spaced by.

use config::constants::*;
use glam::DVec3;

use crate::params::ShapeParameters;

/// Part sizes in metres for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDimensions {
    /// Head width, height, depth.
    pub head: DVec3,
    pub upper_torso: f64,
    pub lower_torso: f64,
    /// Full shoulder span of the upper torso.
    pub shoulder_span: f64,
    /// Full hip span of the torso halves.
    pub hip_span: f64,
    pub neck: f64,
    pub upper_arm: f64,
    pub forearm: f64,
    pub thigh: f64,
    pub calf: f64,
    /// Palm length.
    pub palm: f64,
    pub fingers: f64,
    pub hand_width: f64,
    pub hand_thickness: f64,
    pub foot_length: f64,
    pub foot_width: f64,
    pub foot_height: f64,
    /// Lateral distance of each shoulder anchor from the body axis.
    pub shoulder_offset: f64,
    /// Lateral distance of each hip anchor from the body axis.
    pub hip_offset: f64,
}

impl BodyDimensions {
    pub fn from_params(params: &ShapeParameters) -> Self {
        let scale = params.height;
        let torso = BASE_TORSO_HEIGHT * params.torso_length * scale;
        let arm = BASE_ARM_LENGTH * params.arm_length * scale;
        let leg = BASE_LEG_LENGTH * params.leg_length * scale;

        Self {
            head: DVec3::new(
                BASE_HEAD_WIDTH * params.head_width,
                BASE_HEAD_HEIGHT * params.head_height,
                BASE_HEAD_DEPTH * params.head_depth,
            ),
            upper_torso: torso * UPPER_TORSO_FRACTION,
            lower_torso: torso * LOWER_TORSO_FRACTION,
            shoulder_span: BASE_SHOULDER_WIDTH * params.shoulder_width,
            hip_span: BASE_HIP_WIDTH * params.hip_width,
            neck: BASE_NECK_HEIGHT * scale,
            upper_arm: arm * UPPER_ARM_FRACTION,
            forearm: arm * FOREARM_FRACTION,
            thigh: leg * THIGH_FRACTION,
            calf: leg * CALF_FRACTION,
            palm: BASE_HAND_LENGTH * scale,
            fingers: BASE_FINGER_LENGTH * scale,
            hand_width: BASE_HAND_WIDTH * scale,
            hand_thickness: BASE_HAND_THICKNESS * scale,
            foot_length: BASE_FOOT_LENGTH * scale,
            foot_width: BASE_FOOT_WIDTH * scale,
            foot_height: BASE_FOOT_HEIGHT * scale,
            shoulder_offset: SHOULDER_X_OFFSET * params.shoulder_width,
            hip_offset: HIP_X_OFFSET * params.hip_width,
        }
    }

    /// Palm plus fingers.
    pub fn hand(&self) -> f64 {
        self.palm + self.fingers
    }

    /// Joint heights, accumulated from the ground up.
    pub fn anchors(&self) -> Anchors {
        let ankle = self.foot_height;
        let knee = ankle + self.calf;
        let hip = knee + self.thigh;
        let waist = hip + self.lower_torso;
        let neck_base = waist + self.upper_torso;
        let head_base = neck_base + self.neck;

        // Arms hang from the shoulder line
        let shoulder = waist + self.upper_torso * SHOULDER_LEVEL_FRACTION;
        let elbow = shoulder - self.upper_arm;
        let wrist = elbow - self.forearm;

        Anchors {
            ground: 0.0,
            ankle,
            knee,
            hip,
            waist,
            neck_base,
            head_base,
            shoulder,
            elbow,
            wrist,
            hand_base: wrist - self.hand(),
        }
    }
}

/// Named joint heights above the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    pub ground: f64,
    pub ankle: f64,
    pub knee: f64,
    pub hip: f64,
    pub waist: f64,
    pub neck_base: f64,
    pub head_base: f64,
    pub shoulder: f64,
    pub elbow: f64,
    pub wrist: f64,
    /// Lowest point of the hanging hand.
    pub hand_base: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ShapeField;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_dimensions() {
        let dims = BodyDimensions::from_params(&ShapeParameters::default());
        assert_relative_eq!(dims.upper_torso, 0.55 * 0.55);
        assert_relative_eq!(dims.thigh, 0.85 * 0.45);
        assert_relative_eq!(dims.hand(), 0.115);
        assert_relative_eq!(dims.shoulder_offset, 0.18);
    }

    #[test]
    fn test_anchors_accumulate() {
        let dims = BodyDimensions::from_params(&ShapeParameters::default());
        let a = dims.anchors();
        assert_relative_eq!(a.knee - a.ankle, dims.calf);
        assert_relative_eq!(a.hip - a.knee, dims.thigh);
        assert_relative_eq!(a.head_base - a.neck_base, dims.neck);
        assert!(a.shoulder < a.neck_base && a.shoulder > a.waist);
        assert!(a.hand_base > a.ground);
    }

    #[test]
    fn test_longer_legs_raise_everything_above() {
        let base = ShapeParameters::default();
        let long = base.clone().with(ShapeField::LegLength, 1.2);
        let a = BodyDimensions::from_params(&base).anchors();
        let b = BodyDimensions::from_params(&long).anchors();

        let lift = b.hip - a.hip;
        assert!(lift > 0.0);
        assert_eq!(a.ankle, b.ankle);
        assert_relative_eq!(b.head_base - a.head_base, lift, epsilon = 1e-12);
        assert_relative_eq!(b.shoulder - a.shoulder, lift, epsilon = 1e-12);
    }
}
