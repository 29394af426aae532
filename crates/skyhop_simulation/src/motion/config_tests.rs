//! Tests for MotionConfig validation.

#[cfg(test)]
mod tests {
    use crate::motion::{LayerMask, MotionConfig, MotionController, MotionError, SpeedProfile};

    #[test]
    fn test_default_config_is_valid() {
        let config = MotionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.speeds.walk, 5.0);
        assert_eq!(config.speeds.sprint, 7.0);
        assert_eq!(config.jump_strength, 10.0);
        assert_eq!(config.wall_jump_strength, 14.0);
        assert_eq!(config.wall_slide_speed, -1.0);
        assert_eq!(config.flight_grace_time, 0.2);
        assert_eq!(config.wall_lock_time, 0.35);
    }

    #[test]
    fn test_crouch_must_be_shorter_than_standing() {
        let config = MotionConfig {
            crouch_height: 2.0,
            standing_height: 2.0,
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(MotionError::CrouchNotShorter {
                crouch: 2.0,
                standing: 2.0
            })
        );
        assert!(MotionController::new(config).is_err());
    }

    #[test]
    fn test_non_positive_speed_rejected() {
        let config = MotionConfig {
            speeds: SpeedProfile {
                walk: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(MotionError::NonPositive { name: "speeds.walk", .. })
        ));
    }

    #[test]
    fn test_nan_rejected() {
        let config = MotionConfig {
            jump_strength: f32::NAN,
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(MotionError::Negative { name: "jump_strength", .. })
        ));
    }

    #[test]
    fn test_empty_ground_mask_rejected() {
        let config = MotionConfig {
            ground_mask: LayerMask::NONE,
            ..Default::default()
        };

        assert_eq!(config.validate(), Err(MotionError::EmptyGroundMask));
    }

    #[test]
    fn test_speed_priority() {
        let speeds = SpeedProfile::default();

        assert_eq!(speeds.select(false, false), 5.0);
        assert_eq!(speeds.select(false, true), 7.0);
        assert_eq!(speeds.select(true, true), 3.0);
        assert_eq!(speeds.select(true, false), 3.0);
    }

    #[test]
    fn test_probe_lengths() {
        let config = MotionConfig::default();

        assert_eq!(config.wall_probe_length(), 0.75);
        assert_eq!(config.ceiling_probe_length(), 1.0);
    }

    #[test]
    fn test_layer_mask() {
        let mask = LayerMask::layer(3);

        assert_eq!(mask.0, 0b1000);
        assert!(mask.contains(0b1010));
        assert!(!mask.contains(0b0111));
    }
}
