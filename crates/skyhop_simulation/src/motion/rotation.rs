//! Плавный поворот корпуса вокруг Y
//!
//! Фиксированная угловая скорость, кратчайший путь, без snap'а.

/// Нормализует угол в (-180, 180]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Поворачивает `current` к `target` не больше чем на `max_step` градусов
///
/// Результат нормализован в (-180, 180]. Если до цели ближе чем `max_step`,
/// возвращает ровно target.
pub fn rotate_towards_degrees(current: f32, target: f32, max_step: f32) -> f32 {
    let diff = wrap_degrees(target - current);
    let step = max_step.max(0.0);

    if diff.abs() <= step {
        wrap_degrees(target)
    } else {
        wrap_degrees(current + step * diff.signum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(180.0), 180.0);
        assert_eq!(wrap_degrees(-180.0), 180.0);
        assert_eq!(wrap_degrees(270.0), -90.0);
        assert_eq!(wrap_degrees(-450.0), -90.0);
    }

    #[test]
    fn test_rotate_towards_limits_step() {
        // 700°/s * 0.1s = 70° за frame
        let yaw = rotate_towards_degrees(0.0, 180.0, 70.0);
        assert!((yaw - 70.0).abs() < 1e-4, "yaw = {}", yaw);
    }

    #[test]
    fn test_rotate_towards_shortest_path() {
        // От 170° к -170° короче через 180°, а не через 0°
        let yaw = rotate_towards_degrees(170.0, -170.0, 5.0);
        assert!((yaw - 175.0).abs() < 1e-4, "yaw = {}", yaw);

        let yaw = rotate_towards_degrees(yaw, -170.0, 10.0);
        assert!((yaw - (-175.0)).abs() < 1e-4, "yaw = {}", yaw);
    }

    #[test]
    fn test_rotate_towards_reaches_target() {
        let mut yaw = 0.0;
        for _ in 0..10 {
            yaw = rotate_towards_degrees(yaw, 180.0, 700.0 / 60.0);
        }
        assert!(yaw < 180.0, "не должен snap'нуться за 10 кадров");

        for _ in 0..20 {
            yaw = rotate_towards_degrees(yaw, 180.0, 700.0 / 60.0);
        }
        assert_eq!(yaw, 180.0);
    }
}
