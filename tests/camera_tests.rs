use glam::{Vec2, Vec3};
use shape_morph::camera::Camera;
use shape_morph::controller::AnimationController;

#[cfg(test)]
mod easing_tests {
    use super::*;

    #[test]
    fn test_converges_geometrically() {
        let mut camera = Camera::default();
        let pointer = Vec2::new(200.0, -120.0);
        let target = Vec2::new(pointer.x, -pointer.y);

        for frame in 1..=60 {
            camera.ease_toward(pointer);
            let remaining = target - Vec2::new(camera.position.x, camera.position.y);
            let expected = target.length() * 0.95f32.powi(frame);
            assert!(
                (remaining.length() - expected).abs() < 1e-2,
                "frame {frame}: {} vs {expected}",
                remaining.length()
            );
        }
    }

    #[test]
    fn test_never_overshoots_fixed_input() {
        let mut camera = Camera::default();
        let pointer = Vec2::new(-300.0, 250.0);
        let (target_x, target_y) = (-300.0, -250.0);
        let mut last = camera.position;

        for _ in 0..2000 {
            camera.ease_toward(pointer);
            assert!(camera.position.x >= target_x && camera.position.x <= last.x);
            assert!(camera.position.y >= target_y && camera.position.y <= last.y);
            last = camera.position;
        }
        assert!((camera.position.x - target_x).abs() < 1e-2);
        assert!((camera.position.y - target_y).abs() < 1e-2);
    }

    #[test]
    fn test_easing_leaves_depth_alone() {
        let mut camera = Camera::default().with_distance(42.0);
        for _ in 0..10 {
            camera.ease_toward(Vec2::new(10.0, 10.0));
        }
        assert_eq!(camera.position.z, 42.0);
    }

    #[test]
    fn test_view_keeps_origin_centered() {
        let mut camera = Camera::new(16.0 / 9.0);
        camera.ease_toward(Vec2::new(80.0, 40.0));
        let clip = camera.projection_matrix() * camera.view_matrix() * Vec3::ZERO.extend(1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    }
}

#[cfg(test)]
mod viewport_tests {
    use super::*;

    #[test]
    fn test_resize_sets_exact_aspect() {
        let sizes = [(800, 600), (1920, 1080), (1, 1), (333, 777), (4096, 17)];
        let mut controller = AnimationController::new(640, 480);

        for (width, height) in sizes {
            controller.resize(width, height);
            assert_eq!(controller.camera().aspect, width as f32 / height as f32);
            assert_eq!(controller.viewport(), (width, height));
        }
    }

    #[test]
    fn test_zero_height_is_ignored() {
        let mut controller = AnimationController::new(640, 480);
        controller.resize(640, 0);
        assert_eq!(controller.camera().aspect, 640.0 / 480.0);
    }

    #[test]
    fn test_pointer_offset_uses_latest_viewport() {
        let mut controller = AnimationController::new(640, 480);
        controller.resize(1000, 500);
        controller.pointer_moved(1000.0, 0.0);
        assert_eq!(controller.pointer(), Vec2::new(500.0, -250.0));
    }

    #[test]
    fn test_scroll_moves_camera_and_floors_at_zero() {
        let mut controller = AnimationController::new(640, 480);
        controller.scroll(30.0);
        assert_eq!(controller.camera().position.z, 70.0);
        controller.scroll(500.0);
        assert_eq!(controller.camera().position.z, 0.0);
    }
}
