use macroquad::prelude::*;
use super::raycast::Ray;
use crate::config::PlayerConfig;

/// Pitch limit, 89 degrees
const MAX_PITCH: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Distance in front of the eye where dropped items appear
pub const DROP_DISTANCE: f32 = 1.0;

/// First-person player controller
#[derive(Debug, Clone)]
pub struct Player {
    /// Feet position
    pub position: Vec3,
    /// Rotation around Y, radians (0 looks down -Z)
    pub yaw: f32,
    /// Rotation around the right axis, radians (positive looks up)
    pub pitch: f32,
    /// Cleared while the inventory is open
    pub can_move: bool,
    pub move_speed: f32,
    pub mouse_sensitivity: f32,
    pub eye_height: f32,
    /// Half extent of the square arena the player is kept inside
    pub bounds: f32,
}

impl Player {
    pub fn new(config: &PlayerConfig, bounds: f32) -> Self {
        let [x, y, z] = config.start;
        Self {
            position: vec3(x, y, z),
            yaw: 0.0,
            pitch: 0.0,
            can_move: true,
            move_speed: config.move_speed,
            mouse_sensitivity: config.mouse_sensitivity,
            eye_height: config.eye_height,
            bounds,
        }
    }

    pub fn forward(&self) -> Vec3 {
        vec3(
            -self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Forward direction flattened onto the ground plane
    fn flat_forward(&self) -> Vec3 {
        vec3(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    fn flat_right(&self) -> Vec3 {
        vec3(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    pub fn eye_position(&self) -> Vec3 {
        self.position + vec3(0.0, self.eye_height, 0.0)
    }

    /// Ray through the center of the view
    pub fn view_ray(&self) -> Ray {
        Ray::new(self.eye_position(), self.forward())
    }

    /// Where an item dropped from the inventory spawns
    pub fn drop_point(&self) -> Vec3 {
        self.eye_position() + self.forward() * DROP_DISTANCE
    }

    /// Apply a mouse delta in pixels
    pub fn apply_look(&mut self, dx: f32, dy: f32) {
        if !self.can_move {
            return;
        }
        self.yaw -= dx * self.mouse_sensitivity;
        self.pitch = (self.pitch - dy * self.mouse_sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Walk along the ground plane. Inputs are in [-1, 1].
    pub fn apply_move(&mut self, forward: f32, strafe: f32, dt: f32) {
        if !self.can_move || (forward == 0.0 && strafe == 0.0) {
            return;
        }
        let dir = (self.flat_forward() * forward + self.flat_right() * strafe).normalize_or_zero();
        self.position += dir * self.move_speed * dt;
        self.position.x = self.position.x.clamp(-self.bounds, self.bounds);
        self.position.z = self.position.z.clamp(-self.bounds, self.bounds);
    }

    pub fn camera(&self) -> Camera3D {
        let eye = self.eye_position();
        Camera3D {
            position: eye,
            target: eye + self.forward(),
            up: Vec3::Y,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(&PlayerConfig::default(), 10.0)
    }

    #[test]
    fn test_default_forward_looks_down_negative_z() {
        let p = player();
        let f = p.forward();
        assert!(f.x.abs() < 1e-6);
        assert!(f.y.abs() < 1e-6);
        assert!((f.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut p = player();
        p.apply_look(0.0, -1.0e6);
        assert!((p.pitch - MAX_PITCH).abs() < 1e-6);
        p.apply_look(0.0, 1.0e6);
        assert!((p.pitch + MAX_PITCH).abs() < 1e-6);
    }

    #[test]
    fn test_frozen_player_ignores_input() {
        let mut p = player();
        p.can_move = false;
        let (pos, yaw) = (p.position, p.yaw);
        p.apply_look(50.0, 50.0);
        p.apply_move(1.0, 1.0, 1.0);
        assert_eq!(p.position, pos);
        assert_eq!(p.yaw, yaw);
    }

    #[test]
    fn test_move_stays_in_bounds() {
        let mut p = player();
        p.apply_move(1.0, 0.0, 100.0);
        assert!((p.position.z + 10.0).abs() < 1e-4);
        assert_eq!(p.position.y, PlayerConfig::default().start[1]);
    }

    #[test]
    fn test_drop_point_in_front_of_eye() {
        let p = player();
        let drop = p.drop_point();
        let eye = p.eye_position();
        assert!(((drop - eye).length() - DROP_DISTANCE).abs() < 1e-5);
        assert!(drop.z < eye.z);
    }
}
