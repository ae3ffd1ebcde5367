use bevy::prelude::*;

/// Additive hover growth toward `max_scale`, decay back toward unit scale.
///
/// Steps are fixed increments rather than a clamp, so the scale can land up to
/// one `speed` past either bound before the guard trips on the next frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverScale {
	pub max_scale : f32,
	pub speed : f32
}

impl Default for HoverScale {
	fn default() -> Self {
		Self {
			max_scale : 1.1,
			speed : 0.01
		}
	}
}

impl HoverScale {
	pub const fn new(max_scale : f32, speed : f32) -> Self {
		Self { max_scale, speed }
	}

	/// Advances `scale` by one frame. `panel_inactive` is only polled while
	/// hovered, and the shrink branch ignores it.
	pub fn step(
		&self,
		scale : Vec3,
		hovered : bool,
		panel_inactive : impl FnOnce() -> bool
	) -> Vec3 {
		if hovered && panel_inactive() && scale.x < self.max_scale {
			Vec3::new(scale.x + self.speed, scale.y + self.speed, scale.z)
		} else if !hovered && scale.x > 1.0 {
			Vec3::new(scale.x - self.speed, scale.y - self.speed, scale.z)
		} else {
			scale
		}
	}
}
