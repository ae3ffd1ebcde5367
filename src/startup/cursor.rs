use bevy::{prelude::*, window::PrimaryWindow};

use super::render::MainCamera;

pub struct CursorPlugin;
impl Plugin for CursorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorPosition>()
            .add_systems(PreUpdate, CursorPosition::update_position);
    }
}

/// Cursor location in world space, `None` while it is outside the window.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct CursorPosition(pub Option<Vec2>);

impl CursorPosition {
    fn update_position(
        window: Single<&Window, With<PrimaryWindow>>,
        camera_query: Single<(&Camera, &GlobalTransform), With<MainCamera>>,
        mut cursor: ResMut<CursorPosition>,
    ) {
        let (camera, camera_transform) = *camera_query;

        let position = window
            .cursor_position()
            .and_then(|screen| camera.viewport_to_world_2d(camera_transform, screen).ok());

        if cursor.0 != position {
            cursor.0 = position;
        }
    }
}
