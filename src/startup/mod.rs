use bevy::prelude::*;

use crate::{
    data::config::MapSelectButtonConfig,
    systems::{
        interaction::PointerRegion,
        ui::{
            map_select_button::{ButtonPalette, MapSelectButton, MapSelectButtonPlugin},
            selector::MapSelectorToggler,
        },
    },
};

pub mod cursor;
pub mod render;
pub mod shortcuts;

use cursor::CursorPlugin;

const BUTTON_SIZE: Vec2 = Vec2::new(220.0, 56.0);
const PANEL_SIZE: Vec2 = Vec2::new(480.0, 320.0);

pub struct StartupPlugin;
impl Plugin for StartupPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(MapSelectButtonConfig::embedded())
            .add_plugins((CursorPlugin, MapSelectButtonPlugin))
            .add_systems(Startup, (render::setup_cameras, spawn_map_select).chain())
            .add_systems(Update, (shortcuts::close_on_esc, shortcuts::toggle_lock));
    }
}

fn spawn_map_select(mut commands: Commands, config: Res<MapSelectButtonConfig>) {
    let panel = commands
        .spawn((
            Name::new("map_selector_panel"),
            Sprite::from_color(Color::srgba(0.1, 0.1, 0.15, 0.9), PANEL_SIZE),
            Transform::from_xyz(0.0, 80.0, 0.0),
            Visibility::Hidden,
        ))
        .id();

    let toggler = commands
        .spawn((
            Name::new("map_selector_toggler"),
            MapSelectorToggler::new(panel),
        ))
        .id();

    commands.spawn((
        Name::new("map_select_button"),
        MapSelectButton::new(*config, toggler),
        ButtonPalette::default(),
        PointerRegion(BUTTON_SIZE),
        Sprite::from_color(Color::WHITE, BUTTON_SIZE),
        Transform::from_xyz(0.0, -220.0, 1.0),
    ));

    info!(
        "Spawned map select button (locked: {}), press L to toggle the lock",
        config.locked
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::interaction::PointerHandler;

    #[test]
    fn spawned_button_is_wired_to_toggler_and_panel() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(MapSelectButtonConfig::default());
        app.add_systems(Startup, spawn_map_select);
        app.update();

        let world = app.world_mut();
        let mut buttons = world.query::<(&MapSelectButton, &PointerRegion)>();
        let (button, region) = buttons.single(world).expect("one button");
        let toggler_entity = button.target();
        assert!(button.locked());
        assert_eq!(region.0, BUTTON_SIZE);

        let toggler = world
            .get::<MapSelectorToggler>(toggler_entity)
            .expect("toggler component");
        assert!(!toggler.activated());
        assert_eq!(
            world.get::<Visibility>(toggler.panel).copied(),
            Some(Visibility::Hidden)
        );
    }
}
