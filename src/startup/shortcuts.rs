use bevy::app::AppExit;
use bevy::prelude::*;

use crate::systems::ui::map_select_button::MapSelectButton;

pub fn close_on_esc(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut app_exit_events: MessageWriter<AppExit>,
) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        app_exit_events.write(AppExit::Success);
    }
}

pub fn toggle_lock(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut buttons: Query<&mut MapSelectButton>,
) {
    if !keyboard_input.just_pressed(KeyCode::KeyL) {
        return;
    }

    for mut button in buttons.iter_mut() {
        let locked = !button.locked();
        button.set_locked(locked);
        info!("Map select button {}", if locked { "locked" } else { "unlocked" });
    }
}
