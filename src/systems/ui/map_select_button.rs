//! Button that opens the map selector.
//!
//! Hovering grows the button toward its configured maximum while the selector
//! panel is closed; clicking toggles the panel. Everything is gated by a lock
//! flag, and a locked button ignores the pointer entirely.
use bevy::prelude::*;
use enum_map::{enum_map, Enum, EnumMap};

use crate::{
    data::config::MapSelectButtonConfig,
    startup::cursor::CursorPosition,
    systems::{
        interaction::{dispatch_pointer_edges, PointerHandler},
        motion::HoverScale,
        ui::selector::{MapSelectorToggler, SelectorToggle},
    },
};

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum MapSelectSystem {
    Input,
    Scale,
    Present,
}

pub struct MapSelectButtonPlugin;

impl Plugin for MapSelectButtonPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorPosition>()
            .configure_sets(
                Update,
                (
                    MapSelectSystem::Input,
                    MapSelectSystem::Scale,
                    MapSelectSystem::Present,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                dispatch_pointer_edges::<MapSelectButton>.in_set(MapSelectSystem::Input),
            )
            .add_systems(Update, MapSelectButton::enact.in_set(MapSelectSystem::Scale))
            .add_systems(
                Update,
                (
                    MapSelectorToggler::sync_panel_visibility,
                    MapSelectButton::apply_tint,
                )
                    .in_set(MapSelectSystem::Present),
            );
    }
}

#[derive(Component, Clone, Copy, Debug)]
#[require(Transform)]
pub struct MapSelectButton {
    scaler: HoverScale,
    locked: bool,
    toggler: Entity,
    hovered: bool,
}

impl MapSelectButton {
    pub fn new(config: MapSelectButtonConfig, toggler: Entity) -> Self {
        Self {
            scaler: HoverScale::new(config.max_scale, config.speed),
            locked: config.locked,
            toggler,
            hovered: false,
        }
    }

    pub const fn locked(&self) -> bool {
        self.locked
    }

    /// Host-side switch for the lock gate. Leaves the hover flag alone.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub const fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn tint(&self) -> ButtonTint {
        if self.locked {
            ButtonTint::Locked
        } else if self.hovered() {
            ButtonTint::Hovered
        } else {
            ButtonTint::Idle
        }
    }

    /// Forwards an unlocked click to the toggler. Hover state is untouched.
    pub fn click<T: SelectorToggle>(&mut self, toggler: &mut T) {
        if self.locked {
            return;
        }
        toggler.toggle_activation();
    }

    pub fn enact(
        mut buttons: Query<(Entity, &MapSelectButton, &mut Transform)>,
        togglers: Query<&MapSelectorToggler>,
    ) {
        for (entity, button, mut transform) in buttons.iter_mut() {
            let mut unwired = false;
            let next = button.scaler.step(transform.scale, button.hovered, || {
                match togglers.get(button.toggler) {
                    Ok(toggler) => toggler.is_inactive(),
                    Err(_) => {
                        unwired = true;
                        false
                    }
                }
            });

            if unwired {
                error!(
                    "Map select button {entity:?} is wired to {:?}, which has no MapSelectorToggler",
                    button.toggler
                );
                continue;
            }

            if next != transform.scale {
                transform.scale = next;
            }
        }
    }

    pub fn apply_tint(mut query: Query<(&MapSelectButton, &ButtonPalette, &mut Sprite)>) {
        for (button, palette, mut sprite) in query.iter_mut() {
            let color = palette.0[button.tint()];
            if sprite.color != color {
                sprite.color = color;
            }
        }
    }
}

impl PointerHandler for MapSelectButton {
    type Target = MapSelectorToggler;

    fn target(&self) -> Entity {
        self.toggler
    }

    fn on_pointer_enter(&mut self) {
        if self.locked {
            return;
        }
        self.hovered = true;
    }

    fn on_pointer_exit(&mut self) {
        if self.locked {
            return;
        }
        self.hovered = false;
    }

    fn on_pointer_click(&mut self, target: &mut Mut<MapSelectorToggler>) {
        self.click(target);
    }
}

#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTint {
    Locked,
    Idle,
    Hovered,
}

#[derive(Component, Clone)]
pub struct ButtonPalette(pub EnumMap<ButtonTint, Color>);

impl Default for ButtonPalette {
    fn default() -> Self {
        Self(enum_map! {
            ButtonTint::Locked => Color::srgb(0.35, 0.35, 0.35),
            ButtonTint::Idle => Color::WHITE,
            ButtonTint::Hovered => Color::srgb(0.0, 0.85, 0.85),
        })
    }
}
