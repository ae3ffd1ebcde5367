//! Map selector panel activation.
//!
//! The toggler owns the activation flag and mirrors it onto the panel entity's
//! visibility. Buttons only ever see it through `SelectorToggle`.
use bevy::{ecs::component::Mutable, prelude::*};

/// Capability of anything that shows and hides a selector panel.
pub trait SelectorToggle {
    /// True while the panel is not shown.
    fn is_inactive(&self) -> bool;

    fn toggle_activation(&mut self);
}

impl<T> SelectorToggle for Mut<'_, T>
where
    T: SelectorToggle + Component<Mutability = Mutable>,
{
    fn is_inactive(&self) -> bool {
        (**self).is_inactive()
    }

    fn toggle_activation(&mut self) {
        (**self).toggle_activation();
    }
}

#[derive(Component, Clone, Copy, Debug)]
pub struct MapSelectorToggler {
    pub panel: Entity,
    activated: bool,
}

impl MapSelectorToggler {
    pub const fn new(panel: Entity) -> Self {
        Self {
            panel,
            activated: false,
        }
    }

    pub const fn activated(&self) -> bool {
        self.activated
    }

    pub fn sync_panel_visibility(
        togglers: Query<&MapSelectorToggler, Changed<MapSelectorToggler>>,
        mut panels: Query<&mut Visibility>,
    ) {
        for toggler in togglers.iter() {
            let Ok(mut visibility) = panels.get_mut(toggler.panel) else {
                warn!("Map selector panel {:?} has no Visibility", toggler.panel);
                continue;
            };

            let target = if toggler.activated() {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
            visibility.set_if_neq(target);
        }
    }
}

impl SelectorToggle for MapSelectorToggler {
    fn is_inactive(&self) -> bool {
        !self.activated
    }

    fn toggle_activation(&mut self) {
        self.activated = !self.activated;
        debug!(
            "Map selector panel {:?} {}",
            self.panel,
            if self.activated { "activated" } else { "deactivated" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_systems(Update, MapSelectorToggler::sync_panel_visibility);
        app
    }

    #[test]
    fn toggler_starts_inactive_and_flips() {
        let mut toggler = MapSelectorToggler::new(Entity::from_bits(7));
        assert!(toggler.is_inactive());

        toggler.toggle_activation();
        assert!(!toggler.is_inactive());
        assert!(toggler.activated());

        toggler.toggle_activation();
        assert!(toggler.is_inactive());
    }

    #[test]
    fn panel_is_hidden_on_spawn_and_shown_when_activated() {
        let mut app = make_app();
        let panel = app.world_mut().spawn(Visibility::Visible).id();
        let toggler = app.world_mut().spawn(MapSelectorToggler::new(panel)).id();

        app.update();
        assert_eq!(
            app.world().get::<Visibility>(panel).copied(),
            Some(Visibility::Hidden)
        );

        app.world_mut()
            .get_mut::<MapSelectorToggler>(toggler)
            .expect("toggler")
            .toggle_activation();
        app.update();
        assert_eq!(
            app.world().get::<Visibility>(panel).copied(),
            Some(Visibility::Inherited)
        );
    }

    #[test]
    fn reading_through_mut_does_not_mark_changed() {
        let mut app = make_app();
        let panel = app.world_mut().spawn(Visibility::Hidden).id();
        let toggler = app.world_mut().spawn(MapSelectorToggler::new(panel)).id();
        app.update();

        // A visibility edit made after the initial sync must survive frames in
        // which the toggler is only read.
        app.world_mut().entity_mut(panel).insert(Visibility::Visible);
        {
            let toggler = app
                .world_mut()
                .get_mut::<MapSelectorToggler>(toggler)
                .expect("toggler");
            assert!(toggler.is_inactive());
        }
        app.update();

        assert_eq!(
            app.world().get::<Visibility>(panel).copied(),
            Some(Visibility::Visible)
        );
    }
}
