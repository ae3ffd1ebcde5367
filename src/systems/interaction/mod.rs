//! Pointer routing for world-space widgets.
//!
//! Hover is resolved from the world cursor against each widget's
//! `PointerRegion`; transitions are turned into `PointerEdge`s and handed to a
//! `PointerHandler` implementation. Handlers own any gating (locks, cooldowns)
//! themselves, this module only reports what the pointer did.
use bevy::{ecs::component::Mutable, prelude::*};

use crate::startup::cursor::CursorPosition;

/// Capability implemented by widgets that react to the pointer.
///
/// Clicks are routed to a collaborator component living on `target()`.
pub trait PointerHandler: Component<Mutability = Mutable> {
    type Target: Component<Mutability = Mutable>;

    fn target(&self) -> Entity;

    fn on_pointer_enter(&mut self);

    fn on_pointer_exit(&mut self);

    fn on_pointer_click(&mut self, target: &mut Mut<Self::Target>);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEdge {
    Enter,
    Exit,
    Click,
}

/// Derives the edges for one frame. Order is always enter, click, exit.
pub fn pointer_edges(was_hovered: bool, is_hovered: bool, just_pressed: bool) -> Vec<PointerEdge> {
    let mut edges = Vec::with_capacity(2);
    if is_hovered && !was_hovered {
        edges.push(PointerEdge::Enter);
    }
    if is_hovered && just_pressed {
        edges.push(PointerEdge::Click);
    }
    if was_hovered && !is_hovered {
        edges.push(PointerEdge::Exit);
    }
    edges
}

/// Local-space hit rectangle, centered on the entity.
#[derive(Component, Clone, Copy, Debug)]
#[require(PointerState)]
pub struct PointerRegion(pub Vec2);

/// Raw hover from the previous frame, independent of any handler gating.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub hovered: bool,
}

pub fn dispatch_pointer_edges<H: PointerHandler>(
    cursor: Res<CursorPosition>,
    mouse_input: Res<ButtonInput<MouseButton>>,
    mut handlers: Query<(
        Entity,
        &GlobalTransform,
        &PointerRegion,
        Option<&InheritedVisibility>,
        &mut PointerState,
        &mut H,
    )>,
    mut targets: Query<&mut H::Target>,
) {
    let just_pressed = mouse_input.just_pressed(MouseButton::Left);

    for (entity, global_transform, region, inherited_visibility, mut state, mut handler) in
        handlers.iter_mut()
    {
        let visible = inherited_visibility.is_none_or(|visibility| visibility.get());
        let is_hovered = visible
            && cursor
                .0
                .is_some_and(|position| is_cursor_within_region(position, global_transform, region.0));

        let edges = pointer_edges(state.hovered, is_hovered, just_pressed);
        if state.hovered != is_hovered {
            state.hovered = is_hovered;
        }

        for edge in edges {
            match edge {
                PointerEdge::Enter => handler.on_pointer_enter(),
                PointerEdge::Exit => handler.on_pointer_exit(),
                PointerEdge::Click => {
                    let target_entity = handler.target();
                    match targets.get_mut(target_entity) {
                        Ok(mut target) => handler.on_pointer_click(&mut target),
                        Err(_) => warn!(
                            "Dropping click on {entity:?}: click target {target_entity:?} is missing its collaborator component"
                        ),
                    }
                }
            }
        }
    }
}

pub fn is_cursor_within_region(
    cursor_position: Vec2,
    global_transform: &GlobalTransform,
    region_size: Vec2,
) -> bool {
    let model_matrix = global_transform.to_matrix();
    let half = region_size / 2.0;

    let corners = [
        Vec3::new(-half.x, -half.y, 0.0), // bottom-left
        Vec3::new(half.x, -half.y, 0.0),  // bottom-right
        Vec3::new(half.x, half.y, 0.0),   // top-right
        Vec3::new(-half.x, half.y, 0.0),  // top-left
    ];

    let world_corners = corners.map(|corner| model_matrix.transform_point3(corner).truncate());

    is_point_in_polygon(cursor_position, &world_corners)
}

// Ray casting; counts edge crossings to the right of the point.
fn is_point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;

    for i in 0..polygon.len() {
        let vi = polygon[i];
        let vj = polygon[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }

        j = i;
    }

    inside
}
