//! Mesh2d filled-polygon rendering for every [`Body`].
//!
//! Each body entity gets a retained `Mesh2d` built from its outline when it
//! spawns, and again whenever the simulation tags it [`Redraw`] (asteroids
//! regrowing).  Per frame only the `Transform` is synced from the
//! screen-space [`Position`] and heading.

use crate::body::{arena, Body, Position, Redraw};
use crate::geometry::screen_to_world;
use bevy::ecs::component::Mutable;
use bevy::prelude::*;
use bevy_asset::RenderAssetUsages;
use bevy_mesh::{Indices, PrimitiveTopology};

// ── Mesh attachment ───────────────────────────────────────────────────────────

/// Attach (or replace) the filled polygon mesh of new and reshaped bodies.
#[allow(clippy::type_complexity)]
pub fn attach_body_mesh_system<T: Body + Component>(
    mut commands: Commands,
    query: Query<(Entity, &T), Or<(Added<T>, With<Redraw>)>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for (entity, body) in query.iter() {
        let outline = world_outline(&body.outline());
        if outline.len() < 3 {
            continue;
        }

        let mesh_handle = meshes.add(filled_polygon_mesh(&outline));
        let material_handle = materials.add(ColorMaterial::from_color(body.color()));

        commands
            .entity(entity)
            .insert((Mesh2d(mesh_handle), MeshMaterial2d(material_handle)))
            .remove::<Redraw>();
    }
}

/// Copy simulation position and heading into the render transform.
pub fn sync_body_transform_system<T: Body + Component<Mutability = Mutable>>(
    mut query: Query<(&T, &Position, &mut Transform)>,
) {
    for (body, position, mut transform) in query.iter_mut() {
        transform.translation = screen_to_world(position.0, arena()).extend(T::LAYER);
        transform.rotation = world_rotation(body.heading());
    }
}

// ── Geometry helpers ──────────────────────────────────────────────────────────

/// Screen-space headings turn clockwise on screen, which is negative about +z.
pub fn world_rotation(heading_degrees: f32) -> Quat {
    Quat::from_rotation_z(-heading_degrees.to_radians())
}

/// Mirror a screen-local outline (y down) into world-local space (y up).
pub fn world_outline(outline: &[Vec2]) -> Vec<Vec2> {
    outline.iter().map(|v| Vec2::new(v.x, -v.y)).collect()
}

/// Fan-triangulate a convex polygon into a renderable [`Mesh`].
///
/// Triangles `(0, i, i+1)` for `i ∈ 1..n-2`; valid for the convex outlines all
/// bodies produce.
pub fn filled_polygon_mesh(vertices: &[Vec2]) -> Mesh {
    let n = vertices.len();
    debug_assert!(n >= 3, "polygon must have ≥ 3 vertices");

    let positions: Vec<[f32; 3]> = vertices.iter().map(|v| [v.x, v.y, 0.0]).collect();
    let normals: Vec<[f32; 3]> = vec![[0.0, 0.0, 1.0]; n];
    let uvs: Vec<[f32; 2]> = vec![[0.0, 0.0]; n];

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(fan_indices(n)));
    mesh
}

fn fan_indices(n: usize) -> Vec<u32> {
    let mut indices: Vec<u32> = Vec::with_capacity(n.saturating_sub(2) * 3);
    for i in 1..(n.saturating_sub(1) as u32) {
        indices.extend_from_slice(&[0, i, i + 1]);
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_covers_every_vertex() {
        assert_eq!(fan_indices(3), vec![0, 1, 2]);
        assert_eq!(fan_indices(5), vec![0, 1, 2, 0, 2, 3, 0, 3, 4]);
    }

    #[test]
    fn outline_is_mirrored_vertically() {
        let mirrored = world_outline(&[Vec2::new(1.0, 2.0), Vec2::new(-3.0, -4.0)]);
        assert_eq!(mirrored, vec![Vec2::new(1.0, -2.0), Vec2::new(-3.0, 4.0)]);
    }

    #[test]
    fn screen_heading_down_points_world_down() {
        // 90° in screen space faces +y (down), which is -y in world space.
        let forward = world_rotation(90.0) * Vec3::X;
        assert!((forward - Vec3::NEG_Y).length() < 1e-5);
    }

    #[test]
    fn polygon_mesh_has_one_triangle_per_extra_vertex() {
        let square = [
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, 1.0),
        ];
        let mesh = filled_polygon_mesh(&square);
        assert_eq!(mesh.count_vertices(), 4);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(6));
    }
}
