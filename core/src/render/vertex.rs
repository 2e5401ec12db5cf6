//! Vertex layout and built-in meshes.

use core::mem::{offset_of, size_of};

use crate::math::{Vec2f, Vec3f, vec2, vec3};

/// A vertex with a position, a color, and texture coordinates.
///
/// The layout is `#[repr(C)]` and free of padding, so a slice of vertices
/// can be copied into a vertex buffer as-is and described to the graphics
/// API with [`Vertex::ATTRIBS`] and [`Vertex::STRIDE`].
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vertex {
    pub pos: Vec3f,
    pub color: Vec3f,
    pub uv: Vec2f,
}

/// Description of one interleaved vertex attribute.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Attrib {
    /// The shader input location of the attribute.
    pub location: u32,
    /// The number of `f32` components.
    pub components: u32,
    /// The byte offset of the attribute from the start of the vertex.
    pub offset: usize,
}

/// Returns a new vertex.
#[inline]
pub const fn vertex(pos: Vec3f, color: Vec3f, uv: Vec2f) -> Vertex {
    Vertex { pos, color, uv }
}

impl Vertex {
    /// The attributes of a vertex, in shader location order.
    pub const ATTRIBS: [Attrib; 3] = [
        Attrib {
            location: 0,
            components: 3,
            offset: offset_of!(Vertex, pos),
        },
        Attrib {
            location: 1,
            components: 3,
            offset: offset_of!(Vertex, color),
        },
        Attrib {
            location: 2,
            components: 2,
            offset: offset_of!(Vertex, uv),
        },
    ];

    /// The distance in bytes between consecutive vertices in a buffer.
    pub const STRIDE: usize = size_of::<Vertex>();
}

/// Returns the vertices and indices of a triangle with a red, a green,
/// and a blue corner.
pub fn triangle() -> ([Vertex; 3], [u32; 3]) {
    let verts = [
        vertex(vec3(-0.5, -0.25, 0.0), vec3(1.0, 0.0, 0.0), vec2(0.0, 0.0)),
        vertex(vec3(0.5, -0.25, 0.0), vec3(0.0, 1.0, 0.0), vec2(1.0, 0.0)),
        vertex(vec3(0.0, 0.5, 0.0), vec3(0.0, 0.0, 1.0), vec2(0.5, 1.0)),
    ];
    (verts, [0, 1, 2])
}

/// Returns the vertices and indices of a unit cube centered at the origin.
///
/// Each face has its own four vertices, so that faces can have distinct
/// colors and texture coordinates. The faces are colored red, cyan, green,
/// magenta, blue, and yellow, in the order +x, -x, +y, -y, +z, -z.
/// Triangles are wound counter-clockwise when seen from outside the cube.
pub fn cube() -> ([Vertex; 24], [u32; 36]) {
    // Normal, u axis, and v axis of each face, with u × v = normal
    const FACES: [[[f32; 3]; 3]; 6] = [
        [[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]],
        [[-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]],
        [[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]],
        [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
        [[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        [[0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    ];
    const COLORS: [[f32; 3]; 6] = [
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 1.0],
        [0.0, 1.0, 0.0],
        [1.0, 0.0, 1.0],
        [0.0, 0.0, 1.0],
        [1.0, 1.0, 0.0],
    ];
    const CORNERS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let mut verts = [Vertex::default(); 24];
    let mut idcs = [0; 36];

    for (f, ([n, u, v], color)) in FACES.into_iter().zip(COLORS).enumerate() {
        let (n, u, v) = (Vec3f::from(n), Vec3f::from(u), Vec3f::from(v));
        for (i, [s, t]) in CORNERS.into_iter().enumerate() {
            let pos = (n + u * (2.0 * s - 1.0) + v * (2.0 * t - 1.0)) * 0.5_f32;
            verts[4 * f + i] = vertex(pos, color.into(), vec2(s, t));
        }
        let base = 4 * f as u32;
        idcs[6 * f..6 * f + 6].copy_from_slice(&[
            base,
            base + 1,
            base + 2,
            base,
            base + 2,
            base + 3,
        ]);
    }
    (verts, idcs)
}

#[cfg(test)]
mod tests {
    use crate::math::Vec3;

    use super::*;

    #[test]
    fn layout() {
        assert_eq!(Vertex::STRIDE, 32);
        assert_eq!(
            Vertex::ATTRIBS.map(|a| (a.location, a.components, a.offset)),
            [(0, 3, 0), (1, 3, 12), (2, 2, 24)]
        );
    }

    #[test]
    fn attribs_cover_the_vertex() {
        let floats: u32 = Vertex::ATTRIBS.iter().map(|a| a.components).sum();
        assert_eq!(floats as usize * size_of::<f32>(), Vertex::STRIDE);
    }

    #[test]
    fn triangle_corners() {
        let (verts, idcs) = triangle();
        assert_eq!(idcs, [0, 1, 2]);
        assert_eq!(verts[0].pos, vec3(-0.5, -0.25, 0.0));
        assert_eq!(verts[0].color, vec3(1.0, 0.0, 0.0));
        assert_eq!(verts[2].pos, vec3(0.0, 0.5, 0.0));
        assert_eq!(verts[2].color, vec3(0.0, 0.0, 1.0));
    }

    #[cfg(feature = "bytemuck")]
    #[test]
    fn vertices_cast_to_interleaved_floats() {
        let (verts, _) = triangle();
        let floats: &[f32] = bytemuck::cast_slice(&verts);
        assert_eq!(floats.len(), 3 * Vertex::STRIDE / size_of::<f32>());
        assert_eq!(floats[..8], [-0.5, -0.25, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(floats[16..], [0.0, 0.5, 0.0, 0.0, 0.0, 1.0, 0.5, 1.0]);

        let (cube, _) = cube();
        let bytes = bytemuck::cast_slice::<Vertex, u8>(&cube);
        assert_eq!(bytes.len(), 24 * Vertex::STRIDE);
    }

    #[test]
    fn cube_vertices_are_corners() {
        let (verts, _) = cube();
        for v in verts {
            assert_eq!(v.pos.map(f32::abs), Vec3::splat(0.5), "{v:?}");
        }
        // Each of the 8 corners is shared by three faces
        for v in verts {
            let n = verts.iter().filter(|w| w.pos == v.pos).count();
            assert_eq!(n, 3, "{v:?}");
        }
    }

    #[test]
    fn cube_faces_have_one_color_each() {
        let (verts, _) = cube();
        for face in verts.chunks(4) {
            assert!(face.iter().all(|v| v.color == face[0].color));
        }
        let colors: [Vec3f; 6] = core::array::from_fn(|i| verts[4 * i].color);
        for i in 0..6 {
            for j in i + 1..6 {
                assert_ne!(colors[i], colors[j]);
            }
        }
    }

    #[test]
    fn cube_indices_are_in_bounds() {
        let (_, idcs) = cube();
        assert!(idcs.iter().all(|&i| i < 24));
        assert_eq!(idcs[..6], [0, 1, 2, 0, 2, 3]);
        assert_eq!(idcs[30..], [20, 21, 22, 20, 22, 23]);
    }

    #[test]
    fn cube_triangles_face_outwards() {
        let (verts, idcs) = cube();
        for tri in idcs.chunks(3) {
            let [a, b, c] = [0, 1, 2].map(|i| verts[tri[i] as usize].pos);
            let normal = (b - a).cross(&(c - a));
            let centroid = (a + b + c) / 3.0_f32;
            assert!(normal.dot(&centroid) > 0.0, "{tri:?}");
        }
    }

    #[test]
    fn cube_uvs_span_unit_square() {
        let (verts, _) = cube();
        for face in verts.chunks(4) {
            let uvs = [0, 1, 2, 3].map(|i| face[i].uv);
            assert_eq!(
                uvs,
                [vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(1.0, 1.0), vec2(0.0, 1.0)]
            );
        }
    }
}
