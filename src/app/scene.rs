//! Scene content: the fixed world axes, the rotation-axis indicator and the
//! rotated object.
//!
//! Geometry is described as [`Part`] tables first (pure data, testable
//! without a GL context) and only turned into GPU meshes by [`Scene::new`].

use three_d::*;

use super::model::RotationFrame;
use super::rotation::{AxisVector, Quaternion};

const SUBDIVISIONS: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Unit cylinder along +x from 0 to 1, radius 1.
    Cylinder,
    /// Cone along +x, base at 0 and tip at 1, base radius 1.
    Cone,
    Sphere,
    /// Cube spanning -1..1 on every axis.
    Cube,
}

#[derive(Debug, Clone, Copy)]
pub struct Part {
    pub shape: Shape,
    /// Placement relative to the owning group.
    pub local: Mat4,
    pub color: Srgba,
}

/// Maps the unit cylinder/cone onto the segment `start → end`.
pub fn segment_transform(start: Vec3, end: Vec3, radius: f32) -> Mat4 {
    let span = end - start;
    Mat4::from_translation(start)
        * Mat4::from(Quat::from_arc(vec3(1.0, 0.0, 0.0), span.normalize(), None))
        * Mat4::from_nonuniform_scale(span.magnitude(), radius, radius)
}

fn ball(center: Vec3, radius: f32) -> Mat4 {
    Mat4::from_translation(center) * Mat4::from_scale(radius)
}

fn unit_axes() -> [Vec3; 3] {
    [vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0), vec3(0.0, 0.0, 1.0)]
}

/// World frame: shafts of length 3, cone tips, marker balls at 3.5.
pub fn coordinate_system_parts() -> Vec<Part> {
    unit_axes()
        .into_iter()
        .zip([
            Srgba::new_opaque(255, 0, 0),
            Srgba::new_opaque(0, 255, 0),
            Srgba::new_opaque(0, 0, 255),
        ])
        .flat_map(|(dir, color)| {
            [
                Part { shape: Shape::Cylinder, local: segment_transform(vec3(0.0, 0.0, 0.0), dir * 3.0, 0.02), color },
                Part { shape: Shape::Cone, local: segment_transform(dir * 3.0, dir * 3.3, 0.08), color },
                Part { shape: Shape::Sphere, local: ball(dir * 3.5, 0.1), color },
            ]
        })
        .collect()
}

/// Indicator modelled along +y and centered on the origin; the arrow tip
/// marks the positive direction.
pub fn axis_indicator_parts() -> Vec<Part> {
    let color = Srgba::new(255, 165, 0, 204);
    vec![
        Part {
            shape: Shape::Cylinder,
            local: segment_transform(vec3(0.0, -2.0, 0.0), vec3(0.0, 2.0, 0.0), 0.03),
            color,
        },
        Part {
            shape: Shape::Cone,
            local: segment_transform(vec3(0.0, 2.0, 0.0), vec3(0.0, 2.4, 0.0), 0.1),
            color,
        },
    ]
}

/// Small body frame plus an offset cube so the rotation is easy to read.
pub fn rotated_object_parts() -> Vec<Part> {
    let colors = [
        Srgba::new_opaque(255, 102, 102),
        Srgba::new_opaque(102, 255, 102),
        Srgba::new_opaque(102, 102, 255),
    ];
    let mut parts: Vec<Part> = unit_axes()
        .into_iter()
        .zip(colors)
        .map(|(dir, color)| Part {
            shape: Shape::Cylinder,
            local: segment_transform(vec3(0.0, 0.0, 0.0), dir, 0.03),
            color,
        })
        .collect();
    parts.push(Part {
        shape: Shape::Cube,
        local: ball(vec3(0.8, 0.0, 0.0), 0.15),
        color: Srgba::new(255, 255, 0, 179),
    });
    parts
}

pub fn orientation_matrix(q: Quaternion) -> Mat4 {
    Mat4::from(Quat::new(q.w as f32, q.x as f32, q.y as f32, q.z as f32))
}

/// Rotation taking the indicator's +y onto `axis`, or `None` for a
/// zero-length axis.
pub fn axis_indicator_matrix(axis: AxisVector) -> Option<Mat4> {
    let n = axis.normalized()?;
    let dir = vec3(n.x as f32, n.y as f32, n.z as f32);
    Some(Mat4::from(Quat::from_arc(
        vec3(0.0, 1.0, 0.0),
        dir,
        Some(vec3(1.0, 0.0, 0.0)),
    )))
}

/// What the renderer needs from the controller. Written on every
/// recomputation, read once per drawn frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    pub orientation: Quaternion,
    /// Last nonzero axis, normalized.
    pub axis_direction: AxisVector,
}

impl Default for RenderState {
    fn default() -> Self {
        Self { orientation: Quaternion::IDENTITY, axis_direction: AxisVector::default() }
    }
}

impl RenderState {
    /// A zero-length axis keeps the previous indicator direction.
    pub fn update(&mut self, frame: &RotationFrame) {
        self.orientation = frame.quaternion;
        if let Some(direction) = frame.axis.normalized() {
            self.axis_direction = direction;
        }
    }
}

struct Model {
    gm: Gm<Mesh, PhysicalMaterial>,
    local: Mat4,
}

impl Model {
    fn new(context: &Context, part: &Part) -> Self {
        let cpu_mesh = match part.shape {
            Shape::Cylinder => CpuMesh::cylinder(SUBDIVISIONS),
            Shape::Cone => CpuMesh::cone(SUBDIVISIONS),
            Shape::Sphere => CpuMesh::sphere(SUBDIVISIONS),
            Shape::Cube => CpuMesh::cube(),
        };
        let cpu_material = CpuMaterial {
            albedo: part.color,
            roughness: 0.7,
            metallic: 0.1,
            ..Default::default()
        };
        let material = if part.color.a < 255 {
            PhysicalMaterial::new_transparent(context, &cpu_material)
        } else {
            PhysicalMaterial::new_opaque(context, &cpu_material)
        };
        let mut mesh = Mesh::new(context, &cpu_mesh);
        mesh.set_transformation(part.local);
        Self { gm: Gm::new(mesh, material), local: part.local }
    }

    fn place(&mut self, group: Mat4) {
        self.gm.geometry.set_transformation(group * self.local);
    }
}

pub struct Scene {
    coordinate_system: Vec<Model>,
    axis_indicator: Vec<Model>,
    rotated_object: Vec<Model>,
}

impl Scene {
    pub fn new(context: &Context) -> Self {
        let build = |parts: Vec<Part>| -> Vec<Model> { parts.iter().map(|p| Model::new(context, p)).collect() };
        let mut scene = Self {
            coordinate_system: build(coordinate_system_parts()),
            axis_indicator: build(axis_indicator_parts()),
            rotated_object: build(rotated_object_parts()),
        };
        scene.apply(&RenderState::default());
        scene
    }

    pub fn apply(&mut self, state: &RenderState) {
        if let Some(indicator) = axis_indicator_matrix(state.axis_direction) {
            self.axis_indicator.iter_mut().for_each(|m| m.place(indicator));
        }
        let orientation = orientation_matrix(state.orientation);
        self.rotated_object.iter_mut().for_each(|m| m.place(orientation));
    }

    pub fn objects(&self) -> impl Iterator<Item = &dyn Object> {
        self.coordinate_system
            .iter()
            .chain(&self.axis_indicator)
            .chain(&self.rotated_object)
            .flat_map(|m| &m.gm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-5;

    fn apply(m: Mat4, p: Vec3) -> Vec3 {
        (m * p.extend(1.0)).truncate()
    }

    fn assert_vec_close(actual: Vec3, expected: Vec3) {
        assert!(
            (actual - expected).magnitude() < TOL,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn segment_maps_unit_span_onto_endpoints() {
        let start = vec3(0.0, 2.0, 0.0);
        let end = vec3(0.0, 2.4, 0.0);
        let m = segment_transform(start, end, 0.1);
        assert_vec_close(apply(m, vec3(0.0, 0.0, 0.0)), start);
        assert_vec_close(apply(m, vec3(1.0, 0.0, 0.0)), end);
    }

    #[test]
    fn segment_scales_radius() {
        let m = segment_transform(vec3(0.0, 0.0, 0.0), vec3(3.0, 0.0, 0.0), 0.02);
        assert_vec_close(apply(m, vec3(0.5, 1.0, 0.0)), vec3(1.5, 0.02, 0.0));
    }

    #[test]
    fn part_tables() {
        assert_eq!(coordinate_system_parts().len(), 9);
        assert_eq!(axis_indicator_parts().len(), 2);
        let rotated = rotated_object_parts();
        assert_eq!(rotated.len(), 4);
        assert_eq!(rotated[3].shape, Shape::Cube);
        assert_vec_close(apply(rotated[3].local, vec3(0.0, 0.0, 0.0)), vec3(0.8, 0.0, 0.0));
        assert!(axis_indicator_parts().iter().all(|p| p.color.a < 255));
    }

    #[test]
    fn world_axis_tips_sit_past_shafts() {
        let parts = coordinate_system_parts();
        let y_tip = parts[4];
        assert_eq!(y_tip.shape, Shape::Cone);
        assert_vec_close(apply(y_tip.local, vec3(1.0, 0.0, 0.0)), vec3(0.0, 3.3, 0.0));
    }

    #[test]
    fn orientation_matches_quaternion() {
        let q = Quaternion::from_axis_angle(AxisVector::new(0.0, 0.0, 1.0), std::f64::consts::FRAC_PI_2);
        assert_vec_close(apply(orientation_matrix(q), vec3(1.0, 0.0, 0.0)), vec3(0.0, 1.0, 0.0));
        assert_eq!(orientation_matrix(Quaternion::IDENTITY), Mat4::identity());
    }

    #[test]
    fn indicator_points_along_axis() {
        for axis in [
            AxisVector::new(1.0, 0.0, 0.0),
            AxisVector::new(0.0, 1.0, 0.0),
            AxisVector::new(0.0, -4.0, 0.0),
            AxisVector::new(1.0, 1.0, 1.0),
        ] {
            let n = axis.normalized().unwrap();
            let m = axis_indicator_matrix(axis).unwrap();
            assert_vec_close(apply(m, vec3(0.0, 1.0, 0.0)), vec3(n.x as f32, n.y as f32, n.z as f32));
        }
        assert!(axis_indicator_matrix(AxisVector::new(0.0, 0.0, 0.0)).is_none());
    }

    #[test]
    fn render_state_keeps_last_direction_for_zero_axis() {
        let mut state = RenderState::default();
        let frame = |axis: AxisVector| RotationFrame {
            axis,
            angle_degrees: 30.0,
            quaternion: Quaternion::from_axis_angle(axis, 30f64.to_radians()),
        };
        state.update(&frame(AxisVector::new(0.0, 0.0, 2.0)));
        assert_eq!(state.axis_direction, AxisVector::new(0.0, 0.0, 1.0));
        state.update(&frame(AxisVector::new(0.0, 0.0, 0.0)));
        assert_eq!(state.axis_direction, AxisVector::new(0.0, 0.0, 1.0));
        assert_eq!(state.orientation, Quaternion::IDENTITY);
    }
}
