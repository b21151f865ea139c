use glam::Vec3;
use rand::Rng;

// Multi-layer star field simulation. Positions are world units; the camera
// sits at z = CAMERA_BASE_Z looking at the origin.

pub const MOBILE_WIDTH_THRESHOLD: f64 = 768.0;
pub const STARFIELD_COUNT_MOBILE: usize = 200;
pub const STARFIELD_COUNT_DESKTOP: usize = 800;
pub const NEBULA_COUNT: usize = 80;
pub const CONSTELLATION_COUNT: usize = 30;
pub const AMBIENT_COUNT: usize = 150;

/// Fixed time basis increment per frame, independent of wall clock.
pub const TIME_STEP: f32 = 0.001;
/// Exponential smoothing factor applied to the cursor every frame.
pub const CURSOR_EASING: f32 = 0.03;

/// Reflective bounds for nebula drift (absolute value per axis).
pub const NEBULA_EXTENT: Vec3 = Vec3::new(20.0, 20.0, 10.0);
pub const NEBULA_DRIFT_XY: f32 = 0.002;
pub const NEBULA_DRIFT_Z: f32 = 0.001;

pub const CAMERA_BASE_Z: f32 = 5.0;
pub const CAMERA_PARALLAX: f32 = 0.5;
pub const CAMERA_DOLLY: f32 = 0.2;

// Per-layer parallax strength (rotation, translation). Nearer layers move more.
pub const STARFIELD_PARALLAX: (f32, f32) = (0.3, 2.0);
pub const CONSTELLATION_PARALLAX: (f32, f32) = (0.2, 1.5);
pub const AMBIENT_PARALLAX: (f32, f32) = (0.05, 0.025);
pub const NEBULA_ROLL: f32 = 0.05;

pub const NEBULA_PALETTE: [[f32; 3]; 4] = [
    [0.055, 0.647, 1.0],   // #0EA5FF
    [0.545, 0.361, 0.965], // #8B5CF6
    [0.420, 0.180, 1.0],   // #6B2EFF
    [0.486, 0.996, 0.510], // #7CFE82
];
pub const AMBIENT_PALETTE: [[f32; 3]; 3] =
    [NEBULA_PALETTE[0], NEBULA_PALETTE[1], NEBULA_PALETTE[3]];
pub const CONSTELLATION_COLOR: [f32; 3] = NEBULA_PALETTE[0];

/// Star count for the starfield layer given the viewport width in CSS px.
#[inline]
pub fn starfield_count(viewport_width: f64) -> usize {
    if viewport_width < MOBILE_WIDTH_THRESHOLD {
        STARFIELD_COUNT_MOBILE
    } else {
        STARFIELD_COUNT_DESKTOP
    }
}

/// Pointer position in normalized device coordinates, eased toward a target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
    pub target_x: f32,
    pub target_y: f32,
}

impl Cursor {
    /// Set the target from client pixel coordinates (y up, both in [-1, 1]).
    pub fn aim_client(&mut self, client_x: f64, client_y: f64, width: f64, height: f64) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.target_x = ((client_x / width) * 2.0 - 1.0).clamp(-1.0, 1.0) as f32;
        self.target_y = (-((client_y / height) * 2.0 - 1.0)).clamp(-1.0, 1.0) as f32;
    }

    pub fn ease(&mut self) {
        self.x += (self.target_x - self.x) * CURSOR_EASING;
        self.y += (self.target_y - self.y) * CURSOR_EASING;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Nebula,
    Starfield,
    Constellation,
    Ambient,
}

/// Whole-layer transform applied on top of the per-point buffers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerPose {
    /// Euler angles, applied in XYZ order.
    pub rotation: Vec3,
    pub offset: Vec3,
    pub opacity: f32,
}

/// Fixed-size point cloud. Buffers are sized at construction and only
/// mutated in place afterwards.
#[derive(Clone, Debug)]
pub struct PointLayer {
    pub kind: LayerKind,
    pub positions: Vec<Vec3>,
    pub colors: Vec<[f32; 3]>,
    pub sizes: Vec<f32>,
    /// Per-point drift; only the nebula layer carries one.
    pub velocities: Option<Vec<Vec3>>,
    pub pose: LayerPose,
}

impl PointLayer {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    fn with_capacity(kind: LayerKind, n: usize, opacity: f32) -> Self {
        Self {
            kind,
            positions: Vec::with_capacity(n),
            colors: Vec::with_capacity(n),
            sizes: Vec::with_capacity(n),
            velocities: None,
            pose: LayerPose {
                rotation: Vec3::ZERO,
                offset: Vec3::ZERO,
                opacity,
            },
        }
    }

    pub fn nebula<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut layer = Self::with_capacity(LayerKind::Nebula, NEBULA_COUNT, 0.15);
        let mut velocities = Vec::with_capacity(NEBULA_COUNT);
        for _ in 0..NEBULA_COUNT {
            layer.positions.push(Vec3::new(
                rng.gen_range(-NEBULA_EXTENT.x..NEBULA_EXTENT.x),
                rng.gen_range(-NEBULA_EXTENT.y..NEBULA_EXTENT.y),
                // behind the origin, inside the drift bounds
                -rng.gen_range(0.0..=NEBULA_EXTENT.z),
            ));
            let idx = if rng.gen_bool(0.7) {
                rng.gen_range(0..2)
            } else {
                rng.gen_range(0..NEBULA_PALETTE.len())
            };
            layer.colors.push(NEBULA_PALETTE[idx]);
            layer.sizes.push(rng.gen_range(2.0..7.0));
            velocities.push(Vec3::new(
                rng.gen_range(-0.5..0.5) * NEBULA_DRIFT_XY,
                rng.gen_range(-0.5..0.5) * NEBULA_DRIFT_XY,
                rng.gen_range(-0.5..0.5) * NEBULA_DRIFT_Z,
            ));
        }
        layer.velocities = Some(velocities);
        layer
    }

    pub fn starfield<R: Rng + ?Sized>(rng: &mut R, viewport_width: f64) -> Self {
        let n = starfield_count(viewport_width);
        let mut layer = Self::with_capacity(LayerKind::Starfield, n, 0.9);
        for _ in 0..n {
            layer.positions.push(random_in_box(rng, Vec3::new(50.0, 50.0, 30.0)));
            layer.sizes.push(rng.gen_range(0.5..2.0));
            let b = rng.gen_range(0.8..1.0);
            layer.colors.push([b, b, b + rng.gen_range(0.0..0.1)]);
        }
        layer
    }

    pub fn constellation<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut layer = Self::with_capacity(LayerKind::Constellation, CONSTELLATION_COUNT, 1.0);
        for _ in 0..CONSTELLATION_COUNT {
            layer.positions.push(random_in_box(rng, Vec3::new(35.0, 35.0, 15.0)));
            layer.sizes.push(rng.gen_range(0.3..0.8));
            layer.colors.push(CONSTELLATION_COLOR);
        }
        layer
    }

    pub fn ambient<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut layer = Self::with_capacity(LayerKind::Ambient, AMBIENT_COUNT, 0.6);
        for _ in 0..AMBIENT_COUNT {
            layer.positions.push(random_in_box(rng, Vec3::new(60.0, 60.0, 40.0)));
            layer.sizes.push(1.0);
            layer
                .colors
                .push(AMBIENT_PALETTE[rng.gen_range(0..AMBIENT_PALETTE.len())]);
        }
        layer
    }

    /// Integrate nebula drift, reflecting velocity at the extents.
    /// No-op for layers without per-point velocity.
    pub fn drift(&mut self) {
        let Some(velocities) = self.velocities.as_mut() else {
            return;
        };
        for (p, v) in self.positions.iter_mut().zip(velocities.iter_mut()) {
            *p += *v;
            reflect_axis(&mut p.x, &mut v.x, NEBULA_EXTENT.x);
            reflect_axis(&mut p.y, &mut v.y, NEBULA_EXTENT.y);
            reflect_axis(&mut p.z, &mut v.z, NEBULA_EXTENT.z);
        }
    }
}

#[inline]
fn reflect_axis(pos: &mut f32, vel: &mut f32, extent: f32) {
    // Only flip while heading outward so a point past the edge cannot stall.
    if pos.abs() > extent && *pos * *vel > 0.0 {
        *vel = -*vel;
    }
}

#[inline]
fn random_in_box<R: Rng + ?Sized>(rng: &mut R, size: Vec3) -> Vec3 {
    Vec3::new(
        rng.gen_range(-0.5..0.5) * size.x,
        rng.gen_range(-0.5..0.5) * size.y,
        rng.gen_range(-0.5..0.5) * size.z,
    )
}

/// The four background layers plus the shared cursor and time basis.
#[derive(Clone, Debug)]
pub struct StarField {
    pub nebula: PointLayer,
    pub starfield: PointLayer,
    pub constellation: PointLayer,
    pub ambient: PointLayer,
    pub cursor: Cursor,
    pub time: f32,
    pub frame: u64,
}

impl StarField {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, viewport_width: f64) -> Self {
        Self {
            nebula: PointLayer::nebula(rng),
            starfield: PointLayer::starfield(rng, viewport_width),
            constellation: PointLayer::constellation(rng),
            ambient: PointLayer::ambient(rng),
            cursor: Cursor::default(),
            time: 0.0,
            frame: 0,
        }
    }

    /// Back-to-front draw order.
    pub fn layers(&self) -> [&PointLayer; 4] {
        [&self.nebula, &self.starfield, &self.constellation, &self.ambient]
    }

    /// Advance one frame.
    pub fn step(&mut self) {
        self.time += TIME_STEP;
        self.frame += 1;
        self.cursor.ease();
        let (mx, my, t) = (self.cursor.x, self.cursor.y, self.time);

        self.nebula.pose.rotation = Vec3::new(t * 0.03, t * 0.02, mx * NEBULA_ROLL);
        self.nebula.drift();

        let (rot, off) = STARFIELD_PARALLAX;
        self.starfield.pose.rotation = Vec3::new(my * rot, mx * rot, t * 0.01);
        self.starfield.pose.offset = Vec3::new(mx * off, my * off, 0.0);

        let (rot, off) = CONSTELLATION_PARALLAX;
        self.constellation.pose.rotation = Vec3::new(my * rot, mx * rot, 0.0);
        self.constellation.pose.offset = Vec3::new(mx * off, my * off, 0.0);
        self.constellation.pose.opacity = constellation_pulse(t);

        let (rot, off) = AMBIENT_PARALLAX;
        self.ambient.pose.rotation = Vec3::new(my * rot, mx * rot, 0.0);
        self.ambient.pose.offset = Vec3::new(mx * off, my * off, 0.0);
    }

    /// Camera eye; the camera always looks at the origin.
    pub fn camera_eye(&self) -> Vec3 {
        Vec3::new(
            self.cursor.x * CAMERA_PARALLAX,
            self.cursor.y * CAMERA_PARALLAX,
            CAMERA_BASE_Z + self.cursor.x * CAMERA_DOLLY,
        )
    }
}

#[inline]
pub fn constellation_pulse(time: f32) -> f32 {
    (time * 2.0).sin() * 0.2 + 0.8
}
