//! Rotation-aware geometry for move, resize, and rotate gestures.
//!
//! Pure math, no state. Every function takes a gesture-start snapshot and
//! the current pointer position and returns fresh geometry; nothing here
//! accumulates increments frame to frame, so long gestures cannot drift.
//!
//! Resize deltas are interpreted in the layer's local frame: the screen
//! displacement since grab is projected onto the axes rotated by the
//! layer's start rotation, the sizes adjusted there, and any origin shift
//! projected back to screen space. That re-projection is what keeps the
//! anchor edge fixed while a rotated layer is resized.

use paperboard_core::constants::{MIN_LAYER_HEIGHT, MIN_LAYER_WIDTH};
use paperboard_core::Point;
use serde::{Deserialize, Serialize};

use crate::model::Layer;

/// One of the eight resize grips on a selected layer's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    Nw,
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
}

impl Handle {
    /// All handles in clockwise order starting at the top-left.
    pub const ALL: [Handle; 8] = [
        Handle::Nw,
        Handle::N,
        Handle::Ne,
        Handle::E,
        Handle::Se,
        Handle::S,
        Handle::Sw,
        Handle::W,
    ];

    /// Axis sign pair: which local edge(s) this handle moves.
    /// `+1` grows away from the origin, `-1` moves the origin edge.
    pub fn axis(self) -> (i8, i8) {
        match self {
            Handle::Nw => (-1, -1),
            Handle::N => (0, -1),
            Handle::Ne => (1, -1),
            Handle::E => (1, 0),
            Handle::Se => (1, 1),
            Handle::S => (0, 1),
            Handle::Sw => (-1, 1),
            Handle::W => (-1, 0),
        }
    }
}

/// Snapshot taken when a drag gesture starts: pointer minus layer origin.
#[derive(Debug, Clone, Copy)]
pub struct DragSnapshot {
    pub grab_offset: Point,
}

impl DragSnapshot {
    /// Captures the grab offset for a pointer press on a layer body.
    pub fn capture(layer: &Layer, pointer: Point) -> Self {
        Self {
            grab_offset: Point::new(pointer.x - layer.x, pointer.y - layer.y),
        }
    }
}

/// New top-left position for a drag. Movement is axis-aligned in screen
/// space; rotation is not compensated for translation.
pub fn drag_position(snapshot: &DragSnapshot, pointer: Point) -> (f64, f64) {
    (
        pointer.x - snapshot.grab_offset.x,
        pointer.y - snapshot.grab_offset.y,
    )
}

/// Snapshot taken when a resize gesture starts. Rotation is frozen as its
/// cos/sin for the duration of the gesture.
#[derive(Debug, Clone, Copy)]
pub struct ResizeSnapshot {
    pub pointer: Point,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
    pub cos: f64,
    pub sin: f64,
}

impl ResizeSnapshot {
    /// Captures the gesture-start geometry of a layer.
    pub fn capture(layer: &Layer, pointer: Point) -> Self {
        let rad = layer.rotation.to_radians();
        Self {
            pointer,
            width: layer.width,
            height: layer.height,
            x: layer.x,
            y: layer.y,
            cos: rad.cos(),
            sin: rad.sin(),
        }
    }
}

/// Geometry produced by a resize step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeResult {
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

/// Computes the resize for the current pointer position.
///
/// Width and height are rounded to whole units on write; x/y stay
/// floating. Growing past the start size is unrestricted; shrinking is
/// clamped so neither dimension falls below its minimum, and when the
/// origin edge moves the shift is re-projected through the start rotation
/// so the opposite edge stays anchored.
pub fn resize(snapshot: &ResizeSnapshot, handle: Handle, pointer: Point) -> ResizeResult {
    let raw_dx = pointer.x - snapshot.pointer.x;
    let raw_dy = pointer.y - snapshot.pointer.y;

    // screen displacement projected into the layer's local frame
    let local_dx = raw_dx * snapshot.cos + raw_dy * snapshot.sin;
    let local_dy = -raw_dx * snapshot.sin + raw_dy * snapshot.cos;

    let (axis_x, axis_y) = handle.axis();

    let mut width = snapshot.width;
    let mut height = snapshot.height;
    let mut x = snapshot.x;
    let mut y = snapshot.y;

    match axis_x {
        1 => {
            width = (snapshot.width + local_dx).max(MIN_LAYER_WIDTH);
        }
        -1 => {
            // clamp bounds only the shrink direction; growing outward is free
            let delta = local_dx.min(snapshot.width - MIN_LAYER_WIDTH);
            width = snapshot.width - delta;
            x += delta * snapshot.cos;
            y += delta * snapshot.sin;
        }
        _ => {}
    }

    match axis_y {
        1 => {
            height = (snapshot.height + local_dy).max(MIN_LAYER_HEIGHT);
        }
        -1 => {
            let delta = local_dy.min(snapshot.height - MIN_LAYER_HEIGHT);
            height = snapshot.height - delta;
            x -= delta * snapshot.sin;
            y += delta * snapshot.cos;
        }
        _ => {}
    }

    ResizeResult {
        width: width.round(),
        height: height.round(),
        x,
        y,
    }
}

/// Snapshot taken when a rotate gesture starts. The center is computed
/// once from the start geometry and stays fixed for the gesture.
#[derive(Debug, Clone, Copy)]
pub struct RotateSnapshot {
    pub center: Point,
    pub start_angle: f64,
    pub start_rotation: f64,
}

impl RotateSnapshot {
    /// Captures the rotation pivot and the pointer's starting angle.
    pub fn capture(layer: &Layer, pointer: Point) -> Self {
        let center = layer.center();
        Self {
            center,
            start_angle: pointer_angle(center, pointer),
            start_rotation: layer.rotation,
        }
    }
}

/// Angle of the pointer around a center, in degrees. Straight up from the
/// center is 0; the angle increases as the pointer sweeps clockwise.
pub fn pointer_angle(center: Point, pointer: Point) -> f64 {
    (pointer.x - center.x)
        .atan2(-(pointer.y - center.y))
        .to_degrees()
}

/// New rotation for the current pointer position: start rotation plus the
/// swept angle. Unbounded, never wrapped to a canonical range.
pub fn rotate(snapshot: &RotateSnapshot, pointer: Point) -> f64 {
    let current = pointer_angle(snapshot.center, pointer);
    snapshot.start_rotation + (current - snapshot.start_angle)
}

/// Screen-space position of a handle's corner, rotating the layer's local
/// frame about its origin. Used to verify resize anchoring; presentation
/// may also use it for handle hit-testing.
pub fn corner_position(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rotation: f64,
    handle: Handle,
) -> Point {
    let (axis_x, axis_y) = handle.axis();
    // map the sign pair onto local corner offsets: -1 -> 0, +1 -> extent
    let local_x = if axis_x > 0 { width } else { 0.0 };
    let local_y = if axis_y > 0 { height } else { 0.0 };
    let rad = rotation.to_radians();
    let (sin, cos) = rad.sin_cos();
    Point::new(
        x + local_x * cos - local_y * sin,
        y + local_x * sin + local_y * cos,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LayerContent, LayerId, StyleMap};

    fn layer(x: f64, y: f64, w: f64, h: f64, rotation: f64) -> Layer {
        Layer {
            id: LayerId(1),
            x,
            y,
            width: w,
            height: h,
            rotation,
            z: 1,
            content: LayerContent::Text {
                text: String::new(),
            },
            style: StyleMap::new(),
            tex_x: 0.0,
            tex_y: 0.0,
        }
    }

    #[test]
    fn test_drag_follows_grab_offset() {
        let l = layer(100.0, 100.0, 200.0, 100.0, 30.0);
        let snap = DragSnapshot::capture(&l, Point::new(150.0, 120.0));
        let (x, y) = drag_position(&snap, Point::new(210.0, 90.0));
        assert_eq!((x, y), (160.0, 70.0));
    }

    #[test]
    fn test_resize_se_unrotated_worked_example() {
        // layer at 100,100 200x100, grab se, move +50,+30
        let l = layer(100.0, 100.0, 200.0, 100.0, 0.0);
        let snap = ResizeSnapshot::capture(&l, Point::new(300.0, 200.0));
        let r = resize(&snap, Handle::Se, Point::new(350.0, 230.0));
        assert_eq!(r.width, 250.0);
        assert_eq!(r.height, 130.0);
        assert_eq!(r.x, 100.0);
        assert_eq!(r.y, 100.0);
    }

    #[test]
    fn test_resize_e_at_90_degrees_tracks_screen_y() {
        // at 90 degrees the local x axis aligns with the screen y axis
        let l = layer(100.0, 100.0, 200.0, 100.0, 90.0);
        let snap = ResizeSnapshot::capture(&l, Point::new(150.0, 250.0));
        let r = resize(&snap, Handle::E, Point::new(150.0, 290.0));
        assert_eq!(r.width, 240.0);
        assert_eq!(r.height, 100.0);
        assert!((r.x - 100.0).abs() < 1e-9);
        assert!((r.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_resize_e_never_moves_origin() {
        let l = layer(40.0, 60.0, 200.0, 100.0, 0.0);
        let snap = ResizeSnapshot::capture(&l, Point::new(240.0, 110.0));
        for dx in [-500.0, -10.0, 0.0, 25.0, 400.0] {
            let r = resize(&snap, Handle::E, Point::new(240.0 + dx, 110.0));
            assert_eq!(r.x, 40.0);
            assert_eq!(r.y, 60.0);
        }
    }

    #[test]
    fn test_resize_w_keeps_right_edge_fixed() {
        let l = layer(100.0, 100.0, 200.0, 100.0, 0.0);
        let snap = ResizeSnapshot::capture(&l, Point::new(100.0, 150.0));
        for dx in [-80.0, -5.0, 10.0, 60.0] {
            let r = resize(&snap, Handle::W, Point::new(100.0 + dx, 150.0));
            assert!((r.x + r.width - 300.0).abs() < 1e-9);
            assert_eq!(r.y, 100.0);
        }
    }

    #[test]
    fn test_resize_clamps_to_minimums() {
        let l = layer(0.0, 0.0, 100.0, 80.0, 0.0);
        let snap = ResizeSnapshot::capture(&l, Point::new(100.0, 80.0));
        // drag far past the opposite corner
        let r = resize(&snap, Handle::Se, Point::new(-500.0, -500.0));
        assert_eq!(r.width, 80.0);
        assert_eq!(r.height, 60.0);

        // shrinking edges stop once the minimum is reached
        let snap = ResizeSnapshot::capture(&l, Point::new(0.0, 0.0));
        let r = resize(&snap, Handle::Nw, Point::new(500.0, 500.0));
        assert_eq!(r.width, 80.0);
        assert_eq!(r.height, 60.0);
        // origin travel is bounded by the same clamp
        assert!((r.x - 20.0).abs() < 1e-9);
        assert!((r.y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_resize_rounds_dimensions_only() {
        let l = layer(0.0, 0.0, 100.0, 100.0, 45.0);
        let snap = ResizeSnapshot::capture(&l, Point::new(0.0, 0.0));
        let r = resize(&snap, Handle::Se, Point::new(10.0, 3.0));
        assert_eq!(r.width, r.width.round());
        assert_eq!(r.height, r.height.round());
    }

    #[test]
    fn test_rotated_anchor_opposite_corner_fixed() {
        // corner-handle resize keeps the opposite corner anchored for any
        // start rotation, because origin shifts are re-projected through it
        for rotation in [0.0, 45.0, 90.0, 180.0] {
            let l = layer(100.0, 100.0, 200.0, 150.0, rotation);
            let anchor = corner_position(l.x, l.y, l.width, l.height, rotation, Handle::Se);

            let grab = corner_position(l.x, l.y, l.width, l.height, rotation, Handle::Nw);
            let snap = ResizeSnapshot::capture(&l, grab);
            let r = resize(
                &snap,
                Handle::Nw,
                Point::new(grab.x + 17.0, grab.y - 23.0),
            );

            let after = corner_position(r.x, r.y, r.width, r.height, rotation, Handle::Se);
            // dimension rounding can shift the corner by under a unit
            assert!(
                anchor.distance_to(&after) < 1.0,
                "rotation {rotation}: anchor moved from {anchor:?} to {after:?}"
            );
        }
    }

    #[test]
    fn test_pointer_angle_convention() {
        let c = Point::new(0.0, 0.0);
        // straight up is zero
        assert!((pointer_angle(c, Point::new(0.0, -10.0))).abs() < 1e-9);
        // right of center is +90
        assert!((pointer_angle(c, Point::new(10.0, 0.0)) - 90.0).abs() < 1e-9);
        // below center is +/-180
        assert!((pointer_angle(c, Point::new(0.0, 10.0)).abs() - 180.0).abs() < 1e-9);
        // left of center is -90
        assert!((pointer_angle(c, Point::new(-10.0, 0.0)) + 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotate_clockwise_increases() {
        let l = layer(0.0, 0.0, 100.0, 100.0, 10.0);
        // grab straight above the center, sweep clockwise to the right
        let snap = RotateSnapshot::capture(&l, Point::new(50.0, -40.0));
        let r1 = rotate(&snap, Point::new(90.0, 10.0));
        let r2 = rotate(&snap, Point::new(140.0, 50.0));
        assert!(r1 > 10.0);
        assert!(r2 > r1);
    }

    #[test]
    fn test_rotate_exact_delta_unbounded() {
        let l = layer(0.0, 0.0, 100.0, 100.0, 350.0);
        let snap = RotateSnapshot::capture(&l, Point::new(50.0, -40.0));
        // sweep to pointing right: +90 exactly, no wrap at 360
        let r = rotate(&snap, Point::new(140.0, 50.0));
        assert!((r - 440.0).abs() < 1e-9);
    }
}
