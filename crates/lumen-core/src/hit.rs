// File: crates/lumen-core/src/hit.rs
// Summary: Pointer X to data index resolution.

/// Horizontal pick radius around each index, in pixels (exclusive).
pub const TOUCH_TOLERANCE_X: f32 = 40.0;

/// First index, in ascending order, whose anchor lies strictly within
/// `tolerance` of `pointer_x`. Not the closest one: when two anchors are both
/// in range the lower index wins.
pub fn first_within<I>(pointer_x: f32, anchors: I, tolerance: f32) -> Option<usize>
where
    I: IntoIterator<Item = f32>,
{
    if !pointer_x.is_finite() {
        return None;
    }
    anchors
        .into_iter()
        .position(|x| (pointer_x - x).abs() < tolerance)
}
