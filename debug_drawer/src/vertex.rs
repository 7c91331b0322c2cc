/// A pooled line vertex: position + color + width.
///
/// Line handles that upload to the GPU can hand a `&[LineVertex]` straight
/// to `bytemuck::cast_slice`. Consecutive vertices of one request form a
/// line strip.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
    pub width: f32,
}
