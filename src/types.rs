/// Per-frame uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    /// Rotates normals into view space for normal shading
    pub model_view: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        let identity = glam::Mat4::IDENTITY.to_cols_array_2d();
        Self {
            view_proj: identity,
            model: identity,
            model_view: identity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_size_is_three_matrices() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 3 * 64);
    }
}
