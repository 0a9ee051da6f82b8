pub mod gpu_context;
pub mod mesh;

pub use gpu_context::GpuContext;
pub use mesh::GpuMesh;
