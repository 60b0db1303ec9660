//! WebGPU rendering module
//!
//! Everything on screen is a filled rectangle: the scene is tessellated into
//! colored triangles in world units and mapped to clip space on upload.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::draw_scene;
pub use vertex::Vertex;
