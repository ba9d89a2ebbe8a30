pub mod layout;
pub mod renderer;

pub use renderer::Renderer;
