use crate::scene::Scene;

/// Paint backend the host plugs in. Stepbar only produces scenes.
pub trait RenderBackend {
    fn configure_surface(&mut self, width: u32, height: u32);
    fn frame(&mut self, scene: &Scene);
}
