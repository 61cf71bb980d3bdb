use crate::core::color::{Color, FogExp2};
use crate::core::scene::Scene;

/// On-demand accent color. Called once per frame; may change between calls.
pub trait ColorSource {
    /// `None` means the source produced something that isn't a color.
    fn current(&mut self) -> Option<Color>;
}

impl<F> ColorSource for F
where
    F: FnMut() -> Option<Color>,
{
    fn current(&mut self) -> Option<Color> {
        self()
    }
}

/// A source that never changes.
#[derive(Clone, Copy, Debug)]
pub struct FixedColor(pub Color);

impl ColorSource for FixedColor {
    fn current(&mut self) -> Option<Color> {
        Some(self.0)
    }
}

/// Applies the current accent color to background and fog.
pub struct Environment {
    pub fog_density: f32,
    pub fallback: Color,
    warned: bool,
}

impl Environment {
    pub fn new(fog_density: f32, fallback: Color) -> Self {
        Self {
            fog_density,
            fallback,
            warned: false,
        }
    }

    /// Query the source once and write background + fog. Returns the color used.
    pub fn apply(&mut self, scene: &mut Scene, source: &mut dyn ColorSource) -> Color {
        let color = match source.current() {
            Some(c) => c,
            None => {
                if !self.warned {
                    log::warn!(
                        "[env] color source returned an unusable value; using #{:06x}",
                        self.fallback.to_hex()
                    );
                    self.warned = true;
                }
                self.fallback
            }
        };
        scene.background = Some(color);
        scene.fog = Some(FogExp2::new(color, self.fog_density));
        color
    }
}
