pub mod renderer;
pub mod score;

pub use renderer::render_result;
pub use score::render_score;
