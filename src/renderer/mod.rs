pub mod components;
pub mod renderer;
pub mod renders;
pub mod sink;
pub mod traits;

pub use components::*;
pub use renderer::*;
pub use sink::*;
pub use traits::*;
