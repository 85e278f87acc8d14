pub mod renderer;
pub mod repositories;
