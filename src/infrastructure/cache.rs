pub mod renderer_cache;
