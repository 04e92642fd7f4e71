mod layout;

pub use layout::build_render_config;
