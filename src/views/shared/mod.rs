pub mod header;
pub mod loader;
pub mod toast;

pub use header::render_header;
pub use loader::render_loader;
pub use toast::render_toasts;
