pub mod app;
pub mod login;
pub mod pet_details;
pub mod pet_edit;
pub mod pet_list;
pub mod shared;

pub use app::render_app;
pub use login::render_login;
pub use pet_details::render_pet_details;
pub use pet_edit::render_pet_edit;
pub use pet_list::{render_pet_list, update_pet_table};
