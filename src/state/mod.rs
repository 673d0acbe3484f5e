// ============================================================================
// STATE MODULE - Rc<RefCell> state + change notifications
// ============================================================================

pub mod app_state;
pub mod auth_gate;
pub mod fetch_state;
pub mod notification_state;
pub mod reactivity;
pub mod route;
pub mod session_state;

pub use app_state::*;
pub use auth_gate::*;
pub use fetch_state::*;
pub use notification_state::*;
pub use reactivity::*;
pub use route::*;
pub use session_state::*;
