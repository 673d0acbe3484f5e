// ============================================================================
// AUTH GATE - evaluated on every navigation, holds no state
// ============================================================================

use crate::models::Session;
use crate::state::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Render(Route),
    Redirect(Route),
}

impl GateDecision {
    /// The route that ends up on screen
    pub fn target(&self) -> Route {
        match self {
            GateDecision::Render(route) | GateDecision::Redirect(route) => *route,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AuthGate {
    /// Send signed-in users away from the login page
    pub redirect_authenticated_login: bool,
}

impl AuthGate {
    pub fn new(redirect_authenticated_login: bool) -> Self {
        Self {
            redirect_authenticated_login,
        }
    }

    pub fn decide(&self, session: Option<&Session>, requested: Route) -> GateDecision {
        match (requested.is_protected(), session.is_some()) {
            (true, false) => GateDecision::Redirect(Route::Login),
            (false, true) if self.redirect_authenticated_login => GateDecision::Redirect(Route::PetList),
            _ => GateDecision::Render(requested),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROTECTED: [Route; 3] = [Route::PetList, Route::PetDetails(1), Route::PetEdit(1)];

    #[test]
    fn denies_protected_views_without_session() {
        let gate = AuthGate::default();
        for route in PROTECTED {
            assert_eq!(gate.decide(None, route), GateDecision::Redirect(Route::Login));
        }
        assert_eq!(gate.decide(None, Route::Login), GateDecision::Render(Route::Login));
    }

    #[test]
    fn permits_protected_views_with_session() {
        let gate = AuthGate::default();
        let session = Session::new("omar@gmail.com", "t");
        for route in PROTECTED {
            assert_eq!(gate.decide(Some(&session), route), GateDecision::Render(route));
        }
    }

    #[test]
    fn login_page_stays_reachable_unless_configured() {
        let session = Session::new("omar@gmail.com", "t");
        assert_eq!(
            AuthGate::new(false).decide(Some(&session), Route::Login),
            GateDecision::Render(Route::Login)
        );
        assert_eq!(
            AuthGate::new(true).decide(Some(&session), Route::Login),
            GateDecision::Redirect(Route::PetList)
        );
        assert_eq!(AuthGate::new(true).decide(Some(&session), Route::Login).target(), Route::PetList);
    }
}
