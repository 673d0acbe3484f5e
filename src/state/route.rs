// ============================================================================
// ROUTE - hash routes (#/login, #/, #/pet/{id}, #/pet/{id}/edit)
// ============================================================================

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    PetList,
    PetDetails(i64),
    PetEdit(i64),
}

impl Route {
    /// Parse a location hash (`#/pet/3`) or bare path (`/pet/3`).
    /// Anything unrecognised lands on the list.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["login"] => Route::Login,
            ["pet", id] => id.parse().map(Route::PetDetails).unwrap_or(Route::PetList),
            ["pet", id, "edit"] => id.parse().map(Route::PetEdit).unwrap_or(Route::PetList),
            _ => Route::PetList,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::Login => "#/login".to_string(),
            Route::PetList => "#/".to_string(),
            Route::PetDetails(id) => format!("#/pet/{}", id),
            Route::PetEdit(id) => format!("#/pet/{}/edit", id),
        }
    }

    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// The header with the logout button is hidden on the login page
    pub fn shows_header(&self) -> bool {
        self.is_protected()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::from_hash("#/login"), Route::Login);
        assert_eq!(Route::from_hash("#/"), Route::PetList);
        assert_eq!(Route::from_hash(""), Route::PetList);
        assert_eq!(Route::from_hash("#/pet/42"), Route::PetDetails(42));
        assert_eq!(Route::from_hash("/pet/42/edit"), Route::PetEdit(42));
    }

    #[test]
    fn unknown_paths_fall_back_to_list() {
        assert_eq!(Route::from_hash("#/pet/abc"), Route::PetList);
        assert_eq!(Route::from_hash("#/nowhere"), Route::PetList);
        assert_eq!(Route::from_hash("#/pet/1/delete"), Route::PetList);
    }

    #[test]
    fn hash_is_stable() {
        for route in [Route::Login, Route::PetList, Route::PetDetails(9), Route::PetEdit(9)] {
            assert_eq!(Route::from_hash(&route.to_hash()), route);
        }
    }
}
