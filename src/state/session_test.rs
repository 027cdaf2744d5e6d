use super::*;

// =============================================================
// Role parsing — closed set
// =============================================================

#[test]
fn role_parses_exactly_the_closed_set() {
    assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
    assert_eq!("operator".parse::<Role>(), Ok(Role::Operator));
    assert_eq!("observer".parse::<Role>(), Ok(Role::Observer));
}

#[test]
fn role_rejects_values_outside_the_closed_set() {
    for raw in ["superuser", "Admin", "ADMIN", "", "root", " observer"] {
        assert!(raw.parse::<Role>().is_err(), "accepted {raw:?}");
    }
}

#[test]
fn role_parse_error_carries_the_raw_value() {
    let err = "superuser".parse::<Role>().unwrap_err();
    assert_eq!(err, UnknownRoleError("superuser".to_owned()));
}

#[test]
fn role_round_trips_through_as_str() {
    for role in [Role::Admin, Role::Operator, Role::Observer] {
        assert_eq!(role.as_str().parse::<Role>(), Ok(role));
    }
}

// =============================================================
// Landing-page mapping — total and deterministic
// =============================================================

#[test]
fn landing_path_maps_admin_to_home() {
    assert_eq!(Role::Admin.landing_path(), "/home");
}

#[test]
fn landing_path_maps_operator_and_observer_to_their_dashboards() {
    assert_eq!(Role::Operator.landing_path(), "/operator-dashboard");
    assert_eq!(Role::Observer.landing_path(), "/observer-dashboard");
}

#[test]
fn landing_paths_are_distinct() {
    let paths = [
        Role::Admin.landing_path(),
        Role::Operator.landing_path(),
        Role::Observer.landing_path(),
    ];
    for (i, a) in paths.iter().enumerate() {
        for (j, b) in paths.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_has_no_session() {
    let state = SessionState::default();
    assert!(state.session.is_none());
}

#[test]
fn session_state_default_is_loading() {
    let state = SessionState::default();
    assert!(state.loading);
}

// =============================================================
// Storage accessors (stubs outside the browser)
// =============================================================

#[test]
fn load_returns_none_outside_the_browser() {
    assert!(load().is_none());
}
