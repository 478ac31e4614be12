//! Route-guard decision procedure.
//!
//! Pure evaluation of the per-navigation decision table; the `Guarded`
//! component feeds it the current auth state, route class, and flag
//! readings, and acts on the result.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// How a path relates to authentication.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// Reachable regardless of login state.
    Public,
    /// Login, registration, and verification pages.
    AuthEntry,
    /// Requires an authenticated subject.
    Protected,
}

/// Classify a route path.
pub fn classify(path: &str) -> RouteClass {
    match path {
        "/" | "" => RouteClass::Public,
        p if p.starts_with("/auth/") => RouteClass::AuthEntry,
        _ => RouteClass::Protected,
    }
}

/// Which forced dialog a blocked navigation raises.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    AuthRequired,
    SessionExpired,
    AlreadyLoggedIn,
}

/// Outcome of a guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the wrapped view.
    Render,
    /// Render nothing; validation is still in flight.
    Withhold,
    /// Render nothing and raise the given forced dialog.
    Block(BlockKind),
}

/// Inputs to one guard evaluation.
#[derive(Clone, Copy, Debug)]
pub struct GuardInput {
    pub resolving: bool,
    pub logged_in: bool,
    pub route: RouteClass,
    /// True when this navigation is the continuation of a login that just
    /// completed in this tab (one-shot flag, consumed by the caller).
    pub just_logged_in: bool,
    /// True when this tab has completed a login at some point; selects
    /// the expired-session wording over the first-visit one.
    pub seen_session: bool,
}

/// Evaluate the decision table.
pub fn decide(input: &GuardInput) -> GuardDecision {
    if input.resolving {
        return GuardDecision::Withhold;
    }

    match (input.logged_in, input.route) {
        (_, RouteClass::Public) | (false, RouteClass::AuthEntry) | (true, RouteClass::Protected) => {
            GuardDecision::Render
        }
        (false, RouteClass::Protected) => GuardDecision::Block(if input.seen_session {
            BlockKind::SessionExpired
        } else {
            BlockKind::AuthRequired
        }),
        (true, RouteClass::AuthEntry) => {
            if input.just_logged_in {
                GuardDecision::Render
            } else {
                GuardDecision::Block(BlockKind::AlreadyLoggedIn)
            }
        }
    }
}

/// Resource-ownership check layered on top of the login guard: an exam
/// detail view may only show an exam present in the subject's own list.
pub fn owns_exam(exam_id: i64, own_exam_ids: &[i64]) -> bool {
    own_exam_ids.contains(&exam_id)
}
