use std::time::Duration;

/// HTTP client tuning and default session count for a named load level.
#[derive(Debug, Clone)]
pub struct LoadProfile {
    pub name: &'static str,
    pub sessions: usize,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub pool_max_idle_per_host: usize,
    pub pool_idle_timeout: Duration,
}

/// Get a load profile by name
pub fn get_load_profile(profile: &str) -> LoadProfile {
    match profile {
        "dev" => development_profile(),
        "steady" => steady_profile(),
        "stress" => stress_profile(),
        _ => {
            eprintln!("Unknown profile '{}', using 'steady' profile", profile);
            steady_profile()
        }
    }
}

/// Development profile for testing and debugging
///
/// Small enough to run against a local gateway:
/// - 10 sessions
/// - generous timeouts
/// - small connection pool
pub fn development_profile() -> LoadProfile {
    LoadProfile {
        name: "dev",
        sessions: 10,
        connect_timeout: Duration::from_secs(10),
        request_timeout: Duration::from_secs(30),
        pool_max_idle_per_host: 10,
        pool_idle_timeout: Duration::from_secs(90),
    }
}

/// Steady-state profile for routine capacity measurements
///
/// - 200 sessions
/// - 5s connect / 15s request timeouts
/// - pool sized to the session count
pub fn steady_profile() -> LoadProfile {
    LoadProfile {
        name: "steady",
        sessions: 200,
        connect_timeout: Duration::from_secs(5),
        request_timeout: Duration::from_secs(15),
        pool_max_idle_per_host: 200,
        pool_idle_timeout: Duration::from_secs(90),
    }
}

/// Stress profile for finding the gateway's saturation point
///
/// - 1000 sessions
/// - tight timeouts so a stalled gateway fails fast
/// - large idle pool
pub fn stress_profile() -> LoadProfile {
    LoadProfile {
        name: "stress",
        sessions: 1000,
        connect_timeout: Duration::from_secs(3),
        request_timeout: Duration::from_secs(10),
        pool_max_idle_per_host: 1000,
        pool_idle_timeout: Duration::from_secs(60),
    }
}
