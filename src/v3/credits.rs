/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::Deserialize;

/// Rate limit allowances as reported by the credits endpoint.
#[derive(Deserialize, Debug, Clone)]
pub struct RateLimitCredits {
    #[serde(rename = "UserLimit")]
    pub user_limit: Option<u64>,

    #[serde(rename = "UserRemaining")]
    pub user_remaining: Option<u64>,

    #[serde(rename = "UserReset")]
    pub user_reset: Option<i64>,

    #[serde(rename = "ClientLimit")]
    pub client_limit: Option<u64>,

    #[serde(rename = "ClientRemaining")]
    pub client_remaining: Option<u64>,
}
