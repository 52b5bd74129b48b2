//! User accounts and the reshaped directory payload.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// Users keyed by id, in the order the pages display them.
pub type UserMap = BTreeMap<UserId, User>;

/// One user record from `GET /api/users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Login or display name.
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    /// Unix seconds of account creation.
    pub created_at: Option<i64>,
}

impl User {
    /// Username shown in tables, with a placeholder when absent.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("(unknown)")
    }

    /// Email shown in tables.
    #[must_use]
    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or("-")
    }

    /// Role shown in tables.
    #[must_use]
    pub fn display_role(&self) -> &str {
        self.role.as_deref().unwrap_or("-")
    }
}

/// Users payload reshaped for the pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserDirectory {
    /// User count as the backend reports it (or the map length).
    pub count: usize,
    pub users: UserMap,
}

impl UserDirectory {
    /// Reshape the backend's users payload.
    ///
    /// The backend has shipped two shapes: `{"count": n, "users": {...}}`
    /// and a bare map of users. Both are accepted. A missing `count`
    /// defaults to the map length, entries that are not user records are
    /// skipped, and a non-object payload yields an empty directory.
    #[must_use]
    pub fn from_value(value: serde_json::Value) -> Self {
        let serde_json::Value::Object(mut map) = value else {
            return Self::default();
        };

        let reported_count = map
            .get("count")
            .and_then(serde_json::Value::as_u64)
            .and_then(|count| usize::try_from(count).ok());

        let users: UserMap = match map.remove("users") {
            Some(inner) => serde_json::from_value(inner).unwrap_or_default(),
            None => map
                .into_iter()
                .filter_map(|(id, entry)| {
                    serde_json::from_value::<User>(entry)
                        .ok()
                        .map(|user| (UserId::new(id), user))
                })
                .collect(),
        };

        Self {
            count: reported_count.unwrap_or(users.len()),
            users,
        }
    }
}
