//! Wire types of the users REST endpoint.

use serde::{Deserialize, Serialize};
use ustr::Ustr;

/// Opaque user identifier.
///
/// The server may send ids as JSON numbers or strings; the id is kept in the
/// form it arrived in and serialized back the same way. Ids are compared as
/// received, so `7` and `"7"` are different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(Ustr),
    /// Any other JSON number (`1.5`, or beyond `i64`).
    Numeric(NumericId),
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s.as_str()),
            Self::Numeric(n) => f.write_str(n.as_str()),
        }
    }
}

/// A JSON number id kept in its textual form, so it stays `Copy + Eq + Hash`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumericId(Ustr);

impl NumericId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Serialize for NumericId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match serde_json::from_str::<serde_json::Number>(self.as_str()) {
            Ok(number) => number.serialize(serializer),
            Err(_) => serializer.serialize_str(self.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for NumericId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = serde_json::Number::deserialize(deserializer)?;
        Ok(Self(Ustr::from(&number.to_string())))
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::Text(Ustr::from(value))
    }
}

/// One user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    pub fn new(
        id: impl Into<UserId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Body of the add-user request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
}

/// Response of `GET /users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub users: Vec<User>,
}

/// Response of `GET /users/{id}`: the record, or `{}` when the id is unknown.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetUserResponse {
    #[serde(default)]
    id: Option<UserId>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
}

impl GetUserResponse {
    pub fn into_user(self) -> Option<User> {
        Some(User {
            id: self.id?,
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
        })
    }
}

/// Response of `PUT /users/{id}` and `DELETE /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// What the server decided about an update or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Applied,
    Rejected { message: String },
}

impl From<MutationResponse> for Mutation {
    fn from(response: MutationResponse) -> Self {
        if response.success {
            Self::Applied
        } else {
            Self::Rejected {
                message: response
                    .message
                    .unwrap_or_else(|| "server reported failure without a message".to_owned()),
            }
        }
    }
}
