/// User record types
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// One user record as served by the upstream endpoint.
///
/// Fields the dashboard does not use (`address.geo`, `company.bs`, ...) are
/// ignored on decode. The scalar fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Natural key
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub company: Option<Company>,
}

/// Nested postal address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// Nested employer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: Option<String>,
}

/// A user flattened into the relational shape of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub city: Option<String>,
    pub street: Option<String>,
    pub company_name: Option<String>,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        let address = user.address.as_ref();

        Self {
            id: user.id,
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            website: user.website.clone(),
            city: address.and_then(|a| a.city.clone()),
            street: address.and_then(|a| a.street.clone()),
            company_name: user.company.as_ref().and_then(|c| c.name.clone()),
        }
    }
}

/// Decode an upstream response body into user records.
///
/// The body must be a JSON array. A record that does not match the `User`
/// shape fails the whole decode, naming its position.
pub fn parse_users(body: &str) -> Result<Vec<User>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(body)?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value)
                .map_err(|e| CoreError::invalid_record(format!("record {}: {}", index, e)))
        })
        .collect()
}
