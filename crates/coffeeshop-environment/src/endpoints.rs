//! Backend API routes used by the frontend
//!
//! Each [`ApiRequest`] knows its HTTP method, path and the Auth0 permission
//! the API server checks before serving it.

use http::Method;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a scope string is not a known permission
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown permission: {0}")]
pub struct UnknownPermission(pub String);

/// Auth0 permissions granted to drink-management roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Permission {
    GetDrinksDetail,
    PostDrinks,
    PatchDrinks,
    DeleteDrinks,
}

impl Permission {
    pub const ALL: [Permission; 4] = [
        Permission::GetDrinksDetail,
        Permission::PostDrinks,
        Permission::PatchDrinks,
        Permission::DeleteDrinks,
    ];

    /// Scope string as it appears in the token's `permissions` claim
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::GetDrinksDetail => "get:drinks-detail",
            Permission::PostDrinks => "post:drinks",
            Permission::PatchDrinks => "patch:drinks",
            Permission::DeleteDrinks => "delete:drinks",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPermission(s.to_string()))
    }
}

impl TryFrom<String> for Permission {
    type Error = UnknownPermission;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.as_str().to_string()
    }
}

/// A request the frontend sends to the API server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRequest {
    /// Public drink menu
    ListDrinks,
    /// Drinks with full recipes
    DrinkDetails,
    CreateDrink,
    UpdateDrink(u64),
    DeleteDrink(u64),
}

impl ApiRequest {
    pub fn method(&self) -> Method {
        match self {
            ApiRequest::ListDrinks | ApiRequest::DrinkDetails => Method::GET,
            ApiRequest::CreateDrink => Method::POST,
            ApiRequest::UpdateDrink(_) => Method::PATCH,
            ApiRequest::DeleteDrink(_) => Method::DELETE,
        }
    }

    /// Path relative to the API server root, always starting with `/`
    pub fn path(&self) -> String {
        match self {
            ApiRequest::ListDrinks | ApiRequest::CreateDrink => "/drinks".to_string(),
            ApiRequest::DrinkDetails => "/drinks-detail".to_string(),
            ApiRequest::UpdateDrink(id) | ApiRequest::DeleteDrink(id) => format!("/drinks/{}", id),
        }
    }

    /// Permission the API server requires, `None` for public routes
    pub fn permission(&self) -> Option<Permission> {
        match self {
            ApiRequest::ListDrinks => None,
            ApiRequest::DrinkDetails => Some(Permission::GetDrinksDetail),
            ApiRequest::CreateDrink => Some(Permission::PostDrinks),
            ApiRequest::UpdateDrink(_) => Some(Permission::PatchDrinks),
            ApiRequest::DeleteDrink(_) => Some(Permission::DeleteDrinks),
        }
    }

    pub fn requires_auth(&self) -> bool {
        self.permission().is_some()
    }
}
