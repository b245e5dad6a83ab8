use crate::shared::list_view::{Searchable, Sortable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: String,
    pub updated_at: String,
    pub last_login_at: Option<String>,
    pub created_by: Option<String>,
}

impl User {
    /// Название роли для отображения
    pub fn role_name(&self) -> &'static str {
        if self.is_admin {
            "Админ"
        } else {
            "Пользователь"
        }
    }
}

impl Searchable for User {
    fn matches_search(&self, term: &str) -> bool {
        self.username.to_lowercase().contains(term)
            || self
                .full_name
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(term)
            || self
                .email
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(term)
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "is_admin" => Some(self.is_admin.to_string()),
            "is_active" => Some(self.is_active.to_string()),
            _ => None,
        }
    }
}

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "username" => self
                .username
                .to_lowercase()
                .cmp(&other.username.to_lowercase()),
            "full_name" => self
                .full_name
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .cmp(&other.full_name.as_deref().unwrap_or("").to_lowercase()),
            "email" => self
                .email
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .cmp(&other.email.as_deref().unwrap_or("").to_lowercase()),
            "is_admin" => self.is_admin.cmp(&other.is_admin),
            "is_active" => self.is_active.cmp(&other.is_active),
            "created_at" => self.created_at.cmp(&other.created_at),
            "last_login_at" => self
                .last_login_at
                .as_deref()
                .unwrap_or("")
                .cmp(other.last_login_at.as_deref().unwrap_or("")),
            _ => self.username.cmp(&other.username),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub id: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordDto {
    pub user_id: String,
    pub old_password: Option<String>, // None if admin changing someone else's password
    pub new_password: String,
}
