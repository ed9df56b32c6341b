use std::sync::Arc;

use shared_config::AppConfig;
use shared_database::{connect_lazy, AppState};
use shared_models::auth::{AuthUser, Role};

use crate::jwt::issue_token;

pub struct TestConfig {
    pub jwt_secret: String,
    pub database_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "test-secret-key-for-jwt-validation-must-be-long-enough".to_string(),
            // Lazy pool: never connected by tests that fail before the store.
            database_url: "mysql://test@localhost:3306/fisiovital_test".to_string(),
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            database_url: self.database_url.clone(),
            jwt_secret: self.jwt_secret.clone(),
            port: 3000,
            db_max_connections: 2,
        }
    }

    /// State backed by a lazy pool, for tests exercising the pre-store
    /// request path (validation, auth) only.
    pub fn to_state(&self) -> Arc<AppState> {
        let config = self.to_app_config();
        let db = connect_lazy(&config).expect("lazy pool");
        Arc::new(AppState { config, db })
    }
}

pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

impl TestUser {
    pub fn admin(email: &str) -> Self {
        Self {
            id: 1,
            email: email.to_string(),
            role: Role::Admin,
        }
    }

    pub fn patient(email: &str) -> Self {
        Self {
            id: 1,
            email: email.to_string(),
            role: Role::Patient,
        }
    }

    pub fn to_auth_user(&self) -> AuthUser {
        AuthUser {
            id: self.id,
            email: self.email.clone(),
            role: self.role,
        }
    }

    pub fn token(&self, jwt_secret: &str) -> String {
        issue_token(&self.to_auth_user(), jwt_secret).expect("test token")
    }
}
