//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{Credentials, Order, OrderStatus, User};
use crate::domain::repository::{CredentialRepository, OrderRepository, UserRepository};
use crate::domain::value_object::{Email, OrderId, StoredPassword, UserId, UserRole};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed shop repository
#[derive(Clone)]
pub struct PgShopRepository {
    pool: PgPool,
}

impl PgShopRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgShopRepository {
    async fn create_user(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                name,
                email,
                phone,
                address,
                role,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(&user.name)
        .bind(user.email.as_str())
        .bind(&user.phone)
        .bind(&user.address)
        .bind(user.role.id())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_user_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT user_id, name, email, phone, address, role, created_at, updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_user_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT user_id, name, email, phone, address, role, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn email_exists(&self, email: &Email) -> AuthResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn update_user(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                name = $2,
                phone = $3,
                address = $4,
                role = $5,
                updated_at = $6
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(&user.name)
        .bind(&user.phone)
        .bind(&user.address)
        .bind(user.role.id())
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Credential Repository Implementation
// ============================================================================

impl CredentialRepository for PgShopRepository {
    async fn create_credentials(&self, credentials: &Credentials) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO credentials (user_id, password_hash, security_answer)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(credentials.user_id.as_uuid())
        .bind(credentials.password_hash.as_phc_string())
        .bind(&credentials.security_answer)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_credentials(&self, user_id: UserId) -> AuthResult<Option<Credentials>> {
        let row = sqlx::query_as::<_, CredentialsRow>(
            r#"
            SELECT user_id, password_hash, security_answer
            FROM credentials
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CredentialsRow::into_credentials).transpose()
    }

    async fn update_credentials(&self, credentials: &Credentials) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE credentials SET
                password_hash = $2,
                security_answer = $3
            WHERE user_id = $1
            "#,
        )
        .bind(credentials.user_id.as_uuid())
        .bind(credentials.password_hash.as_phc_string())
        .bind(&credentials.security_answer)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Order Repository Implementation
// ============================================================================

const ORDER_SELECT: &str = r#"
    SELECT o.order_id, o.buyer_id, u.name AS buyer_name, o.status, o.created_at
    FROM orders o
    JOIN users u ON u.user_id = o.buyer_id
"#;

impl OrderRepository for PgShopRepository {
    async fn list_orders_for_buyer(&self, buyer_id: UserId) -> AuthResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "{ORDER_SELECT} WHERE o.buyer_id = $1 ORDER BY o.created_at DESC"
        ))
        .bind(buyer_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(OrderRow::into_order).collect()
    }

    async fn list_all_orders(&self) -> AuthResult<Vec<Order>> {
        let rows =
            sqlx::query_as::<_, OrderRow>(&format!("{ORDER_SELECT} ORDER BY o.created_at DESC"))
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(OrderRow::into_order).collect()
    }

    async fn find_order_by_id(&self, order_id: OrderId) -> AuthResult<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(&format!("{ORDER_SELECT} WHERE o.order_id = $1"))
            .bind(order_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(OrderRow::into_order).transpose()
    }

    async fn update_order_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> AuthResult<Option<Order>> {
        let updated = sqlx::query("UPDATE orders SET status = $2 WHERE order_id = $1")
            .bind(order_id.as_uuid())
            .bind(status.code())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if updated == 0 {
            return Ok(None);
        }

        self.find_order_by_id(order_id).await
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    name: String,
    email: String,
    phone: String,
    address: String,
    role: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::from_uuid(self.user_id),
            name: self.name,
            email: Email::from_db(self.email),
            phone: self.phone,
            address: self.address,
            role: UserRole::from_id(self.role),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialsRow {
    user_id: Uuid,
    password_hash: String,
    security_answer: String,
}

impl CredentialsRow {
    fn into_credentials(self) -> AuthResult<Credentials> {
        Ok(Credentials {
            user_id: UserId::from_uuid(self.user_id),
            password_hash: StoredPassword::from_phc_string(self.password_hash)
                .map_err(|_| AuthError::Internal("Corrupt password hash in storage".into()))?,
            security_answer: self.security_answer,
        })
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    order_id: Uuid,
    buyer_id: Uuid,
    buyer_name: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self) -> AuthResult<Order> {
        Ok(Order {
            order_id: OrderId::from_uuid(self.order_id),
            buyer_id: UserId::from_uuid(self.buyer_id),
            buyer_name: self.buyer_name,
            status: OrderStatus::parse(&self.status)
                .map_err(|_| AuthError::Internal("Corrupt order status in storage".into()))?,
            created_at: self.created_at,
        })
    }
}
