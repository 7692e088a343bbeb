//! Customer repository implementation
//!
//! SQL access to the `customer` table. Ids come from the `SERIAL` column;
//! email uniqueness is backed by the `customer_email_unique` constraint.

use sqlx::PgPool;

use crate::error::DatabaseError;

/// A row of the `customer` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CustomerRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// Column values for a customer that has no id yet
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// Repository for the `customer` table
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns every customer ordered by id
    pub async fn find_all(&self) -> Result<Vec<CustomerRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, email, age
            FROM customer
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Looks up a customer by id
    pub async fn find_by_id(&self, id: i32) -> Result<Option<CustomerRow>, DatabaseError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, email, age
            FROM customer
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Inserts a customer and returns the stored row with its generated id
    ///
    /// # Errors
    ///
    /// `DatabaseError::DuplicateEntry` if the email is already stored
    pub async fn insert(&self, customer: NewCustomer) -> Result<CustomerRow, DatabaseError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            INSERT INTO customer (name, email, age)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, age
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(customer.age)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Overwrites the columns of the row with `row.id`
    ///
    /// # Returns
    ///
    /// The number of rows changed (0 when no row has that id)
    ///
    /// # Errors
    ///
    /// `DatabaseError::DuplicateEntry` if the email belongs to another row
    pub async fn update(&self, row: &CustomerRow) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE customer
            SET name = $2, email = $3, age = $4
            WHERE id = $1
            "#,
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.email)
        .bind(row.age)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes the customer with the given id
    ///
    /// # Returns
    ///
    /// The number of rows removed (0 or 1)
    pub async fn delete_by_id(&self, id: i32) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM customer WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Returns true if a row holds `email`
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DatabaseError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM customer WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Returns true if a row exists under `id`
    pub async fn exists_by_id(&self, id: i32) -> Result<bool, DatabaseError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM customer WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Runs a trivial query to verify connectivity
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}
