//! Visitors repository

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::visitor::{NewVisitor, Visitor},
};

#[derive(Clone)]
pub struct VisitorsRepository {
    pool: Pool<Postgres>,
}

impl VisitorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new registration
    pub async fn create(&self, visitor: &NewVisitor) -> AppResult<Visitor> {
        let row = sqlx::query_as::<_, Visitor>(
            r#"
            INSERT INTO visitors (identifier, name, surname, company_name, visitors_count,
                                  host, visit_date, registration_time)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING identifier, name, surname, company_name, visitors_count,
                      host, visit_date, registration_time
            "#,
        )
        .bind(&visitor.identifier)
        .bind(&visitor.name)
        .bind(&visitor.surname)
        .bind(&visitor.company_name)
        .bind(visitor.visitors_count)
        .bind(&visitor.host)
        .bind(visitor.visit_date)
        .bind(visitor.registration_time)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Find a visitor by token identifier
    pub async fn find(&self, identifier: &str) -> AppResult<Option<Visitor>> {
        let row = sqlx::query_as::<_, Visitor>(
            r#"
            SELECT identifier, name, surname, company_name, visitors_count,
                   host, visit_date, registration_time
            FROM visitors
            WHERE identifier = $1
            "#,
        )
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Overwrite the visitors count, returning the updated row
    pub async fn update_visitors_count(
        &self,
        identifier: &str,
        visitors_count: i32,
    ) -> AppResult<Option<Visitor>> {
        let row = sqlx::query_as::<_, Visitor>(
            r#"
            UPDATE visitors SET visitors_count = $2
            WHERE identifier = $1
            RETURNING identifier, name, surname, company_name, visitors_count,
                      host, visit_date, registration_time
            "#,
        )
        .bind(identifier)
        .bind(visitors_count)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
