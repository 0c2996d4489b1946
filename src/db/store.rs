use crate::db::models::{ChecklistItem, NewSymptomLog, NewUser, SymptomLog, User};
use crate::db::schema::SQLITE_INIT;
use crate::error::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};

pub type SqlitePool = Pool<Sqlite>;

/// User-scoped persistence for the three record kinds.
///
/// Ownership checks are pushed into the SQL (`WHERE ... AND user_id = ?`),
/// so a row belonging to another user is indistinguishable from a missing
/// one at this layer.
#[derive(Clone)]
pub struct HealthStore {
    pool: SqlitePool,
}

impl HealthStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), AppError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    // ---- users ----

    /// Insert a new account row. The caller is expected to have checked for
    /// a duplicate email first; the UNIQUE constraint remains as backstop.
    pub async fn create_user(&self, new: NewUser) -> Result<i64, AppError> {
        let res = sqlx::query(
            r#"INSERT INTO users (name, age, gender, email, password_hash)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(new.name)
        .bind(new.age)
        .bind(new.gender)
        .bind(new.email)
        .bind(new.password_hash)
        .execute(&self.pool)
        .await?;
        Ok(res.last_insert_rowid())
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query(
            r#"SELECT id, name, age, gender, email, password_hash
               FROM users WHERE email = ?"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_user).transpose()
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query(
            r#"SELECT id, name, age, gender, email, password_hash
               FROM users WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_user).transpose()
    }

    // ---- symptom logs ----

    pub async fn insert_symptom(&self, user_id: i64, new: NewSymptomLog) -> Result<i64, AppError> {
        let res = sqlx::query(
            r#"INSERT INTO symptom_logs (user_id, symptom_name, log_date, severity, notes)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(user_id)
        .bind(new.symptom_name)
        .bind(new.log_date.to_string())
        .bind(new.severity)
        .bind(new.notes)
        .execute(&self.pool)
        .await?;
        Ok(res.last_insert_rowid())
    }

    /// All of the owner's logs, oldest first.
    pub async fn list_symptoms_by_owner(&self, user_id: i64) -> Result<Vec<SymptomLog>, AppError> {
        let rows = sqlx::query(
            r#"SELECT log_id, user_id, symptom_name, log_date, severity, notes
               FROM symptom_logs WHERE user_id = ? ORDER BY log_date"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_symptom).collect()
    }

    // ---- checklist items ----

    /// Insert an item for the owner; `created_at` is assigned here.
    pub async fn insert_checklist_item(
        &self,
        user_id: i64,
        content: &str,
    ) -> Result<ChecklistItem, AppError> {
        let created_at = Utc::now();
        let res = sqlx::query(
            r#"INSERT INTO checklist_items (user_id, content, is_completed, created_at)
               VALUES (?, ?, 0, ?)"#,
        )
        .bind(user_id)
        .bind(content)
        .bind(created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(ChecklistItem {
            item_id: res.last_insert_rowid(),
            user_id,
            content: content.to_string(),
            is_completed: false,
            created_at,
        })
    }

    pub async fn list_checklist_items(&self, user_id: i64) -> Result<Vec<ChecklistItem>, AppError> {
        let rows = sqlx::query(
            r#"SELECT item_id, user_id, content, is_completed, created_at
               FROM checklist_items WHERE user_id = ? ORDER BY created_at"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_item).collect()
    }

    /// Owner-scoped completion toggle; only `is_completed` is ever written.
    /// Returns the number of rows matched (0 means missing or not owned).
    pub async fn set_checklist_completed(
        &self,
        item_id: i64,
        user_id: i64,
        is_completed: bool,
    ) -> Result<u64, AppError> {
        let res = sqlx::query(
            "UPDATE checklist_items SET is_completed = ? WHERE item_id = ? AND user_id = ?",
        )
        .bind(if is_completed { 1 } else { 0 })
        .bind(item_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected())
    }

    /// Owner-scoped delete. Returns the number of rows removed.
    pub async fn delete_checklist_item(
        &self,
        item_id: i64,
        user_id: i64,
    ) -> Result<u64, AppError> {
        let res = sqlx::query("DELETE FROM checklist_items WHERE item_id = ? AND user_id = ?")
            .bind(item_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }

    // ---- row mapping ----

    fn row_to_user(row: SqliteRow) -> Result<User, AppError> {
        Ok(User {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            age: row.try_get("age")?,
            gender: row.try_get("gender")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
        })
    }

    fn row_to_symptom(row: SqliteRow) -> Result<SymptomLog, AppError> {
        let log_date_str: String = row.try_get("log_date")?;
        let log_date: NaiveDate = log_date_str
            .parse()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        Ok(SymptomLog {
            log_id: row.try_get("log_id")?,
            user_id: row.try_get("user_id")?,
            symptom_name: row.try_get("symptom_name")?,
            log_date,
            severity: row.try_get("severity")?,
            notes: row.try_get("notes")?,
        })
    }

    fn row_to_item(row: SqliteRow) -> Result<ChecklistItem, AppError> {
        let created_at_str: String = row.try_get("created_at")?;
        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);
        let is_completed: i64 = row.try_get("is_completed")?;
        Ok(ChecklistItem {
            item_id: row.try_get("item_id")?,
            user_id: row.try_get("user_id")?,
            content: row.try_get("content")?,
            is_completed: is_completed != 0,
            created_at,
        })
    }
}
