use std::convert::TryFrom;

use rusqlite::{named_params, Connection, OptionalExtension, Row};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::assessment::{AssessmentRecord, ResponseRecord, ResponseType};

#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub created_at: String,
}

impl TryFrom<&Row<'_>> for UserRow {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.get("id")?,
            username: row.get("username")?,
            email: row.get("email")?,
            created_at: row.get("created_at")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AssessmentRow {
    pub id: i64,
    pub user_id: String,
    pub phase_name: String,
    pub progress_percentage: f64,
}

impl TryFrom<&Row<'_>> for AssessmentRow {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            phase_name: row.get("phase_name")?,
            progress_percentage: row.get("progress_percentage")?,
        })
    }
}

impl AssessmentRow {
    pub fn into_record(self, responses: Vec<ResponseRecord>) -> AssessmentRecord {
        AssessmentRecord::new(self.phase_name, self.progress_percentage, responses)
    }
}

#[derive(Debug, Clone)]
pub struct ResponseRow {
    pub question_id: String,
    pub response_type: String,
    pub response_value: String,
    pub created_at: String,
}

impl TryFrom<&Row<'_>> for ResponseRow {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            question_id: row.get("question_id")?,
            response_type: row.get("response_type")?,
            response_value: row.get("response_value")?,
            created_at: row.get("created_at")?,
        })
    }
}

impl ResponseRow {
    pub fn into_record(self) -> AppResult<ResponseRecord> {
        let response_type =
            ResponseType::try_from(self.response_type.as_str()).map_err(AppError::validation)?;

        Ok(ResponseRecord {
            question_id: self.question_id,
            response_type,
            value: self.response_value,
            created_at: self.created_at,
        })
    }
}

pub struct AssessmentRepository;

impl AssessmentRepository {
    pub fn find_user(conn: &Connection, user_id: &str) -> AppResult<Option<UserRow>> {
        let mut stmt =
            conn.prepare("SELECT id, username, email, created_at FROM users WHERE id = ?1")?;

        let row = stmt
            .query_row([user_id], |row| UserRow::try_from(row))
            .optional()?;

        Ok(row)
    }

    pub fn insert_user(
        conn: &Connection,
        user_id: &str,
        username: &str,
        email: Option<&str>,
    ) -> AppResult<()> {
        conn.execute(
            "INSERT INTO users (id, username, email) VALUES (:id, :username, :email)",
            named_params! {":id": user_id, ":username": username, ":email": email},
        )?;
        Ok(())
    }

    pub fn list_assessments(conn: &Connection, user_id: &str) -> AppResult<Vec<AssessmentRow>> {
        let mut stmt = conn.prepare(
            r#"
                SELECT id, user_id, phase_name, progress_percentage
                FROM assessments
                WHERE user_id = ?1
                ORDER BY id ASC
            "#,
        )?;

        let rows = stmt
            .query_map([user_id], |row| AssessmentRow::try_from(row))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    pub fn list_responses(conn: &Connection, assessment_id: i64) -> AppResult<Vec<ResponseRow>> {
        let mut stmt = conn.prepare(
            r#"
                SELECT question_id, response_type, response_value, created_at
                FROM assessment_responses
                WHERE assessment_id = ?1
                ORDER BY id ASC
            "#,
        )?;

        let rows = stmt
            .query_map([assessment_id], |row| ResponseRow::try_from(row))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    /// Every assessment of the user with its responses, in insertion order.
    /// Responses with an unrecognized type are skipped.
    pub fn load_records(conn: &Connection, user_id: &str) -> AppResult<Vec<AssessmentRecord>> {
        let mut records = Vec::new();

        for assessment in Self::list_assessments(conn, user_id)? {
            let mut responses = Vec::new();
            for row in Self::list_responses(conn, assessment.id)? {
                let question_id = row.question_id.clone();
                match row.into_record() {
                    Ok(response) => responses.push(response),
                    Err(error) => debug!(
                        target: "app::db",
                        assessment_id = assessment.id,
                        %question_id,
                        %error,
                        "skipping malformed response"
                    ),
                }
            }
            records.push(assessment.into_record(responses));
        }

        Ok(records)
    }

    pub fn insert_assessment(
        conn: &Connection,
        user_id: &str,
        phase_name: &str,
        progress_percentage: f64,
    ) -> AppResult<i64> {
        conn.execute(
            r#"
                INSERT INTO assessments (user_id, phase_name, progress_percentage)
                VALUES (:user_id, :phase_name, :progress)
            "#,
            named_params! {
                ":user_id": user_id,
                ":phase_name": phase_name,
                ":progress": progress_percentage,
            },
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn insert_response(
        conn: &Connection,
        assessment_id: i64,
        response: &ResponseRecord,
    ) -> AppResult<()> {
        conn.execute(
            r#"
                INSERT INTO assessment_responses
                    (assessment_id, question_id, response_type, response_value)
                VALUES (:assessment_id, :question_id, :response_type, :response_value)
            "#,
            named_params! {
                ":assessment_id": assessment_id,
                ":question_id": response.question_id,
                ":response_type": response.response_type.as_str(),
                ":response_value": response.value,
            },
        )?;
        Ok(())
    }

    /// Stores an assessment and its responses atomically.
    pub fn insert_record(
        conn: &Connection,
        user_id: &str,
        record: &AssessmentRecord,
    ) -> AppResult<i64> {
        let tx = conn.unchecked_transaction()?;
        let assessment_id = Self::insert_assessment(
            &tx,
            user_id,
            record.phase.name(),
            record.completion_percentage,
        )?;
        for response in &record.responses {
            Self::insert_response(&tx, assessment_id, response)?;
        }
        tx.commit()?;
        Ok(assessment_id)
    }
}
