//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod attendance;
mod feedbacks;
mod leaves;
mod nocs;
mod notifications;
mod students;
mod subjects;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SMSystemError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SMSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SMSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SMSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SMSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    assignments::entities::AssignmentSubmission,
    attendance::responses::AttendanceRangeEntry,
    feedbacks::entities::Feedback,
    leaves::entities::LeaveReport,
    nocs::entities::Noc,
    notifications::entities::Notification,
    students::entities::Student,
    subjects::entities::Subject,
    users::{
        entities::User,
        requests::{CreateUserRequest, StudentProfileUpdate},
    },
};
use crate::storage::Storage;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn update_fcm_token(&self, user_id: i64, token: &str) -> Result<bool> {
        self.update_fcm_token_impl(user_id, token).await
    }

    async fn update_student_profile(
        &self,
        user_id: i64,
        update: StudentProfileUpdate,
    ) -> Result<Option<User>> {
        self.update_student_profile_impl(user_id, update).await
    }

    // 学生模块
    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<Student>> {
        self.get_student_by_user_id_impl(user_id).await
    }

    // 科目模块
    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(subject_id).await
    }

    async fn list_subjects_by_course(&self, course_id: i64) -> Result<Vec<Subject>> {
        self.list_subjects_by_course_impl(course_id).await
    }

    async fn list_subjects_with_staff(&self, course_id: i64) -> Result<Vec<(Subject, String)>> {
        self.list_subjects_with_staff_impl(course_id).await
    }

    // 考勤模块
    async fn count_attendance_status(
        &self,
        student_id: i64,
        subject_id: i64,
    ) -> Result<(i64, i64)> {
        self.count_attendance_status_impl(student_id, subject_id)
            .await
    }

    async fn list_attendance_in_range(
        &self,
        student_id: i64,
        subject_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AttendanceRangeEntry>> {
        self.list_attendance_in_range_impl(student_id, subject_id, start, end)
            .await
    }

    // 请假模块
    async fn create_leave_report(
        &self,
        student_id: i64,
        leave_date: NaiveDate,
        message: String,
    ) -> Result<LeaveReport> {
        self.create_leave_report_impl(student_id, leave_date, message)
            .await
    }

    async fn list_leave_reports(&self, student_id: i64) -> Result<Vec<LeaveReport>> {
        self.list_leave_reports_impl(student_id).await
    }

    // 反馈模块
    async fn create_feedback(&self, student_id: i64, feedback: String) -> Result<Feedback> {
        self.create_feedback_impl(student_id, feedback).await
    }

    async fn list_feedbacks(&self, student_id: i64) -> Result<Vec<Feedback>> {
        self.list_feedbacks_impl(student_id).await
    }

    // NOC 模块
    async fn list_nocs(&self, student_id: i64) -> Result<Vec<Noc>> {
        self.list_nocs_impl(student_id).await
    }

    // 作业提交模块
    async fn upsert_assignment_submission(
        &self,
        student_id: i64,
        subject_id: i64,
    ) -> Result<(AssignmentSubmission, bool)> {
        self.upsert_assignment_submission_impl(student_id, subject_id)
            .await
    }

    async fn list_assignment_submissions(
        &self,
        student_id: i64,
    ) -> Result<Vec<AssignmentSubmission>> {
        self.list_assignment_submissions_impl(student_id).await
    }

    // 通知模块
    async fn list_notifications(&self, student_id: i64) -> Result<Vec<Notification>> {
        self.list_notifications_impl(student_id).await
    }
}
