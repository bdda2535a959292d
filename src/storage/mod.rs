use std::sync::Arc;

use chrono::NaiveDate;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（管理端/启动播种，password 为已哈希值）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 更新用户 FCM 设备令牌
    async fn update_fcm_token(&self, user_id: i64, token: &str) -> Result<bool>;
    // 更新学生资料：用户记录与学生记录在同一事务中落盘
    async fn update_student_profile(
        &self,
        user_id: i64,
        update: StudentProfileUpdate,
    ) -> Result<Option<User>>;

    /// 学生管理方法
    // 通过用户ID获取学生记录
    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<Student>>;

    /// 科目管理方法
    // 通过ID获取科目
    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<Subject>>;
    // 列出课程下的科目
    async fn list_subjects_by_course(&self, course_id: i64) -> Result<Vec<Subject>>;
    // 列出课程下的科目及任课教师姓名
    async fn list_subjects_with_staff(&self, course_id: i64) -> Result<Vec<(Subject, String)>>;

    /// 考勤方法
    // 统计学生在某科目的出勤 (present, absent)
    async fn count_attendance_status(
        &self,
        student_id: i64,
        subject_id: i64,
    ) -> Result<(i64, i64)>;
    // 查询学生在某科目 [start, end] 闭区间内的考勤记录，按日期升序
    async fn list_attendance_in_range(
        &self,
        student_id: i64,
        subject_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AttendanceRangeEntry>>;

    /// 请假方法
    // 创建请假申请（状态恒为 pending）
    async fn create_leave_report(
        &self,
        student_id: i64,
        leave_date: NaiveDate,
        message: String,
    ) -> Result<LeaveReport>;
    // 列出学生的请假历史
    async fn list_leave_reports(&self, student_id: i64) -> Result<Vec<LeaveReport>>;

    /// 反馈方法
    // 创建反馈
    async fn create_feedback(&self, student_id: i64, feedback: String) -> Result<Feedback>;
    // 列出学生的反馈历史
    async fn list_feedbacks(&self, student_id: i64) -> Result<Vec<Feedback>>;

    /// NOC 方法
    // 列出学生的 NOC 记录
    async fn list_nocs(&self, student_id: i64) -> Result<Vec<Noc>>;

    /// 作业提交方法
    // 按 (student_id, subject_id) 唯一键 upsert，返回 (记录, 是否新建)
    async fn upsert_assignment_submission(
        &self,
        student_id: i64,
        subject_id: i64,
    ) -> Result<(AssignmentSubmission, bool)>;
    // 列出学生的作业提交记录
    async fn list_assignment_submissions(
        &self,
        student_id: i64,
    ) -> Result<Vec<AssignmentSubmission>>;

    /// 通知方法
    // 列出学生的通知（按时间倒序）
    async fn list_notifications(&self, student_id: i64) -> Result<Vec<Notification>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
