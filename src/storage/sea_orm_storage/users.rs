//! 用户存储操作

use super::SeaOrmStorage;
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{Result, SMSystemError};
use crate::models::users::{
    entities::User,
    requests::{CreateUserRequest, StudentProfileUpdate},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建用户（password 字段为已哈希值）
    pub async fn create_user_impl(&self, user: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password),
            role: Set(user.role.to_string()),
            status: Set("active".to_string()),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("创建用户失败: {e}")))?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过用户名或邮箱获取用户
    pub async fn get_user_by_username_or_email_impl(
        &self,
        identifier: &str,
    ) -> Result<Option<User>> {
        let result = Users::find()
            .filter(
                Column::Username
                    .eq(identifier)
                    .or(Column::Email.eq(identifier)),
            )
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 统计用户数量
    pub async fn count_users_impl(&self) -> Result<u64> {
        let count = Users::find()
            .count(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("统计用户数量失败: {e}")))?;

        Ok(count)
    }

    /// 更新用户最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Users::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新最后登录时间失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新用户 FCM 设备令牌
    pub async fn update_fcm_token_impl(&self, user_id: i64, token: &str) -> Result<bool> {
        let result = Users::update_many()
            .col_expr(
                Column::FcmToken,
                sea_orm::sea_query::Expr::value(token.to_string()),
            )
            .filter(Column::Id.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新 FCM 令牌失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新学生资料
    ///
    /// 用户记录与学生记录在同一事务中落盘，任一失败整体回滚。
    pub async fn update_student_profile_impl(
        &self,
        user_id: i64,
        update: StudentProfileUpdate,
    ) -> Result<Option<User>> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(user) = Users::find_by_id(user_id)
            .one(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询用户失败: {e}")))?
        else {
            txn.rollback()
                .await
                .map_err(|e| SMSystemError::database_operation(format!("回滚事务失败: {e}")))?;
            return Ok(None);
        };

        let mut active: ActiveModel = user.into();
        if let Some(first_name) = update.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = update.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(address) = update.address {
            active.address = Set(Some(address));
        }
        if let Some(gender) = update.gender {
            active.gender = Set(Some(gender.to_string()));
        }
        if let Some(password_hash) = update.password_hash {
            active.password_hash = Set(password_hash);
        }
        if let Some(avatar_url) = update.avatar_url {
            active.avatar_url = Set(Some(avatar_url));
        }
        active.updated_at = Set(now);

        let updated = active
            .update(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新用户记录失败: {e}")))?;

        // 同步学生记录的更新时间
        Students::update_many()
            .col_expr(
                StudentColumn::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .filter(StudentColumn::UserId.eq(user_id))
            .exec(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新学生记录失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(updated.into_user()))
    }
}
