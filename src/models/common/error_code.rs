use serde::{Deserialize, Serialize};

/// 业务错误码
///
/// 按 HTTP 状态码分组：4xxxx 客户端错误，5xxxx 服务端错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 40000,
    ValidationFailed = 40001,
    DateParseFailed = 40002,
    UserPasswordInvalid = 40003,
    FileTypeNotAllowed = 40004,
    FileSizeExceeded = 40005,
    MultifileUploadNotAllowed = 40006,

    Unauthorized = 40100,
    AuthFailed = 40101,

    Forbidden = 40300,

    NotFound = 40400,
    UserNotFound = 40401,
    StudentNotFound = 40402,
    SubjectNotFound = 40403,
    FileNotFound = 40404,

    MethodNotAllowed = 40500,

    InternalServerError = 50000,
    UserUpdateFailed = 50001,
    FileUploadFailed = 50002,
}
