pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod feedbacks;
pub mod leaves;
pub mod nocs;
pub mod notifications;
pub mod profile;
pub mod subjects;
pub mod websocket;

pub use assignments::AssignmentService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use feedbacks::FeedbackService;
pub use leaves::LeaveService;
pub use nocs::NocService;
pub use notifications::NotificationService;
pub use profile::ProfileService;
pub use subjects::SubjectService;
