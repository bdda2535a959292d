pub use super::assignment_submissions::Entity as AssignmentSubmissions;
pub use super::attendance::Entity as Attendance;
pub use super::attendance_reports::Entity as AttendanceReports;
pub use super::courses::Entity as Courses;
pub use super::feedbacks::Entity as Feedbacks;
pub use super::leave_reports::Entity as LeaveReports;
pub use super::nocs::Entity as Nocs;
pub use super::notifications::Entity as Notifications;
pub use super::students::Entity as Students;
pub use super::subjects::Entity as Subjects;
pub use super::users::Entity as Users;
