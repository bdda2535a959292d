pub mod assignments;

pub mod attendance;

pub mod auth;

pub mod feedbacks;

pub mod leaves;

pub mod nocs;

pub mod notifications;

pub mod profile;

pub mod subjects;

pub mod ws;

pub use assignments::configure_assignments_routes;
pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use feedbacks::configure_feedbacks_routes;
pub use leaves::configure_leaves_routes;
pub use nocs::configure_nocs_routes;
pub use notifications::configure_notifications_routes;
pub use profile::configure_profile_routes;
pub use subjects::configure_subjects_routes;
pub use ws::configure_ws_routes;
