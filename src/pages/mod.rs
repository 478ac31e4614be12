//! Routed pages. Markup is deliberately thin; the pages exist to
//! exercise the session subsystem (guarding, renewal, flags, toasts).

pub mod exam_detail;
pub mod exams;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod verify_email;
