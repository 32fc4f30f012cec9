//! UI Components
//!
//! Leptos views for authentication, the home shell, the task center and
//! the image tools.

mod annotate_view;
mod compress_view;
mod delete_confirm_button;
mod error_alert;
mod home_index;
mod home_layout;
mod image_processing;
mod lazy_load_demo;
mod login_form;
mod new_task_form;
mod pagination_bar;
mod profile;
mod register_form;
mod task_center;
mod task_row;
mod upload_panel;

pub use annotate_view::AnnotateView;
pub use compress_view::CompressView;
pub use delete_confirm_button::DeleteConfirmButton;
pub use error_alert::ErrorAlert;
pub use home_index::HomeIndex;
pub use home_layout::HomeLayout;
pub use image_processing::ImageProcessing;
pub use lazy_load_demo::LazyLoadDemo;
pub use login_form::LoginForm;
pub use new_task_form::NewTaskForm;
pub use pagination_bar::PaginationBar;
pub use profile::Profile;
pub use register_form::RegisterForm;
pub use task_center::TaskCenter;
pub use task_row::TaskRow;
pub use upload_panel::UploadPanel;
