pub mod record;
pub mod student;
pub mod window;

pub use record::TardyRecord;
pub use student::{CloudConfig, Student};
pub use window::Window;
