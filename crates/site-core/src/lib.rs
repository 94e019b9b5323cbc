pub mod config;
pub mod format;
pub mod hours;
pub mod moment;
pub mod page;
pub mod preloader;
pub mod schedule;

pub use config::*;
pub use format::*;
pub use hours::*;
pub use moment::*;
pub use page::*;
pub use preloader::*;
pub use schedule::*;
