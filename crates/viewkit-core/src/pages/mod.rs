//! Pages shown by the host, one at a time

pub mod clock;
pub mod constants;
pub mod page;
pub mod stack;

pub use clock::{ClockPage, FixedTime, TimeSource};
pub use page::{Page, PageId, PageWrapper};
pub use stack::StackPage;
