pub mod convert;
pub mod dispatch;
pub mod inspect;

pub use dispatch::dispatch;
