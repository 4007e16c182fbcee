//! Value model for a static website generator: the site-wide
//! configuration and the per-file source abstraction handed to the
//! rendering pipeline.

mod datetime;
mod parameters;
mod request;
mod site;
mod source_file;

pub use self::datetime::*;
pub use self::parameters::*;
pub use self::request::*;
pub use self::site::*;
pub use self::source_file::*;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
