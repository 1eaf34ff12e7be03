//! Content sniffing for legacy and modern file formats.
//!
//! `magicsniff` identifies what a file really is from its bytes rather than
//! its name. Callers hand a [`ByteSource`] to [`find`] or one of the
//! category finders and get back a [`Signature`]; DOS and Windows programs
//! can also be described with [`find_executable`].

pub mod config;
pub mod error;
pub mod executable;
pub mod extension;
pub mod io;
pub mod logging;
pub mod matchers;
pub mod resolve;
pub mod signature;

pub use config::{HeuristicConfig, SniffConfig};
pub use error::{Result, SniffError};
pub use executable::{Architecture, ExecutableDescriptor, NewExecutable};
pub use io::{ByteSource, IOLimits, SafeReader};
pub use resolve::{
    archive, audio, disc_image, document, find, find_executable, find_file, find_program, find_with,
    image, match_ext, music, program, text, video,
};
pub use signature::{Category, Signature};
