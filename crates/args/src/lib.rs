#![deny(unused_must_use)]

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing required argument RESOURCE")]
    MissingResource,
    #[error(transparent)]
    Lexopt(#[from] lexopt::Error),
}

/// One parsed launcher invocation.
///
/// The resource slot is deliberately double-duty: its containing directory is
/// prepended to the child's `PATH`, and the resource itself is the first
/// token of the command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub resource: PathBuf,
    pub trailing: Vec<OsString>,
}

impl Invocation {
    /// The full command line for the child, resource first.
    pub fn command(&self) -> impl Iterator<Item = &OsStr> {
        std::iter::once(self.resource.as_os_str())
            .chain(self.trailing.iter().map(OsString::as_os_str))
    }
}

/// Parses the arguments following the program name.
///
/// The resource may be spelled positionally or as `--path=RESOURCE` (the
/// historical flag form); both fill the same slot. Everything after the
/// resource is raw and passes through to the child untouched.
pub fn parse(args: impl IntoIterator<Item = OsString>) -> Result<Invocation, Error> {
    use lexopt::Arg::*;

    let mut args = lexopt::Parser::from_args(args);

    let resource: PathBuf = match args.next()?.ok_or(Error::MissingResource)? {
        Value(s) => s.into(),
        Long("path") => args.value()?.into(),
        arg => return Err(arg.unexpected().into()),
    };

    let trailing = args.raw_args()?.collect::<Vec<_>>();

    Ok(Invocation { resource, trailing })
}
