pub mod cli;
pub mod input;

#[macro_use]
mod macros;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::input::{FromInput, Input, Split, W};
    pub use anyhow::{anyhow, bail, Context, Result};
    pub use bstr::{BStr, ByteSlice};
}
