//! Runtime settings and the loader that fills them from the environment.
//!
//! There is no settings file: struct defaults apply unless an environment
//! variable with the `SATURN_CUE__` prefix overrides them.

mod load;
mod schema;

pub use schema::*;
