pub use anyhow::{Result, Context, bail};
