use crate::Backend;
use gfxstate::backend::state::State;

pub type Context = gfxstate::context::Context<Backend>;
pub type ContextState = gfxstate::context::ContextState<Backend>;
pub type ContextDescriptor = gfxstate::context::ContextDescriptor<Backend>;
pub type ContextValue = gfxstate::context::ContextValue<<Backend as State>::Handle>;

pub use gfxstate::context::{ContextKey, ContextOpt};
