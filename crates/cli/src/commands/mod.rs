pub(crate) mod catalog;
pub(crate) mod fmt;
pub(crate) mod new;
pub(crate) mod show;
pub(crate) mod snapshot;
pub(crate) mod validate;
