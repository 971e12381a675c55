pub(crate) mod element;
pub(crate) mod observer;
pub(crate) mod signal;
pub(crate) mod trigger;
