pub(crate) mod ease;
pub(crate) mod spec;
pub(crate) mod stagger;
pub(crate) mod state;
