pub(crate) mod layout;
pub(crate) mod model;
pub(crate) mod session;
