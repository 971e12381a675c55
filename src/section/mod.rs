pub(crate) mod bento;
pub(crate) mod code;
pub(crate) mod composer;
pub(crate) mod config;
pub(crate) mod content;
pub(crate) mod header;
pub(crate) mod logo;
pub(crate) mod showcase;
