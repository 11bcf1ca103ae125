pub(crate) mod composite;
pub(crate) mod extract;
pub(crate) mod place;
