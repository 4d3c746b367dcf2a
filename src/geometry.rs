pub(crate) mod mask;
pub(crate) mod outline;
pub(crate) mod shape;
