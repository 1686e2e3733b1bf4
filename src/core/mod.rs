pub(crate) mod camera;
pub(crate) mod navigation;
pub(crate) mod state;
