pub(crate) mod blend;
pub(crate) mod blur;
pub(crate) mod filters;
pub(crate) mod frame;
pub(crate) mod overlay;
pub(crate) mod surface;
