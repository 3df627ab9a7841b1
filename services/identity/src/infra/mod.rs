pub mod navigation;
pub mod remote;
