pub mod controls;
pub mod dialog;
pub mod icons;
pub mod styles;
