//! Building blocks shared by the screens: the loading spinner and the
//! theme-aware styles.

pub mod spinner;
pub mod styling;
